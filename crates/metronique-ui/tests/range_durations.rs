use metronique_test_support::fixtures::{at, date};
use metronique_ui::core::duration::{
    INVALID_DATE_RANGE, INVALID_TIME_RANGE, RangeDuration, date_duration, time_duration,
};
use metronique_ui::features::calendar::state::CalendarState;
use metronique_ui::features::time::state::TimeState;
use serde_json::json;

#[test]
fn one_week_project_range() {
    let span = date_duration(Some(date(2024, 1, 1)), Some(date(2024, 1, 8)))
        .and_then(RangeDuration::into_valid)
        .expect("valid range");

    assert_eq!(span.total_days, 7);
    assert_eq!(span.weeks, 1);
    assert_eq!(span.months, 0);
    assert_eq!(span.formatted, "1 week");
}

#[test]
fn reversed_ranges_are_rejected_with_a_message() {
    assert_eq!(
        date_duration(Some(date(2024, 1, 8)), Some(date(2024, 1, 1))),
        Some(RangeDuration::Invalid {
            message: INVALID_DATE_RANGE
        })
    );
    assert_eq!(
        time_duration(Some(at(2024, 1, 1, 11, 0)), Some(at(2024, 1, 1, 9, 15))),
        Some(RangeDuration::Invalid {
            message: INVALID_TIME_RANGE
        })
    );
    assert_eq!(date_duration(None, Some(date(2024, 1, 1))), None);
}

#[test]
fn meeting_length_in_hours_and_minutes() {
    let span = time_duration(Some(at(2024, 1, 1, 9, 15)), Some(at(2024, 1, 1, 11, 0)))
        .and_then(RangeDuration::into_valid)
        .expect("valid range");

    assert_eq!((span.hours, span.minutes), (1, 45));
    assert_eq!(span.formatted, "1h 45m");
}

#[test]
fn calendar_registry_keeps_last_valid_duration() {
    let mut calendar = CalendarState::default();
    calendar.set_start(Some(date(2024, 1, 1)));
    assert_eq!(calendar.is_valid_range(), None);
    assert!(calendar.project_duration().is_none());

    calendar.set_end(Some(date(2024, 1, 8)));
    assert_eq!(calendar.is_valid_range(), Some(true));
    assert_eq!(calendar.dates_in_range().len(), 8);
    assert!(calendar.contains(date(2024, 1, 4)));

    calendar.set_end(Some(date(2023, 12, 25)));
    assert_eq!(calendar.is_valid_range(), Some(false));
    assert!(calendar.dates_in_range().is_empty());
    assert_eq!(
        calendar.project_duration().map(|span| span.total_days),
        Some(7)
    );

    let submitted = serde_json::to_value(calendar.formatted_range()).expect("serializable");
    assert_eq!(
        submitted,
        json!({
            "startDate": "2024-01-01",
            "endDate": "2023-12-25",
            "durationDays": 7,
            "durationFormatted": "1 week",
        })
    );
}

#[test]
fn calendar_registry_splits_upcoming_and_past_pickers() {
    let today = date(2024, 6, 15);
    let mut calendar = CalendarState::default();
    calendar.update_picker("launch", Some(date(2024, 9, 1)));
    calendar.update_picker("kickoff", Some(date(2024, 7, 1)));
    calendar.update_picker("retro", Some(date(2024, 5, 1)));
    calendar.update_picker("audit", Some(date(2024, 6, 1)));
    calendar.update_picker("unset", None);
    calendar.update_picker("today", Some(today));

    let upcoming: Vec<_> = calendar
        .upcoming(today)
        .into_iter()
        .map(|entry| entry.key)
        .collect();
    let past: Vec<_> = calendar
        .past(today)
        .into_iter()
        .map(|entry| entry.key)
        .collect();
    assert_eq!(upcoming, vec!["kickoff", "launch"]);
    assert_eq!(past, vec!["audit", "retro"]);

    assert!(calendar.remove_picker("retro"));
    assert!(!calendar.remove_picker("retro"));
    assert_eq!(calendar.snapshot().picker_count, 5);

    calendar.clear_all();
    assert!(calendar.pickers().is_empty());
    assert_eq!(calendar.start(), None);
}

#[test]
fn time_registry_tracks_meeting_duration() {
    let mut time = TimeState::default();
    time.set_start(Some(at(2024, 3, 4, 9, 0)));
    time.set_end(Some(at(2024, 3, 4, 10, 30)));
    assert_eq!(
        time.meeting_duration().map(|span| span.formatted.as_str()),
        Some("1h 30m")
    );

    time.set_end(Some(at(2024, 3, 4, 8, 0)));
    assert_eq!(time.is_valid_range(), Some(false));
    assert_eq!(
        time.meeting_duration().map(|span| span.total_minutes),
        Some(90)
    );

    time.update_picker("standup", Some(at(2024, 3, 4, 9, 30)));
    let snapshot = time.snapshot();
    assert_eq!(snapshot.picker_count, 1);
    assert_eq!(snapshot.is_valid, Some(false));
}
