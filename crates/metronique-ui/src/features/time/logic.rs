//! Editable time draft and clock formatting.

use std::rc::Rc;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use yew::Reducible;

const MINUTE_STEP: i32 = 5;

/// 12-hour or 24-hour clock.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ClockFormat {
    /// `02:30 PM`.
    #[default]
    TwelveHour,
    /// `14:30`.
    TwentyFourHour,
}

impl ClockFormat {
    /// Map `12h`/`24h`; anything else is 12-hour.
    #[must_use]
    pub fn from_token(token: &str) -> Self {
        if token == "24h" {
            Self::TwentyFourHour
        } else {
            Self::TwelveHour
        }
    }
}

/// Half of the day on a 12-hour clock.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Period {
    /// Before noon.
    #[default]
    Am,
    /// Noon and after.
    Pm,
}

impl Period {
    /// `AM` or `PM`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Am => "AM",
            Self::Pm => "PM",
        }
    }

    const fn of_hour(hour: u32) -> Self {
        if hour >= 12 { Self::Pm } else { Self::Am }
    }
}

const fn twelve_hour(hour: u32) -> u32 {
    match hour % 12 {
        0 => 12,
        h => h,
    }
}

/// Render `time` on the given clock.
#[must_use]
pub fn format_time(time: NaiveTime, format: ClockFormat) -> String {
    match format {
        ClockFormat::TwelveHour => format!(
            "{:02}:{:02} {}",
            twelve_hour(time.hour()),
            time.minute(),
            Period::of_hour(time.hour()).as_str()
        ),
        ClockFormat::TwentyFourHour => format!("{:02}:{:02}", time.hour(), time.minute()),
    }
}

/// Hours, minutes and period being edited in the dropdown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeDraft {
    /// Clock the hours are expressed in.
    pub format: ClockFormat,
    /// Display hour: `1..=12` or `0..=23`.
    pub hours: i32,
    /// Minute, `0..=59`.
    pub minutes: i32,
    /// AM/PM; ignored on the 24-hour clock.
    pub period: Period,
}

impl TimeDraft {
    /// Draft initialised from `value`, or midnight (`12:00 AM` / `00:00`).
    #[must_use]
    pub fn new(value: Option<NaiveTime>, format: ClockFormat) -> Self {
        let mut draft = Self {
            format,
            hours: match format {
                ClockFormat::TwelveHour => 12,
                ClockFormat::TwentyFourHour => 0,
            },
            minutes: 0,
            period: Period::Am,
        };
        if let Some(value) = value {
            draft.load(value);
        }
        draft
    }

    /// Replace the draft with `value`.
    pub fn load(&mut self, value: NaiveTime) {
        let hour = value.hour();
        self.hours = match self.format {
            ClockFormat::TwelveHour => twelve_hour(hour),
            ClockFormat::TwentyFourHour => hour,
        }
        .cast_signed();
        self.minutes = value.minute().cast_signed();
        self.period = Period::of_hour(hour);
    }

    const fn hour_range(&self) -> (i32, i32) {
        match self.format {
            ClockFormat::TwelveHour => (1, 12),
            ClockFormat::TwentyFourHour => (0, 23),
        }
    }

    /// Next hour, wrapping at the end of the clock.
    pub const fn increment_hours(&mut self) {
        let (low, high) = self.hour_range();
        self.hours = if self.hours >= high { low } else { self.hours + 1 };
    }

    /// Previous hour, wrapping at the start of the clock.
    pub const fn decrement_hours(&mut self) {
        let (low, high) = self.hour_range();
        self.hours = if self.hours <= low { high } else { self.hours - 1 };
    }

    /// Five minutes later; past 59 wraps to 0.
    pub const fn increment_minutes(&mut self) {
        let next = self.minutes + MINUTE_STEP;
        self.minutes = if next > 59 { 0 } else { next };
    }

    /// Five minutes earlier; below 0 wraps to 55.
    pub const fn decrement_minutes(&mut self) {
        let next = self.minutes - MINUTE_STEP;
        self.minutes = if next < 0 { 60 - MINUTE_STEP } else { next };
    }

    /// Apply typed hour input. 12-hour input wraps (`<1 → 12`, `>12 → 1`); 24-hour input clamps.
    /// Unparsable text leaves the draft unchanged.
    pub fn set_hours_input(&mut self, input: &str) {
        let Ok(value) = input.trim().parse::<i32>() else {
            tracing::debug!(input, "ignoring unparsable hour");
            return;
        };
        self.hours = match self.format {
            ClockFormat::TwelveHour if value < 1 => 12,
            ClockFormat::TwelveHour if value > 12 => 1,
            ClockFormat::TwelveHour => value,
            ClockFormat::TwentyFourHour => value.clamp(0, 23),
        };
    }

    /// Apply typed minute input, clamped to `0..=59`.
    pub fn set_minutes_input(&mut self, input: &str) {
        if let Ok(value) = input.trim().parse::<i32>() {
            self.minutes = value.clamp(0, 59);
        }
    }

    /// Switch AM/PM.
    pub const fn set_period(&mut self, period: Period) {
        self.period = period;
    }

    /// Hour on the 24-hour clock (`12 AM → 0`, `12 PM → 12`, `h PM → h + 12`).
    #[must_use]
    pub const fn hour24(&self) -> u32 {
        let hours = self.hours.unsigned_abs();
        match (self.format, self.period) {
            (ClockFormat::TwentyFourHour, _) => hours,
            (ClockFormat::TwelveHour, Period::Am) => hours % 12,
            (ClockFormat::TwelveHour, Period::Pm) => hours % 12 + 12,
        }
    }

    /// Draft as a time of day.
    #[must_use]
    pub fn to_time(&self) -> Option<NaiveTime> {
        NaiveTime::from_hms_opt(self.hour24(), self.minutes.unsigned_abs(), 0)
    }

    /// Draft placed on `date`.
    #[must_use]
    pub fn on_date(&self, date: NaiveDate) -> Option<NaiveDateTime> {
        self.to_time().map(|time| date.and_time(time))
    }
}

/// Reducer actions for [`TimeDraft`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TimeDraftAction {
    /// Next hour.
    IncrementHours,
    /// Previous hour.
    DecrementHours,
    /// Five minutes later.
    IncrementMinutes,
    /// Five minutes earlier.
    DecrementMinutes,
    /// Typed hour text.
    HoursInput(String),
    /// Typed minute text.
    MinutesInput(String),
    /// AM/PM switch.
    SetPeriod(Period),
    /// Reinitialise from a value, keeping the clock format.
    Load(Option<NaiveTime>),
}

impl Reducible for TimeDraft {
    type Action = TimeDraftAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = *self;
        match action {
            TimeDraftAction::IncrementHours => next.increment_hours(),
            TimeDraftAction::DecrementHours => next.decrement_hours(),
            TimeDraftAction::IncrementMinutes => next.increment_minutes(),
            TimeDraftAction::DecrementMinutes => next.decrement_minutes(),
            TimeDraftAction::HoursInput(text) => next.set_hours_input(&text),
            TimeDraftAction::MinutesInput(text) => next.set_minutes_input(&text),
            TimeDraftAction::SetPeriod(period) => next.set_period(period),
            TimeDraftAction::Load(value) => next = Self::new(value, self.format),
        }
        if next == *self { self } else { Rc::new(next) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).expect("valid time")
    }

    #[test]
    fn formats_both_clocks() {
        assert_eq!(format_time(time(14, 30), ClockFormat::TwelveHour), "02:30 PM");
        assert_eq!(format_time(time(0, 5), ClockFormat::TwelveHour), "12:05 AM");
        assert_eq!(format_time(time(12, 0), ClockFormat::TwelveHour), "12:00 PM");
        assert_eq!(format_time(time(9, 7), ClockFormat::TwentyFourHour), "09:07");
    }

    #[test]
    fn hours_wrap_on_each_clock() {
        let mut draft = TimeDraft::new(None, ClockFormat::TwelveHour);
        assert_eq!(draft.hours, 12);
        draft.increment_hours();
        assert_eq!(draft.hours, 1);
        draft.decrement_hours();
        draft.decrement_hours();
        assert_eq!(draft.hours, 11);

        let mut draft = TimeDraft::new(None, ClockFormat::TwentyFourHour);
        draft.decrement_hours();
        assert_eq!(draft.hours, 23);
        draft.increment_hours();
        assert_eq!(draft.hours, 0);
    }

    #[test]
    fn minutes_step_by_five_with_wrap() {
        let mut draft = TimeDraft::new(Some(time(10, 57)), ClockFormat::TwentyFourHour);
        draft.increment_minutes();
        assert_eq!(draft.minutes, 0);
        draft.minutes = 3;
        draft.decrement_minutes();
        assert_eq!(draft.minutes, 55);
    }

    #[test]
    fn typed_input_wraps_or_clamps() {
        let mut draft = TimeDraft::new(None, ClockFormat::TwelveHour);
        draft.set_hours_input("0");
        assert_eq!(draft.hours, 12);
        draft.set_hours_input("13");
        assert_eq!(draft.hours, 1);
        draft.set_hours_input("abc");
        assert_eq!(draft.hours, 1);

        let mut draft = TimeDraft::new(None, ClockFormat::TwentyFourHour);
        draft.set_hours_input("42");
        assert_eq!(draft.hours, 23);
        draft.set_minutes_input("75");
        assert_eq!(draft.minutes, 59);
        draft.set_minutes_input("-4");
        assert_eq!(draft.minutes, 0);
    }

    #[test]
    fn confirm_converts_to_twenty_four_hours() {
        let mut draft = TimeDraft::new(None, ClockFormat::TwelveHour);
        assert_eq!(draft.hour24(), 0, "12 AM is midnight");
        draft.set_period(Period::Pm);
        assert_eq!(draft.hour24(), 12, "12 PM is noon");
        draft.set_hours_input("3");
        assert_eq!(draft.to_time(), Some(time(15, 0)));
    }

    #[test]
    fn twenty_four_hour_value_loads_into_twelve_hour_draft() {
        let draft = TimeDraft::new(Some(time(18, 45)), ClockFormat::TwelveHour);
        assert_eq!((draft.hours, draft.minutes, draft.period), (6, 45, Period::Pm));
        let day = NaiveDate::from_ymd_opt(2024, 6, 1).expect("valid date");
        assert_eq!(draft.on_date(day), Some(day.and_time(time(18, 45))));
    }

    #[test]
    fn reducer_steps_and_reloads() {
        let draft = Rc::new(TimeDraft::new(Some(time(23, 55)), ClockFormat::TwentyFourHour));
        let draft = draft
            .reduce(TimeDraftAction::IncrementHours)
            .reduce(TimeDraftAction::IncrementMinutes);
        assert_eq!(draft.to_time(), Some(time(0, 0)));
        let same = Rc::clone(&draft).reduce(TimeDraftAction::MinutesInput("x".to_string()));
        assert!(Rc::ptr_eq(&draft, &same));
        let reloaded = draft.reduce(TimeDraftAction::Load(None));
        assert_eq!((reloaded.hours, reloaded.minutes), (0, 0));
        assert_eq!(reloaded.format, ClockFormat::TwentyFourHour);
    }
}
