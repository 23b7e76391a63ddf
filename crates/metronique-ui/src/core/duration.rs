//! Range/duration calculator for paired start/end values.
//!
//! # Design
//! - An inverted range is a tagged [`RangeDuration::Invalid`] value, never an error.
//! - Month and year buckets use 30 and 365 day approximations.

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

/// Milliseconds in one minute.
pub const MS_PER_MINUTE: i64 = 60_000;

/// Message reported when an end date precedes its start date.
pub const INVALID_DATE_RANGE: &str = "End date must be after start date";
/// Message reported when an end time precedes its start time.
pub const INVALID_TIME_RANGE: &str = "End time must be after start time";

/// Day-count breakdown of a valid date range.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DateSpan {
    /// Whole days between the boundaries.
    pub total_days: i64,
    /// `total_days / 7`.
    pub weeks: i64,
    /// `total_days / 30`.
    pub months: i64,
    /// `total_days / 365`.
    pub years: i64,
    /// Human label such as `"2 weeks"`.
    pub formatted: String,
}

/// Minute breakdown of a valid time range.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSpan {
    /// Whole minutes between the boundaries.
    pub total_minutes: i64,
    /// `total_minutes / 60`.
    pub hours: i64,
    /// `total_minutes % 60`.
    pub minutes: i64,
    /// Label in the form `"{h}h {m}m"`.
    pub formatted: String,
}

/// Outcome of comparing two boundaries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RangeDuration<T> {
    /// End is not before start.
    Valid(T),
    /// End precedes start.
    Invalid {
        /// User-facing explanation.
        message: &'static str,
    },
}

impl<T> RangeDuration<T> {
    /// Whether the range was ordered correctly.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    /// Borrow the span of a valid range.
    #[must_use]
    pub const fn valid(&self) -> Option<&T> {
        match self {
            Self::Valid(span) => Some(span),
            Self::Invalid { .. } => None,
        }
    }

    /// Take the span of a valid range.
    #[must_use]
    pub fn into_valid(self) -> Option<T> {
        match self {
            Self::Valid(span) => Some(span),
            Self::Invalid { .. } => None,
        }
    }
}

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {unit}")
    } else {
        format!("{count} {unit}s")
    }
}

/// Human label for a non-negative day count.
#[must_use]
pub fn format_day_count(days: i64) -> String {
    match days {
        0 => "Same day".to_string(),
        1..=6 => plural(days, "day"),
        7..=29 => plural(days / 7, "week"),
        30..=364 => plural(days / 30, "month"),
        _ => plural(days / 365, "year"),
    }
}

fn date_span(total_days: i64) -> RangeDuration<DateSpan> {
    if total_days < 0 {
        return RangeDuration::Invalid {
            message: INVALID_DATE_RANGE,
        };
    }
    RangeDuration::Valid(DateSpan {
        total_days,
        weeks: total_days / 7,
        months: total_days / 30,
        years: total_days / 365,
        formatted: format_day_count(total_days),
    })
}

/// Duration between two calendar dates; `None` while either boundary is missing.
#[must_use]
pub fn date_duration(
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> Option<RangeDuration<DateSpan>> {
    let (start, end) = start.zip(end)?;
    Some(date_span((end - start).num_days()))
}

/// Duration between two instants in hours and minutes; `None` while either boundary is missing.
#[must_use]
pub fn time_duration(
    start: Option<NaiveDateTime>,
    end: Option<NaiveDateTime>,
) -> Option<RangeDuration<TimeSpan>> {
    let (start, end) = start.zip(end)?;
    let total_minutes = (end - start).num_milliseconds().div_euclid(MS_PER_MINUTE);
    if total_minutes < 0 {
        return Some(RangeDuration::Invalid {
            message: INVALID_TIME_RANGE,
        });
    }
    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;
    Some(RangeDuration::Valid(TimeSpan {
        total_minutes,
        hours,
        minutes,
        formatted: format!("{hours}h {minutes}m"),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    fn at(h: u32, mi: u32, s: u32) -> NaiveDateTime {
        day(2024, 6, 1).and_hms_opt(h, mi, s).expect("valid time")
    }

    #[test]
    fn one_week_range_reports_all_buckets() {
        let result = date_duration(Some(day(2024, 1, 1)), Some(day(2024, 1, 8)));
        let span = result.and_then(RangeDuration::into_valid).expect("valid range");
        assert_eq!(span.total_days, 7);
        assert_eq!(span.weeks, 1);
        assert_eq!(span.months, 0);
        assert_eq!(span.years, 0);
        assert_eq!(span.formatted, "1 week");
    }

    #[test]
    fn inverted_dates_are_invalid() {
        let result = date_duration(Some(day(2024, 3, 10)), Some(day(2024, 3, 9)));
        assert_eq!(
            result,
            Some(RangeDuration::Invalid {
                message: INVALID_DATE_RANGE
            })
        );
    }

    #[test]
    fn missing_boundary_yields_none() {
        assert!(date_duration(None, Some(day(2024, 1, 1))).is_none());
        assert!(date_duration(Some(day(2024, 1, 1)), None).is_none());
        assert!(time_duration(Some(at(9, 0, 0)), None).is_none());
    }

    #[test]
    fn day_labels_follow_bucket_boundaries() {
        let cases = [
            (0, "Same day"),
            (1, "1 day"),
            (6, "6 days"),
            (7, "1 week"),
            (14, "2 weeks"),
            (29, "4 weeks"),
            (30, "1 month"),
            (364, "12 months"),
            (365, "1 year"),
            (800, "2 years"),
        ];
        for (days, expected) in cases {
            assert_eq!(format_day_count(days), expected, "days={days}");
        }
    }

    #[test]
    fn time_range_formats_hours_and_minutes() {
        let span = time_duration(Some(at(9, 15, 0)), Some(at(11, 0, 30)))
            .and_then(RangeDuration::into_valid)
            .expect("valid range");
        assert_eq!(span.total_minutes, 105);
        assert_eq!((span.hours, span.minutes), (1, 45));
        assert_eq!(span.formatted, "1h 45m");
    }

    #[test]
    fn inverted_times_are_invalid_even_by_seconds() {
        let result = time_duration(Some(at(10, 0, 30)), Some(at(10, 0, 0)));
        assert!(!result.expect("both boundaries").is_valid());
    }

    #[test]
    fn equal_times_are_a_zero_span() {
        let result = time_duration(Some(at(10, 0, 0)), Some(at(10, 0, 0))).expect("both boundaries");
        assert_eq!(result.valid().map(|span| span.formatted.as_str()), Some("0h 0m"));
    }
}
