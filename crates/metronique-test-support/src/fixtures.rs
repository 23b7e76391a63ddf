//! Calendar and viewport fixtures.

use chrono::{NaiveDate, NaiveDateTime};

/// Common desktop viewport (`width`, `height`) in CSS pixels.
pub const DESKTOP_VIEWPORT: (f64, f64) = (1280.0, 800.0);

/// Narrow phone viewport (`width`, `height`) in CSS pixels.
pub const PHONE_VIEWPORT: (f64, f64) = (390.0, 844.0);

/// Build a calendar date, panicking on invalid fixture input.
///
/// # Panics
/// Panics when the supplied components do not form a valid date.
#[must_use]
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date")
}

/// Build a local wall-clock instant, panicking on invalid fixture input.
///
/// # Panics
/// Panics when the supplied components do not form a valid date and time.
#[must_use]
pub fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    date(year, month, day)
        .and_hms_opt(hour, minute, 0)
        .expect("valid fixture time")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn fixtures_build_expected_values() {
        let day = date(2024, 2, 29);
        assert_eq!((day.year(), day.month(), day.day()), (2024, 2, 29));
        let instant = at(2024, 1, 1, 13, 45);
        assert_eq!((instant.hour(), instant.minute()), (13, 45));
        assert!(DESKTOP_VIEWPORT.0 > PHONE_VIEWPORT.0);
    }
}
