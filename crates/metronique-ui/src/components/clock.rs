//! Local wall-clock readings from the browser.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use js_sys::Date;

/// Milliseconds since the epoch.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn now_ms() -> u64 {
    Date::now().max(0.0) as u64
}

/// Current local date and time.
pub(crate) fn now() -> NaiveDateTime {
    let date = Date::new_0();
    let day = NaiveDate::from_ymd_opt(
        i32::try_from(date.get_full_year()).unwrap_or(1970),
        date.get_month() + 1,
        date.get_date(),
    )
    .unwrap_or_default();
    let time = NaiveTime::from_hms_opt(date.get_hours(), date.get_minutes(), date.get_seconds())
        .unwrap_or_default();
    day.and_time(time)
}

/// Current local date.
pub(crate) fn today() -> NaiveDate {
    now().date()
}
