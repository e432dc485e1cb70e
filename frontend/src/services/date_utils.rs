use chrono::{NaiveDate, NaiveDateTime};
use js_sys::Date;

/// Current local date and time from the browser clock.
pub fn now() -> NaiveDateTime {
    let now = Date::new_0();
    let date = NaiveDate::from_ymd_opt(
        now.get_full_year() as i32,
        now.get_month() + 1, // JavaScript months are 0-indexed
        now.get_date(),
    )
    .unwrap_or_default();

    date.and_hms_opt(now.get_hours(), now.get_minutes(), now.get_seconds())
        .unwrap_or_default()
}

/// Current local calendar date.
pub fn today() -> NaiveDate {
    now().date()
}
