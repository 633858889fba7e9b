//! Local calendar arithmetic.
//!
//! Everything here works on local wall-clock values. Callers read the clock once
//! (`now_local`) and pass it in, so the same instant is used for a whole render.

use std::time::Duration;

use chrono::{DateTime, Datelike, Days, Local, NaiveDate, NaiveDateTime, NaiveTime, Weekday};

use crate::holidays::HolidaySet;

const DAY: Duration = Duration::from_secs(24 * 60 * 60);

/// Formats accepted when a value is not a plain `YYYY-MM-DD` date.
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M"];
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d"];

/// Current local wall-clock time.
pub fn now_local() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Parse a date value coming from the sheet.
///
/// A strict `YYYY-MM-DD` value means the *end* of that day (23:59:59), so a
/// deadline set for today still counts as remaining. Anything else goes through
/// a more lenient parse. `None` means the value is not a usable date.
pub fn parse_config_date(s: &str) -> Option<NaiveDateTime> {
    if is_strict_iso(s) {
        return NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .ok()
            .and_then(|d| d.and_hms_opt(23, 59, 59));
    }

    parse_lenient(s.trim())
}

fn is_strict_iso(s: &str) -> bool {
    let b = s.as_bytes();
    b.len() == 10
        && b[4] == b'-'
        && b[7] == b'-'
        && b.iter()
            .enumerate()
            .all(|(i, c)| i == 4 || i == 7 || c.is_ascii_digit())
}

fn parse_lenient(s: &str) -> Option<NaiveDateTime> {
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Local).naive_local());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Some(dt.with_timezone(&Local).naive_local());
    }

    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
                .map(|d| d.and_time(NaiveTime::MIN))
        })
}

/// `YYYY-MM-DD` from the local calendar fields.
pub fn to_iso(date: &impl Datelike) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), date.month(), date.day())
}

pub fn is_weekend(date: &impl Datelike) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Count the business days from `now` through `until`, inclusive.
///
/// Days are stepped from `now` keeping its time of day, so today counts when
/// `until` is later today (end-of-day deadlines always are). A missing or past
/// `until` gives 0.
pub fn count_remaining_business_days(
    now: NaiveDateTime,
    until: Option<NaiveDateTime>,
    holidays: &HolidaySet,
) -> u32 {
    let Some(until) = until else {
        return 0;
    };

    let mut day = now;
    let mut count = 0;

    while day <= until {
        let date = day.date();
        if !is_weekend(&date) && !holidays.contains(&to_iso(&date)) {
            count += 1;
        }

        day = match day.checked_add_days(Days::new(1)) {
            Some(next) => next,
            None => break,
        };
    }

    count
}

/// Next daily rollover: 00:01 of the following calendar day.
pub fn next_rollover(now: NaiveDateTime) -> Option<NaiveDateTime> {
    now.date().succ_opt()?.and_hms_opt(0, 1, 0)
}

/// Time left until `next_rollover`.
pub fn until_rollover(now: NaiveDateTime) -> Duration {
    next_rollover(now)
        .and_then(|next| (next - now).to_std().ok())
        .unwrap_or(DAY)
}
