//! Remaining-day counters and the clock panel text.

use chrono::{DateTime, Locale, NaiveDateTime, TimeZone};

use crate::date::{count_remaining_business_days, parse_config_date};
use crate::holidays::{HolidaySet, SCHOOL_HOLIDAYS, WORK_HOLIDAYS};
use crate::snapshot::Snapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Counters {
    pub school_days: u32,
    pub work_days: u32,
}

impl Counters {
    /// Count with the compiled-in holiday sets.
    pub fn compute(now: NaiveDateTime, snapshot: &Snapshot) -> Self {
        Self::compute_with(now, snapshot, &SCHOOL_HOLIDAYS, &WORK_HOLIDAYS)
    }

    pub fn compute_with(
        now: NaiveDateTime,
        snapshot: &Snapshot,
        school_holidays: &HolidaySet,
        work_holidays: &HolidaySet,
    ) -> Self {
        Counters {
            school_days: count_remaining_business_days(
                now,
                parse_config_date(snapshot.end_school_date()),
                school_holidays,
            ),
            work_days: count_remaining_business_days(
                now,
                parse_config_date(snapshot.end_work_date()),
                work_holidays,
            ),
        }
    }

    pub fn school_label(&self) -> String {
        format!("Quedan {} días lectivos", self.school_days)
    }

    pub fn work_label(&self) -> String {
        format!("Quedan {} días laborables", self.work_days)
    }
}

/// Text of the date, time and message panels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockFace {
    pub date: String,
    pub time: String,
    pub message: String,
}

impl ClockFace {
    pub fn at<Tz>(now: &DateTime<Tz>, snapshot: &Snapshot) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        ClockFace {
            date: now
                .format_localized("%A, %-d de %B de %Y", Locale::es_ES)
                .to_string(),
            time: now.format("%H:%M:%S").to_string(),
            message: snapshot.message().to_string(),
        }
    }
}
