//! Month grid for the calendar panel.

use chrono::{Datelike, NaiveDate};

use crate::date::{is_weekend, parse_config_date, to_iso};
use crate::snapshot::Snapshot;

/// Column headers, Monday first.
pub const WEEKDAY_LABELS: [&str; 7] = ["Lun", "Mar", "Mié", "Jue", "Vie", "Sáb", "Dom"];

/// What a day cell is highlighted as. Exactly one applies per day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayKind {
    LastSchoolDay,
    LastWorkDay,
    Event,
    Weekend,
    Plain,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCell {
    pub day: u32,
    pub date: NaiveDate,
    pub kind: DayKind,
    /// Independent of `kind`.
    pub today: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    /// Empty cells before the 1st so it lands under its weekday.
    pub leading_blanks: u32,
    pub days: Vec<DayCell>,
}

impl MonthGrid {
    /// Lay out the month containing `today`.
    pub fn build(today: NaiveDate, snapshot: &Snapshot) -> Self {
        let first = today.with_day(1).unwrap_or(today);
        let school_end = term_end_iso(snapshot.end_school_date());
        let work_end = term_end_iso(snapshot.end_work_date());

        let days = first
            .iter_days()
            .take_while(|d| d.month() == first.month())
            .map(|date| {
                let iso = to_iso(&date);
                let kind = if school_end.as_deref() == Some(iso.as_str()) {
                    DayKind::LastSchoolDay
                } else if work_end.as_deref() == Some(iso.as_str()) {
                    DayKind::LastWorkDay
                } else if snapshot.events().iter().any(|e| e.date == iso) {
                    DayKind::Event
                } else if is_weekend(&date) {
                    DayKind::Weekend
                } else {
                    DayKind::Plain
                };

                DayCell {
                    day: date.day(),
                    date,
                    kind,
                    today: date == today,
                }
            })
            .collect();

        MonthGrid {
            year: first.year(),
            month: first.month(),
            leading_blanks: first.weekday().num_days_from_monday(),
            days,
        }
    }

    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }

    /// Cells grouped into weeks: `None` for blanks, padded to full rows.
    pub fn weeks(&self) -> Vec<[Option<&DayCell>; 7]> {
        let cells: Vec<Option<&DayCell>> = std::iter::repeat_n(None, self.leading_blanks as usize)
            .chain(self.days.iter().map(Some))
            .collect();

        cells
            .chunks(7)
            .map(|chunk| {
                let mut week = [None; 7];
                week[..chunk.len()].copy_from_slice(chunk);
                week
            })
            .collect()
    }
}

/// Term-end dates from the sheet, normalized the same way the counters read them.
fn term_end_iso(value: &str) -> Option<String> {
    parse_config_date(value).map(|dt| to_iso(&dt))
}
