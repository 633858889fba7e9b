//! Holiday sets excluded from the business-day counters.
//!
//! These are compiled in. The sheet cannot add or remove holidays.

/// Days off during the school term.
pub const SCHOOL_HOLIDAYS: HolidaySet = HolidaySet::new(&["2025-06-09"]);

/// Days off during the work year.
pub const WORK_HOLIDAYS: HolidaySet = HolidaySet::new(&["2025-08-15", "2025-10-12", "2025-12-25"]);

/// A fixed list of ISO dates. Membership is an exact string match.
#[derive(Debug, Clone, Copy)]
pub struct HolidaySet {
    dates: &'static [&'static str],
}

impl HolidaySet {
    pub const fn new(dates: &'static [&'static str]) -> Self {
        HolidaySet { dates }
    }

    pub fn contains(&self, iso: &str) -> bool {
        self.dates.iter().any(|d| *d == iso)
    }

    pub fn dates(&self) -> &'static [&'static str] {
        self.dates
    }
}
