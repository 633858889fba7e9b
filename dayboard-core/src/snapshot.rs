//! Immutable view of one successful sheet load.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use chrono::NaiveDateTime;

use crate::constants::{
    DEFAULT_END_SCHOOL_DATE, DEFAULT_END_WORK_DATE, DEFAULT_MESSAGE, SCHOOL_END_TITLE,
    WORK_END_TITLE,
};
use crate::date::parse_config_date;
use crate::entry::{Entry, SheetRow};

/// A titled date from the sheet. `date` is kept exactly as written there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub title: String,
    pub date: String,
}

impl Event {
    pub fn new(title: impl Into<String>, date: impl Into<String>) -> Self {
        Event {
            title: title.into(),
            date: date.into(),
        }
    }

    pub fn parsed_date(&self) -> Option<NaiveDateTime> {
        parse_config_date(&self.date)
    }
}

/// Configuration values and events built together from a single fetch.
///
/// A new snapshot replaces the old one wholesale; nothing is merged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    values: BTreeMap<String, String>,
    end_school_date: Option<String>,
    end_work_date: Option<String>,
    message: Option<String>,
    events: Vec<Event>,
}

impl Snapshot {
    /// Build a snapshot from the sheet rows.
    ///
    /// Later rows win over earlier rows with the same key. The two term-end
    /// events are always appended, falling back to the default dates.
    pub fn from_rows(rows: &[SheetRow]) -> Self {
        let mut snapshot = Snapshot::default();

        for row in rows {
            let Some(entry) = Entry::classify(row) else {
                continue;
            };

            snapshot
                .values
                .insert(row.key.trim().to_string(), row.value.clone());

            match entry {
                Entry::EndSchoolDate(date) => snapshot.end_school_date = Some(date),
                Entry::EndWorkDate(date) => snapshot.end_work_date = Some(date),
                Entry::Message(message) => snapshot.message = Some(message),
                Entry::Event { title, date } => snapshot.events.push(Event { title, date }),
                Entry::Other { .. } => {}
            }
        }

        let school = Event::new(SCHOOL_END_TITLE, snapshot.end_school_date());
        let work = Event::new(WORK_END_TITLE, snapshot.end_work_date());
        snapshot.events.push(school);
        snapshot.events.push(work);

        sort_events(&mut snapshot.events);
        snapshot
    }

    /// Raw value of any key, recognized or not.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn values(&self) -> &BTreeMap<String, String> {
        &self.values
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn end_school_date(&self) -> &str {
        non_empty_or(&self.end_school_date, DEFAULT_END_SCHOOL_DATE)
    }

    pub fn end_work_date(&self) -> &str {
        non_empty_or(&self.end_work_date, DEFAULT_END_WORK_DATE)
    }

    pub fn message(&self) -> &str {
        non_empty_or(&self.message, DEFAULT_MESSAGE)
    }
}

fn non_empty_or<'a>(value: &'a Option<String>, default: &'a str) -> &'a str {
    match value.as_deref() {
        Some(v) if !v.is_empty() => v,
        _ => default,
    }
}

/// Ascending by date. Events whose date does not parse go last, in input order.
fn sort_events(events: &mut [Event]) {
    events.sort_by(|a, b| match (a.parsed_date(), b.parsed_date()) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles_and_dates(snapshot: &Snapshot) -> Vec<(String, String)> {
        snapshot
            .events()
            .iter()
            .map(|e| (e.title.clone(), e.date.clone()))
            .collect()
    }

    #[test]
    fn test_from_rows_scenario_with_default_work_end() {
        let rows = vec![
            SheetRow::new("end_school_date", "2025-06-30"),
            SheetRow::new("eventoFiesta", "2025-05-01"),
        ];

        let snapshot = Snapshot::from_rows(&rows);

        assert_eq!(
            titles_and_dates(&snapshot),
            vec![
                ("Fiesta".to_string(), "2025-05-01".to_string()),
                ("Último día lectivo".to_string(), "2025-06-30".to_string()),
                ("Último día laborable".to_string(), "2025-12-31".to_string()),
            ]
        );
    }

    #[test]
    fn test_from_rows_keeps_every_key_in_values() {
        let rows = vec![
            SheetRow::new(" color ", "azul"),
            SheetRow::new("eventoExamen", "2025-06-10"),
            SheetRow::new("", "ignored"),
        ];

        let snapshot = Snapshot::from_rows(&rows);

        assert_eq!(snapshot.get("color"), Some("azul"));
        assert_eq!(snapshot.get("eventoExamen"), Some("2025-06-10"));
        assert_eq!(snapshot.values().len(), 2);
    }

    #[test]
    fn test_last_writer_wins() {
        let rows = vec![
            SheetRow::new("message", "primero"),
            SheetRow::new("message", "segundo"),
            SheetRow::new("end_work_date", "2025-11-30"),
            SheetRow::new("end_work_date", "2025-12-19"),
        ];

        let snapshot = Snapshot::from_rows(&rows);

        assert_eq!(snapshot.message(), "segundo");
        assert_eq!(snapshot.get("message"), Some("segundo"));
        assert_eq!(snapshot.end_work_date(), "2025-12-19");
    }

    #[test]
    fn test_defaults_when_missing_or_empty() {
        let empty = Snapshot::default();
        assert_eq!(empty.message(), DEFAULT_MESSAGE);
        assert_eq!(empty.end_school_date(), DEFAULT_END_SCHOOL_DATE);
        assert_eq!(empty.end_work_date(), DEFAULT_END_WORK_DATE);
        assert!(empty.events().is_empty());

        let rows = vec![SheetRow::new("message", ""), SheetRow::new("end_school_date", "")];
        let snapshot = Snapshot::from_rows(&rows);
        assert_eq!(snapshot.message(), DEFAULT_MESSAGE);
        assert_eq!(snapshot.end_school_date(), DEFAULT_END_SCHOOL_DATE);
    }

    #[test]
    fn test_undated_events_sort_last_in_input_order() {
        let rows = vec![
            SheetRow::new("eventoPronto", "algún día"),
            SheetRow::new("eventoVerano", "2025-07-15"),
            SheetRow::new("eventoQuizás", "???"),
            SheetRow::new("eventoPrimavera", "2025-04-01"),
        ];

        let snapshot = Snapshot::from_rows(&rows);
        let titles: Vec<&str> = snapshot.events().iter().map(|e| e.title.as_str()).collect();

        assert_eq!(
            titles,
            vec![
                "Primavera",
                "Último día lectivo",
                "Verano",
                "Último día laborable",
                "Pronto",
                "Quizás",
            ]
        );
    }

    #[test]
    fn test_same_day_event_sorts_before_end_of_day_term_end() {
        let rows = vec![SheetRow::new("eventoFin", "2025-06-30T09:00:00")];
        let snapshot = Snapshot::from_rows(&rows);

        assert_eq!(snapshot.events()[0].title, "Fin");
        assert_eq!(snapshot.events()[1].title, SCHOOL_END_TITLE);
    }
}
