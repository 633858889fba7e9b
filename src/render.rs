//! Terminal rendering for dayboard-core types.
//!
//! Extension traits that add colored output to the core models using owo_colors.

use chrono::{Locale, NaiveTime};
use dayboard_core::counters::Counters;
use dayboard_core::month::{DayCell, DayKind, MonthGrid, WEEKDAY_LABELS};
use dayboard_core::snapshot::Event;
use owo_colors::{OwoColorize, Style};

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

fn day_style(cell: &DayCell) -> Style {
    let style = match cell.kind {
        DayKind::LastSchoolDay => Style::new().red().bold(),
        DayKind::LastWorkDay => Style::new().magenta().bold(),
        DayKind::Event => Style::new().cyan(),
        DayKind::Weekend => Style::new().dimmed(),
        DayKind::Plain => Style::new(),
    };

    if cell.today { style.reversed() } else { style }
}

impl Render for DayCell {
    fn render(&self) -> String {
        format!("{:>3}", self.day).style(day_style(self)).to_string()
    }
}

impl Render for MonthGrid {
    fn render(&self) -> String {
        let mut lines = Vec::new();

        if let Some(first) = self.first_day() {
            let title = first
                .and_time(NaiveTime::MIN)
                .and_utc()
                .format_localized("%B %Y", Locale::es_ES)
                .to_string();
            lines.push(format!("{:^28}", title).bold().to_string());
        }

        let header: String = WEEKDAY_LABELS
            .iter()
            .map(|label| format!(" {label}"))
            .collect();
        lines.push(header.dimmed().to_string());

        for week in self.weeks() {
            let row: String = week
                .iter()
                .map(|cell| match cell {
                    Some(cell) => format!(" {}", cell.render()),
                    None => "    ".to_string(),
                })
                .collect();
            lines.push(row.trim_end().to_string());
        }

        lines.join("\n")
    }
}

impl Render for Event {
    fn render(&self) -> String {
        format!("{}  {}", format!("{:<10}", self.date).dimmed(), self.title)
    }
}

impl Render for [Event] {
    fn render(&self) -> String {
        if self.is_empty() {
            return "Sin eventos".dimmed().to_string();
        }

        self.iter().map(Render::render).collect::<Vec<_>>().join("\n")
    }
}

/// The two counter lines, school first.
pub fn render_counters(counters: &Counters) -> (String, String) {
    (
        counters.school_label().bold().to_string(),
        counters.work_label().bold().to_string(),
    )
}

/// Legend for the calendar colors.
pub fn render_legend() -> String {
    [
        "lectivo".red().bold().to_string(),
        "laborable".magenta().bold().to_string(),
        "evento".cyan().to_string(),
        "hoy".reversed().to_string(),
    ]
    .join("  ")
}
