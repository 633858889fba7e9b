//! The dashboard screen: seven text panels redrawn as a whole.

use std::io::{self, Write};

use chrono::{DateTime, Local, NaiveDateTime};
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    queue,
    terminal::{Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use dayboard_core::counters::{ClockFace, Counters};
use dayboard_core::month::MonthGrid;
use dayboard_core::snapshot::Snapshot;
use owo_colors::OwoColorize;

use crate::render::{Render, render_counters, render_legend};

#[derive(Debug, Default, Clone)]
pub struct Screen {
    pub date: String,
    pub time: String,
    pub message: String,
    pub school_days: String,
    pub work_days: String,
    pub calendar: String,
    pub event_list: String,
}

impl Screen {
    pub fn refresh_clock(&mut self, now: &DateTime<Local>, snapshot: &Snapshot) {
        let face = ClockFace::at(now, snapshot);
        self.date = face.date;
        self.time = face.time;
        self.message = face.message;
    }

    pub fn refresh_counters(&mut self, now: NaiveDateTime, snapshot: &Snapshot) {
        let (school, work) = render_counters(&Counters::compute(now, snapshot));
        self.school_days = school;
        self.work_days = work;
    }

    pub fn refresh_calendar(&mut self, now: NaiveDateTime, snapshot: &Snapshot) {
        self.calendar = MonthGrid::build(now.date(), snapshot).render();
    }

    pub fn refresh_events(&mut self, snapshot: &Snapshot) {
        self.event_list = snapshot.events().render();
    }

    /// Recompute every panel from one reading of the clock.
    pub fn refresh_all(&mut self, now: &DateTime<Local>, snapshot: &Snapshot) {
        let naive = now.naive_local();
        self.refresh_counters(naive, snapshot);
        self.refresh_clock(now, snapshot);
        self.refresh_events(snapshot);
        self.refresh_calendar(naive, snapshot);
    }

    /// Write the panels top to bottom.
    pub fn draw<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self.date.bold())?;
        writeln!(out, "{}", self.time.bold().green())?;
        writeln!(out)?;
        writeln!(out, "{}", self.message.italic())?;
        writeln!(out)?;
        writeln!(out, "{}", self.school_days)?;
        writeln!(out, "{}", self.work_days)?;
        writeln!(out)?;
        writeln!(out, "{}", self.calendar)?;
        writeln!(out, "{}", render_legend())?;
        writeln!(out)?;
        writeln!(out, "{}", "Próximos eventos".bold())?;
        writeln!(out, "{}", self.event_list)?;
        Ok(())
    }

    /// Clear and redraw in place.
    pub fn redraw<W: Write>(&self, out: &mut W) -> io::Result<()> {
        queue!(out, MoveTo(0, 0), Clear(ClearType::All))?;
        self.draw(out)?;
        out.flush()
    }
}

/// Alternate screen with a hidden cursor, restored on drop.
pub struct Terminal<W: Write> {
    out: W,
}

impl<W: Write> Terminal<W> {
    pub fn enter(mut out: W) -> io::Result<Self> {
        queue!(out, EnterAlternateScreen, Hide)?;
        out.flush()?;
        Ok(Terminal { out })
    }

    pub fn out(&mut self) -> &mut W {
        &mut self.out
    }
}

impl<W: Write> Drop for Terminal<W> {
    fn drop(&mut self) {
        let _ = queue!(self.out, Show, LeaveAlternateScreen);
        let _ = self.out.flush();
    }
}
