use anyhow::Result;
use chrono::NaiveDate;
use dayboard_core::date::now_local;
use dayboard_core::month::MonthGrid;

use crate::render::{Render, render_legend};

/// Print the month containing `date` (today by default).
pub async fn run(sheet_id: Option<String>, date: Option<String>) -> Result<()> {
    let today = match date.as_deref() {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map_err(|_| anyhow::anyhow!("Invalid date format '{}'. Expected YYYY-MM-DD", s))?,
        None => now_local().date(),
    };

    let (_, mut board) = super::open_board(sheet_id)?;
    board.refresh().await;

    println!("{}", MonthGrid::build(today, &board.snapshot()).render());
    println!("{}", render_legend());

    Ok(())
}
