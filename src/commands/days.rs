use anyhow::Result;
use dayboard_core::date::now_local;

use crate::screen::Screen;

pub async fn run(sheet_id: Option<String>) -> Result<()> {
    let (_, mut board) = super::open_board(sheet_id)?;
    board.refresh().await;

    let mut screen = Screen::default();
    screen.refresh_counters(now_local(), &board.snapshot());

    println!("{}", screen.school_days);
    println!("{}", screen.work_days);

    Ok(())
}
