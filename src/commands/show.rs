use anyhow::Result;
use chrono::Local;

use crate::screen::Screen;

pub async fn run(sheet_id: Option<String>) -> Result<()> {
    let (_, mut board) = super::open_board(sheet_id)?;
    board.refresh().await;

    let mut screen = Screen::default();
    screen.refresh_all(&Local::now(), &board.snapshot());
    screen.draw(&mut std::io::stdout())?;

    Ok(())
}
