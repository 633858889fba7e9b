pub mod calendar;
pub mod config;
pub mod days;
pub mod events;
pub mod show;
pub mod watch;

use anyhow::Result;
use dayboard_core::board::Board;
use dayboard_core::config::BoardConfig;
use dayboard_core::sheet::{SheetClient, SheetSource};

/// Load the config, apply a one-off sheet id, and build the board.
pub fn open_board(sheet_id: Option<String>) -> Result<(BoardConfig, Board<SheetClient>)> {
    let mut config = BoardConfig::load()?;
    if let Some(sheet_id) = sheet_id {
        config.sheet_id = sheet_id;
    }

    let client = SheetClient::new(SheetSource::from(&config), config.request_timeout())?;
    Ok((config, Board::new(client)))
}
