use anyhow::Result;
use tracing::warn;

use crate::scheduler::{self, Timing};
use crate::screen::Terminal;

pub async fn run(sheet_id: Option<String>) -> Result<()> {
    let (config, board) = super::open_board(sheet_id)?;

    let interrupted = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Could not listen for Ctrl-C: {e}");
            std::future::pending::<()>().await;
        }
    };

    let mut terminal = Terminal::enter(std::io::stdout())?;
    scheduler::run(
        board,
        Timing::new(config.refresh_interval()),
        terminal.out(),
        interrupted,
    )
    .await
}
