use anyhow::Result;

use crate::render::Render;

pub async fn run(sheet_id: Option<String>) -> Result<()> {
    let (_, mut board) = super::open_board(sheet_id)?;
    board.refresh().await;

    println!("{}", board.snapshot().events().render());

    Ok(())
}
