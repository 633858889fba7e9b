mod commands;
mod render;
mod scheduler;
mod screen;

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "dayboard")]
#[command(about = "Clock, remaining school and work days, and upcoming events from a shared sheet")]
struct Cli {
    /// Use this sheet id instead of the configured one
    #[arg(long, global = true)]
    sheet_id: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Live dashboard (default)
    Watch,
    /// Print the dashboard once
    Show,
    /// Print the remaining school and work days
    Days,
    /// Print the calendar
    Calendar {
        /// Show the month containing this date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,
    },
    /// Print the upcoming events
    Events,
    /// Show config paths and the effective sheet settings
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Watch);

    init_logging(matches!(command, Commands::Watch))?;

    match command {
        Commands::Watch => commands::watch::run(cli.sheet_id).await,
        Commands::Show => commands::show::run(cli.sheet_id).await,
        Commands::Days => commands::days::run(cli.sheet_id).await,
        Commands::Calendar { date } => commands::calendar::run(cli.sheet_id, date).await,
        Commands::Events => commands::events::run(cli.sheet_id).await,
        Commands::Config => commands::config::run(),
    }
}

/// Log file used while the live dashboard owns the terminal.
fn log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("dayboard").join("dayboard.log"))
}

fn init_logging(to_file: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    if to_file {
        if let Some(path) = log_path() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new().create(true).append(true).open(&path)?;

            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .init();
            return Ok(());
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}
