//! Error types for dayboard.

use thiserror::Error;

/// Errors that can occur while loading or refreshing the board.
#[derive(Error, Debug)]
pub enum DayboardError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Sheet responded with status {0}")]
    Status(reqwest::StatusCode),

    #[error("Could not parse sheet rows: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type alias for dayboard operations.
pub type DayboardResult<T> = Result<T, DayboardError>;
