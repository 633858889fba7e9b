//! Core types for dayboard.
//!
//! - `date` and `holidays` for business-day arithmetic
//! - `sheet`, `entry` and `snapshot` for loading configuration from the spreadsheet
//! - `board` for keeping the last-known-good snapshot across refreshes
//! - `month` and `counters` for the values the screen displays

pub mod board;
pub mod config;
pub mod constants;
pub mod counters;
pub mod date;
pub mod entry;
pub mod error;
pub mod holidays;
pub mod month;
pub mod sheet;
pub mod snapshot;
