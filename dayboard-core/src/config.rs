//! dayboard configuration.

use std::path::{Path, PathBuf};
use std::time::Duration;

use ::config::{Config, Environment, File};
use serde::Deserialize;

use crate::constants::{
    DEFAULT_BASE_URL, DEFAULT_REFRESH_MINUTES, DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_SHEET_ID,
    DEFAULT_SHEET_TAB, MAX_REFRESH_MINUTES,
};
use crate::error::{DayboardError, DayboardResult};

fn default_sheet_id() -> String {
    DEFAULT_SHEET_ID.to_string()
}

fn default_sheet_tab() -> String {
    DEFAULT_SHEET_TAB.to_string()
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_refresh_minutes() -> u64 {
    DEFAULT_REFRESH_MINUTES
}

fn default_request_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

/// Configuration at ~/.config/dayboard/config.toml, overridable with
/// `DAYBOARD_*` environment variables (e.g. `DAYBOARD_SHEET_ID`).
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    #[serde(default = "default_sheet_id")]
    pub sheet_id: String,

    #[serde(default = "default_sheet_tab")]
    pub sheet_tab: String,

    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_refresh_minutes")]
    pub refresh_minutes: u64,

    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl BoardConfig {
    pub fn config_path() -> DayboardResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| DayboardError::Config("Could not determine config directory".into()))?
            .join("dayboard");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the default path, writing a commented template first if
    /// there is no config file yet.
    pub fn load() -> DayboardResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> DayboardResult<Self> {
        let config: BoardConfig = Config::builder()
            .add_source(File::from(path.to_path_buf()).required(false))
            .add_source(Environment::with_prefix("DAYBOARD").try_parsing(true))
            .build()
            .map_err(|e| DayboardError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| DayboardError::Config(e.to_string()))?;

        if !(1..=MAX_REFRESH_MINUTES).contains(&config.refresh_minutes) {
            return Err(DayboardError::Config(format!(
                "refresh_minutes must be between 1 and {MAX_REFRESH_MINUTES}"
            )));
        }

        if config.request_timeout_secs == 0 {
            return Err(DayboardError::Config(
                "request_timeout_secs must be at least 1".into(),
            ));
        }

        Ok(config)
    }

    /// Create a config file with every option commented out.
    pub fn create_default_config(path: &Path) -> DayboardResult<()> {
        let contents = format!(
            "\
# dayboard configuration

# Spreadsheet holding the message, term dates and events:
# sheet_id = \"{DEFAULT_SHEET_ID}\"
# sheet_tab = \"{DEFAULT_SHEET_TAB}\"

# JSON proxy serving the sheet:
# base_url = \"{DEFAULT_BASE_URL}\"

# Minutes between sheet refreshes:
# refresh_minutes = {DEFAULT_REFRESH_MINUTES}

# Seconds before a sheet request is abandoned:
# request_timeout_secs = {DEFAULT_REQUEST_TIMEOUT_SECS}
"
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                DayboardError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| DayboardError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_minutes.saturating_mul(60))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
