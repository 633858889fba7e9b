//! Fetching rows from the published spreadsheet.
//!
//! The sheet is read through an opensheet-style proxy that serves a tab as a
//! JSON array of `{key, value}` objects.

use std::future::Future;
use std::time::Duration;

use reqwest::header::{CACHE_CONTROL, PRAGMA};

use crate::config::BoardConfig;
use crate::constants::SHEET_ID_PLACEHOLDER;
use crate::entry::SheetRow;
use crate::error::{DayboardError, DayboardResult};

/// Where the sheet lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetSource {
    pub base_url: String,
    pub sheet_id: String,
    pub tab: String,
}

impl SheetSource {
    pub fn url(&self) -> String {
        format!(
            "{}/{}/{}",
            self.base_url.trim_end_matches('/'),
            self.sheet_id,
            self.tab
        )
    }

    /// False when the sheet id was left empty or as the template placeholder.
    pub fn is_configured(&self) -> bool {
        let id = self.sheet_id.trim();
        !id.is_empty() && !id.contains(SHEET_ID_PLACEHOLDER)
    }
}

impl From<&BoardConfig> for SheetSource {
    fn from(config: &BoardConfig) -> Self {
        SheetSource {
            base_url: config.base_url.clone(),
            sheet_id: config.sheet_id.clone(),
            tab: config.sheet_tab.clone(),
        }
    }
}

/// Anything that can produce sheet rows.
pub trait RowSource {
    fn source(&self) -> &SheetSource;

    fn fetch_rows(&self) -> impl Future<Output = DayboardResult<Vec<SheetRow>>> + Send;
}

/// HTTP implementation of `RowSource`.
pub struct SheetClient {
    source: SheetSource,
    http: reqwest::Client,
}

impl SheetClient {
    pub fn new(source: SheetSource, timeout: Duration) -> DayboardResult<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(SheetClient { source, http })
    }
}

impl RowSource for SheetClient {
    fn source(&self) -> &SheetSource {
        &self.source
    }

    async fn fetch_rows(&self) -> DayboardResult<Vec<SheetRow>> {
        let response = self
            .http
            .get(self.source.url())
            .header(CACHE_CONTROL, "no-cache")
            .header(PRAGMA, "no-cache")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(DayboardError::Status(status));
        }

        let body = response.text().await?;
        let rows: Vec<SheetRow> = serde_json::from_str(&body)?;

        Ok(rows)
    }
}
