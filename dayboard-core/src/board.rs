//! The last-known-good snapshot and how refreshes replace it.

use std::sync::Arc;

use tracing::{debug, error, info, warn};

use crate::sheet::RowSource;
use crate::snapshot::Snapshot;

/// Outcome of one refresh attempt.
#[derive(Debug, Clone)]
pub enum Refresh {
    /// A new snapshot was published.
    Updated(Arc<Snapshot>),
    /// The sheet is not configured; nothing was fetched.
    Skipped,
    /// The fetch failed; the previous snapshot is still current.
    Failed,
}

/// Owns the current snapshot and the source it is refreshed from.
pub struct Board<S> {
    source: S,
    current: Arc<Snapshot>,
}

impl<S: RowSource> Board<S> {
    pub fn new(source: S) -> Self {
        Board {
            source,
            current: Arc::new(Snapshot::default()),
        }
    }

    pub fn snapshot(&self) -> Arc<Snapshot> {
        Arc::clone(&self.current)
    }

    /// Fetch the sheet and swap in a fresh snapshot.
    ///
    /// Failures are logged and leave the current snapshot in place.
    pub async fn refresh(&mut self) -> Refresh {
        let source = self.source.source();
        if !source.is_configured() {
            warn!("Sheet id is not configured; skipping refresh");
            return Refresh::Skipped;
        }

        let url = source.url();
        debug!(%url, "Fetching sheet");

        match self.source.fetch_rows().await {
            Ok(rows) => {
                let snapshot = Arc::new(Snapshot::from_rows(&rows));
                info!(
                    rows = rows.len(),
                    events = snapshot.events().len(),
                    "Sheet refreshed"
                );
                self.current = Arc::clone(&snapshot);
                Refresh::Updated(snapshot)
            }
            Err(e) => {
                error!(%url, "Sheet refresh failed: {}", e);
                Refresh::Failed
            }
        }
    }
}
