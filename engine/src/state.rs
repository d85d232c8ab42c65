use std::path::{Path, PathBuf};

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::EngineError;

/// The watermark: start time of the most recent activity a completed run has
/// handled, in the account's local civil time (no zone, same as the remote
/// timestamps it is compared against).
///
/// Monotonically non-decreasing across successful runs. Persisted as
/// `{ "last_sync": "2024-01-02T08:00:00" }`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SyncState {
    pub last_sync: NaiveDateTime,
}

impl Default for SyncState {
    fn default() -> Self {
        Self {
            last_sync: default_epoch(),
        }
    }
}

/// Far enough in the past that a fresh install fetches the full history.
fn default_epoch() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2020, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .unwrap_or_default()
}

/// Whole-file JSON persistence for the watermark.
pub struct StateStore {
    path: PathBuf,
}

impl StateStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the saved watermark. A missing or unreadable file yields the
    /// default epoch rather than an error: the next run refetches everything
    /// and the dedup indexes absorb the overlap.
    pub fn load(&self) -> SyncState {
        match std::fs::read_to_string(&self.path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(state) => state,
                Err(err) => {
                    warn!(
                        path = %self.path.display(),
                        error = %err,
                        "State file unreadable, starting from the default epoch"
                    );
                    SyncState::default()
                }
            },
            Err(_) => {
                info!(path = %self.path.display(), "No state file, fetching the full history");
                SyncState::default()
            }
        }
    }

    pub fn save(&self, state: &SyncState) -> Result<(), EngineError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| EngineError::State {
                path: self.path.clone(),
                source,
            })?;
        }
        let data = serde_json::to_string_pretty(state)?;
        std::fs::write(&self.path, data).map_err(|source| EngineError::State {
            path: self.path.clone(),
            source,
        })?;
        Ok(())
    }
}
