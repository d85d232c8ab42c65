use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Outcome of one sync run, with skips broken down by reason.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SyncReport {
    pub started_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
    /// Raw activity count the feed returned, before any filtering.
    pub fetched: u32,
    pub created: u32,
    /// Skipped because the id already has a note (previous run or earlier in
    /// this batch).
    pub skipped_already_synced: u32,
    /// Skipped by consuming an externally-imported note with the same date
    /// and sport.
    pub skipped_external_match: u32,
    /// Records whose start time would not parse.
    pub skipped_unparseable: u32,
    /// Type keys the catalog didn't know, reported once per run. Sorted so
    /// the aggregate warning reads stably.
    pub unmapped_type_keys: BTreeSet<String>,
    pub created_files: Vec<String>,
}

impl SyncReport {
    pub fn new() -> Self {
        Self {
            started_at: Utc::now(),
            ..Default::default()
        }
    }

    pub fn complete(&mut self) {
        self.completed_at = Some(Utc::now());
    }

    pub fn total_skipped(&self) -> u32 {
        self.skipped_already_synced + self.skipped_external_match + self.skipped_unparseable
    }
}
