use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::str::FromStr;

use fit_core::{ActivityId, Sport};
use regex::Regex;
use tracing::info;
use walkdir::WalkDir;

use crate::error::VaultError;

/// Deduplication indexes rebuilt by a full scan of the workouts directory.
///
/// Two tiers: notes that carry a `garmin_id` identify their activity exactly;
/// notes without one (bulk-imported by hand before the sync existed) can only
/// be matched by count per (date, sport) bucket. The indexes are never cached
/// across runs, so the file system stays the single source of truth.
#[derive(Debug, Default)]
pub struct VaultIndex {
    existing_ids: HashSet<ActivityId>,
    external_buckets: HashMap<(String, Sport), u32>,
}

impl VaultIndex {
    /// Scan every Markdown note under `workouts_dir`.
    ///
    /// Frontmatter fields are pulled out with line-anchored patterns rather
    /// than a YAML parser, so hand-edited notes with otherwise invalid
    /// frontmatter still count. Files that are unreadable, or that have
    /// neither an id nor the date/type pair, are skipped without failing the
    /// scan. A missing directory scans as an empty index.
    pub fn scan(workouts_dir: &Path) -> Result<Self, VaultError> {
        let mut index = Self::default();
        if !workouts_dir.exists() {
            return Ok(index);
        }

        let id_re = Regex::new(r#"(?m)^garmin_id:\s*"?(\d+)"?"#)?;
        let date_re = Regex::new(r#"(?m)^date_of_workout:\s*"?([^"\n]+)"?"#)?;
        let type_re = Regex::new(r#"(?m)^type:\s*"?([^"\n]+)"?"#)?;

        for entry in WalkDir::new(workouts_dir)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| {
                e.file_type().is_file() && e.path().extension().is_some_and(|ext| ext == "md")
            })
        {
            let Ok(text) = std::fs::read_to_string(entry.path()) else {
                continue;
            };

            if let Some(caps) = id_re.captures(&text) {
                if let Ok(id) = caps[1].parse::<u64>() {
                    index.existing_ids.insert(ActivityId::new(id));
                }
                continue;
            }

            // No id field at all: an externally-imported note. It can only
            // anchor dedup by (date, type) count.
            let date = date_re.captures(&text).map(|c| c[1].trim().to_string());
            let sport = type_re
                .captures(&text)
                .and_then(|c| Sport::from_str(c[1].trim()).ok());
            if let (Some(date), Some(sport)) = (date, sport) {
                *index.external_buckets.entry((date, sport)).or_insert(0) += 1;
            }
        }

        info!(
            ids = index.existing_ids.len(),
            buckets = index.external_buckets.len(),
            "vault scan complete"
        );
        Ok(index)
    }

    pub fn contains(&self, id: ActivityId) -> bool {
        self.existing_ids.contains(&id)
    }

    /// Record an id materialized during the current run, so a duplicate id
    /// later in the same batch is caught by the same check as a prior-run
    /// note.
    pub fn insert(&mut self, id: ActivityId) {
        self.existing_ids.insert(id);
    }

    pub fn external_count(&self, date: &str, sport: Sport) -> u32 {
        self.external_buckets
            .get(&(date.to_string(), sport))
            .copied()
            .unwrap_or(0)
    }

    pub fn id_count(&self) -> usize {
        self.existing_ids.len()
    }

    pub fn bucket_count(&self) -> usize {
        self.external_buckets.len()
    }

    /// Total externally-imported notes across all buckets.
    pub fn external_total(&self) -> u32 {
        self.external_buckets.values().sum()
    }
}
