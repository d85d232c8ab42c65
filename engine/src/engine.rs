use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use chrono::NaiveDateTime;
use connect::ActivityFeed;
use fit_core::Sport;
use taxonomy::{SportCatalog, seconds_to_hms, stat_fields, title_case_key};
use tracing::{debug, info, warn};
use vault::{NoteWriter, VaultIndex, WorkoutNote};

use crate::error::EngineResult;
use crate::report::SyncReport;
use crate::state::{StateStore, SyncState};

/// Paths and overrides one run needs, assembled by the caller from the
/// loaded configuration.
#[derive(Debug, Clone)]
pub struct SyncEngineConfig {
    pub workouts_dir: PathBuf,
    pub state_file: PathBuf,
    /// Widens the fetch window for a backfill. The persisted watermark still
    /// only ever moves forward.
    pub since_override: Option<NaiveDateTime>,
}

/// Drives one sync run end to end.
pub struct SyncEngine {
    config: SyncEngineConfig,
    feed: Arc<dyn ActivityFeed>,
    catalog: SportCatalog,
}

impl SyncEngine {
    pub fn new(config: SyncEngineConfig, feed: Arc<dyn ActivityFeed>, catalog: SportCatalog) -> Self {
        Self {
            config,
            feed,
            catalog,
        }
    }

    /// Run one full pass: fetch past the watermark, rebuild the vault
    /// indexes, materialize what is new, persist the advanced watermark.
    ///
    /// Exactly one engine may run against a given vault and state file at a
    /// time; nothing here locks against a concurrent run.
    pub async fn run(&self) -> EngineResult<SyncReport> {
        let mut report = SyncReport::new();

        let store = StateStore::new(&self.config.state_file);
        let stored = store.load();
        let window = self.config.since_override.unwrap_or(stored.last_sync);
        info!(last_sync = %stored.last_sync, window = %window, "Starting sync");

        // A fetch failure aborts the whole run right here: nothing written,
        // watermark untouched, safe to retry.
        let activities = self.feed.activities_since(window.date()).await?;
        report.fetched = activities.len() as u32;
        info!(count = activities.len(), since = %window.date(), "Fetched activities");

        let mut writer = NoteWriter::new(&self.config.workouts_dir);
        writer.ensure_dir()?;
        let mut index = VaultIndex::scan(&self.config.workouts_dir)?;

        // Per-run consumption against the external (date, sport) buckets.
        let mut consumed: HashMap<(String, Sport), u32> = HashMap::new();

        // Monotonic floor: even a backfill run never moves the watermark
        // backwards.
        let mut latest_seen = stored.last_sync;

        for activity in &activities {
            let Some(start) = activity.start_time() else {
                warn!(
                    id = %activity.id,
                    raw = %activity.start_time_local,
                    "Skipping activity with unparseable start time"
                );
                report.skipped_unparseable += 1;
                continue;
            };

            // Track the newest start time before any skip decision, so the
            // watermark advances past activities deduplicated away.
            if start > latest_seen {
                latest_seen = start;
            }

            if start <= window {
                // Expected overlap: the fetch window is date-granular.
                debug!(id = %activity.id, start = %start, "Inside prior window");
                continue;
            }

            let date = start.format("%Y-%m-%d").to_string();
            let (sport, exercise) = match self.catalog.classify(&activity.type_key) {
                Some((sport, name)) => (sport, name.to_string()),
                None => {
                    report.unmapped_type_keys.insert(activity.type_key.clone());
                    (Sport::FALLBACK, title_case_key(&activity.type_key))
                }
            };

            // Dedup, in strict order. First: the id already has a note, from
            // a previous run or from earlier in this batch.
            if index.contains(activity.id) {
                report.skipped_already_synced += 1;
                continue;
            }

            // Second: consume one externally-imported note with the same
            // date and sport, if any remain. A count-level heuristic, never
            // an identity match.
            let used = consumed.entry((date.clone(), sport)).or_insert(0);
            if *used < index.external_count(&date, sport) {
                *used += 1;
                report.skipped_external_match += 1;
                continue;
            }

            let note = WorkoutNote {
                date: date.clone(),
                exercise,
                sets: (activity.active_sets.unwrap_or(0.0) as i64).to_string(),
                reps: (activity.total_reps.unwrap_or(0.0) as i64).to_string(),
                time: seconds_to_hms(activity.duration_secs),
                sport,
                calories: activity.calories as i64,
                garmin_id: Some(activity.id),
                stats: stat_fields(activity, sport),
            };

            // A write failure aborts the run: advancing the watermark past
            // an activity that was never captured would lose it silently.
            let filename = writer.write(&date, &note.render())?;
            index.insert(activity.id);
            info!(file = %filename, sport = %sport, calories = note.calories, "Created note");
            report.created += 1;
            report.created_files.push(filename);
        }

        // Saved even when nothing was created: skips still mean those
        // activities are handled and must not be refetched.
        store.save(&SyncState {
            last_sync: latest_seen,
        })?;

        report.complete();
        if !report.unmapped_type_keys.is_empty() {
            let keys = report
                .unmapped_type_keys
                .iter()
                .cloned()
                .collect::<Vec<_>>()
                .join(", ");
            warn!(keys = %keys, "Unknown activity types mapped to the fallback sport");
        }
        info!(
            fetched = report.fetched,
            created = report.created,
            skipped_already_synced = report.skipped_already_synced,
            skipped_external_match = report.skipped_external_match,
            skipped_unparseable = report.skipped_unparseable,
            "Sync completed"
        );

        Ok(report)
    }
}
