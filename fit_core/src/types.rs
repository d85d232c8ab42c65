use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Garmin Connect's unique integer key for one activity record.
///
/// Stable across fetches and unique per remote account, so it doubles as the
/// deduplication identity for notes the engine has materialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActivityId(u64);

impl ActivityId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for ActivityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ActivityId {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u64>()
            .map(Self)
            .map_err(|_| anyhow::anyhow!("Invalid activity id: {s}"))
    }
}

/// Broad workout category a raw Garmin type key maps onto.
///
/// The display label (with spaces) is what lands in the note's `type` field
/// and what externally-imported notes are matched against, so `Display`,
/// `FromStr`, and serde all agree on the human-readable form.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display,
)]
pub enum Sport {
    Cardio,
    Cycling,
    Strength,
    #[serde(rename = "Team Sports")]
    #[strum(serialize = "Team Sports")]
    TeamSports,
    #[serde(rename = "Water Sports")]
    #[strum(serialize = "Water Sports")]
    WaterSports,
    Hiking,
    Climbing,
    #[serde(rename = "Winter Sports")]
    #[strum(serialize = "Winter Sports")]
    WinterSports,
}

impl Sport {
    /// Catch-all bucket for type keys the catalog doesn't know. Unmapped
    /// activities are still materialized under this sport rather than
    /// dropped.
    pub const FALLBACK: Sport = Sport::Strength;
}

/// One strength-training set summary from the remote record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseSet {
    pub category: String,
    pub sub_category: Option<String>,
    /// Lifted volume in grams, as reported by the service.
    pub volume_g: f64,
}

/// One remote activity record, read-only and scoped to a single run.
///
/// The numeric bag is deliberately loose (`f64` everywhere, optionals for
/// fields Garmin omits per sport); `taxonomy` decides which of these become
/// note fields and how they convert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: ActivityId,
    /// Local civil time, `YYYY-MM-DD HH:MM:SS` prefix parseable.
    pub start_time_local: String,
    /// GMT fallback used when the local stamp is absent.
    #[serde(default)]
    pub start_time_gmt: Option<String>,
    /// Raw Garmin `activityType.typeKey`, lowercase.
    pub type_key: String,
    #[serde(default)]
    pub duration_secs: f64,
    #[serde(default)]
    pub calories: f64,
    #[serde(default)]
    pub distance_m: f64,
    #[serde(default)]
    pub average_speed_mps: f64,
    #[serde(default)]
    pub max_speed_mps: f64,
    #[serde(default)]
    pub average_hr: Option<f64>,
    #[serde(default)]
    pub max_hr: Option<f64>,
    #[serde(default)]
    pub elevation_gain_m: Option<f64>,
    #[serde(default)]
    pub active_sets: Option<f64>,
    #[serde(default)]
    pub total_reps: Option<f64>,
    #[serde(default)]
    pub exercise_sets: Vec<ExerciseSet>,
}

impl Activity {
    /// Parse the activity's start time from the 19-character
    /// `YYYY-MM-DD HH:MM:SS` prefix of the local stamp, falling back to the
    /// GMT stamp when local is empty. `None` means the record is
    /// unparseable and must be skipped without touching the watermark.
    pub fn start_time(&self) -> Option<NaiveDateTime> {
        let raw = if self.start_time_local.is_empty() {
            self.start_time_gmt.as_deref().unwrap_or("")
        } else {
            &self.start_time_local
        };
        let prefix = raw.get(..19)?;
        NaiveDateTime::parse_from_str(prefix, "%Y-%m-%d %H:%M:%S").ok()
    }
}
