//! # Configuration Structures
//!
//! Defines the configuration for a sync installation: where the vault lives,
//! how to reach Garmin Connect, and where run state is kept.
//!
//! All structures use `serde` for loading and `validator` for range checks,
//! and every field carries a default so an empty config file (or none at
//! all) yields a working local setup.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use validator::Validate;

/// Top-level configuration, aggregating the vault, Connect, and state
/// sections.
///
/// Constructed once at startup (file + environment + CLI flags, in
/// precedence order) and passed into the engine and its collaborators;
/// nothing reads configuration ambiently after that.
///
/// ```rust,no_run
/// use config::Config;
///
/// let config = Config::default();
/// println!("Workout notes: {}", config.vault.workouts_dir().display());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Validate, Default, PartialEq)]
pub struct Config {
    /// Vault location and note layout
    #[serde(default)]
    #[validate(nested)]
    pub vault: VaultConfig,

    /// Garmin Connect API endpoint and fetch tuning
    #[serde(default)]
    #[validate(nested)]
    pub connect: ConnectConfig,

    /// Sync watermark persistence
    #[serde(default)]
    pub state: StateConfig,
}

/// Obsidian vault location.
///
/// The engine only ever touches `dir/workouts_subdir`; the rest of the
/// vault is out of bounds.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct VaultConfig {
    /// Vault root (default: `~/Brain`)
    #[serde(default = "default_vault_dir")]
    pub dir: PathBuf,

    /// Folder under the vault root holding workout notes (default:
    /// `workouts`)
    #[serde(default = "default_workouts_subdir")]
    #[validate(length(min = 1))]
    pub workouts_subdir: String,
}

impl VaultConfig {
    /// Full path of the workout notes folder.
    pub fn workouts_dir(&self) -> PathBuf {
        self.dir.join(&self.workouts_subdir)
    }
}

fn default_vault_dir() -> PathBuf {
    home_dir().join("Brain")
}

fn default_workouts_subdir() -> String {
    "workouts".to_string()
}

impl Default for VaultConfig {
    fn default() -> Self {
        Self {
            dir: default_vault_dir(),
            workouts_subdir: default_workouts_subdir(),
        }
    }
}

/// Garmin Connect endpoint and fetch tuning.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct ConnectConfig {
    /// API base URL (default: `https://connectapi.garmin.com`)
    #[serde(default = "default_base_url")]
    #[validate(custom(function = "validate_base_url"))]
    pub base_url: String,

    /// Activities requested per search page. The service caps this at 200.
    #[serde(default = "default_page_size")]
    #[validate(range(min = 1, max = 200))]
    pub page_size: usize,

    /// Per-request timeout in seconds (default: 30)
    #[serde(default = "default_timeout_seconds")]
    #[validate(range(min = 1, max = 300))]
    pub timeout_seconds: u64,

    /// Directory caching the OAuth session between runs (default:
    /// `~/.fitsync`)
    #[serde(default = "default_session_dir")]
    pub session_dir: PathBuf,
}

fn default_base_url() -> String {
    "https://connectapi.garmin.com".to_string()
}

fn default_page_size() -> usize {
    100
}

fn default_timeout_seconds() -> u64 {
    30
}

fn default_session_dir() -> PathBuf {
    home_dir().join(".fitsync")
}

fn validate_base_url(value: &str) -> Result<(), validator::ValidationError> {
    if value.starts_with("http://") || value.starts_with("https://") {
        Ok(())
    } else {
        Err(validator::ValidationError::new("base_url must be http(s)"))
    }
}

impl Default for ConnectConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            page_size: default_page_size(),
            timeout_seconds: default_timeout_seconds(),
            session_dir: default_session_dir(),
        }
    }
}

/// Where the watermark state file lives.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StateConfig {
    /// Watermark file path (default: `~/.fitsync/sync_state.json`)
    #[serde(default = "default_state_file")]
    pub file: PathBuf,
}

fn default_state_file() -> PathBuf {
    home_dir().join(".fitsync").join("sync_state.json")
}

impl Default for StateConfig {
    fn default() -> Self {
        Self {
            file: default_state_file(),
        }
    }
}

fn home_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("."))
}
