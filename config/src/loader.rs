//! # Environment Variable Loader
//!
//! Loads configuration from `FITSYNC_*` environment variables following
//! 12-factor app principles. Unset or unparseable variables fall back to
//! the built-in defaults; file values are layered underneath by
//! [`crate::precedence::merge_configs`].
//!
//! # Variables
//! - `FITSYNC_VAULT_DIR`: Vault root (default: `~/Brain`)
//! - `FITSYNC_WORKOUTS_SUBDIR`: Workout notes folder (default: `workouts`)
//! - `FITSYNC_BASE_URL`: Connect API base URL
//! - `FITSYNC_PAGE_SIZE`: Activities per search page (default: 100)
//! - `FITSYNC_TIMEOUT_SECONDS`: Per-request timeout (default: 30)
//! - `FITSYNC_SESSION_DIR`: OAuth session cache directory (default:
//!   `~/.fitsync`)
//! - `FITSYNC_STATE_FILE`: Watermark file (default:
//!   `~/.fitsync/sync_state.json`)

use crate::config::{Config, ConnectConfig, StateConfig, VaultConfig};
use std::env;
use std::path::PathBuf;

/// Load configuration from environment variables, defaulting every field
/// that is unset.
pub fn load_from_env() -> Config {
    Config {
        vault: load_vault_from_env(),
        connect: load_connect_from_env(),
        state: load_state_from_env(),
    }
}

fn load_vault_from_env() -> VaultConfig {
    let defaults = VaultConfig::default();
    VaultConfig {
        dir: env::var("FITSYNC_VAULT_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.dir),
        workouts_subdir: env::var("FITSYNC_WORKOUTS_SUBDIR").unwrap_or(defaults.workouts_subdir),
    }
}

fn load_connect_from_env() -> ConnectConfig {
    let defaults = ConnectConfig::default();
    ConnectConfig {
        base_url: env::var("FITSYNC_BASE_URL").unwrap_or(defaults.base_url),
        page_size: parse_env("FITSYNC_PAGE_SIZE").unwrap_or(defaults.page_size),
        timeout_seconds: parse_env("FITSYNC_TIMEOUT_SECONDS").unwrap_or(defaults.timeout_seconds),
        session_dir: env::var("FITSYNC_SESSION_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.session_dir),
    }
}

fn load_state_from_env() -> StateConfig {
    let defaults = StateConfig::default();
    StateConfig {
        file: env::var("FITSYNC_STATE_FILE")
            .map(PathBuf::from)
            .unwrap_or(defaults.file),
    }
}

fn parse_env<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|s| s.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_fitsync_vars() {
        for key in [
            "FITSYNC_VAULT_DIR",
            "FITSYNC_WORKOUTS_SUBDIR",
            "FITSYNC_BASE_URL",
            "FITSYNC_PAGE_SIZE",
            "FITSYNC_TIMEOUT_SECONDS",
            "FITSYNC_SESSION_DIR",
            "FITSYNC_STATE_FILE",
        ] {
            unsafe {
                env::remove_var(key);
            }
        }
    }

    #[test]
    #[serial]
    fn test_load_from_env_defaults() {
        clear_fitsync_vars();

        let config = load_from_env();
        assert_eq!(config, Config::default());
    }

    #[test]
    #[serial]
    fn test_load_from_env_overrides() {
        clear_fitsync_vars();
        unsafe {
            env::set_var("FITSYNC_VAULT_DIR", "/srv/notes");
            env::set_var("FITSYNC_PAGE_SIZE", "42");
            env::set_var("FITSYNC_BASE_URL", "http://localhost:9000");
        }

        let config = load_from_env();
        assert_eq!(config.vault.dir, PathBuf::from("/srv/notes"));
        assert_eq!(config.connect.page_size, 42);
        assert_eq!(config.connect.base_url, "http://localhost:9000");
        assert_eq!(config.connect.timeout_seconds, 30);

        clear_fitsync_vars();
    }

    #[test]
    #[serial]
    fn test_unparseable_numeric_falls_back() {
        clear_fitsync_vars();
        unsafe {
            env::set_var("FITSYNC_PAGE_SIZE", "lots");
        }

        let config = load_from_env();
        assert_eq!(config.connect.page_size, 100);

        clear_fitsync_vars();
    }
}
