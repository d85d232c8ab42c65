//! # Configuration Precedence
//!
//! Merges configuration from multiple sources with precedence rules.
//!
//! # Precedence Order
//! 1. CLI arguments (highest priority)
//! 2. Environment variables
//! 3. Configuration file
//! 4. Default values (lowest priority)

use crate::config::{Config, ConnectConfig, StateConfig, VaultConfig};
use crate::file_loader::{ConfigFileError, load_from_file};
use crate::loader::load_from_env;
use std::path::Path;
use validator::Validate;

/// Load, merge, and validate configuration from every source.
///
/// `cli_overrides` carries only the fields the user set on the command line
/// (everything else at its default, so the merge leaves it alone).
pub fn resolve(file: Option<&Path>, cli_overrides: Option<Config>) -> Result<Config, ConfigFileError> {
    let file_config = match file {
        Some(path) => load_from_file(path)?,
        None => Config::default(),
    };

    let config = merge_configs(
        Config::default(),
        file_config,
        "file",
        load_from_env(),
        "env",
        cli_overrides,
        "cli",
    );
    config.validate()?;

    Ok(config)
}

/// Merge configuration sources following precedence rules: CLI arguments >
/// environment variables > config file > defaults.
///
/// A source's field is applied only when it differs from the built-in
/// default, so an untouched field never masks a lower-priority override.
pub fn merge_configs(
    defaults: Config,
    file_config: Config,
    file_source_name: &str,
    env_config: Config,
    env_source_name: &str,
    cli_config: Option<Config>,
    cli_source_name: &str,
) -> Config {
    let mut config = defaults;

    config = merge_with_logging(config, file_config, file_source_name);
    config = merge_with_logging(config, env_config, env_source_name);

    if let Some(cli) = cli_config {
        config = merge_with_logging(config, cli, cli_source_name);
    }

    config
}

fn merge_with_logging(mut base: Config, override_config: Config, source_name: &str) -> Config {
    let mut changes = Vec::new();

    merge_vault(&mut base.vault, &override_config.vault, &mut changes);
    merge_connect(&mut base.connect, &override_config.connect, &mut changes);
    merge_state(&mut base.state, &override_config.state, &mut changes);

    if !changes.is_empty() {
        tracing::info!("Configuration from {}: {:?}", source_name, changes);
    }

    base
}

fn merge_vault(base: &mut VaultConfig, override_config: &VaultConfig, changes: &mut Vec<String>) {
    let defaults = VaultConfig::default();

    if override_config.dir != defaults.dir && override_config.dir != base.dir {
        changes.push(format!("vault.dir = {}", override_config.dir.display()));
        base.dir.clone_from(&override_config.dir);
    }
    if override_config.workouts_subdir != defaults.workouts_subdir
        && override_config.workouts_subdir != base.workouts_subdir
    {
        changes.push(format!(
            "vault.workouts_subdir = {}",
            override_config.workouts_subdir
        ));
        base.workouts_subdir
            .clone_from(&override_config.workouts_subdir);
    }
}

fn merge_connect(
    base: &mut ConnectConfig,
    override_config: &ConnectConfig,
    changes: &mut Vec<String>,
) {
    let defaults = ConnectConfig::default();

    if override_config.base_url != defaults.base_url && override_config.base_url != base.base_url {
        changes.push(format!("connect.base_url = {}", override_config.base_url));
        base.base_url.clone_from(&override_config.base_url);
    }
    if override_config.page_size != defaults.page_size
        && override_config.page_size != base.page_size
    {
        changes.push(format!("connect.page_size = {}", override_config.page_size));
        base.page_size = override_config.page_size;
    }
    if override_config.timeout_seconds != defaults.timeout_seconds
        && override_config.timeout_seconds != base.timeout_seconds
    {
        changes.push(format!(
            "connect.timeout_seconds = {}",
            override_config.timeout_seconds
        ));
        base.timeout_seconds = override_config.timeout_seconds;
    }
    if override_config.session_dir != defaults.session_dir
        && override_config.session_dir != base.session_dir
    {
        changes.push(format!(
            "connect.session_dir = {}",
            override_config.session_dir.display()
        ));
        base.session_dir.clone_from(&override_config.session_dir);
    }
}

fn merge_state(base: &mut StateConfig, override_config: &StateConfig, changes: &mut Vec<String>) {
    let defaults = StateConfig::default();

    if override_config.file != defaults.file && override_config.file != base.file {
        changes.push(format!("state.file = {}", override_config.file.display()));
        base.file.clone_from(&override_config.file);
    }
}
