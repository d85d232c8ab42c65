pub mod completion;
pub mod login;
pub mod status;
pub mod sync;

use std::path::Path;

use anyhow::Result;
use clap::{Parser, Subcommand};
use config::Config;

#[derive(Parser)]
#[command(
    name = "fitsync",
    author,
    version,
    about = "Sync Garmin Connect activities into Obsidian workout notes",
    long_about = "Pulls activities from Garmin Connect and materializes one Markdown note per \
                  workout in the vault.\n\nRuns are incremental and idempotent: a watermark \
                  remembers the newest captured activity, and notes are never modified or \
                  deleted once written."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Fetch new activities and write workout notes")]
    Sync(sync::SyncArgs),

    #[command(about = "Show watermark, vault counts, and session state")]
    Status(status::StatusArgs),

    #[command(about = "Authenticate against Garmin Connect and cache the session")]
    Login(login::LoginArgs),

    #[command(about = "Generate shell completions")]
    Completion(completion::CompletionArgs),
}

/// Resolve the effective configuration for one command invocation.
///
/// `--vault` is the only flag that overrides a config field; it is folded
/// into a CLI-layer `Config` so the standard precedence applies.
pub(crate) fn resolve_config(config_file: Option<&Path>, vault: Option<&Path>) -> Result<Config> {
    let cli_overrides = vault.map(|dir| {
        let mut overrides = Config::default();
        overrides.vault.dir = dir.to_path_buf();
        overrides
    });

    Ok(config::resolve(config_file, cli_overrides)?)
}
