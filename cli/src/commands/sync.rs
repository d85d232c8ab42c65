//! Sync command - one incremental pass against the vault
//!
//! Fetches activities newer than the stored watermark, writes a note for
//! each one the vault doesn't already cover, and advances the watermark.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveDateTime};
use clap::Args;
use colored::{Color, Colorize};
use config::Config;
use connect::{ConnectClient, ConnectError, Session, SessionStore};
use engine::{SyncEngine, SyncEngineConfig, SyncReport};
use taxonomy::SportCatalog;

use crate::output;

#[derive(Args)]
pub struct SyncArgs {
    /// Config file (TOML or YAML)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Vault root, overriding the configured one
    #[arg(long, value_name = "PATH")]
    pub vault: Option<PathBuf>,

    /// Backfill: fetch from this date (YYYY-MM-DD) instead of the stored
    /// watermark. The watermark itself never moves backwards.
    #[arg(long, value_name = "DATE")]
    pub since: Option<String>,

    /// Output the run report as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: SyncArgs) -> Result<()> {
    let config = super::resolve_config(args.config.as_deref(), args.vault.as_deref())?;

    let since_override = match &args.since {
        Some(raw) => Some(parse_since(raw)?),
        None => None,
    };

    let session = obtain_session(&config).await?;
    let feed = ConnectClient::new(
        &config.connect.base_url,
        session,
        config.connect.page_size,
        config.connect.timeout_seconds,
    )?;

    let engine = SyncEngine::new(
        SyncEngineConfig {
            workouts_dir: config.vault.workouts_dir(),
            state_file: config.state.file.clone(),
            since_override,
        },
        Arc::new(feed),
        SportCatalog::builtin(),
    );

    let report = engine.run().await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_report(&report);
    Ok(())
}

/// Resume the cached session, or walk the user through a fresh sign-in when
/// there is no usable one.
async fn obtain_session(config: &Config) -> Result<Session> {
    let store = SessionStore::new(&config.connect.session_dir);

    match store.resume() {
        Ok(session) => Ok(session),
        Err(ConnectError::InvalidSession(reason)) => {
            output::info(&format!("Sign-in required: {reason}"));
            let (email, password) = super::login::prompt_credentials(None)?;
            let session = connect::login(&email, &password, &config.connect.base_url).await?;
            store.save(&session)?;
            output::success("Session saved");
            Ok(session)
        }
        Err(err) => Err(err.into()),
    }
}

fn parse_since(raw: &str) -> Result<NaiveDateTime> {
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .with_context(|| format!("Invalid --since date: {raw} (expected YYYY-MM-DD)"))?;
    date.and_hms_opt(0, 0, 0)
        .with_context(|| format!("Invalid --since date: {raw}"))
}

fn print_report(report: &SyncReport) {
    output::header("Sync Report");
    println!();

    output::stat("Fetched", report.fetched, Color::Cyan);
    output::stat("Created", report.created, Color::Green);
    output::stat("Skipped", report.total_skipped(), Color::Yellow);
    if report.skipped_unparseable > 0 {
        println!(
            "  {} {} unparseable records dropped",
            "!".yellow(),
            report.skipped_unparseable
        );
    }
    println!();

    if !report.created_files.is_empty() {
        output::subheader("Created notes");
        for file in &report.created_files {
            output::created_file(file);
        }
        println!();
    }

    if !report.unmapped_type_keys.is_empty() {
        let keys = report
            .unmapped_type_keys
            .iter()
            .cloned()
            .collect::<Vec<_>>()
            .join(", ");
        output::warn(&format!("Unmapped activity types: {keys}"));
        output::hint("These were filed under Strength; extend the catalog if that is wrong");
    }
}
