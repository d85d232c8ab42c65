use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use connect::SessionStore;
use engine::StateStore;
use vault::VaultIndex;

use crate::output;

#[derive(Args)]
pub struct StatusArgs {
    /// Config file (TOML or YAML)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Vault root, overriding the configured one
    #[arg(long, value_name = "PATH")]
    pub vault: Option<PathBuf>,

    #[arg(long, help = "Output as JSON")]
    pub json: bool,
}

/// Read-only snapshot: watermark, vault note counts, session state.
pub fn run(args: StatusArgs) -> Result<()> {
    let config = super::resolve_config(args.config.as_deref(), args.vault.as_deref())?;

    let workouts_dir = config.vault.workouts_dir();
    let state = StateStore::new(&config.state.file).load();
    let index = VaultIndex::scan(&workouts_dir)?;
    let session = SessionStore::new(&config.connect.session_dir).resume();

    if args.json {
        let output = serde_json::json!({
            "last_sync": state.last_sync.format("%Y-%m-%dT%H:%M:%S").to_string(),
            "state_file": config.state.file.display().to_string(),
            "vault": {
                "workouts_dir": workouts_dir.display().to_string(),
                "synced_notes": index.id_count(),
                "external_notes": index.external_total(),
            },
            "session_valid": session.is_ok(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{}", "Fitsync Status".bold().underline());
    println!();

    println!("{}", "Watermark:".bold());
    println!(
        "  last_sync:      {}",
        state.last_sync.format("%Y-%m-%d %H:%M:%S").to_string().cyan()
    );
    println!(
        "  state_file:     {}",
        config.state.file.display().to_string().dimmed()
    );
    println!();

    println!("{}", "Vault:".bold());
    println!(
        "  workouts_dir:   {}",
        workouts_dir.display().to_string().dimmed()
    );
    println!(
        "  synced notes:   {}",
        index.id_count().to_string().cyan()
    );
    println!(
        "  external notes: {}",
        index.external_total().to_string().cyan()
    );
    println!();

    println!("{}", "Session:".bold());
    match session {
        Ok(_) => println!("  {} usable session on disk", "✓".green()),
        Err(err) => {
            println!("  {} {}", "✗".red(), err);
            output::hint("Run `fitsync login` to authenticate");
        }
    }

    Ok(())
}
