use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

mod commands;
mod output;

use commands::{Cli, Commands};

/// Logs go to stderr so `--json` report output stays parseable. With
/// `RUST_LOG` unset only warnings show; the per-activity info lines are
/// opt-in.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Commands::Sync(args) => commands::sync::run(args).await,
        Commands::Status(args) => commands::status::run(args),
        Commands::Login(args) => commands::login::run(args).await,
        Commands::Completion(args) => commands::completion::run(args),
    }
}
