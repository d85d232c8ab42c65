use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use connect::SessionStore;
use dialoguer::{Input, Password, theme::ColorfulTheme};

use crate::output;

#[derive(Args)]
pub struct LoginArgs {
    /// Config file (TOML or YAML)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Garmin Connect account email (prompted when omitted)
    #[arg(long)]
    pub email: Option<String>,
}

/// Explicit (re-)authentication: exchange credentials for a session and
/// cache it for later runs.
pub async fn run(args: LoginArgs) -> Result<()> {
    let config = super::resolve_config(args.config.as_deref(), None)?;

    let (email, password) = prompt_credentials(args.email.as_deref())?;
    let session = connect::login(&email, &password, &config.connect.base_url).await?;

    let store = SessionStore::new(&config.connect.session_dir);
    store.save(&session)?;

    output::success(&format!(
        "Signed in as {email}; session cached in {}",
        config.connect.session_dir.display()
    ));
    Ok(())
}

/// Prompt for whichever credentials were not supplied. The password is
/// never echoed and never written anywhere; only the session token is
/// persisted.
pub(crate) fn prompt_credentials(email: Option<&str>) -> Result<(String, String)> {
    let theme = ColorfulTheme::default();

    let email = match email {
        Some(value) => value.to_string(),
        None => Input::with_theme(&theme)
            .with_prompt("Garmin Connect email")
            .interact_text()?,
    };

    let password = Password::with_theme(&theme)
        .with_prompt("Password")
        .interact()?;

    Ok((email, password))
}
