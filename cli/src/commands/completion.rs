use std::io;

use anyhow::Result;
use clap::{Args, CommandFactory, ValueEnum};
use clap_complete::{Shell, generate};

use super::Cli;

#[derive(Args)]
pub struct CompletionArgs {
    #[arg(help = "Shell to generate completions for")]
    pub shell: ShellChoice,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ShellChoice {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

impl ShellChoice {
    fn as_shell(self) -> Shell {
        match self {
            Self::Bash => Shell::Bash,
            Self::Zsh => Shell::Zsh,
            Self::Fish => Shell::Fish,
            Self::PowerShell => Shell::PowerShell,
        }
    }
}

/// Write a completion script for the chosen shell to stdout.
pub fn run(args: CompletionArgs) -> Result<()> {
    generate(
        args.shell.as_shell(),
        &mut Cli::command(),
        "fitsync",
        &mut io::stdout(),
    );
    Ok(())
}
