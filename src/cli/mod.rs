//! Command-line interface.

pub mod accounts;
pub mod check;
pub mod completions;
pub mod login;
pub mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::core::config::Settings;
use crate::core::domain::IdentifierMode;
use crate::core::messages::Locale;
use crate::error::Result;

/// docauth - sign in to Beta-Bank with a document or phone number.
#[derive(Parser)]
#[command(
    name = "docauth",
    about = "Sign in to Beta-Bank with a document or phone number",
    version
)]
pub struct Cli {
    /// Show debug output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Account directory file (defaults to ./docauth.toml, then built-in accounts)
    #[arg(long, global = true, env = "DOCAUTH_DIRECTORY")]
    pub directory: Option<PathBuf>,

    /// Display language
    #[arg(long, global = true, value_enum, ignore_case = true, env = "DOCAUTH_LOCALE")]
    pub locale: Option<Locale>,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Fill in the login form
    Login {
        /// Identifier type (asked interactively when omitted)
        #[arg(short, long, value_enum)]
        mode: Option<IdentifierMode>,
        /// Identifier to log in with (prompted when omitted)
        #[arg(short, long)]
        identifier: Option<String>,
        /// Show the password while typing
        #[arg(long)]
        show_password: bool,
    },

    /// Check one identifier/password pair without the form's length rule
    Check {
        /// Document or phone number
        identifier: String,
        /// Password (read from stdin when omitted)
        secret: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List registered identifiers
    Accounts {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Execute a command.
pub fn execute(cli: Cli) -> Result<()> {
    let Cli {
        directory,
        locale,
        command,
        ..
    } = cli;

    let settings = || -> Result<Settings> {
        let cwd = std::env::current_dir()?;
        Settings::load(directory.as_deref(), locale, &cwd)
    };

    match command {
        Command::Login {
            mode,
            identifier,
            show_password,
        } => login::execute(&settings()?, mode, identifier, show_password),
        Command::Check {
            identifier,
            secret,
            json,
        } => check::execute(&settings()?, &identifier, secret, json),
        Command::Accounts { json } => accounts::execute(&settings()?, json),
        Command::Completions { shell } => completions::execute(shell),
    }
}
