//! docauth - terminal login form for the Beta-Bank prototype.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use docauth::cli::output;
use docauth::cli::{execute, Cli};
use docauth::core::constants::LOG_ENV;
use docauth::error::{ConfigError, Error};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("docauth=debug")
        } else {
            EnvFilter::new("docauth=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .init();

    if let Err(e) = execute(cli) {
        // Rejected attempts have already been reported in the user's locale
        if !matches!(e, Error::Rejected(_)) {
            output::error(&e.to_string());

            let suggestion = match &e {
                Error::Config(ConfigError::NotFound(_)) => {
                    Some("drop --directory (or DOCAUTH_DIRECTORY) to use the built-in accounts")
                }
                Error::Config(ConfigError::Parse(_)) => {
                    Some("expected a [docauth] table and [[accounts]] entries with identifier and secret")
                }
                _ => None,
            };
            if let Some(hint) = suggestion {
                output::hint(hint);
            }
        }
        std::process::exit(1);
    }
}
