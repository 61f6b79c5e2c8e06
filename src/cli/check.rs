//! Check command.
//!
//! One authentication attempt without the form. The length rule is not
//! applied; the pair goes straight to the validator.

use std::io::{self, BufRead};

use tracing::info;

use crate::cli::login::{report, strip_line_ending};
use crate::cli::output;
use crate::core::auth::authenticate;
use crate::core::config::Settings;
use crate::error::{Error, Result, ValidationError};

/// Check an identifier/password pair.
pub fn execute(
    settings: &Settings,
    identifier: &str,
    secret: Option<String>,
    json: bool,
) -> Result<()> {
    info!("Checking credentials for {}", identifier);

    let secret = match secret {
        Some(s) => s,
        None => {
            // Read from stdin (piped input)
            let mut input = String::new();
            if io::stdin().lock().read_line(&mut input)? == 0 {
                return Err(ValidationError::MissingInput("password").into());
            }
            strip_line_ending(input.trim_end_matches('\n').to_string())
        }
    };

    let outcome = authenticate(identifier, &secret, &settings.directory);
    let labels = settings.locale.labels();

    if json {
        let result = serde_json::json!({
            "identifier": identifier,
            "outcome": outcome,
            "message": labels.outcome(outcome),
        });
        output::data(&serde_json::to_string_pretty(&result)?);
        return if outcome.is_success() {
            Ok(())
        } else {
            Err(Error::Rejected(outcome))
        };
    }

    report(outcome, labels)
}
