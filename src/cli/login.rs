//! Login command.
//!
//! Walks through the login screen: pick phone or document mode, enter the
//! identifier and password, and submit. The form refuses to submit until
//! both fields hold 6 to 20 characters.

use std::io::{self, BufRead, IsTerminal};

use dialoguer::{Input, Password, Select};
use tracing::{debug, info};

use crate::cli::output;
use crate::core::config::Settings;
use crate::core::domain::{IdentifierMode, Outcome};
use crate::core::form::LoginForm;
use crate::core::messages::Labels;
use crate::core::validation::{validate_identifier, validate_secret};
use crate::error::{Error, Result, ValidationError};

/// Run the login form.
pub fn execute(
    settings: &Settings,
    mode: Option<IdentifierMode>,
    identifier: Option<String>,
    show_password: bool,
) -> Result<()> {
    let labels = settings.locale.labels();
    let interactive = io::stdin().is_terminal();
    debug!(interactive, locale = ?settings.locale, "starting login form");

    output::header(labels.welcome);
    output::blank();

    let mode = match mode {
        Some(m) => m,
        None if interactive => select_mode(labels)?,
        None => IdentifierMode::default(),
    };

    let mut form = LoginForm::new(mode);
    if show_password {
        form.toggle_secret_visibility();
    }

    if interactive {
        fill_interactive(&mut form, labels, identifier)?;
    } else {
        fill_from_stdin(&mut form, identifier)?;
    }

    output::kv(labels.identifier_placeholder(form.mode()), form.identifier());
    output::kv(labels.password, form.displayed_secret());
    output::button(labels.submit, form.can_submit());
    output::blank();

    let Some(outcome) = form.submit(&settings.directory) else {
        info!(mode = %form.mode(), "form rejected by length rule");
        return Err(ValidationError::Form(form.field_errors(labels)).into());
    };

    report(outcome, labels)
}

/// Print the outcome with the follow-up links the screen offers.
pub(crate) fn report(outcome: Outcome, labels: &Labels) -> Result<()> {
    let message = labels.outcome(outcome);
    match outcome {
        Outcome::Success => {
            output::success(message);
            return Ok(());
        }
        Outcome::WrongSecret => {
            output::error(message);
            output::hint(labels.forgot_password);
        }
        Outcome::IdentifierNotFound => {
            output::error(message);
            output::hint(&format!("{} {}", labels.no_account, labels.register));
        }
    }
    Err(Error::Rejected(outcome))
}

fn select_mode(labels: &Labels) -> Result<IdentifierMode> {
    let items: Vec<&str> = IdentifierMode::all()
        .iter()
        .map(|m| labels.mode(*m))
        .collect();

    let index = Select::new()
        .items(&items)
        .default(IdentifierMode::default().index())
        .interact()?;

    Ok(IdentifierMode::from_index(index).unwrap_or_default())
}

fn fill_interactive(
    form: &mut LoginForm,
    labels: &'static Labels,
    identifier: Option<String>,
) -> Result<()> {
    let identifier = match identifier {
        Some(id) => id,
        None => Input::<String>::new()
            .with_prompt(labels.identifier_placeholder(form.mode()))
            .validate_with(|input: &String| {
                validate_identifier(input).map_err(|_| labels.identifier_error)
            })
            .interact_text()?,
    };
    form.set_identifier(identifier);

    let secret = if form.is_secret_visible() {
        Input::<String>::new()
            .with_prompt(labels.password)
            .validate_with(|input: &String| {
                validate_secret(input).map_err(|_| labels.password_error)
            })
            .interact_text()?
    } else {
        Password::new()
            .with_prompt(labels.password)
            .validate_with(|input: &String| {
                validate_secret(input).map_err(|_| labels.password_error)
            })
            .interact()?
    };
    form.set_secret(secret);

    Ok(())
}

/// Piped input: identifier on the first line (unless given), password next.
fn fill_from_stdin(form: &mut LoginForm, identifier: Option<String>) -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let identifier = match identifier {
        Some(id) => id,
        None => lines
            .next()
            .transpose()?
            .ok_or(ValidationError::MissingInput("identifier"))?,
    };
    form.set_identifier(strip_line_ending(identifier));

    let secret = lines
        .next()
        .transpose()?
        .ok_or(ValidationError::MissingInput("password"))?;
    form.set_secret(strip_line_ending(secret));

    Ok(())
}

/// Drop a trailing carriage return left by CRLF input. Other whitespace is
/// part of the value.
pub(crate) fn strip_line_ending(mut line: String) -> String {
    if line.ends_with('\r') {
        line.pop();
    }
    line
}
