//! Authentication outcome.

use serde::Serialize;

/// Result of one login attempt.
///
/// Carries no display text of its own; see
/// [`Labels::outcome`](crate::core::messages::Labels::outcome) for the
/// localized message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Identifier found and secret matched
    Success,
    /// Identifier found, secret differs
    WrongSecret,
    /// No account with this identifier
    IdentifierNotFound,
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let msg = match self {
            Outcome::Success => "Successful authorization",
            Outcome::WrongSecret => "Wrong password",
            Outcome::IdentifierNotFound => "This identifier is not registered in the system",
        };
        f.write_str(msg)
    }
}
