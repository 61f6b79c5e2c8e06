//! Credential checking.
//!
//! A login attempt resolves to exactly one [`Outcome`]. There are no error
//! paths: empty or unknown input simply fails to match.

use tracing::debug;

use crate::core::domain::{Directory, Outcome};

/// Check a submitted identifier and secret against `directory`.
///
/// The first credential whose identifier equals `identifier` decides the
/// result; later entries with the same identifier are never consulted.
/// Both comparisons are exact (case-sensitive, untrimmed).
///
/// # Arguments
///
/// * `identifier` - Document or phone number as typed
/// * `secret` - Password as typed
/// * `directory` - Accounts to check against
pub fn authenticate(identifier: &str, secret: &str, directory: &Directory) -> Outcome {
    let outcome = match directory.find(identifier) {
        None => Outcome::IdentifierNotFound,
        Some(cred) if cred.secret() == secret => Outcome::Success,
        Some(_) => Outcome::WrongSecret,
    };

    debug!(identifier, ?outcome, "authentication attempt");
    outcome
}
