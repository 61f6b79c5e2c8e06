//! Credential type.
//!
//! A single identifier/secret pair from the account directory.

use serde::{Deserialize, Serialize};

use crate::core::types::{Identifier, Secret};

/// One registered account.
///
/// The secret is plaintext; it is compared verbatim by
/// [`authenticate`](crate::core::auth::authenticate).
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    identifier: Identifier,
    secret: Secret,
}

impl Credential {
    /// Create a credential from an identifier and its secret
    pub fn new(identifier: impl Into<Identifier>, secret: impl Into<Secret>) -> Self {
        Self {
            identifier: identifier.into(),
            secret: secret.into(),
        }
    }

    /// Document or phone number
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Stored plaintext secret
    pub fn secret(&self) -> &str {
        &self.secret
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("identifier", &self.identifier)
            .field("secret", &"<redacted>")
            .finish()
    }
}

impl std::fmt::Display for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.identifier)
    }
}
