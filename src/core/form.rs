//! Login form state.
//!
//! Holds what the user has typed, the selected identifier mode, and
//! whether the password is shown. Submission is gated on the field length
//! rule; only a form that passes it reaches [`authenticate`].

use zeroize::Zeroizing;

use crate::core::auth::authenticate;
use crate::core::constants::{INPUT_LENGTH, MASK_CHAR};
use crate::core::domain::{Directory, IdentifierMode, Outcome};
use crate::core::messages::Labels;
use crate::core::validation::{char_count, is_valid_length};

#[derive(Default)]
pub struct LoginForm {
    mode: IdentifierMode,
    identifier: String,
    secret: Zeroizing<String>,
    secret_visible: bool,
}

impl std::fmt::Debug for LoginForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginForm")
            .field("mode", &self.mode)
            .field("identifier", &self.identifier)
            .field("secret", &"<redacted>")
            .field("secret_visible", &self.secret_visible)
            .finish()
    }
}

impl LoginForm {
    pub fn new(mode: IdentifierMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn mode(&self) -> IdentifierMode {
        self.mode
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn is_secret_visible(&self) -> bool {
        self.secret_visible
    }

    /// Switch between phone and document entry.
    ///
    /// Only the field label changes; typed input is kept.
    pub fn set_mode(&mut self, mode: IdentifierMode) {
        self.mode = mode;
    }

    pub fn set_identifier(&mut self, identifier: impl Into<String>) {
        self.identifier = identifier.into();
    }

    pub fn set_secret(&mut self, secret: impl Into<String>) {
        self.secret = Zeroizing::new(secret.into());
    }

    /// Flip password visibility, returning the new state
    pub fn toggle_secret_visibility(&mut self) -> bool {
        self.secret_visible = !self.secret_visible;
        self.secret_visible
    }

    /// Password as it should appear on screen
    pub fn displayed_secret(&self) -> String {
        if self.secret_visible {
            self.secret.as_str().to_string()
        } else {
            MASK_CHAR.to_string().repeat(char_count(&self.secret))
        }
    }

    pub fn is_identifier_valid(&self) -> bool {
        is_valid_length(&self.identifier, &INPUT_LENGTH)
    }

    pub fn is_secret_valid(&self) -> bool {
        is_valid_length(&self.secret, &INPUT_LENGTH)
    }

    /// Whether the submit button is enabled
    pub fn can_submit(&self) -> bool {
        self.is_identifier_valid() && self.is_secret_valid()
    }

    /// Error lines shown under the fields, one per failing field.
    pub fn field_errors(&self, labels: &Labels) -> Vec<&'static str> {
        let mut errors = Vec::new();
        if !self.is_identifier_valid() {
            errors.push(labels.identifier_error);
        }
        if !self.is_secret_valid() {
            errors.push(labels.password_error);
        }
        errors
    }

    /// Run the attempt if the length gate allows it.
    ///
    /// Returns `None` without consulting the directory when either field
    /// is out of range.
    pub fn submit(&self, directory: &Directory) -> Option<Outcome> {
        if !self.can_submit() {
            return None;
        }
        Some(authenticate(&self.identifier, &self.secret, directory))
    }
}
