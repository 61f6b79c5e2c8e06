//! Identifier mode.
//!
//! The login screen lets the user say whether the identifier is a phone
//! number or a document number. The choice only changes the field label;
//! both are looked up the same way.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdentifierMode {
    Phone,
    #[default]
    Document,
}

impl IdentifierMode {
    /// Modes in the order they are offered to the user.
    pub fn all() -> [IdentifierMode; 2] {
        [IdentifierMode::Phone, IdentifierMode::Document]
    }

    /// Position of this mode in [`IdentifierMode::all`].
    pub fn index(&self) -> usize {
        match self {
            IdentifierMode::Phone => 0,
            IdentifierMode::Document => 1,
        }
    }

    /// Mode at `index`, if in range.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::all().get(index).copied()
    }
}

impl std::fmt::Display for IdentifierMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IdentifierMode::Phone => write!(f, "phone"),
            IdentifierMode::Document => write!(f, "document"),
        }
    }
}
