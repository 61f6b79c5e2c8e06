//! Error types for docauth.
//!
//! Credential checking itself never fails; these cover configuration,
//! the form's length gate, and terminal I/O around it.

use std::path::PathBuf;

use thiserror::Error;

use crate::core::domain::Outcome;

/// Top-level error
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A login attempt completed but was not successful
    #[error("{0}")]
    Rejected(Outcome),

    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Problems loading `docauth.toml`
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read config: {0}")]
    ReadFile(std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(toml::de::Error),

    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("unsupported locale: {0} (expected en or ru)")]
    InvalidLocale(String),
}

/// Form input rejected by the length gate
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("identifier must be 6 to 20 characters, got {0}")]
    IdentifierLength(usize),

    #[error("password must be 6 to 20 characters, got {0}")]
    SecretLength(usize),

    #[error("{0} required in non-interactive mode")]
    MissingInput(&'static str),

    /// Localized field errors from a form that failed the gate
    #[error("{}", .0.join("\n"))]
    Form(Vec<&'static str>),
}

pub type Result<T> = std::result::Result<T, Error>;
