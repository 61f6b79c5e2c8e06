//! Constants used throughout docauth.
//!
//! Centralizes magic strings and configuration values.

use std::ops::RangeInclusive;

/// Directory file name looked up in the working directory.
pub const CONFIG_FILE: &str = "docauth.toml";

/// Subdirectory of the user config dir holding a fallback `docauth.toml`.
pub const CONFIG_DIR: &str = "docauth";

/// Environment variable controlling the tracing filter.
pub const LOG_ENV: &str = "DOCAUTH_LOG";

/// Accepted character count for both form fields.
pub const INPUT_LENGTH: RangeInclusive<usize> = 6..=20;

/// Character used to mask a hidden password.
pub const MASK_CHAR: char = '*';
