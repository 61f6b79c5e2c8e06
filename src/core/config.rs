//! Configuration file management.
//!
//! Handles reading and validating `docauth.toml`, which supplies the
//! account directory and an optional display locale. The file is read once
//! at startup and never written back.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::core::constants;
use crate::core::domain::{Credential, Directory};
use crate::core::messages::Locale;
use crate::core::validation::is_valid_length;
use crate::error::{ConfigError, Result};

/// Contents of `docauth.toml`
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Metadata about the file
    pub docauth: Meta,
    /// Registered accounts, in lookup order
    #[serde(default)]
    pub accounts: Vec<Credential>,
}

/// Metadata section of the configuration
#[derive(Debug, Deserialize)]
pub struct Meta {
    /// Configuration version
    pub version: String,
    /// Display language; English when absent
    #[serde(default)]
    pub locale: Option<Locale>,
}

impl Config {
    /// Parse a configuration from TOML text
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` if the TOML is malformed, or a
    /// validation error from [`Config::validate`].
    pub fn parse(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from `path`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if the file doesn't exist,
    /// `ConfigError::ReadFile` if it can't be read, or a parse/validation error.
    pub fn load(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading config");

        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()).into());
        }
        let contents = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let config = Self::parse(&contents)?;

        debug!(accounts = config.accounts.len(), "config loaded");
        Ok(config)
    }

    /// Account directory described by this file
    pub fn directory(&self) -> Directory {
        Directory::new(self.accounts.clone())
    }

    /// Validate the configuration contents
    ///
    /// Duplicate identifiers and secrets the form could never submit are
    /// allowed but logged.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingField` if `version` is empty.
    pub fn validate(&self) -> Result<()> {
        if self.docauth.version.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "version" }.into());
        }

        let directory = self.directory();
        for id in directory.duplicates() {
            warn!(identifier = id, "duplicate identifier, only the first entry is used");
        }

        for cred in &self.accounts {
            if !is_valid_length(cred.secret(), &constants::INPUT_LENGTH) {
                warn!(
                    identifier = cred.identifier(),
                    "secret length outside the form limits, account cannot log in through the form"
                );
            }
        }

        Ok(())
    }
}

/// Locate the configuration file.
///
/// An explicit path always wins. Otherwise `docauth.toml` in `cwd`, then in
/// the user config directory. `None` means no file is present and the
/// built-in directory applies.
pub fn find_config(explicit: Option<&Path>, cwd: &Path) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    let local = cwd.join(constants::CONFIG_FILE);
    if local.exists() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|d| d.join(constants::CONFIG_DIR).join(constants::CONFIG_FILE))
        .filter(|p| p.exists())
}

/// Everything a login attempt needs, resolved at startup.
#[derive(Debug)]
pub struct Settings {
    pub directory: Directory,
    pub locale: Locale,
    /// File the directory came from; `None` for the built-in accounts
    pub source: Option<PathBuf>,
}

impl Settings {
    /// Resolve directory and locale.
    ///
    /// `locale` (from the command line or environment) overrides the file.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit path is missing or any found file
    /// fails to load.
    pub fn load(explicit: Option<&Path>, locale: Option<Locale>, cwd: &Path) -> Result<Self> {
        match find_config(explicit, cwd) {
            Some(path) => {
                let config = Config::load(&path)?;
                Ok(Self {
                    directory: config.directory(),
                    locale: locale.or(config.docauth.locale).unwrap_or_default(),
                    source: Some(path),
                })
            }
            None => {
                debug!("no config file found, using built-in accounts");
                Ok(Self {
                    directory: Directory::demo(),
                    locale: locale.unwrap_or_default(),
                    source: None,
                })
            }
        }
    }
}
