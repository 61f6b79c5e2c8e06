//! Test support utilities for docauth integration tests.
//!
//! Provides reusable test environment setup and helper commands.

#![allow(dead_code)]

pub mod assertions;
pub mod commands;
pub mod fixtures;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use std::path::PathBuf;
use tempfile::TempDir;

/// Test environment with isolated temp directories.
///
/// Each test gets its own working dir and home dir, so neither a
/// `docauth.toml` in the repo nor one under the real user config dir
/// leaks in. Child processes use `.current_dir()`; no process-global
/// state is touched.
pub struct Test {
    /// Working directory of the child process
    pub dir: TempDir,
    /// Temporary home directory
    pub home: TempDir,
}

impl Test {
    /// Create an environment with no directory file (built-in accounts).
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        let home = TempDir::new().expect("failed to create temp home");

        Self { dir, home }
    }

    /// Create an environment with `docauth.toml` holding `contents`.
    pub fn with_config(contents: &str) -> Self {
        let t = Self::new();
        std::fs::write(t.config_path(), contents).expect("failed to write docauth.toml");
        t
    }

    /// Create an environment with the standard fixture accounts.
    pub fn with_accounts() -> Self {
        Self::with_config(STANDARD_CONFIG)
    }

    /// Path of `docauth.toml` in the working directory.
    pub fn config_path(&self) -> PathBuf {
        self.dir.path().join("docauth.toml")
    }
}
