//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create a docauth command with correct environment variables.
    ///
    /// Returns a Command configured with:
    /// - HOME set to the temporary home directory
    /// - Current directory set to the test working directory
    /// - Colors and inherited docauth settings cleared
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("docauth").expect("failed to find docauth binary");
        cmd.env("HOME", self.home.path());
        cmd.env("XDG_CONFIG_HOME", self.home.path().join(".config"));
        // Windows uses USERPROFILE instead of HOME for home directory
        cmd.env("USERPROFILE", self.home.path());
        cmd.env("NO_COLOR", "1");
        cmd.env_remove("DOCAUTH_DIRECTORY");
        cmd.env_remove("DOCAUTH_LOCALE");
        cmd.env_remove("DOCAUTH_LOG");
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Shortcut for `docauth login`, feeding identifier and password lines.
    pub fn login(&self, identifier: &str, secret: &str) -> Output {
        self.cmd()
            .args(["login", "--mode", "document"])
            .write_stdin(format!("{}\n{}\n", identifier, secret))
            .output()
            .expect("failed to run docauth login")
    }

    /// `docauth login` with extra arguments and raw stdin.
    pub fn login_with(&self, args: &[&str], stdin: &str) -> Output {
        self.cmd()
            .arg("login")
            .args(args)
            .write_stdin(stdin.to_string())
            .output()
            .expect("failed to run docauth login")
    }

    /// Shortcut for `docauth check <identifier> <secret>`.
    pub fn check(&self, identifier: &str, secret: &str) -> Output {
        self.cmd()
            .args(["check", identifier, secret])
            .output()
            .expect("failed to run docauth check")
    }

    /// Shortcut for `docauth check <identifier> <secret> --json`.
    pub fn check_json(&self, identifier: &str, secret: &str) -> Output {
        self.cmd()
            .args(["check", identifier, secret, "--json"])
            .output()
            .expect("failed to run docauth check --json")
    }

    /// Shortcut for `docauth accounts`.
    pub fn accounts(&self) -> Output {
        self.cmd()
            .arg("accounts")
            .output()
            .expect("failed to run docauth accounts")
    }

    /// Shortcut for `docauth accounts --json`.
    pub fn accounts_json(&self) -> Output {
        self.cmd()
            .args(["accounts", "--json"])
            .output()
            .expect("failed to run docauth accounts --json")
    }
}
