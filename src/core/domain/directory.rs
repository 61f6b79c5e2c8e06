//! Account directory.
//!
//! The ordered, read-only list of known credentials that login attempts
//! are checked against. Order matters: lookups return the first match.

use serde::{Deserialize, Serialize};

use super::Credential;

/// Ordered sequence of credentials, fixed once built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Directory {
    accounts: Vec<Credential>,
}

impl Directory {
    /// Build a directory from credentials, preserving their order
    pub fn new(accounts: Vec<Credential>) -> Self {
        Self { accounts }
    }

    /// Build a directory from `(identifier, secret)` pairs
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, S)>,
        S: Into<String>,
    {
        Self {
            accounts: pairs
                .into_iter()
                .map(|(id, secret)| Credential::new(id, secret))
                .collect(),
        }
    }

    /// Built-in accounts used when no directory file is configured.
    pub fn demo() -> Self {
        Self::from_pairs([
            ("4510123456", "qwerty123"),
            ("4511654321", "betabank2023"),
            ("+79161234567", "password1"),
            ("89035550011", "secret-phone"),
        ])
    }

    /// First credential registered under `identifier`, if any.
    ///
    /// Exact, case-sensitive comparison. No trimming.
    pub fn find(&self, identifier: &str) -> Option<&Credential> {
        self.accounts.iter().find(|c| c.identifier() == identifier)
    }

    /// Identifiers in directory order (duplicates included)
    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.accounts.iter().map(Credential::identifier)
    }

    /// Identifiers that appear more than once, each reported once.
    pub fn duplicates(&self) -> Vec<&str> {
        let mut seen = std::collections::HashSet::new();
        let mut dups = Vec::new();
        for id in self.identifiers() {
            if !seen.insert(id) && !dups.contains(&id) {
                dups.push(id);
            }
        }
        dups
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Credential> {
        self.accounts.iter()
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

impl<'a> IntoIterator for &'a Directory {
    type Item = &'a Credential;
    type IntoIter = std::slice::Iter<'a, Credential>;

    fn into_iter(self) -> Self::IntoIter {
        self.accounts.iter()
    }
}
