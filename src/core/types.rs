//! Type aliases for domain concepts.
//!
//! Provides semantic type aliases to make function signatures more descriptive.

/// A login identifier: a document (passport) number or a phone number.
///
/// Opaque and case-sensitive. Compared byte for byte.
pub type Identifier = String;

/// A plaintext password as stored in the account directory.
pub type Secret = String;
