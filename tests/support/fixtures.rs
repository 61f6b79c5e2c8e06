//! Test fixtures and constants.

/// Document account in [`STANDARD_CONFIG`].
pub const DOC_ID: &str = "4510123456";
pub const DOC_SECRET: &str = "qwerty123";

/// Phone account in [`STANDARD_CONFIG`].
pub const PHONE_ID: &str = "+79161234567";
pub const PHONE_SECRET: &str = "password1";

/// Secret of the later duplicate of [`DOC_ID`]; never accepted.
pub const SHADOWED_SECRET: &str = "shadowed-pass";

/// Account whose secret is too short to pass the form's length rule.
pub const SHORT_ID: &str = "shortsecret";
pub const SHORT_SECRET: &str = "abc";

/// Identifier absent from every fixture.
pub const UNKNOWN_ID: &str = "0000000000";

/// Directory file used by most CLI tests.
pub const STANDARD_CONFIG: &str = r#"
[docauth]
version = "0.1.0"

[[accounts]]
identifier = "4510123456"
secret = "qwerty123"

[[accounts]]
identifier = "+79161234567"
secret = "password1"

[[accounts]]
identifier = "4510123456"
secret = "shadowed-pass"

[[accounts]]
identifier = "shortsecret"
secret = "abc"
"#;

/// Same accounts, Russian locale.
pub const RUSSIAN_CONFIG: &str = r#"
[docauth]
version = "0.1.0"
locale = "ru"

[[accounts]]
identifier = "4510123456"
secret = "qwerty123"
"#;

/// A file with no accounts at all.
pub const EMPTY_CONFIG: &str = "[docauth]\nversion = \"0.1.0\"\n";
