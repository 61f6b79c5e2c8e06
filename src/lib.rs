//! docauth - terminal login form for the Beta-Bank prototype.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── login         # Interactive login form
//! │   ├── check         # Single non-interactive attempt
//! │   ├── accounts      # List registered identifiers
//! │   ├── completions   # Shell completions
//! │   └── output        # Terminal styling helpers
//! └── core/             # Core library components
//!     ├── auth          # authenticate()
//!     ├── config        # docauth.toml loading
//!     ├── domain/       # Credential, Directory, Outcome, IdentifierMode
//!     ├── form          # Login form state and submission gate
//!     ├── messages      # Localized labels
//!     └── validation    # 6-20 character length rule
//! ```
//!
//! # Example
//!
//! ```
//! use docauth::{authenticate, Directory, Outcome};
//!
//! let directory = Directory::from_pairs([("4510123456", "qwerty123")]);
//! assert_eq!(authenticate("4510123456", "qwerty123", &directory), Outcome::Success);
//! assert_eq!(authenticate("4510123456", "nope", &directory), Outcome::WrongSecret);
//! ```

pub mod cli;
pub mod core;
pub mod error;

pub use crate::core::auth::authenticate;
pub use crate::core::domain::{Credential, Directory, IdentifierMode, Outcome};
pub use crate::core::form::LoginForm;
pub use crate::core::messages::{Labels, Locale};
