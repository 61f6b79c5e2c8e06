//! Domain types.

mod credential;
mod directory;
mod mode;
mod outcome;

pub use credential::Credential;
pub use directory::Directory;
pub use mode::IdentifierMode;
pub use outcome::Outcome;
