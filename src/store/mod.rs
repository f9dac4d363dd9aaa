//! Credential store
//!
//! Loads the portal's user list, falling back to a built-in list on failure.

pub mod fallback;
pub mod loader;
pub mod records;

pub use fallback::fallback_users;
pub use loader::{CredentialStore, FileUserSource, HttpUserSource, UserSource, source_for};
pub use records::{UserRecord, UsersDocument};
