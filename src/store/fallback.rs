//! Built-in credential list
//!
//! Used whenever the credential document cannot be loaded.

use super::records::UserRecord;
use std::sync::LazyLock;

/// Static fallback credentials - the mock portal has no real account database
pub(crate) static FALLBACK_USERS: LazyLock<Vec<UserRecord>> = LazyLock::new(|| {
    vec![
        UserRecord::new("juanperez", "Juan Perez", "juan.perez@example.com", "123456"),
        UserRecord::new("marialopez", "Maria Lopez", "maria.lopez@example.com", "123456"),
        UserRecord::new("admin", "Admin", "admin@ejemplo.com", "123456"),
    ]
});

/// Returns an owned copy of the fallback list.
pub fn fallback_users() -> Vec<UserRecord> {
    FALLBACK_USERS.clone()
}
