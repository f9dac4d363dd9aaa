//! Credential records
//!
//! Mirrors the `usuario.json` document: `{ "usuarios": [ ... ] }`.

use serde::{Deserialize, Serialize};

/// A single account of the portal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Login identifier
    #[serde(rename = "usuario")]
    pub handle: String,
    #[serde(rename = "nombre")]
    pub display_name: String,
    pub email: String,
    /// Plaintext, compared as-is
    pub password: String,
}

impl UserRecord {
    pub fn new(handle: &str, display_name: &str, email: &str, password: &str) -> Self {
        Self {
            handle: handle.to_string(),
            display_name: display_name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        }
    }
}

/// Top-level shape of the credential document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsersDocument {
    #[serde(rename = "usuarios")]
    pub users: Vec<UserRecord>,
}
