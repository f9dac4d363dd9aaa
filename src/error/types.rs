//! Error types
//!
//! Defines domain-specific error types for each module of the login simulator.

use std::fmt;
use std::io;

/// Credential store errors
///
/// Never surfaced to the user: the loader recovers from all of them by
/// falling back to the built-in credential list.
#[derive(Debug)]
pub enum StoreError {
    Request(reqwest::Error),
    Status(u16),
    Io(io::Error),
    Malformed(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Request(e) => write!(f, "Request failed: {}", e),
            StoreError::Status(code) => write!(f, "Unexpected HTTP status: {}", code),
            StoreError::Io(e) => write!(f, "IO error: {}", e),
            StoreError::Malformed(s) => write!(f, "Malformed user document: {}", s),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<reqwest::Error> for StoreError {
    fn from(error: reqwest::Error) -> Self {
        StoreError::Request(error)
    }
}

impl From<io::Error> for StoreError {
    fn from(error: io::Error) -> Self {
        StoreError::Io(error)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(error: serde_json::Error) -> Self {
        StoreError::Malformed(error.to_string())
    }
}

/// Authentication errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    UserNotFound(String),
    WrongPassword(String),
    MissingField(String),
    InvalidPeriod(String),
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::UserNotFound(u) => write!(f, "User not found: {}", u),
            AuthError::WrongPassword(u) => write!(f, "Wrong password for user: {}", u),
            AuthError::MissingField(field) => write!(f, "Missing field: {}", field),
            AuthError::InvalidPeriod(p) => write!(f, "Invalid period: {:?}", p),
        }
    }
}

impl std::error::Error for AuthError {}

/// General portal error that encompasses everything a UI action can fail with
#[derive(Debug)]
pub enum PortalError {
    Auth(AuthError),
    InvalidForm,
    MissingCode,
    CodeTooShort(usize),
    Backend(String),
}

impl fmt::Display for PortalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PortalError::Auth(e) => write!(f, "Authentication error: {}", e),
            PortalError::InvalidForm => write!(f, "Login form is missing its input fields"),
            PortalError::MissingCode => write!(f, "Registration code is empty"),
            PortalError::CodeTooShort(min) => {
                write!(f, "Registration code shorter than {} characters", min)
            }
            PortalError::Backend(s) => write!(f, "Backend error: {}", s),
        }
    }
}

impl std::error::Error for PortalError {}

impl From<AuthError> for PortalError {
    fn from(error: AuthError) -> Self {
        PortalError::Auth(error)
    }
}
