//! Authentication result types
//!
//! Defines the values passed between the login form and the validator.

use crate::error::AuthError;
use crate::store::UserRecord;

/// A single login form submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginAttempt {
    pub handle: String,
    pub secret: String,
    /// Only required on facility pages
    pub period: Option<String>,
}

impl LoginAttempt {
    pub fn new(handle: &str, secret: &str) -> Self {
        Self {
            handle: handle.to_string(),
            secret: secret.to_string(),
            period: None,
        }
    }

    pub fn with_period(mut self, period: &str) -> Self {
        self.period = Some(period.to_string());
        self
    }
}

/// Result of checking a handle/secret pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    Success { user: UserRecord },
    Failure { reason: AuthError },
}

impl ValidationOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ValidationOutcome::Success { .. })
    }

    pub fn into_result(self) -> Result<UserRecord, AuthError> {
        match self {
            ValidationOutcome::Success { user } => Ok(user),
            ValidationOutcome::Failure { reason } => Err(reason),
        }
    }
}

impl From<Result<UserRecord, AuthError>> for ValidationOutcome {
    fn from(result: Result<UserRecord, AuthError>) -> Self {
        match result {
            Ok(user) => ValidationOutcome::Success { user },
            Err(reason) => ValidationOutcome::Failure { reason },
        }
    }
}
