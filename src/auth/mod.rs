//! Authentication system
//!
//! Handles credential validation and the facility period check.

pub mod period;
pub mod results;
pub mod validator;

pub use period::{UNSELECTED_PERIOD, validate_period};
pub use results::{LoginAttempt, ValidationOutcome};
pub use validator::{authenticate, check_credentials, find_user};
