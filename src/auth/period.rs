//! Academic period validation
//!
//! Facility logins carry the selected period; `"0"` is the placeholder option.

use crate::error::AuthError;

/// Value of the unselected period option
pub const UNSELECTED_PERIOD: &str = "0";

/// Returns the period unchanged, or `InvalidPeriod` when nothing was selected.
pub fn validate_period(selected: &str) -> Result<String, AuthError> {
    if selected.is_empty() || selected == UNSELECTED_PERIOD {
        return Err(AuthError::InvalidPeriod(selected.to_string()));
    }
    Ok(selected.to_string())
}
