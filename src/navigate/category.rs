//! Page context and user categories
//!
//! The login page a user submits from determines their category. All helpers
//! here work on an explicit [`PageContext`] rather than ambient page state.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of account a login page belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserCategory {
    #[serde(rename = "estudiante")]
    Student,
    #[serde(rename = "personal")]
    Staff,
    #[serde(rename = "plantel")]
    Facility,
    #[serde(rename = "representante")]
    Guardian,
    #[serde(rename = "usuario")]
    Generic,
}

impl UserCategory {
    /// Derives the category by substring match on the page path.
    ///
    /// Checked in order: student, staff, facility, guardian; anything else is
    /// generic.
    pub fn from_path(path: &str) -> Self {
        [
            UserCategory::Student,
            UserCategory::Staff,
            UserCategory::Facility,
            UserCategory::Guardian,
        ]
        .into_iter()
        .find(|category| path.contains(category.as_str()))
        .unwrap_or(UserCategory::Generic)
    }

    /// Wire name, also the path fragment identifying the category
    pub fn as_str(&self) -> &'static str {
        match self {
            UserCategory::Student => "estudiante",
            UserCategory::Staff => "personal",
            UserCategory::Facility => "plantel",
            UserCategory::Guardian => "representante",
            UserCategory::Generic => "usuario",
        }
    }
}

impl fmt::Display for UserCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where the submission came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageContext {
    path: String,
}

impl PageContext {
    pub fn new(path: &str) -> Self {
        Self {
            path: path.to_string(),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn category(&self) -> UserCategory {
        UserCategory::from_path(&self.path)
    }

    /// Facility logins require an academic period
    pub fn is_facility(&self) -> bool {
        self.path.contains(UserCategory::Facility.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_path() {
        assert_eq!(UserCategory::from_path("/sae/estudiante/login.html"), UserCategory::Student);
        assert_eq!(UserCategory::from_path("/sae/personal/"), UserCategory::Staff);
        assert_eq!(UserCategory::from_path("/sae/plantel.html"), UserCategory::Facility);
        assert_eq!(UserCategory::from_path("/representante"), UserCategory::Guardian);
        assert_eq!(UserCategory::from_path("/index.html"), UserCategory::Generic);
        assert_eq!(UserCategory::from_path(""), UserCategory::Generic);
    }

    #[test]
    fn test_first_match_wins() {
        assert_eq!(
            UserCategory::from_path("/personal/plantel"),
            UserCategory::Staff
        );
    }

    #[test]
    fn test_facility_context() {
        assert!(PageContext::new("/html/plantel.html").is_facility());
        assert!(!PageContext::new("/html/estudiante.html").is_facility());
    }

    #[test]
    fn test_wire_name() {
        let json = serde_json::to_string(&UserCategory::Guardian).unwrap();
        assert_eq!(json, "\"representante\"");
        assert_eq!(UserCategory::Generic.to_string(), "usuario");
    }
}
