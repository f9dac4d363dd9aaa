//! Simulated login request and response
//!
//! Field names follow the portal's JSON wire format.

use crate::navigate::UserCategory;
use serde::{Deserialize, Serialize};

/// Body of a login request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginPayload {
    #[serde(rename = "nombreUsuario")]
    pub username: String,
    #[serde(rename = "tipoUsuario")]
    pub category: UserCategory,
    #[serde(rename = "periodo")]
    pub period: Option<String>,
}

/// Account summary echoed back by the server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseUser {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "tipo")]
    pub category: UserCategory,
    #[serde(rename = "periodo")]
    pub period: Option<String>,
}

/// Server reply to a login request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerResponse {
    pub success: bool,
    #[serde(rename = "usuario")]
    pub user: ResponseUser,
}
