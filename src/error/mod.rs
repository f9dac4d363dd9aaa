//! Error handling
//!
//! Defines error types and their mapping to user-visible notifications.

pub mod handlers;
pub mod types;

pub use types::*;
