//! SAE login simulator
//!
//! Credential checking and simulated login flow for the SAE school portal
//! mock-up. There is no real backend: credentials come from a JSON document
//! (or a built-in list) and the "server" is a delayed echo.

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod navigate;
pub mod notify;
pub mod portal;
pub mod protocol;
pub mod store;
pub mod utils;

pub use config::PortalConfig;
pub use portal::{ActionFlow, ActionResult, Portal};
