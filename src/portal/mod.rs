//! Login portal
//!
//! Orchestrates page actions over the credential store, the login backend
//! and the UI collaborators.

pub mod actions;
pub mod core;
pub mod flow;
pub mod login;

pub use self::core::Portal;
pub use flow::{ActionFlow, ActionResult};
