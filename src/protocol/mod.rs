//! Login request protocol
//!
//! Request/response types and the backend that answers them.

pub mod backend;
pub mod messages;

pub use backend::{LoginBackend, SimulatedBackend};
pub use messages::{LoginPayload, ResponseUser, ServerResponse};
