//! Client-side page model
//!
//! Login form, submit control state and page control classification.

pub mod controls;
pub mod form;
pub mod state;

pub use controls::ControlAction;
pub use form::{FormSnapshot, LoginForm, MemoryForm};
pub use state::SubmitState;
