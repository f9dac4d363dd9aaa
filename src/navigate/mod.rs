//! Navigation
//!
//! Page context, user categories and the navigation collaborator.

pub mod category;
pub mod navigator;

pub use category::{PageContext, UserCategory};
pub use navigator::{LogNavigator, MemoryNavigator, Navigator};
