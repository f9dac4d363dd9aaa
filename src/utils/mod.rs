//! Utility functions
//!
//! Provides logging setup and text matching.

pub mod logging;
pub mod text;
