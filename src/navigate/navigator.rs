//! Navigation collaborator
//!
//! Page changes are delegated to a [`Navigator`]; the simulator never touches
//! a real location.

use log::info;
use std::sync::Mutex;

/// Opens another page of the portal
pub trait Navigator: Send + Sync {
    fn navigate(&self, href: &str);
}

/// Navigator that only logs the requested page
#[derive(Default)]
pub struct LogNavigator;

impl Navigator for LogNavigator {
    fn navigate(&self, href: &str) {
        info!("Navigating to {}", href);
    }
}

/// Navigator that records every requested page
#[derive(Default)]
pub struct MemoryNavigator {
    visited: Mutex<Vec<String>>,
}

impl MemoryNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pages requested so far, oldest first
    pub fn visited(&self) -> Vec<String> {
        self.visited
            .lock()
            .map(|visited| visited.clone())
            .unwrap_or_default()
    }
}

impl Navigator for MemoryNavigator {
    fn navigate(&self, href: &str) {
        if let Ok(mut visited) = self.visited.lock() {
            visited.push(href.to_string());
        }
    }
}
