//! Outcome of a portal action
//!
//! An action finishes its synchronous part before returning, but may leave
//! timers behind (redirect notices, re-enabling the submit control). Those
//! always run to completion; [`ActionFlow::settle`] waits for them.

use crate::error::PortalError;
use crate::protocol::ServerResponse;
use crate::store::UserRecord;
use log::warn;
use tokio::task::JoinHandle;

/// What a successful action produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionResult {
    LoggedIn {
        user: UserRecord,
        response: ServerResponse,
    },
    /// The backend answered without accepting the login
    Declined(ServerResponse),
    Registered(String),
    SeatRequested,
    RecoveryStarted,
}

pub struct ActionFlow {
    outcome: Result<ActionResult, PortalError>,
    timers: Vec<JoinHandle<()>>,
}

impl ActionFlow {
    pub fn new(outcome: Result<ActionResult, PortalError>, timers: Vec<JoinHandle<()>>) -> Self {
        Self { outcome, timers }
    }

    pub fn outcome(&self) -> &Result<ActionResult, PortalError> {
        &self.outcome
    }

    /// Number of timers still attached to this action
    pub fn pending_timers(&self) -> usize {
        self.timers.iter().filter(|t| !t.is_finished()).count()
    }

    /// Wait for every trailing timer, then hand back the outcome.
    pub async fn settle(self) -> Result<ActionResult, PortalError> {
        for timer in self.timers {
            if let Err(e) = timer.await {
                warn!("Portal timer did not complete: {}", e);
            }
        }
        self.outcome
    }
}
