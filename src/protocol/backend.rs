//! Login backend
//!
//! The portal has no real server. [`SimulatedBackend`] stands in for one by
//! waiting out a fixed latency and echoing the request back as a success.

use super::messages::{LoginPayload, ResponseUser, ServerResponse};
use crate::error::PortalError;
use async_trait::async_trait;
use log::info;
use std::time::Duration;

/// Something that accepts login requests
#[async_trait]
pub trait LoginBackend: Send + Sync {
    async fn submit(&self, payload: LoginPayload) -> Result<ServerResponse, PortalError>;
}

/// Backend that always accepts after an artificial delay
pub struct SimulatedBackend {
    latency: Duration,
}

impl SimulatedBackend {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

#[async_trait]
impl LoginBackend for SimulatedBackend {
    async fn submit(&self, payload: LoginPayload) -> Result<ServerResponse, PortalError> {
        info!(
            "Simulated login request for {} ({})",
            payload.username, payload.category
        );
        tokio::time::sleep(self.latency).await;

        Ok(ServerResponse {
            success: true,
            user: ResponseUser {
                name: payload.username,
                category: payload.category,
                period: payload.period,
            },
        })
    }
}
