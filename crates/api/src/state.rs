// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Server state management module
//!
//! This module provides shared application state for the proxy server:
//! configuration, the translation service, and the coordinated cancellation
//! token. The service holds only immutable configuration, so the state is
//! cheap to clone per request.

use std::sync::Arc;

use rarible_client::RaribleClient;
use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;

use crate::{
    config::{Environment, ServerConfig},
    service::NftService,
};

/// Shared application state with cancellation token support
#[derive(Debug, Clone)]
pub struct ServerState {
    /// Server configuration
    config: ServerConfig,
    /// Translation service backed by the Rarible client
    nft_service: Arc<NftService<RaribleClient>>,
    /// Cancellation token for coordinated shutdown
    pub cancellation_token: CancellationToken,
}

impl ServerState {
    /// Create new server state
    ///
    /// # Arguments
    ///
    /// * `config` - Server configuration
    /// * `nft_service` - Translation service for upstream operations
    /// * `cancellation_token` - Token for coordinated cancellation
    pub fn new(
        config: ServerConfig,
        nft_service: Arc<NftService<RaribleClient>>,
        cancellation_token: CancellationToken,
    ) -> Self {
        Self {
            config,
            nft_service,
            cancellation_token,
        }
    }

    /// Server configuration
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Get the translation service
    pub fn nft_service(&self) -> &NftService<RaribleClient> {
        &self.nft_service
    }

    /// Build the liveness report served by the health endpoint
    pub fn health_check(&self) -> HealthCheck {
        HealthCheck {
            status: "up".to_string(),
            version: Box::from(env!("CARGO_PKG_VERSION")),
            environment: self.config.environment,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Health check status
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthCheck {
    /// Service status
    pub status: String,
    /// Service version
    pub version: Box<str>,
    /// Environment
    pub environment: Environment,
    /// Timestamp
    pub timestamp: String,
}

#[cfg(test)]
mod tests {
    use rarible_client::RaribleConfig;

    use super::*;

    fn test_state(token: CancellationToken) -> ServerState {
        let config = ServerConfig::for_testing();
        let client =
            RaribleClient::new(RaribleConfig::default()).expect("test client constructs");
        ServerState::new(config, Arc::new(NftService::new(client)), token)
    }

    #[test]
    fn server_state_creation() {
        let state = test_state(CancellationToken::new());

        assert!(!state.cancellation_token.is_cancelled());
        assert_eq!(state.config().environment, Environment::Testing);
    }

    #[test]
    fn server_state_with_cancellation_token() {
        let token = CancellationToken::new();
        let state = test_state(token.clone());

        assert!(!state.cancellation_token.is_cancelled());

        // Test that the tokens are linked
        token.cancel();
        assert!(state.cancellation_token.is_cancelled());
    }

    #[test]
    fn health_check_reports_environment() {
        let state = test_state(CancellationToken::new());
        let health = state.health_check();

        assert_eq!(health.status, "up");
        assert_eq!(health.environment, Environment::Testing);
        assert!(!health.timestamp.is_empty());
    }
}
