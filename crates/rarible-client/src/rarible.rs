// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Rarible API client
//!
//! This module provides an implementation of the `UpstreamApi` trait for the
//! Rarible multichain API. Rarible serves NFT ownership and trait rarity
//! data across multiple chains.

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tokio::time::timeout;
use tracing::debug;
use upstream_client::{
    OwnershipRecord, TraitRarityQuery, TraitRarityResult, UpstreamApi, UpstreamError,
};

/// Configuration for the Rarible API client
#[derive(Debug, Clone)]
pub struct RaribleConfig {
    /// Base URL for the Rarible API
    pub base_url: String,
    /// API key for authentication
    pub api_key: String,
    /// Request timeout in seconds
    pub timeout_seconds: u64,
}

impl Default for RaribleConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.rarible.org/v0.1".to_string(),
            api_key: "test-api-key".to_string(),
            timeout_seconds: 10,
        }
    }
}

/// Rarible API client implementation
#[derive(Debug)]
pub struct RaribleClient {
    client: Client,
    config: RaribleConfig,
}

/// Errors specific to the Rarible API client
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum RaribleError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing failed
    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Timeout error
    #[error("Request timeout")]
    Timeout { seconds: u64 },
}

impl From<RaribleError> for UpstreamError {
    fn from(value: RaribleError) -> Self {
        match value {
            RaribleError::Http(error) => UpstreamError::Http {
                message: error.to_string(),
            },
            RaribleError::Json(error) => UpstreamError::InvalidResponse {
                message: error.to_string(),
            },
            RaribleError::Config(message) => UpstreamError::Configuration { message },
            RaribleError::Timeout { seconds } => UpstreamError::Timeout {
                timeout_seconds: seconds,
            },
        }
    }
}

impl RaribleClient {
    /// Create a new Rarible API client
    ///
    /// # Arguments
    ///
    /// * `config` - Configuration for the Rarible API client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created or configuration is invalid
    pub fn new(config: RaribleConfig) -> Result<Self, RaribleError> {
        if config.api_key.trim().is_empty() {
            return Err(RaribleError::Config("API key cannot be empty".to_string()));
        }

        if config.base_url.trim().is_empty() {
            return Err(RaribleError::Config("Base URL cannot be empty".to_string()));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent("rarible-proxy/0.1.0")
            .build()
            .map_err(RaribleError::Http)?;

        Ok(Self { client, config })
    }

    /// Fetch ownership data by ownership identifier
    ///
    /// The response body is decoded even when the upstream status is not a
    /// success; the observed status code is stamped onto the record so the
    /// caller can interpret the outcome.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, times out, or the response
    /// body cannot be parsed as JSON.
    pub async fn fetch_ownership(&self, id: &str) -> Result<OwnershipRecord, RaribleError> {
        let url = format!("{}/ownerships/{}", self.config.base_url, id);

        debug!(url, "fetching ownership from Rarible");

        let request = self.apply_required_headers(self.client.get(&url));
        self.dispatch(request).await
    }

    /// Fetch rarity scores for traits within a collection
    ///
    /// Same timeout, decode, and status-stamping behavior as
    /// [`Self::fetch_ownership`].
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, times out, or the response
    /// body cannot be parsed as JSON.
    pub async fn fetch_trait_rarity(
        &self,
        query: &TraitRarityQuery,
    ) -> Result<TraitRarityResult, RaribleError> {
        let url = format!("{}/items/traits/rarity", self.config.base_url);

        debug!(
            url,
            collection_id = %query.collection_id,
            properties = query.properties.len(),
            "fetching trait rarity from Rarible"
        );

        let request = self
            .apply_required_headers(self.client.post(&url))
            .json(query);
        self.dispatch(request).await
    }

    fn apply_required_headers(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request
            .header("Accept", "application/json")
            .header("Content-Type", "application/json")
            .header("X-API-KEY", &self.config.api_key)
    }

    /// Send a prepared request, decode the JSON body whatever the status,
    /// and stamp the observed status code onto the payload
    async fn dispatch<T>(&self, request: reqwest::RequestBuilder) -> Result<T, RaribleError>
    where
        T: DeserializeOwned + StatusStamped,
    {
        let response = timeout(
            Duration::from_secs(self.config.timeout_seconds),
            request.send(),
        )
        .await
        .map_err(|_| RaribleError::Timeout {
            seconds: self.config.timeout_seconds,
        })?
        .map_err(RaribleError::Http)?;

        let status = response.status();
        let body = response.text().await.map_err(RaribleError::Http)?;

        let mut payload: T = serde_json::from_str(&body).map_err(RaribleError::Json)?;
        payload.stamp_status(status.as_u16());
        Ok(payload)
    }
}

/// Payloads that carry the upstream HTTP status code alongside their data
trait StatusStamped {
    fn stamp_status(&mut self, status_code: u16);
}

impl StatusStamped for OwnershipRecord {
    fn stamp_status(&mut self, status_code: u16) {
        self.status_code = status_code;
    }
}

impl StatusStamped for TraitRarityResult {
    fn stamp_status(&mut self, status_code: u16) {
        self.status_code = status_code;
    }
}

impl UpstreamApi for RaribleClient {
    async fn get_ownership(&self, id: &str) -> Result<OwnershipRecord, UpstreamError> {
        self.fetch_ownership(id).await.map_err(UpstreamError::from)
    }

    async fn get_trait_rarity(
        &self,
        query: &TraitRarityQuery,
    ) -> Result<TraitRarityResult, UpstreamError> {
        self.fetch_trait_rarity(query)
            .await
            .map_err(UpstreamError::from)
    }

    fn name(&self) -> &'static str {
        "rarible"
    }
}
