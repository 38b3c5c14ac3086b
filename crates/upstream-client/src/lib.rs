// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Upstream NFT API client abstractions
//!
//! This crate provides the common interface for clients of the upstream
//! NFT data provider, along with the data types exchanged with it.
//!
//! # Core Abstractions
//!
//! - **`UpstreamApi` Trait**: Common interface for upstream clients with async support
//! - **Status Stamping**: Decoded payloads carry the observed upstream HTTP status code
//! - **Error Handling**: `UpstreamError` types for transport and decode failures
//!
//! The trait deliberately returns decoded payloads even for non-2xx upstream
//! responses; the stamped status code carries the outcome and is interpreted
//! by the service layer.

use thiserror::Error;

pub mod types;

pub use types::*;

/// Generic trait for upstream NFT API clients
///
/// Implementations issue the outbound calls and stamp the observed HTTP
/// status code onto the decoded payload. Only transport and decode failures
/// surface as errors here.
pub trait UpstreamApi: Send + Sync {
    /// Fetch ownership data for the given ownership identifier
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be issued, times out, or the
    /// response body does not decode as JSON.
    fn get_ownership(
        &self,
        id: &str,
    ) -> impl Future<Output = Result<OwnershipRecord, UpstreamError>> + Send;

    /// Fetch rarity scores for the traits named in the query
    ///
    /// # Errors
    ///
    /// Returns an error under the same conditions as [`Self::get_ownership`].
    fn get_trait_rarity(
        &self,
        query: &TraitRarityQuery,
    ) -> impl Future<Output = Result<TraitRarityResult, UpstreamError>> + Send;

    /// Get the name/identifier of this upstream client
    fn name(&self) -> &'static str;
}

/// Common errors that can occur when calling the upstream API
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum UpstreamError {
    /// HTTP request failed
    #[error("HTTP request failed: {message}")]
    Http { message: String },

    /// Invalid response format
    #[error("Invalid response format: {message}")]
    InvalidResponse { message: String },

    /// Network timeout
    #[error("Request timeout after {timeout_seconds} seconds")]
    Timeout { timeout_seconds: u64 },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}
