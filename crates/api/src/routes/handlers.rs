// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! HTTP request handlers module
//!
//! This module provides the request handlers for the proxy server. Every
//! outcome, success or failure, is wrapped in the uniform response envelope;
//! failure mapping follows the business error taxonomy (400 for invalid
//! requests, 404 for missing data, 500 otherwise).

use axum::{
    Json,
    extract::{Path, State},
};
use tracing::error;
use upstream_client::{OwnershipRecord, TraitRarityQuery, TraitRarityResult};

use crate::{
    error::ApiError,
    extractors::JsonExtractor,
    response::Envelope,
    state::{HealthCheck, ServerState},
};

const OWNERSHIP_FAILURE: &str = "failed to get ownership by id";
const TRAIT_RARITY_FAILURE: &str = "failed to get trait rarity";

/// Health check endpoint handler
pub async fn health_handler(State(state): State<ServerState>) -> Json<HealthCheck> {
    Json(state.health_check())
}

/// Ownership lookup
///
/// Retrieves ownership details for a specific NFT by its ownership
/// identifier. The identifier is forwarded as-is; empty or malformed
/// identifiers are delegated to upstream, whose non-200 status comes back
/// through the business error mapping.
///
/// # Errors
///
/// Returns `ApiError` rendered as a failure envelope when the upstream call
/// fails or reports a non-200 status.
pub async fn ownership_handler(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<Envelope<OwnershipRecord>>, ApiError> {
    let record = state.nft_service().ownership(&id).await.map_err(|err| {
        error!(error = %err, id, "failed to get ownership by id");
        ApiError::service(OWNERSHIP_FAILURE, err)
    })?;

    Ok(Json(Envelope::retrieved(record)))
}

/// Trait rarity lookup
///
/// Decodes the trait rarity query from the request body, validates it
/// locally (non-empty collection identifier, non-empty property keys and
/// values), and forwards it upstream. Validation failures are rejected
/// before any outbound call is made.
///
/// # Errors
///
/// Returns `ApiError` rendered as a failure envelope on decode/validation
/// failure or when the upstream call fails or reports a non-200 status.
pub async fn trait_rarities_handler(
    State(state): State<ServerState>,
    JsonExtractor(query): JsonExtractor<TraitRarityQuery>,
) -> Result<Json<Envelope<TraitRarityResult>>, ApiError> {
    query.validate().map_err(|msg| ApiError::InvalidBody {
        message: msg.to_string(),
    })?;

    let result = state
        .nft_service()
        .trait_rarity(&query)
        .await
        .map_err(|err| {
            error!(error = %err, collection_id = %query.collection_id, "failed to get trait rarity");
            ApiError::service(TRAIT_RARITY_FAILURE, err)
        })?;

    Ok(Json(Envelope::retrieved(result)))
}
