// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Translation service
//!
//! Sits between the request handlers and the upstream client. The client
//! returns payloads stamped with the observed upstream status code; this
//! service maps non-200 codes onto the business error taxonomy and passes
//! successful payloads through unchanged.

use upstream_client::{OwnershipRecord, TraitRarityQuery, TraitRarityResult, UpstreamApi};

use crate::error::ServiceError;

/// NFT data service generic over the upstream client
#[derive(Debug)]
pub struct NftService<C> {
    client: C,
}

impl<C: UpstreamApi> NftService<C> {
    /// Create a new service backed by the given upstream client
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Get ownership data by identifier
    ///
    /// # Errors
    ///
    /// Returns a `ServiceError` when the upstream call fails at the
    /// transport/decode layer or reports a non-200 status.
    pub async fn ownership(&self, id: &str) -> Result<OwnershipRecord, ServiceError> {
        let record = self.client.get_ownership(id).await?;
        if record.status_code != 200 {
            return Err(Self::map_status(
                record.status_code,
                record.message.unwrap_or_default(),
            ));
        }
        Ok(record)
    }

    /// Get trait rarity scores for a validated query
    ///
    /// # Errors
    ///
    /// Returns a `ServiceError` under the same conditions as
    /// [`Self::ownership`].
    pub async fn trait_rarity(
        &self,
        query: &TraitRarityQuery,
    ) -> Result<TraitRarityResult, ServiceError> {
        let result = self.client.get_trait_rarity(query).await?;
        if result.status_code != 200 {
            return Err(Self::map_status(
                result.status_code,
                result.message.unwrap_or_default(),
            ));
        }
        Ok(result)
    }

    /// Map a non-200 upstream status to a business error carrying the
    /// upstream message text
    fn map_status(status_code: u16, message: String) -> ServiceError {
        match status_code {
            400 => ServiceError::InvalidRequest(message),
            404 => ServiceError::NotFound(message),
            _ => ServiceError::Unexpected(message),
        }
    }
}
