// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Data types exchanged with the upstream NFT API
//!
//! Field names follow the upstream wire format (camelCase). Upstream error
//! bodies carry only `code` and `message`, so every other field defaults
//! when absent and the same types decode success and failure responses
//! alike. The stamped `status_code` never appears on the wire.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single creator entry on an ownership, with its integer share
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatorShare {
    /// Creator account string (chain-qualified address)
    pub account: String,
    /// Share value held by this creator
    pub value: i64,
}

/// Ownership data for a single NFT, as returned by the upstream API
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OwnershipRecord {
    /// Ownership identifier
    pub id: String,
    /// Blockchain name
    pub blockchain: String,
    /// Item identifier
    pub item_id: String,
    /// Contract address
    pub contract: String,
    /// Collection identifier
    pub collection: String,
    /// Token identifier
    pub token_id: String,
    /// Owner address
    pub owner: String,
    /// Owned value
    pub value: String,
    /// Creation timestamp
    pub created_at: Option<DateTime<Utc>>,
    /// Last update timestamp
    pub last_updated_at: Option<DateTime<Utc>>,
    /// Ordered creator entries
    pub creators: Vec<CreatorShare>,
    /// Lazy-minted value
    pub lazy_value: String,
    /// Upstream error code, present on failure responses
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Upstream error message, present on failure responses
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// HTTP status code observed when this record was fetched
    #[serde(skip)]
    pub status_code: u16,
}

/// A single (key, value) trait property in a rarity query
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraitProperty {
    /// Trait key
    pub key: String,
    /// Trait value
    pub value: String,
}

/// Query for trait rarity scores within a collection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraitRarityQuery {
    /// Collection identifier, e.g. `ETHEREUM:0x123...`
    pub collection_id: String,
    /// Ordered trait properties to score
    pub properties: Vec<TraitProperty>,
}

impl TraitRarityQuery {
    /// Validates the query before any outbound call is made
    ///
    /// # Errors
    ///
    /// Returns a message naming the offending field when the collection
    /// identifier is empty or any property has an empty key or value.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.collection_id.is_empty() {
            return Err("invalid collection id");
        }
        for property in &self.properties {
            if property.key.is_empty() || property.value.is_empty() {
                return Err("invalid property param");
            }
        }
        Ok(())
    }
}

/// A trait property together with its rarity score
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraitRarity {
    /// Trait key
    pub key: String,
    /// Trait value
    pub value: String,
    /// Rarity score, kept as the upstream string representation
    pub rarity: String,
}

/// Trait rarity computation result returned by the upstream API
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TraitRarityResult {
    /// Continuation token for paging, when more results exist
    #[serde(skip_serializing_if = "Option::is_none")]
    pub continuation: Option<String>,
    /// Ordered rarity entries
    pub traits: Vec<TraitRarity>,
    /// Upstream error code, present on failure responses
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Upstream error message, present on failure responses
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// HTTP status code observed when this result was fetched
    #[serde(skip)]
    pub status_code: u16,
}
