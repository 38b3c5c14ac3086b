// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Custom extractors for improved error handling
//!
//! This module provides a JSON extractor whose rejection is rendered as the
//! uniform failure envelope, with error messages that pinpoint parsing
//! failures. The trait-rarity endpoint carries its query in the body of a
//! GET request, so extraction reads the raw body rather than relying on
//! method-aware defaults.

use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

use crate::error::ApiError;

const MAX_JSON_PAYLOAD_SIZE: usize = 1024 * 1024; // 1MB limit

/// Custom JSON extractor that provides detailed error messages for parsing failures
#[derive(Debug)]
pub struct JsonExtractor<T>(pub T);

impl<T, S> FromRequest<S> for JsonExtractor<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = match axum::body::Bytes::from_request(req, state).await {
            Ok(bytes) => bytes,
            Err(rejection) => {
                return Err(ApiError::InvalidBody {
                    message: format!("failed to read request body: {rejection}"),
                });
            }
        };

        if bytes.len() > MAX_JSON_PAYLOAD_SIZE {
            return Err(ApiError::InvalidBody {
                message: format!(
                    "request body too large: {} bytes (max: {} bytes)",
                    bytes.len(),
                    MAX_JSON_PAYLOAD_SIZE
                ),
            });
        }

        if bytes.is_empty() {
            return Err(ApiError::InvalidBody {
                message: "request body is empty, expected valid JSON".to_string(),
            });
        }

        match serde_json::from_slice::<T>(&bytes) {
            Ok(value) => Ok(JsonExtractor(value)),
            Err(err) => {
                let message = if err.is_syntax() || err.is_eof() {
                    format!(
                        "invalid JSON syntax at line {}, column {}",
                        err.line(),
                        err.column()
                    )
                } else {
                    format!("JSON does not match the expected shape: {err}")
                };
                Err(ApiError::InvalidBody { message })
            }
        }
    }
}
