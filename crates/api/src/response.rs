// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Uniform response envelope
//!
//! Every response this service produces, success or failure, is wrapped in
//! [`Envelope`]. The envelope is generic over its payload type; failures use
//! `Envelope<()>` so the `data` field serializes as `null`.

use axum::http::StatusCode;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Human-readable outcome word carried in the envelope status block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// The requested data was retrieved successfully
    Retrieved,
    /// The request failed
    Failed,
}

/// Status block attached to every envelope
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseStatus {
    /// Outcome word, "retrieved" or "failed"
    pub status: Outcome,
    /// HTTP-equivalent numeric code, matches the outer response status
    pub status_code: u16,
    /// Human-readable message describing the outcome
    pub message: String,
    /// Error text, empty on success
    pub error: String,
    /// UTC timestamp captured when the envelope was constructed
    pub timestamp: DateTime<Utc>,
}

/// Uniform wrapper returned to all callers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// Payload, `null` on failure
    pub data: Option<T>,
    /// Outcome status block
    pub status: ResponseStatus,
}

impl<T> Envelope<T> {
    /// Build a success envelope around the given payload
    pub fn retrieved(data: T) -> Self {
        Self {
            data: Some(data),
            status: ResponseStatus {
                status: Outcome::Retrieved,
                status_code: StatusCode::OK.as_u16(),
                message: "successfully retrieved data".to_string(),
                error: String::new(),
                timestamp: Utc::now(),
            },
        }
    }
}

impl Envelope<()> {
    /// Build a failure envelope carrying no payload
    pub fn failed(
        status_code: StatusCode,
        message: impl Into<String>,
        error: impl Into<String>,
    ) -> Self {
        Self {
            data: None,
            status: ResponseStatus {
                status: Outcome::Failed,
                status_code: status_code.as_u16(),
                message: message.into(),
                error: error.into(),
                timestamp: Utc::now(),
            },
        }
    }
}
