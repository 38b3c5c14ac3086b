// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Error handling module
//!
//! This module provides error types for server lifecycle operations and for
//! the request path. Request-path errors ([`ApiError`]) convert into the
//! uniform response envelope; the business taxonomy ([`ServiceError`])
//! carries the upstream message text and determines the outbound HTTP
//! status code.

use std::net::SocketAddr;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use upstream_client::UpstreamError;

use crate::response::Envelope;

/// Errors for server lifecycle operations
#[derive(Error, Debug)]
pub enum ServerError {
    /// Configuration validation errors
    #[error("Configuration error: {message}")]
    Config {
        /// Error message
        message: String,
    },

    /// Network binding errors
    #[error("Failed to bind to {address}: {source}")]
    Bind {
        /// Socket address that failed to bind
        address: SocketAddr,
        /// Underlying IO error
        source: std::io::Error,
    },

    /// Server startup errors
    #[error("Server startup failed: {source}")]
    Startup {
        /// Underlying IO error
        source: std::io::Error,
    },

    /// Server shutdown errors
    #[error("Server shutdown failed: {source}")]
    Shutdown {
        /// Underlying IO error
        source: std::io::Error,
    },
}

/// Result type for server operations
pub type ServerResult<T> = Result<T, ServerError>;

/// Business error taxonomy for upstream outcomes
///
/// Non-200 upstream statuses map onto the first three kinds, each carrying
/// the upstream message text for diagnostics. Transport and decode failures
/// propagate through the `Upstream` kind.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Upstream reported 400
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Upstream reported 404
    #[error("not found: {0}")]
    NotFound(String),

    /// Upstream reported any other non-200 status
    #[error("something went wrong: {0}")]
    Unexpected(String),

    /// Transport or decode failure reaching upstream
    #[error("failed to get data from api: {0}")]
    Upstream(#[from] UpstreamError),
}

impl ServiceError {
    /// Get the appropriate outbound HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Unexpected(_) | Self::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Request-path errors, rendered as failure envelopes
#[derive(Error, Debug)]
pub enum ApiError {
    /// Inbound body failed to decode or validate
    #[error("invalid request body: {message}")]
    InvalidBody {
        /// Detailed error message
        message: String,
    },

    /// The translation service reported a failure
    #[error("{context}: {source}")]
    Service {
        /// Endpoint-specific failure message for the envelope
        context: &'static str,
        /// Underlying business error
        #[source]
        source: ServiceError,
    },
}

impl ApiError {
    /// Wrap a service error with the endpoint's failure message
    pub fn service(context: &'static str, source: ServiceError) -> Self {
        Self::Service { context, source }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, envelope) = match self {
            ApiError::InvalidBody { message } => (
                StatusCode::BAD_REQUEST,
                Envelope::failed(StatusCode::BAD_REQUEST, "invalid request body", message),
            ),
            ApiError::Service { context, source } => {
                let status = source.status_code();
                (
                    status,
                    Envelope::failed(status, context, source.to_string()),
                )
            }
        };

        (status, Json(envelope)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_error_status_codes() {
        assert_eq!(
            ServiceError::InvalidRequest("msg".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ServiceError::NotFound("msg".to_string()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ServiceError::Unexpected("msg".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ServiceError::Upstream(UpstreamError::Timeout {
                timeout_seconds: 10
            })
            .status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn service_error_wraps_upstream_message() {
        let err = ServiceError::InvalidRequest("collectionId has wrong format".to_string());
        assert_eq!(
            err.to_string(),
            "invalid request: collectionId has wrong format"
        );
    }

    #[test]
    fn upstream_error_display_is_wrapped() {
        let err = ServiceError::from(UpstreamError::Http {
            message: "connection refused".to_string(),
        });
        assert!(err.to_string().starts_with("failed to get data from api:"));
    }
}
