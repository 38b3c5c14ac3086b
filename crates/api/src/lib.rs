// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Rarible Proxy Server Implementation
//!
//! This crate provides the main HTTP server for the Rarible proxy service,
//! built with Axum and designed for production use with comprehensive
//! configuration, middleware, and graceful shutdown capabilities.
//!
//! # Module Structure
//!
//! - [`config`]: Server configuration and environment management with hierarchical loading
//! - [`error`]: Error types, the business error taxonomy, and envelope rendering
//! - [`extractors`]: JSON body extraction with envelope-shaped rejections
//! - [`response`]: The uniform response envelope returned to all callers
//! - [`service`]: Translation of upstream status codes into business errors
//! - [`state`]: Shared application state management with cancellation token support
//! - [`server`]: Main server implementation, lifecycle, and coordinated shutdown
//! - [`routes`]: Route configuration and HTTP request handlers
//!
//! # Key Features
//!
//! - **Thin Proxy**: forwards two endpoints to the Rarible API with no
//!   caching, retries, or persistence
//! - **Uniform Envelope**: every response, success or failure, uses the same
//!   wrapper with a status word, numeric code, message, error text, and timestamp
//! - **Graceful Shutdown**: coordinated termination using `CancellationToken`
//! - **Comprehensive Middleware**: request tracing, CORS, timeouts, and request IDs

pub mod config;
pub mod error;
pub mod extractors;
pub mod response;
pub mod routes;
pub mod server;
pub mod service;
pub mod state;

pub use config::{Environment, ServerConfig};
pub use error::{ApiError, ServerError, ServerResult, ServiceError};
pub use response::{Envelope, Outcome, ResponseStatus};
pub use server::{Server, ShutdownConfig};
pub use service::NftService;
pub use state::{HealthCheck, ServerState};
