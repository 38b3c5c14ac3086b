// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Routes module
//!
//! This module provides route configuration and handlers for the proxy server.

pub mod handlers;

use axum::{Router, routing::get};
use handlers::{health_handler, ownership_handler, trait_rarities_handler};

use crate::state::ServerState;

/// Create application routes
pub fn create_routes() -> Router<ServerState> {
    // Health endpoint sits outside the versioned prefix for monitoring purposes
    let health_routes = Router::new().route("/health", get(health_handler));

    // The trait-rarities route keeps the upstream-observed GET-with-body
    // contract; revising the verb is a public API compatibility decision
    let api_routes = Router::new()
        .route("/ownerships/{id}", get(ownership_handler))
        .route("/trait-rarities", get(trait_rarities_handler));

    let v1 = Router::new().nest("/v1", api_routes);

    Router::new().merge(health_routes).merge(v1)
}
