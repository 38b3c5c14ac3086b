// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Rarible API integration
//!
//! This crate provides the [`rarible::RaribleClient`] implementation of the
//! `UpstreamApi` trait against the Rarible multichain API.
//!
//! # Features
//!
//! - **Status Stamping**: responses decode regardless of upstream status; the
//!   observed HTTP status code is stamped onto the payload for the service
//!   layer to interpret
//! - **Fixed Timeout**: every call runs under a configurable timeout with no
//!   retries and no caching
//! - **Configuration Validation**: client construction rejects empty
//!   credentials and base URLs
//! - **Testing Support**: integration test coverage using wiremock for HTTP
//!   simulation

pub mod rarible;

pub use rarible::*;
