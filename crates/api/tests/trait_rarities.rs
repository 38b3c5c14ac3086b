// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Integration tests for the trait-rarities endpoint
//!
//! The endpoint carries its query in the body of a GET request, matching the
//! upstream-observed contract. Validation failures must be rejected before
//! any outbound call; wiremock expectations verify the absence of upstream
//! traffic.

use std::net::SocketAddr;

use api::{Server, ServerConfig, ShutdownConfig};
use axum::http::StatusCode;
use serde_json::{Value, json};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, method, path},
};

/// Start the proxy with its upstream pointed at the given base URL
async fn start_proxy(upstream_base_url: String) -> SocketAddr {
    let mut config = ServerConfig::for_testing();
    config.rarible.base_url = upstream_base_url;

    let (addr, _token) = Server::new(config, ShutdownConfig::default())
        .expect("Failed to create server")
        .run_for_testing()
        .await
        .expect("Failed to start test server");
    addr
}

#[tokio::test]
async fn trait_rarities_success_envelope() {
    let upstream = MockServer::start().await;

    let query = json!({
        "collectionId": "ETHEREUM:0x123",
        "properties": [{"key": "Hat", "value": "Halo"}]
    });

    let upstream_body = json!({
        "traits": [{"key": "Hat", "value": "Halo", "rarity": "1.2"}]
    });

    Mock::given(method("POST"))
        .and(path("/items/traits/rarity"))
        .and(body_json(query.clone()))
        .respond_with(ResponseTemplate::new(200).set_body_json(upstream_body))
        .mount(&upstream)
        .await;

    let addr = start_proxy(upstream.uri()).await;
    let client = reqwest::Client::new();
    let response = client
        .get(format!("http://{addr}/v1/trait-rarities"))
        .json(&query)
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.expect("Failed to parse body");
    assert_eq!(body["status"]["status"], "retrieved");
    assert_eq!(body["status"]["status_code"], 200);
    assert_eq!(body["status"]["error"], "");
    let traits = body["data"]["traits"].as_array().expect("traits array");
    assert_eq!(traits.len(), 1);
    assert_eq!(traits[0]["key"], "Hat");
    assert_eq!(traits[0]["rarity"], "1.2");
}

#[tokio::test]
async fn empty_collection_id_rejected_without_upstream_call() {
    let upstream = MockServer::start().await;

    // Any upstream traffic at all fails the test
    Mock::given(method("POST"))
        .and(path("/items/traits/rarity"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"traits": []})))
        .expect(0)
        .mount(&upstream)
        .await;

    let addr = start_proxy(upstream.uri()).await;
    let client = reqwest::Client::new();
    let response = client
        .get(format!("http://{addr}/v1/trait-rarities"))
        .json(&json!({
            "collectionId": "",
            "properties": [{"key": "Hat", "value": "Halo"}]
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = response.json().await.expect("Failed to parse body");
    assert!(body["data"].is_null());
    assert_eq!(body["status"]["message"], "invalid request body");
    assert_eq!(body["status"]["error"], "invalid collection id");
}

#[tokio::test]
async fn empty_property_value_rejected_without_upstream_call() {
    let upstream = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/items/traits/rarity"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"traits": []})))
        .expect(0)
        .mount(&upstream)
        .await;

    let addr = start_proxy(upstream.uri()).await;
    let client = reqwest::Client::new();
    let response = client
        .get(format!("http://{addr}/v1/trait-rarities"))
        .json(&json!({
            "collectionId": "ETHEREUM:0x123",
            "properties": [{"key": "Hat", "value": ""}]
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = response.json().await.expect("Failed to parse body");
    assert_eq!(body["status"]["message"], "invalid request body");
    assert_eq!(body["status"]["error"], "invalid property param");
}

#[tokio::test]
async fn malformed_json_body_rejected_without_upstream_call() {
    let upstream = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/items/traits/rarity"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"traits": []})))
        .expect(0)
        .mount(&upstream)
        .await;

    let addr = start_proxy(upstream.uri()).await;
    let client = reqwest::Client::new();
    let response = client
        .get(format!("http://{addr}/v1/trait-rarities"))
        .header("content-type", "application/json")
        .body("{not valid json")
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = response.json().await.expect("Failed to parse body");
    assert_eq!(body["status"]["status"], "failed");
    assert_eq!(body["status"]["message"], "invalid request body");
}

#[tokio::test]
async fn trait_rarities_upstream_404_maps_to_404() {
    let upstream = MockServer::start().await;

    let error_body = json!({
        "code": "COLLECTION_NOT_FOUND",
        "message": "Collection was not found"
    });

    Mock::given(method("POST"))
        .and(path("/items/traits/rarity"))
        .respond_with(ResponseTemplate::new(404).set_body_json(error_body))
        .mount(&upstream)
        .await;

    let addr = start_proxy(upstream.uri()).await;
    let client = reqwest::Client::new();
    let response = client
        .get(format!("http://{addr}/v1/trait-rarities"))
        .json(&json!({
            "collectionId": "ETHEREUM:0xdead",
            "properties": [{"key": "Hat", "value": "Halo"}]
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body: Value = response.json().await.expect("Failed to parse body");
    assert_eq!(body["status"]["status_code"], 404);
    assert_eq!(body["status"]["message"], "failed to get trait rarity");
    assert_eq!(
        body["status"]["error"],
        "not found: Collection was not found"
    );
}

#[tokio::test]
async fn trait_rarities_upstream_500_maps_to_500() {
    let upstream = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/items/traits/rarity"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "code": "UNEXPECTED",
            "message": "internal error"
        })))
        .mount(&upstream)
        .await;

    let addr = start_proxy(upstream.uri()).await;
    let client = reqwest::Client::new();
    let response = client
        .get(format!("http://{addr}/v1/trait-rarities"))
        .json(&json!({
            "collectionId": "ETHEREUM:0x123",
            "properties": [{"key": "Hat", "value": "Halo"}]
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = response.json().await.expect("Failed to parse body");
    assert_eq!(
        body["status"]["error"],
        "something went wrong: internal error"
    );
}
