// ABOUTME: Integration tests for server assembly: health checks, request IDs, CORS, fallback
// ABOUTME: Drives the fully layered router in-process without binding a socket
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;
mod helpers;

use axum::http::StatusCode;
use common::create_test_resources;
use fittrack_server::middleware::REQUEST_ID_HEADER;
use fittrack_server::server::build_router;
use helpers::axum_test::AxumTestRequest;
use serde_json::Value;

#[tokio::test]
async fn test_health_and_readiness() {
    let resources = create_test_resources().await.unwrap();

    let health: Value = AxumTestRequest::get("/health")
        .send(build_router(resources.clone()))
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert_eq!(health["status"], "healthy");
    assert_eq!(health["version"], env!("CARGO_PKG_VERSION"));

    let ready: Value = AxumTestRequest::get("/ready")
        .send(build_router(resources))
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert_eq!(ready["status"], "ready");
    assert_eq!(ready["database"], true);
}

#[tokio::test]
async fn test_request_id_is_echoed_or_generated() {
    let resources = create_test_resources().await.unwrap();

    let echoed = AxumTestRequest::get("/health")
        .header(REQUEST_ID_HEADER, "req_from_client")
        .send(build_router(resources.clone()))
        .await;
    assert_eq!(
        echoed.header(REQUEST_ID_HEADER).as_deref(),
        Some("req_from_client")
    );

    let generated = AxumTestRequest::get("/health")
        .send(build_router(resources))
        .await;
    let id = generated.header(REQUEST_ID_HEADER).unwrap();
    assert!(id.starts_with("req_"));
    assert!(id.len() > "req_".len());
}

#[tokio::test]
async fn test_unknown_route_returns_json_not_found() {
    let resources = create_test_resources().await.unwrap();

    let body: Value = AxumTestRequest::get("/api/does-not-exist")
        .send(build_router(resources))
        .await
        .assert_status(StatusCode::NOT_FOUND)
        .json();
    assert_eq!(body["error"]["code"], "RESOURCE_NOT_FOUND");
}

#[tokio::test]
async fn test_error_envelope_carries_request_id() {
    let resources = create_test_resources().await.unwrap();

    let response = AxumTestRequest::get("/api/does-not-exist")
        .header(REQUEST_ID_HEADER, "req_trace_me")
        .send(build_router(resources.clone()))
        .await;
    assert_eq!(
        response.header(REQUEST_ID_HEADER).as_deref(),
        Some("req_trace_me")
    );
    let body: Value = response.assert_status(StatusCode::NOT_FOUND).json();
    assert_eq!(body["error"]["request_id"], "req_trace_me");

    let body: Value = AxumTestRequest::get("/api/users/missing-user")
        .send(build_router(resources))
        .await
        .assert_status(StatusCode::NOT_FOUND)
        .json();
    let generated = body["error"]["request_id"].as_str().unwrap();
    assert!(generated.starts_with("req_"));
}

#[tokio::test]
async fn test_cors_allows_any_origin_by_default() {
    let resources = create_test_resources().await.unwrap();

    let response = AxumTestRequest::get("/health")
        .header("origin", "http://localhost:5173")
        .send(build_router(resources))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.header("access-control-allow-origin").as_deref(),
        Some("*")
    );
}
