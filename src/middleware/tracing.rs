// ABOUTME: Request tracing middleware for correlation and structured logging
// ABOUTME: Creates per-request spans and propagates an x-request-id header
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::ErrorResponse;
use axum::body::Body;
use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use http::HeaderValue;
use tracing::Span;
use uuid::Uuid;

/// Header carrying the correlation ID
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Create a tracing span for an HTTP request
pub fn create_request_span(request: &http::Request<Body>) -> Span {
    tracing::info_span!(
        "http_request",
        method = %request.method(),
        path = %request.uri().path(),
        request_id = tracing::field::Empty,
    )
}

/// Reuse the caller's request ID or generate one, record it, and echo it back
///
/// Error responses carry their envelope as a response extension; the ID is
/// written into `error.request_id` before the body leaves the server.
pub async fn request_id_middleware(mut request: Request, next: Next) -> Response {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map_or_else(|| format!("req_{}", Uuid::new_v4().simple()), str::to_owned);

    Span::current().record("request_id", request_id.as_str());

    let header = HeaderValue::from_str(&request_id).ok();
    if let Some(value) = &header {
        request.headers_mut().insert(REQUEST_ID_HEADER, value.clone());
    }

    let mut response = next.run(request).await;
    if let Some(envelope) = response.extensions_mut().remove::<ErrorResponse>() {
        if let Ok(bytes) = serde_json::to_vec(&envelope.with_request_id(request_id.as_str())) {
            *response.body_mut() = Body::from(bytes);
        }
    }
    if let Some(value) = header {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    response
}
