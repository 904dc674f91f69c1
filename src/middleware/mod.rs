// ABOUTME: HTTP middleware for request tracing and cross-origin access
// ABOUTME: Provides request ID propagation, span creation, and CORS configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// CORS configuration
pub mod cors;
/// Request spans and correlation IDs
pub mod tracing;

pub use cors::setup_cors;
pub use tracing::{create_request_span, request_id_middleware, REQUEST_ID_HEADER};
