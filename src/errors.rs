// ABOUTME: Unified error handling re-exported from the core crate
// ABOUTME: AppError, ErrorCode, and the JSON error envelope used by every HTTP handler
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Errors are defined in `fittrack_core::errors` so the prediction engine and
//! the server share one type. The `http-response` feature provides the axum
//! `IntoResponse` implementation used here.

pub use fittrack_core::errors::*;
