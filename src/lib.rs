// ABOUTME: Main library entry point for the FitTrack fitness tracking API
// ABOUTME: REST routes over SQLite plus heuristic calorie-burn and weight-loss estimates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # FitTrack Server
//!
//! Backend for a personal fitness tracker. Users log workouts, meals, and
//! body measurements; the server stores them in `SQLite` and answers two
//! kinds of heuristic predictions (calories burned by an activity session
//! and weeks to reach a target weight) together with fixed workout plan
//! recommendations.
//!
//! ## Architecture
//!
//! - **`fittrack_core`**: error types, domain models, constants
//! - **`fittrack_intelligence`**: pure estimators and the injectable jitter source
//! - **database**: `SQLite` persistence, one file per entity
//! - **routes**: axum handlers grouped per resource
//! - **server**: router assembly, middleware layers, serve loop
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use fittrack_server::config::ServerConfig;
//! use fittrack_server::database::Database;
//! use fittrack_server::resources::ServerResources;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Arc::new(ServerConfig::from_env()?);
//!     let database = Database::new(&config.database.to_connection_string()).await?;
//!     let resources = Arc::new(ServerResources::new(database, config));
//!     fittrack_server::server::serve(resources).await
//! }
//! ```

/// Environment-driven server configuration
pub mod config;

/// `SQLite` persistence layer
pub mod database;

/// Unified error handling (re-exported from `fittrack-core`)
pub mod errors;

/// Structured logging setup
pub mod logging;

/// HTTP middleware: request IDs, spans, CORS
pub mod middleware;

/// Domain models (re-exported from `fittrack-core`)
pub mod models;

/// Shared server resources handed to every route group
pub mod resources;

/// REST route handlers
pub mod routes;

/// Router assembly and serve loop
pub mod server;

pub use fittrack_intelligence as intelligence;
