// ABOUTME: Shared server resources passed to every route as axum state
// ABOUTME: Database handle, configuration, prediction constants, and the jitter source
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::ServerConfig;
use crate::database::Database;
use fittrack_intelligence::{JitterSource, PredictionConfig};
use std::sync::Arc;

/// Centralized resource container for dependency injection
///
/// Built once at startup and shared as `Arc<ServerResources>`.
#[derive(Clone)]
pub struct ServerResources {
    /// Persistence layer
    pub database: Arc<Database>,
    /// Server configuration
    pub config: Arc<ServerConfig>,
    /// Estimator tables and nutrition targets
    pub prediction_config: &'static PredictionConfig,
    /// Jitter applied to calorie-burn estimates
    pub jitter: Arc<dyn JitterSource>,
}

impl ServerResources {
    /// Create resources with the jitter mode and prediction constants from configuration
    #[must_use]
    pub fn new(database: Database, config: Arc<ServerConfig>) -> Self {
        let jitter = config.jitter.into_source();
        Self {
            database: Arc::new(database),
            config,
            prediction_config: PredictionConfig::global(),
            jitter,
        }
    }

    /// Replace the jitter source
    #[must_use]
    pub fn with_jitter(mut self, jitter: Arc<dyn JitterSource>) -> Self {
        self.jitter = jitter;
        self
    }
}
