// ABOUTME: Application-wide constants for the FitTrack platform
// ABOUTME: Prediction confidence scores, service names, and query limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Fixed confidence scores attached to persisted prediction records
pub mod confidence {
    /// Confidence recorded for calorie-burn estimates
    pub const CALORIE_BURN: f64 = 0.85;
    /// Confidence recorded for weight-loss timeline estimates
    pub const WEIGHT_LOSS: f64 = 0.75;
}

/// Service identifiers used in structured logs
pub mod service_names {
    /// Name of the HTTP API server
    pub const FITTRACK_SERVER: &str = "fittrack-server";
}

/// Result size limits for list endpoints
pub mod limits {
    /// Maximum foods returned by an unfiltered listing
    pub const FOOD_LIST_LIMIT: i64 = 100;
    /// Maximum foods returned by a name search
    pub const FOOD_SEARCH_LIMIT: i64 = 20;
}

/// Timestamp formatting shared by storage and API layers
pub mod time {
    /// Date format accepted by day-filtered endpoints
    pub const DAY_FORMAT: &str = "%Y-%m-%d";
}
