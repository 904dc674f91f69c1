// ABOUTME: Route module organization for FitTrack HTTP endpoints
// ABOUTME: One module per domain, each exposing a Routes type that builds its axum Router
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Route module for the FitTrack server
//!
//! Each domain module contains route definitions and thin handlers that
//! validate input, call the database or prediction engine, and shape JSON.

/// Achievement listing and unlock routes
pub mod achievements;
/// Body metric routes
pub mod body_metrics;
/// Exercise catalogue and workout template routes
pub mod exercises;
/// Food catalogue routes
pub mod foods;
/// Health check and readiness routes
pub mod health;
/// Nutrition log and daily summary routes
pub mod nutrition;
/// Prediction engine routes
pub mod predictions;
/// Workout plan recommendation routes
pub mod recommendations;
/// User profile routes
pub mod users;
/// Logged workout routes
pub mod workouts;

pub use achievements::AchievementRoutes;
pub use body_metrics::BodyMetricRoutes;
pub use exercises::ExerciseRoutes;
pub use foods::FoodRoutes;
pub use health::HealthRoutes;
pub use nutrition::NutritionRoutes;
pub use predictions::PredictionRoutes;
pub use recommendations::RecommendationRoutes;
pub use users::UserRoutes;
pub use workouts::WorkoutRoutes;

use crate::errors::{AppError, AppResult};
use axum::extract::FromRequest;
use serde::Serialize;
use serde_json::json;

/// JSON body extractor whose rejections use the standard error envelope
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Body returned by delete endpoints
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    /// Human-readable outcome
    pub message: String,
}

impl MessageResponse {
    /// Wrap a message
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Reject blank required string fields
pub(crate) fn require_non_empty(value: &str, field: &str) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::invalid_input(format!("{field} is required"))
            .with_details(json!({ "field": field })));
    }
    Ok(())
}
