// ABOUTME: Route handlers for body metrics
// ABOUTME: Per-user history, latest reading, and new measurements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{require_non_empty, AppJson};
use crate::errors::AppError;
use crate::logging::AppLogger;
use crate::models::NewBodyMetric;
use crate::resources::ServerResources;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;

/// Body metric routes handler
pub struct BodyMetricRoutes;

impl BodyMetricRoutes {
    /// Create all body metric routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/body-metrics", post(Self::handle_create))
            .route("/api/body-metrics/user/:user_id", get(Self::handle_list))
            .route(
                "/api/body-metrics/user/:user_id/latest",
                get(Self::handle_latest),
            )
            .with_state(resources)
    }

    /// Handle GET /api/body-metrics/user/:user_id - History, newest first
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
        Path(user_id): Path<String>,
    ) -> Result<Response, AppError> {
        let metrics = resources.database.list_body_metrics(&user_id).await?;
        Ok((StatusCode::OK, Json(metrics)).into_response())
    }

    /// Handle GET /api/body-metrics/user/:user_id/latest - Latest reading or `null`
    async fn handle_latest(
        State(resources): State<Arc<ServerResources>>,
        Path(user_id): Path<String>,
    ) -> Result<Response, AppError> {
        let metric = resources.database.latest_body_metric(&user_id).await?;
        Ok((StatusCode::OK, Json(metric)).into_response())
    }

    /// Handle POST /api/body-metrics - Record a measurement
    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        AppJson(request): AppJson<NewBodyMetric>,
    ) -> Result<Response, AppError> {
        require_non_empty(&request.user_id, "userId")?;
        let readings = [
            ("weight", request.weight),
            ("bodyFat", request.body_fat),
            ("muscleMass", request.muscle_mass),
        ];
        if let Some((field, _)) = readings
            .iter()
            .find(|(_, value)| value.is_some_and(|v| !v.is_finite() || v <= 0.0))
        {
            return Err(AppError::invalid_input(format!(
                "{field} must be a positive number"
            )));
        }

        let metric = resources.database.create_body_metric(&request).await?;
        AppLogger::log_database_write("insert", "body_metrics", &metric.id);

        Ok((StatusCode::CREATED, Json(metric)).into_response())
    }
}
