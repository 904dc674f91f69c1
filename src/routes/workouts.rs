// ABOUTME: Route handlers for logged workouts
// ABOUTME: Per-user history, creation, partial update, and deletion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{require_non_empty, AppJson, MessageResponse};
use crate::errors::AppError;
use crate::logging::AppLogger;
use crate::models::{NewWorkout, WorkoutUpdate};
use crate::resources::ServerResources;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, patch, post},
    Json, Router,
};
use std::sync::Arc;

/// Workout routes handler
pub struct WorkoutRoutes;

impl WorkoutRoutes {
    /// Create all workout routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/workouts", post(Self::handle_create))
            .route("/api/workouts/user/:user_id", get(Self::handle_list))
            .route(
                "/api/workouts/:id",
                patch(Self::handle_update).delete(Self::handle_delete),
            )
            .with_state(resources)
    }

    /// Handle GET /api/workouts/user/:user_id - Workout history, newest first
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
        Path(user_id): Path<String>,
    ) -> Result<Response, AppError> {
        let workouts = resources.database.list_workouts(&user_id).await?;
        Ok((StatusCode::OK, Json(workouts)).into_response())
    }

    /// Handle POST /api/workouts - Record a workout
    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        AppJson(request): AppJson<NewWorkout>,
    ) -> Result<Response, AppError> {
        require_non_empty(&request.user_id, "userId")?;
        require_non_empty(&request.name, "name")?;

        let workout = resources.database.create_workout(&request).await?;
        AppLogger::log_database_write("insert", "workouts", &workout.id);

        Ok((StatusCode::CREATED, Json(workout)).into_response())
    }

    /// Handle PATCH /api/workouts/:id - Partially update a workout
    async fn handle_update(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
        AppJson(update): AppJson<WorkoutUpdate>,
    ) -> Result<Response, AppError> {
        if let Some(name) = &update.name {
            require_non_empty(name, "name")?;
        }

        let workout = resources
            .database
            .update_workout(&id, &update)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Workout {id}")))?;
        AppLogger::log_database_write("update", "workouts", &workout.id);

        Ok((StatusCode::OK, Json(workout)).into_response())
    }

    /// Handle DELETE /api/workouts/:id - Delete a workout
    async fn handle_delete(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
    ) -> Result<Response, AppError> {
        if !resources.database.delete_workout(&id).await? {
            return Err(AppError::not_found(format!("Workout {id}")));
        }
        AppLogger::log_database_write("delete", "workouts", &id);

        Ok((
            StatusCode::OK,
            Json(MessageResponse::new("Workout deleted successfully")),
        )
            .into_response())
    }
}
