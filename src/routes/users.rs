// ABOUTME: Route handlers for user profiles
// ABOUTME: Registration with bcrypt password hashing, profile lookup, and partial updates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{require_non_empty, AppJson};
use crate::errors::{AppError, AppResult};
use crate::logging::AppLogger;
use crate::models::{NewUser, UserUpdate};
use crate::resources::ServerResources;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use tracing::warn;

/// User routes handler
pub struct UserRoutes;

impl UserRoutes {
    /// Create all user routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/users", post(Self::handle_create))
            .route(
                "/api/users/:id",
                get(Self::handle_get).patch(Self::handle_update),
            )
            .with_state(resources)
    }

    fn validate_new_user(request: &NewUser) -> AppResult<()> {
        require_non_empty(&request.username, "username")?;
        require_non_empty(&request.full_name, "fullName")?;
        require_non_empty(&request.password, "password")?;
        if !request.email.contains('@') {
            return Err(AppError::invalid_format("email must be a valid address"));
        }
        Ok(())
    }

    /// Handle POST /api/users - Register a user
    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        AppJson(request): AppJson<NewUser>,
    ) -> Result<Response, AppError> {
        if let Err(e) = Self::validate_new_user(&request) {
            warn!(username = %request.username, "User registration rejected: {}", e.message);
            return Err(e);
        }

        let password = request.password.clone();
        let cost = resources.config.bcrypt_cost;
        let password_hash = tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
            .await
            .map_err(|e| AppError::internal(format!("Password hashing task failed: {e}")))?
            .map_err(|e| AppError::internal(format!("Password hashing failed: {e}")))?;

        let user = resources
            .database
            .create_user(&request, &password_hash)
            .await?;
        AppLogger::log_database_write("insert", "users", &user.id);

        Ok((StatusCode::CREATED, Json(user)).into_response())
    }

    /// Handle GET /api/users/:id - Fetch a user profile
    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
    ) -> Result<Response, AppError> {
        let user = resources
            .database
            .get_user(&id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("User {id}")))?;

        Ok((StatusCode::OK, Json(user)).into_response())
    }

    /// Handle PATCH /api/users/:id - Partially update a user profile
    async fn handle_update(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
        AppJson(update): AppJson<UserUpdate>,
    ) -> Result<Response, AppError> {
        if let Some(name) = &update.full_name {
            require_non_empty(name, "fullName")?;
        }

        let user = resources
            .database
            .update_user(&id, &update)
            .await?
            .ok_or_else(|| AppError::not_found(format!("User {id}")))?;
        AppLogger::log_database_write("update", "users", &user.id);

        Ok((StatusCode::OK, Json(user)).into_response())
    }
}
