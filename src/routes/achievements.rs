// ABOUTME: Route handlers for achievements
// ABOUTME: Lists a user's unlocked achievements and records new unlocks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{require_non_empty, AppJson};
use crate::errors::AppError;
use crate::logging::AppLogger;
use crate::models::NewAchievement;
use crate::resources::ServerResources;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;

/// Achievement routes handler
pub struct AchievementRoutes;

impl AchievementRoutes {
    /// Create all achievement routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/achievements", post(Self::handle_create))
            .route("/api/achievements/user/:user_id", get(Self::handle_list))
            .with_state(resources)
    }

    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
        Path(user_id): Path<String>,
    ) -> Result<Response, AppError> {
        let achievements = resources.database.list_achievements(&user_id).await?;
        Ok((StatusCode::OK, Json(achievements)).into_response())
    }

    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        AppJson(request): AppJson<NewAchievement>,
    ) -> Result<Response, AppError> {
        require_non_empty(&request.user_id, "userId")?;
        require_non_empty(&request.achievement_type, "type")?;
        require_non_empty(&request.title, "title")?;

        let achievement = resources.database.create_achievement(&request).await?;
        AppLogger::log_database_write("insert", "achievements", &achievement.id);

        Ok((StatusCode::CREATED, Json(achievement)).into_response())
    }
}
