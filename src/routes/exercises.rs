// ABOUTME: Route handlers for the exercise catalogue and public workout templates
// ABOUTME: Category-filtered listings; unknown categories match nothing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::AppError;
use crate::models::ExerciseCategory;
use crate::resources::ServerResources;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::debug;

/// Query parameters for category-filtered listings
#[derive(Debug, Deserialize, Default)]
pub struct CategoryQuery {
    /// Exercise category (strength, cardio, flexibility, sports)
    pub category: Option<String>,
}

/// Exercise and template routes handler
pub struct ExerciseRoutes;

impl ExerciseRoutes {
    /// Create all exercise catalogue routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/exercises", get(Self::handle_list))
            .route("/api/exercises/:id", get(Self::handle_get))
            .route("/api/workout-templates", get(Self::handle_list_templates))
            .with_state(resources)
    }

    /// `None` when the filter names an unknown category
    fn parse_filter(query: &CategoryQuery) -> Option<Option<ExerciseCategory>> {
        match query.category.as_deref().filter(|c| !c.trim().is_empty()) {
            None => Some(None),
            Some(label) => ExerciseCategory::parse(label).map(Some),
        }
    }

    /// Handle GET /api/exercises - List the catalogue
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
        Query(query): Query<CategoryQuery>,
    ) -> Result<Response, AppError> {
        let Some(category) = Self::parse_filter(&query) else {
            debug!(category = ?query.category, "Unknown exercise category");
            return Ok((StatusCode::OK, Json(Vec::<()>::new())).into_response());
        };

        let exercises = resources.database.list_exercises(category).await?;
        Ok((StatusCode::OK, Json(exercises)).into_response())
    }

    /// Handle GET /api/exercises/:id - Fetch one exercise
    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
    ) -> Result<Response, AppError> {
        let exercise = resources
            .database
            .get_exercise(&id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Exercise {id}")))?;

        Ok((StatusCode::OK, Json(exercise)).into_response())
    }

    /// Handle GET /api/workout-templates - List public templates
    async fn handle_list_templates(
        State(resources): State<Arc<ServerResources>>,
        Query(query): Query<CategoryQuery>,
    ) -> Result<Response, AppError> {
        let Some(category) = Self::parse_filter(&query) else {
            debug!(category = ?query.category, "Unknown template category");
            return Ok((StatusCode::OK, Json(Vec::<()>::new())).into_response());
        };

        let templates = resources.database.list_public_templates(category).await?;
        Ok((StatusCode::OK, Json(templates)).into_response())
    }
}
