// ABOUTME: Route handlers for the food catalogue
// ABOUTME: Barcode lookup, name search, bounded listing, and food create/replace/delete
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{require_non_empty, AppJson, MessageResponse};
use crate::errors::{AppError, AppResult};
use crate::logging::AppLogger;
use crate::models::NewFood;
use crate::resources::ServerResources;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, put},
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;

/// Query parameters for food lookups; barcode wins over search
#[derive(Debug, Deserialize, Default)]
pub struct FoodQuery {
    /// Substring of the food name
    pub search: Option<String>,
    /// Exact barcode
    pub barcode: Option<String>,
}

/// Food routes handler
pub struct FoodRoutes;

impl FoodRoutes {
    /// Create all food routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/foods", get(Self::handle_list).post(Self::handle_create))
            .route(
                "/api/foods/:id",
                put(Self::handle_update).delete(Self::handle_delete),
            )
            .with_state(resources)
    }

    fn validate_new_food(request: &NewFood) -> AppResult<()> {
        require_non_empty(&request.name, "name")?;

        let required = [
            ("caloriesPer100g", request.calories_per_100g),
            ("proteinPer100g", request.protein_per_100g),
            ("carbsPer100g", request.carbs_per_100g),
            ("fatPer100g", request.fat_per_100g),
        ];
        let optional = [
            ("fiberPer100g", request.fiber_per_100g),
            ("sugarPer100g", request.sugar_per_100g),
        ];

        let values = required
            .into_iter()
            .chain(optional.into_iter().filter_map(|(f, v)| v.map(|v| (f, v))));
        for (field, value) in values {
            if !value.is_finite() || value < 0.0 {
                return Err(AppError::invalid_input(format!(
                    "{field} must be a non-negative number"
                )));
            }
        }

        if request
            .serving_sizes
            .iter()
            .any(|size| !size.grams.is_finite() || size.grams <= 0.0)
        {
            return Err(AppError::invalid_input(
                "servingSizes grams must be positive numbers",
            ));
        }
        Ok(())
    }

    /// Handle GET /api/foods - Barcode lookup, name search, or listing
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
        Query(query): Query<FoodQuery>,
    ) -> Result<Response, AppError> {
        let non_empty = |value: Option<String>| value.filter(|v| !v.trim().is_empty());

        let foods = if let Some(barcode) = non_empty(query.barcode) {
            resources
                .database
                .get_food_by_barcode(&barcode)
                .await?
                .into_iter()
                .collect()
        } else if let Some(search) = non_empty(query.search) {
            resources.database.search_foods(&search).await?
        } else {
            resources.database.list_foods().await?
        };

        Ok((StatusCode::OK, Json(foods)).into_response())
    }

    /// Handle POST /api/foods - Create a food
    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        AppJson(request): AppJson<NewFood>,
    ) -> Result<Response, AppError> {
        Self::validate_new_food(&request)?;

        let food = resources.database.create_food(&request).await?;
        AppLogger::log_database_write("insert", "foods", &food.id);

        Ok((StatusCode::CREATED, Json(food)).into_response())
    }

    /// Handle PUT /api/foods/:id - Replace a food
    async fn handle_update(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
        AppJson(request): AppJson<NewFood>,
    ) -> Result<Response, AppError> {
        Self::validate_new_food(&request)?;

        let food = resources
            .database
            .update_food(&id, &request)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Food {id}")))?;
        AppLogger::log_database_write("update", "foods", &food.id);

        Ok((StatusCode::OK, Json(food)).into_response())
    }

    /// Handle DELETE /api/foods/:id - Delete a food
    async fn handle_delete(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
    ) -> Result<Response, AppError> {
        if !resources.database.delete_food(&id).await? {
            return Err(AppError::not_found(format!("Food {id}")));
        }
        AppLogger::log_database_write("delete", "foods", &id);

        Ok((
            StatusCode::OK,
            Json(MessageResponse::new("Food deleted successfully")),
        )
            .into_response())
    }
}
