// ABOUTME: Route handlers for nutrition logs and the daily nutrition summary
// ABOUTME: Derives nutrients from the food record unless a log submits all four
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{require_non_empty, AppJson, MessageResponse};
use crate::errors::{AppError, AppResult};
use crate::logging::AppLogger;
use crate::models::{NewNutritionLog, Nutrients};
use crate::resources::ServerResources;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Json, Router,
};
use chrono::{NaiveDate, Utc};
use fittrack_core::constants::time::DAY_FORMAT;
use fittrack_intelligence::{scale_to_quantity, summarize_day};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, warn};

/// Query parameters for day-filtered endpoints
#[derive(Debug, Deserialize, Default)]
pub struct DayQuery {
    /// UTC day in `YYYY-MM-DD` form
    pub date: Option<String>,
}

/// Nutrition routes handler
pub struct NutritionRoutes;

impl NutritionRoutes {
    /// Create all nutrition routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/nutrition-logs", post(Self::handle_create))
            .route("/api/nutrition-logs/:id", delete(Self::handle_delete))
            .route("/api/nutrition-logs/user/:user_id", get(Self::handle_list))
            .route(
                "/api/nutrition-logs/user/:user_id/summary",
                get(Self::handle_summary),
            )
            .with_state(resources)
    }

    fn parse_day(date: Option<&str>) -> AppResult<Option<NaiveDate>> {
        date.filter(|d| !d.trim().is_empty())
            .map(|d| {
                NaiveDate::parse_from_str(d.trim(), DAY_FORMAT).map_err(|_| {
                    AppError::invalid_format(format!("date must be YYYY-MM-DD, got '{d}'"))
                })
            })
            .transpose()
    }

    /// Handle GET /api/nutrition-logs/user/:user_id - Logs newest first
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
        Path(user_id): Path<String>,
        Query(query): Query<DayQuery>,
    ) -> Result<Response, AppError> {
        let day = Self::parse_day(query.date.as_deref())?;
        let logs = resources
            .database
            .list_nutrition_logs(&user_id, day)
            .await?;

        Ok((StatusCode::OK, Json(logs)).into_response())
    }

    /// Handle GET /api/nutrition-logs/user/:user_id/summary - Daily totals and targets
    async fn handle_summary(
        State(resources): State<Arc<ServerResources>>,
        Path(user_id): Path<String>,
        Query(query): Query<DayQuery>,
    ) -> Result<Response, AppError> {
        let day =
            Self::parse_day(query.date.as_deref())?.unwrap_or_else(|| Utc::now().date_naive());
        let logs = resources
            .database
            .list_nutrition_logs(&user_id, Some(day))
            .await?;

        // Latest recorded weight wins over the profile weight
        let body_weight = match resources.database.latest_body_metric(&user_id).await? {
            Some(metric) if metric.weight.is_some() => metric.weight,
            _ => resources
                .database
                .get_user(&user_id)
                .await?
                .and_then(|user| user.weight_kg),
        };
        debug!(user_id, %day, ?body_weight, "Summarizing nutrition day");

        let summary = summarize_day(
            &logs,
            body_weight,
            &resources.prediction_config.nutrition,
        );
        Ok((StatusCode::OK, Json(summary)).into_response())
    }

    /// Handle POST /api/nutrition-logs - Log an eaten quantity
    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        AppJson(request): AppJson<NewNutritionLog>,
    ) -> Result<Response, AppError> {
        require_non_empty(&request.user_id, "userId")?;
        require_non_empty(&request.food_id, "foodId")?;
        if !request.quantity.is_finite() || request.quantity <= 0.0 {
            warn!(quantity = request.quantity, "Nutrition log rejected");
            return Err(AppError::invalid_input(
                "quantity must be a positive number of grams",
            ));
        }

        let nutrients = Self::resolve_nutrients(&resources, &request).await?;
        let log = resources
            .database
            .create_nutrition_log(
                &request.user_id,
                &request.food_id,
                request.meal_type,
                request.quantity,
                nutrients,
            )
            .await?;
        AppLogger::log_database_write("insert", "nutrition_logs", &log.id);

        Ok((StatusCode::CREATED, Json(log)).into_response())
    }

    /// Store a complete submitted set as-is; otherwise derive all four from the food
    async fn resolve_nutrients(
        resources: &ServerResources,
        request: &NewNutritionLog,
    ) -> AppResult<Nutrients> {
        let submitted = [
            ("calories", request.calories),
            ("protein", request.protein),
            ("carbs", request.carbs),
            ("fat", request.fat),
        ];
        for (field, value) in submitted {
            if let Some(value) = value.filter(|v| !v.is_finite() || *v < 0.0) {
                warn!(field, value, "Nutrition log rejected");
                return Err(AppError::invalid_input(format!(
                    "{field} must be a non-negative number"
                ))
                .with_details(json!({ "field": field })));
            }
        }

        if let (Some(calories), Some(protein), Some(carbs), Some(fat)) =
            (request.calories, request.protein, request.carbs, request.fat)
        {
            return Ok(Nutrients {
                calories,
                protein,
                carbs,
                fat,
            });
        }

        let food = resources
            .database
            .get_food(&request.food_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Food {}", request.food_id)))?;
        scale_to_quantity(&food, request.quantity)
    }

    /// Handle DELETE /api/nutrition-logs/:id - Delete a log
    async fn handle_delete(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
    ) -> Result<Response, AppError> {
        if !resources.database.delete_nutrition_log(&id).await? {
            return Err(AppError::not_found(format!("Nutrition log {id}")));
        }
        AppLogger::log_database_write("delete", "nutrition_logs", &id);

        Ok((
            StatusCode::OK,
            Json(MessageResponse::new("Nutrition log deleted successfully")),
        )
            .into_response())
    }
}
