// ABOUTME: Route handlers for heuristic predictions
// ABOUTME: Runs the calorie-burn and weight-loss estimators and persists each result
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Prediction routes
//!
//! Every successful estimate is stored as an immutable [`Prediction`]
//! record whose `inputData` echoes the submitted body minus `userId`.
//! The stored confidence is fixed per estimator kind.

use super::{require_non_empty, AppJson};
use crate::errors::{AppError, AppResult};
use crate::logging::AppLogger;
use crate::models::{ActivityLevel, NewPrediction, Prediction, PredictionKind};
use crate::resources::ServerResources;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use fittrack_intelligence::{
    estimate_calorie_burn, estimate_weight_loss, CalorieBurnRequest, Gender, WeightLossRequest,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tracing::warn;

/// Body of POST /api/predictions/calorie-burn
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalorieBurnBody {
    /// User the prediction is recorded for
    pub user_id: String,
    /// Activity label, looked up in the MET table
    pub exercise_type: String,
    /// Session length in minutes
    pub duration: f64,
    /// Body weight in kilograms
    pub weight: f64,
    /// Age in whole years
    pub age: f64,
    /// Sex label; anything other than `male` counts as female
    #[serde(default)]
    pub gender: String,
}

/// Body of POST /api/predictions/weight-loss
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightLossBody {
    /// User the prediction is recorded for
    pub user_id: String,
    /// Current weight in kilograms
    pub current_weight: f64,
    /// Target weight in kilograms
    pub target_weight: f64,
    /// Planned weekly calorie deficit in kcal
    pub weekly_calorie_deficit: f64,
    /// Activity tier label; unknown labels count as neutral
    #[serde(default)]
    pub activity_level: Option<String>,
}

/// Query parameters for listing predictions
#[derive(Debug, Deserialize, Default)]
pub struct PredictionQuery {
    /// Estimator kind (`calorie_burn` or `weight_loss`)
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

/// Prediction routes handler
pub struct PredictionRoutes;

impl PredictionRoutes {
    /// Create all prediction routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/api/predictions/calorie-burn",
                post(Self::handle_calorie_burn),
            )
            .route("/api/predictions/weight-loss", post(Self::handle_weight_loss))
            .route("/api/predictions/user/:user_id", get(Self::handle_list))
            .with_state(resources)
    }

    fn whole_years(age: f64) -> AppResult<u32> {
        if !age.is_finite() || age < 0.0 || age > f64::from(u32::MAX) {
            return Err(AppError::invalid_input(
                "Age must be a non-negative number of years",
            ));
        }
        Ok(age.round() as u32)
    }

    /// Handle POST /api/predictions/calorie-burn - Estimate and record calories burned
    async fn handle_calorie_burn(
        State(resources): State<Arc<ServerResources>>,
        AppJson(body): AppJson<CalorieBurnBody>,
    ) -> Result<Response, AppError> {
        require_non_empty(&body.user_id, "userId")?;

        let request = CalorieBurnRequest {
            activity: body.exercise_type.clone(),
            duration_minutes: body.duration,
            weight_kg: body.weight,
            age_years: Self::whole_years(body.age)?,
            gender: Gender::from_str_lossy(&body.gender),
        };
        let estimate = estimate_calorie_burn(
            &request,
            &resources.prediction_config.calorie_burn,
            resources.jitter.as_ref(),
        )
        .inspect_err(|e| warn!(user_id = %body.user_id, "Calorie burn prediction rejected: {e}"))?;

        let record = Self::persist(
            &resources,
            NewPrediction {
                user_id: body.user_id,
                kind: PredictionKind::CalorieBurn,
                input_data: json!({
                    "exerciseType": body.exercise_type,
                    "duration": body.duration,
                    "weight": body.weight,
                    "age": body.age,
                    "gender": body.gender,
                }),
                prediction: f64::from(estimate.calories),
            },
        )
        .await?;

        Ok((StatusCode::CREATED, Json(record)).into_response())
    }

    /// Handle POST /api/predictions/weight-loss - Estimate and record weeks to target
    async fn handle_weight_loss(
        State(resources): State<Arc<ServerResources>>,
        AppJson(body): AppJson<WeightLossBody>,
    ) -> Result<Response, AppError> {
        require_non_empty(&body.user_id, "userId")?;

        let request = WeightLossRequest {
            current_weight_kg: body.current_weight,
            target_weight_kg: body.target_weight,
            weekly_calorie_deficit: body.weekly_calorie_deficit,
            activity_level: body.activity_level.as_deref().and_then(ActivityLevel::parse),
        };
        let estimate = estimate_weight_loss(&request, &resources.prediction_config.weight_loss)
            .inspect_err(|e| {
                warn!(user_id = %body.user_id, "Weight loss prediction rejected: {e}");
            })?;

        let record = Self::persist(
            &resources,
            NewPrediction {
                user_id: body.user_id,
                kind: PredictionKind::WeightLoss,
                input_data: json!({
                    "currentWeight": body.current_weight,
                    "targetWeight": body.target_weight,
                    "weeklyCalorieDeficit": body.weekly_calorie_deficit,
                    "activityLevel": body.activity_level,
                }),
                prediction: f64::from(estimate.weeks),
            },
        )
        .await?;

        Ok((StatusCode::CREATED, Json(record)).into_response())
    }

    async fn persist(resources: &ServerResources, new: NewPrediction) -> AppResult<Prediction> {
        let record = resources.database.create_prediction(new).await?;
        AppLogger::log_prediction(&record.user_id, record.prediction_type, record.prediction);
        Ok(record)
    }

    /// Handle GET /api/predictions/user/:user_id - History, newest first
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
        Path(user_id): Path<String>,
        Query(query): Query<PredictionQuery>,
    ) -> Result<Response, AppError> {
        let predictions = match query.kind.as_deref().filter(|k| !k.is_empty()) {
            None => resources.database.list_predictions(&user_id, None).await?,
            Some(label) => match PredictionKind::parse(label) {
                Some(kind) => {
                    resources
                        .database
                        .list_predictions(&user_id, Some(kind))
                        .await?
                }
                None => Vec::new(),
            },
        };

        Ok((StatusCode::OK, Json(predictions)).into_response())
    }
}
