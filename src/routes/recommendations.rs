// ABOUTME: Route handler for workout plan recommendations
// ABOUTME: Maps goal and experience query labels to a fixed weekly plan
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::resources::ServerResources;
use axum::{extract::Query, routing::get, Json, Router};
use fittrack_intelligence::{recommend_workout_for, WorkoutRecommendation};
use serde::Deserialize;
use std::sync::Arc;

/// Query parameters for plan selection
#[derive(Debug, Deserialize, Default)]
pub struct RecommendationQuery {
    /// Fitness goal label
    #[serde(default)]
    pub goal: String,
    /// Experience tier label
    #[serde(default)]
    pub experience: String,
}

/// Recommendation routes handler
pub struct RecommendationRoutes;

impl RecommendationRoutes {
    /// Create the recommendation route
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/recommendations", get(Self::handle_recommend))
            .with_state(resources)
    }

    async fn handle_recommend(
        Query(query): Query<RecommendationQuery>,
    ) -> Json<WorkoutRecommendation> {
        Json(recommend_workout_for(&query.goal, &query.experience))
    }
}
