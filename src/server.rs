// ABOUTME: HTTP server assembly and lifecycle for the FitTrack API
// ABOUTME: Merges every route group, applies tracing and CORS layers, serves until shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # HTTP Server
//!
//! [`build_router`] produces the complete application so integration tests
//! can drive it in-process; [`serve`] binds it to the configured address.

use crate::errors::AppError;
use crate::middleware::{create_request_span, request_id_middleware, setup_cors};
use crate::resources::ServerResources;
use crate::routes::{
    AchievementRoutes, BodyMetricRoutes, ExerciseRoutes, FoodRoutes, HealthRoutes,
    NutritionRoutes, PredictionRoutes, RecommendationRoutes, UserRoutes, WorkoutRoutes,
};
use anyhow::{Context, Result};
use axum::{middleware, Router};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Build the application router with all routes and middleware
pub fn build_router(resources: Arc<ServerResources>) -> Router {
    let cors = setup_cors(&resources.config.cors);

    Router::new()
        .merge(HealthRoutes::routes(resources.clone()))
        .merge(UserRoutes::routes(resources.clone()))
        .merge(ExerciseRoutes::routes(resources.clone()))
        .merge(WorkoutRoutes::routes(resources.clone()))
        .merge(FoodRoutes::routes(resources.clone()))
        .merge(NutritionRoutes::routes(resources.clone()))
        .merge(BodyMetricRoutes::routes(resources.clone()))
        .merge(AchievementRoutes::routes(resources.clone()))
        .merge(PredictionRoutes::routes(resources.clone()))
        .merge(RecommendationRoutes::routes(resources))
        .fallback(|| async { AppError::not_found("Route") })
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http().make_span_with(create_request_span))
        .layer(cors)
}

/// Bind the configured address and serve until SIGINT or SIGTERM
///
/// # Errors
///
/// Returns an error if the listener cannot be bound or the server fails
pub async fn serve(resources: Arc<ServerResources>) -> Result<()> {
    let address = resources.config.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {address}"))?;
    info!("FitTrack server listening on {address}");

    axum::serve(listener, build_router(resources))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("FitTrack server stopped");
    Ok(())
}

async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                tokio::select! {
                    _ = sigterm.recv() => {}
                    _ = tokio::signal::ctrl_c() => {}
                }
            }
            Err(e) => {
                warn!("SIGTERM handler unavailable: {e}");
                let _ = tokio::signal::ctrl_c().await;
            }
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
    info!("Shutdown signal received, draining connections");
}
