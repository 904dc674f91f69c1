// ABOUTME: Heuristic prediction engine for the FitTrack platform
// ABOUTME: Calorie-burn and weight-loss estimators, workout plans, jitter sources, nutrition math
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # FitTrack Intelligence
//!
//! Pure synchronous estimators over immutable tables. The only source of
//! non-determinism is the injected [`jitter::JitterSource`] used by the
//! calorie-burn estimator.
//!
//! ## Modules
//!
//! - **`calorie_burn`**: MET-based calorie estimate with age, sex, and jitter factors
//! - **`weight_loss`**: weeks to target weight from a weekly deficit
//! - **recommendation**: goal × experience workout plan lookup
//! - **nutrition**: per-quantity nutrient scaling and daily summaries
//! - **jitter**: thread, seeded, and fixed jitter sources
//! - **config**: engine constants built once and shared

/// Calorie-burn estimator
pub mod calorie_burn;

/// Engine configuration and validation
pub mod config;

/// Injectable jitter sources
pub mod jitter;

/// Nutrient scaling and daily nutrition summaries
pub mod nutrition;

/// Workout plan selector
pub mod recommendation;

/// Weight-loss timeline estimator
pub mod weight_loss;

pub use calorie_burn::{
    estimate_calorie_burn, predict_calorie_burn, CalorieBurnEstimate, CalorieBurnRequest, Gender,
};
pub use config::{ConfigError, PredictionConfig};
pub use jitter::{FixedJitter, JitterMode, JitterSource, SeededJitter, ThreadRngJitter};
pub use nutrition::{scale_to_quantity, summarize_day, DailyNutritionSummary};
pub use recommendation::{recommend_workout, recommend_workout_for, WorkoutRecommendation};
pub use weight_loss::{
    estimate_weight_loss, predict_weight_loss_weeks, WeightLossEstimate, WeightLossRequest,
};
