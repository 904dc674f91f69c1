// ABOUTME: Weight-loss timeline estimator from weight delta, weekly deficit, and activity tier
// ABOUTME: Applies the 3500 kcal/kg rule, an activity multiplier, and a metabolic adaptation factor
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Weight-Loss Timeline Estimator
//!
//! `weeks = (Δkg × kcal_per_kg / weekly_deficit) × activity_multiplier × (1 + Δkg × adaptation)`
//!
//! Deterministic: identical inputs always produce identical timelines.

use crate::config::{PredictionConfig, WeightLossConfig};
use fittrack_core::errors::{AppError, AppResult};
use fittrack_core::models::ActivityLevel;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Inputs for a weight-loss timeline estimate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightLossRequest {
    /// Current body weight in kilograms
    pub current_weight_kg: f64,
    /// Goal body weight in kilograms
    pub target_weight_kg: f64,
    /// Planned calorie deficit per week
    pub weekly_calorie_deficit: f64,
    /// Activity tier; `None` when missing or unrecognized
    pub activity_level: Option<ActivityLevel>,
}

/// Timeline estimate with its contributing factors
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightLossEstimate {
    /// Kilograms between current and target weight
    pub weight_to_lose_kg: f64,
    /// Total deficit required
    pub total_calories: f64,
    /// Weeks before adjustments
    pub base_weeks: f64,
    /// Activity multiplier applied
    pub activity_multiplier: f64,
    /// Metabolic adaptation factor applied
    pub adaptation_factor: f64,
    /// Final rounded number of weeks
    pub weeks: u32,
}

/// Timeline multiplier for an activity tier
#[must_use]
pub const fn activity_multiplier(level: Option<ActivityLevel>, config: &WeightLossConfig) -> f64 {
    config.multiplier_for(level)
}

/// Slowdown from metabolic adaptation: `1 + Δkg × adaptation_per_kg`
#[must_use]
pub fn adaptation_factor(weight_to_lose_kg: f64, config: &WeightLossConfig) -> f64 {
    weight_to_lose_kg.mul_add(config.adaptation_per_kg, 1.0)
}

fn require_positive(value: f64, what: &str) -> AppResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(AppError::invalid_input(format!(
            "{what} must be a positive number"
        )))
    }
}

/// Estimate weeks needed to reach a target weight
///
/// # Errors
///
/// Returns `InvalidInput` if a weight or the deficit is not a positive finite
/// number, or if the target is above the current weight
pub fn estimate_weight_loss(
    request: &WeightLossRequest,
    config: &WeightLossConfig,
) -> AppResult<WeightLossEstimate> {
    require_positive(request.current_weight_kg, "Current weight")?;
    require_positive(request.target_weight_kg, "Target weight")?;
    require_positive(request.weekly_calorie_deficit, "Weekly calorie deficit")?;

    if request.target_weight_kg > request.current_weight_kg {
        return Err(AppError::invalid_input(
            "Target weight must not exceed current weight",
        ));
    }

    let weight_to_lose_kg = request.current_weight_kg - request.target_weight_kg;
    let total_calories = weight_to_lose_kg * config.kcal_per_kg;
    let base_weeks = total_calories / request.weekly_calorie_deficit;
    let multiplier = activity_multiplier(request.activity_level, config);
    let adaptation = adaptation_factor(weight_to_lose_kg, config);

    let weeks = base_weeks * multiplier * adaptation;
    if !weeks.is_finite() || weeks > f64::from(u32::MAX) {
        return Err(AppError::invalid_input(
            "Weight-loss timeline is out of range for the given inputs",
        ));
    }

    debug!(
        weight_to_lose_kg,
        base_weeks,
        multiplier,
        adaptation,
        "weight loss timeline estimated"
    );

    Ok(WeightLossEstimate {
        weight_to_lose_kg,
        total_calories,
        base_weeks,
        activity_multiplier: multiplier,
        adaptation_factor: adaptation,
        weeks: weeks.round() as u32,
    })
}

/// Estimate weeks needed using the global configuration
///
/// # Errors
///
/// Returns `InvalidInput` for the same conditions as [`estimate_weight_loss`]
pub fn predict_weight_loss_weeks(request: &WeightLossRequest) -> AppResult<u32> {
    estimate_weight_loss(request, &PredictionConfig::global().weight_loss)
        .map(|estimate| estimate.weeks)
}
