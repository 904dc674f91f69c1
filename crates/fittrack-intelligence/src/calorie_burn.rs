// ABOUTME: MET-based calorie-burn estimator with age, sex, and jitter adjustments
// ABOUTME: Returns a rounded kcal estimate together with the factors that produced it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Calorie-Burn Estimator
//!
//! `kcal = MET × weight_kg × hours × age_factor × sex_factor × jitter`
//!
//! The MET (metabolic equivalent of task) comes from a fixed activity table;
//! unknown activities fall back to a moderate default. The age factor declines
//! linearly above the reference age and is floored; it rises slightly for
//! younger users.

use crate::config::{CalorieBurnConfig, PredictionConfig};
use crate::jitter::JitterSource;
use fittrack_core::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Biological sex used for the fixed calorie multiplier
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Male (higher multiplier)
    Male,
    /// Female or unspecified
    #[default]
    Female,
}

impl Gender {
    /// Parse a label; anything other than exactly `male` counts as female
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        if s == "male" {
            Self::Male
        } else {
            Self::Female
        }
    }
}

/// Inputs for a calorie-burn estimate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalorieBurnRequest {
    /// Activity label, matched case-insensitively against the MET table
    pub activity: String,
    /// Session length in minutes
    pub duration_minutes: f64,
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Age in years
    pub age_years: u32,
    /// Biological sex
    pub gender: Gender,
}

/// Calorie-burn estimate with its contributing factors
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalorieBurnEstimate {
    /// MET used for the activity
    pub met: f64,
    /// MET × weight × hours, before adjustments
    pub base_calories: f64,
    /// Age adjustment applied
    pub age_factor: f64,
    /// Sex adjustment applied
    pub sex_factor: f64,
    /// Jitter factor drawn for this estimate
    pub jitter_factor: f64,
    /// Final rounded estimate
    pub calories: u32,
}

impl CalorieBurnEstimate {
    /// Estimate with the jitter factor removed, unrounded
    #[must_use]
    pub fn deterministic_calories(&self) -> f64 {
        self.base_calories * self.age_factor * self.sex_factor
    }
}

/// Look up the MET for an activity label
#[must_use]
pub fn met_for_activity(activity: &str, config: &CalorieBurnConfig) -> f64 {
    config
        .met_values
        .get(activity.trim().to_lowercase().as_str())
        .copied()
        .unwrap_or(config.default_met)
}

/// Age adjustment: `max(min_factor, 1 - (age - reference) × decline)`
#[must_use]
pub fn age_adjustment(age_years: u32, config: &CalorieBurnConfig) -> f64 {
    let years_past_reference = f64::from(age_years) - f64::from(config.reference_age);
    (1.0 - years_past_reference * config.age_decline_per_year).max(config.min_age_factor)
}

/// Sex adjustment multiplier
#[must_use]
pub const fn sex_adjustment(gender: Gender, config: &CalorieBurnConfig) -> f64 {
    match gender {
        Gender::Male => config.male_factor,
        Gender::Female => 1.0,
    }
}

/// Estimate calories burned for an activity session
///
/// # Errors
///
/// Returns `InvalidInput` if duration or weight is not a positive finite number
pub fn estimate_calorie_burn(
    request: &CalorieBurnRequest,
    config: &CalorieBurnConfig,
    jitter: &dyn JitterSource,
) -> AppResult<CalorieBurnEstimate> {
    if !request.duration_minutes.is_finite() || request.duration_minutes <= 0.0 {
        return Err(AppError::invalid_input(
            "Duration must be a positive number of minutes",
        ));
    }
    if !request.weight_kg.is_finite() || request.weight_kg <= 0.0 {
        return Err(AppError::invalid_input(
            "Weight must be a positive number of kilograms",
        ));
    }

    let met = met_for_activity(&request.activity, config);
    let base_calories = met * request.weight_kg * (request.duration_minutes / 60.0);
    let age_factor = age_adjustment(request.age_years, config);
    let sex_factor = sex_adjustment(request.gender, config);
    let jitter_factor = jitter.factor(config.jitter_spread);

    let calories = base_calories * age_factor * sex_factor * jitter_factor;
    if !calories.is_finite() || calories > f64::from(u32::MAX) {
        return Err(AppError::invalid_input(
            "Calorie estimate is out of range for the given inputs",
        ));
    }

    debug!(
        activity = %request.activity,
        met,
        base_calories,
        age_factor,
        sex_factor,
        jitter_factor,
        "calorie burn estimated"
    );

    Ok(CalorieBurnEstimate {
        met,
        base_calories,
        age_factor,
        sex_factor,
        jitter_factor,
        calories: calories.round() as u32,
    })
}

/// Estimate calories burned using the global configuration
///
/// # Errors
///
/// Returns `InvalidInput` if duration or weight is not a positive finite number
pub fn predict_calorie_burn(
    request: &CalorieBurnRequest,
    jitter: &dyn JitterSource,
) -> AppResult<u32> {
    estimate_calorie_burn(request, &PredictionConfig::global().calorie_burn, jitter)
        .map(|estimate| estimate.calories)
}
