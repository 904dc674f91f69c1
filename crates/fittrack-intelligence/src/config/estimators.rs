// ABOUTME: Tunable constants for the calorie-burn and weight-loss estimators
// ABOUTME: MET table, age and sex adjustments, jitter spread, activity multipliers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Estimator Configuration
//!
//! Defaults reproduce the heuristics the mobile client has always shown,
//! including the 3500 kcal per kilogram rule of thumb.

use fittrack_core::models::ActivityLevel;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Metabolic equivalents for recognized activity labels
const DEFAULT_MET_VALUES: [(&str, f64); 10] = [
    ("running", 11.5),
    ("walking", 3.8),
    ("cycling", 8.0),
    ("swimming", 10.0),
    ("strength_training", 6.0),
    ("yoga", 3.0),
    ("hiit", 12.0),
    ("basketball", 8.0),
    ("tennis", 8.0),
    ("dancing", 5.0),
];

/// Calorie-burn estimator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalorieBurnConfig {
    /// MET per lowercase activity label
    pub met_values: HashMap<String, f64>,
    /// MET used for labels missing from the table
    pub default_met: f64,
    /// Age at which the age adjustment is neutral
    pub reference_age: u32,
    /// Fractional decline per year above the reference age
    pub age_decline_per_year: f64,
    /// Lower bound of the age adjustment
    pub min_age_factor: f64,
    /// Multiplier applied for male users
    pub male_factor: f64,
    /// Half-width of the uniform jitter band (0.1 = ±10%)
    pub jitter_spread: f64,
}

impl Default for CalorieBurnConfig {
    fn default() -> Self {
        Self {
            met_values: DEFAULT_MET_VALUES
                .iter()
                .map(|(label, met)| ((*label).to_owned(), *met))
                .collect(),
            default_met: 6.0,
            reference_age: 25,
            age_decline_per_year: 0.002,
            min_age_factor: 0.8,
            male_factor: 1.1,
            jitter_spread: 0.1,
        }
    }
}

/// Weight-loss timeline estimator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightLossConfig {
    /// Energy deficit assumed per kilogram lost
    pub kcal_per_kg: f64,
    /// Timeline multiplier for sedentary users
    pub sedentary_multiplier: f64,
    /// Timeline multiplier for lightly active users
    pub lightly_active_multiplier: f64,
    /// Timeline multiplier for moderately active users
    pub moderately_active_multiplier: f64,
    /// Timeline multiplier for very active users
    pub very_active_multiplier: f64,
    /// Multiplier when the activity level is missing or unrecognized
    pub default_multiplier: f64,
    /// Metabolic adaptation added per kilogram to lose
    pub adaptation_per_kg: f64,
}

impl Default for WeightLossConfig {
    fn default() -> Self {
        Self {
            kcal_per_kg: 3500.0,
            sedentary_multiplier: 1.2,
            lightly_active_multiplier: 1.0,
            moderately_active_multiplier: 0.9,
            very_active_multiplier: 0.8,
            default_multiplier: 1.0,
            adaptation_per_kg: 0.02,
        }
    }
}

impl WeightLossConfig {
    /// Timeline multiplier for an activity tier
    #[must_use]
    pub const fn multiplier_for(&self, level: Option<ActivityLevel>) -> f64 {
        match level {
            Some(ActivityLevel::Sedentary) => self.sedentary_multiplier,
            Some(ActivityLevel::LightlyActive) => self.lightly_active_multiplier,
            Some(ActivityLevel::ModeratelyActive) => self.moderately_active_multiplier,
            Some(ActivityLevel::VeryActive) => self.very_active_multiplier,
            None => self.default_multiplier,
        }
    }
}
