// ABOUTME: Daily nutrition target configuration
// ABOUTME: Per-kilogram calorie and protein targets with fixed carb and fat goals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Daily macro targets used by the nutrition summary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NutritionTargetsConfig {
    /// Calorie target per kilogram of body weight
    pub calories_per_kg: f64,
    /// Calorie target when body weight is unknown
    pub default_calories: f64,
    /// Protein grams per kilogram of body weight
    pub protein_per_kg: f64,
    /// Protein grams when body weight is unknown
    pub default_protein: f64,
    /// Carbohydrate grams per day
    pub carbs_target: f64,
    /// Fat grams per day
    pub fat_target: f64,
}

impl Default for NutritionTargetsConfig {
    fn default() -> Self {
        Self {
            calories_per_kg: 25.0,
            default_calories: 2200.0,
            protein_per_kg: 1.6,
            default_protein: 150.0,
            carbs_target: 300.0,
            fat_target: 87.0,
        }
    }
}
