// ABOUTME: Nutrient scaling for logged quantities and the daily nutrition summary
// ABOUTME: Totals per day and per meal with calorie and macro targets derived from body weight
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Math
//!
//! Food values are stored per 100 g; a logged quantity scales them linearly.
//! Daily targets scale with body weight when it is known and fall back to
//! fixed defaults otherwise.

use crate::config::NutritionTargetsConfig;
use fittrack_core::errors::{AppError, AppResult};
use fittrack_core::models::{Food, MealType, Nutrients, NutritionLog};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Scale a food's per-100 g values to an eaten quantity
///
/// # Errors
///
/// Returns `InvalidInput` if `grams` is not a positive finite number
pub fn scale_to_quantity(food: &Food, grams: f64) -> AppResult<Nutrients> {
    if !grams.is_finite() || grams <= 0.0 {
        return Err(AppError::invalid_input(
            "Quantity must be a positive number of grams",
        ));
    }

    let ratio = grams / 100.0;
    Ok(Nutrients {
        calories: food.calories_per_100g * ratio,
        protein: food.protein_per_100g * ratio,
        carbs: food.carbs_per_100g * ratio,
        fat: food.fat_per_100g * ratio,
    })
}

/// Daily calorie and macro targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroTargets {
    /// kcal per day
    pub calories: u32,
    /// Protein grams per day
    pub protein: u32,
    /// Carbohydrate grams per day
    pub carbs: u32,
    /// Fat grams per day
    pub fat: u32,
}

/// Consumption as a rounded percentage of each target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroProgress {
    /// Calories eaten vs target
    pub calories: u32,
    /// Protein eaten vs target
    pub protein: u32,
    /// Carbohydrates eaten vs target
    pub carbs: u32,
    /// Fat eaten vs target
    pub fat: u32,
}

/// Totals, per-meal breakdown, and target progress for one day
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyNutritionSummary {
    /// Summed nutrients
    pub totals: Nutrients,
    /// Calories per meal slot; slots without entries are omitted
    pub meal_calories: BTreeMap<MealType, f64>,
    /// Targets for the day
    pub targets: MacroTargets,
    /// Percent of each target reached
    pub progress: MacroProgress,
    /// Number of entries summarized
    pub log_count: usize,
}

/// Compute daily targets, scaling calories and protein by body weight when known
#[must_use]
pub fn daily_targets(body_weight_kg: Option<f64>, config: &NutritionTargetsConfig) -> MacroTargets {
    let weight = body_weight_kg.filter(|w| w.is_finite() && *w > 0.0);
    let calories = weight.map_or(config.default_calories, |w| w * config.calories_per_kg);
    let protein = weight.map_or(config.default_protein, |w| w * config.protein_per_kg);

    MacroTargets {
        calories: calories.round() as u32,
        protein: protein.round() as u32,
        carbs: config.carbs_target.round() as u32,
        fat: config.fat_target.round() as u32,
    }
}

fn percent_of(value: f64, target: u32) -> u32 {
    if target == 0 {
        return 0;
    }
    (value / f64::from(target) * 100.0).round().max(0.0) as u32
}

/// Summarize a day's nutrition logs against weight-derived targets
#[must_use]
pub fn summarize_day(
    logs: &[NutritionLog],
    body_weight_kg: Option<f64>,
    config: &NutritionTargetsConfig,
) -> DailyNutritionSummary {
    let mut meal_calories = BTreeMap::new();
    let totals = logs.iter().fold(Nutrients::default(), |acc, log| {
        *meal_calories.entry(log.meal_type).or_insert(0.0) += log.calories;
        acc + log.nutrients()
    });

    let targets = daily_targets(body_weight_kg, config);
    let progress = MacroProgress {
        calories: percent_of(totals.calories, targets.calories),
        protein: percent_of(totals.protein, targets.protein),
        carbs: percent_of(totals.carbs, targets.carbs),
        fat: percent_of(totals.fat, targets.fat),
    };

    DailyNutritionSummary {
        totals,
        meal_calories,
        targets,
        progress,
        log_count: logs.len(),
    }
}
