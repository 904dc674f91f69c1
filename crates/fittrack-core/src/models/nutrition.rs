// ABOUTME: Food database and meal logging models
// ABOUTME: Food, ServingSize, NutritionLog, MealType, and the Nutrients macro bundle
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Type of meal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    /// Breakfast meal
    Breakfast,
    /// Lunch meal
    Lunch,
    /// Dinner meal
    Dinner,
    /// Snack between meals
    Snack,
}

impl MealType {
    /// Convert to database string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
            Self::Snack => "snack",
        }
    }

    /// Parse meal type from string
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "breakfast" => Some(Self::Breakfast),
            "lunch" => Some(Self::Lunch),
            "dinner" => Some(Self::Dinner),
            "snack" => Some(Self::Snack),
            _ => None,
        }
    }
}

/// Named portion of a food ("1 cup", "1 slice")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServingSize {
    /// Portion label
    pub name: String,
    /// Portion weight in grams
    pub grams: f64,
}

/// Food database entry; nutrient values are per 100 g
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Food {
    /// Unique identifier
    pub id: String,
    /// Food name
    pub name: String,
    /// Brand name (if applicable)
    pub brand: Option<String>,
    /// Product barcode
    pub barcode: Option<String>,
    /// Energy per 100 g
    pub calories_per_100g: f64,
    /// Protein grams per 100 g
    pub protein_per_100g: f64,
    /// Carbohydrate grams per 100 g
    pub carbs_per_100g: f64,
    /// Fat grams per 100 g
    pub fat_per_100g: f64,
    /// Fiber grams per 100 g
    pub fiber_per_100g: Option<f64>,
    /// Sugar grams per 100 g
    pub sugar_per_100g: Option<f64>,
    /// Named portions
    pub serving_sizes: Vec<ServingSize>,
}

/// Food prior to insertion
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFood {
    /// Food name
    pub name: String,
    /// Brand name
    #[serde(default)]
    pub brand: Option<String>,
    /// Product barcode
    #[serde(default)]
    pub barcode: Option<String>,
    /// Energy per 100 g
    pub calories_per_100g: f64,
    /// Protein grams per 100 g
    pub protein_per_100g: f64,
    /// Carbohydrate grams per 100 g
    pub carbs_per_100g: f64,
    /// Fat grams per 100 g
    pub fat_per_100g: f64,
    /// Fiber grams per 100 g
    #[serde(default)]
    pub fiber_per_100g: Option<f64>,
    /// Sugar grams per 100 g
    #[serde(default)]
    pub sugar_per_100g: Option<f64>,
    /// Named portions
    #[serde(default)]
    pub serving_sizes: Vec<ServingSize>,
}

/// Energy and macronutrients for an eaten quantity
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Nutrients {
    /// Energy in kcal
    pub calories: f64,
    /// Protein in grams
    pub protein: f64,
    /// Carbohydrates in grams
    pub carbs: f64,
    /// Fat in grams
    pub fat: f64,
}

impl std::ops::Add for Nutrients {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            calories: self.calories + other.calories,
            protein: self.protein + other.protein,
            carbs: self.carbs + other.carbs,
            fat: self.fat + other.fat,
        }
    }
}

/// Logged food intake
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionLog {
    /// Unique identifier
    pub id: String,
    /// Owning user
    pub user_id: String,
    /// Food eaten
    pub food_id: String,
    /// Meal slot
    pub meal_type: MealType,
    /// Quantity eaten in grams
    pub quantity: f64,
    /// Energy in kcal
    pub calories: f64,
    /// Protein in grams
    pub protein: f64,
    /// Carbohydrates in grams
    pub carbs: f64,
    /// Fat in grams
    pub fat: f64,
    /// When the entry was logged
    pub logged_at: DateTime<Utc>,
}

impl NutritionLog {
    /// Nutrients recorded on this entry
    #[must_use]
    pub const fn nutrients(&self) -> Nutrients {
        Nutrients {
            calories: self.calories,
            protein: self.protein,
            carbs: self.carbs,
            fat: self.fat,
        }
    }
}

/// Request body for logging food; omitted nutrients are derived from the food
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewNutritionLog {
    /// Owning user
    pub user_id: String,
    /// Food eaten
    pub food_id: String,
    /// Meal slot
    pub meal_type: MealType,
    /// Quantity eaten in grams
    pub quantity: f64,
    /// Energy in kcal
    #[serde(default)]
    pub calories: Option<f64>,
    /// Protein in grams
    #[serde(default)]
    pub protein: Option<f64>,
    /// Carbohydrates in grams
    #[serde(default)]
    pub carbs: Option<f64>,
    /// Fat in grams
    #[serde(default)]
    pub fat: Option<f64>,
}
