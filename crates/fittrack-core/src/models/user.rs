// ABOUTME: User profile model with activity level and fitness goal enums
// ABOUTME: Defines User, NewUser, UserUpdate and the category parsers used across the engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Self-reported weekly activity tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days a week
    LightlyActive,
    /// Moderate exercise 3-5 days a week
    ModeratelyActive,
    /// Hard exercise 6-7 days a week
    VeryActive,
}

impl ActivityLevel {
    /// Convert to database string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sedentary => "sedentary",
            Self::LightlyActive => "lightly_active",
            Self::ModeratelyActive => "moderately_active",
            Self::VeryActive => "very_active",
        }
    }

    /// Parse an exact tier key. Unknown labels yield `None`.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "sedentary" => Some(Self::Sedentary),
            "lightly_active" => Some(Self::LightlyActive),
            "moderately_active" => Some(Self::ModeratelyActive),
            "very_active" => Some(Self::VeryActive),
            _ => None,
        }
    }
}

/// Primary fitness goal selected during onboarding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitnessGoal {
    /// Reduce body weight
    WeightLoss,
    /// Build muscle
    MuscleGain,
    /// Hold current weight
    Maintenance,
    /// Improve athletic performance
    Performance,
}

impl FitnessGoal {
    /// Convert to database string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::WeightLoss => "weight_loss",
            Self::MuscleGain => "muscle_gain",
            Self::Maintenance => "maintenance",
            Self::Performance => "performance",
        }
    }

    /// Parse an exact goal key. Unknown labels yield `None`.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "weight_loss" => Some(Self::WeightLoss),
            "muscle_gain" => Some(Self::MuscleGain),
            "maintenance" => Some(Self::Maintenance),
            "performance" => Some(Self::Performance),
            _ => None,
        }
    }
}

/// Registered user with onboarding profile and running totals
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique identifier (UUID v4)
    pub id: String,
    /// Unique login name
    pub username: String,
    /// Unique email address
    pub email: String,
    /// Bcrypt hash, never serialized
    #[serde(skip, default)]
    pub password_hash: String,
    /// Display name
    pub full_name: String,
    /// Age in years
    pub age: Option<u32>,
    /// Height in centimeters
    #[serde(rename = "height")]
    pub height_cm: Option<f64>,
    /// Body weight in kilograms
    #[serde(rename = "weight")]
    pub weight_kg: Option<f64>,
    /// Weekly activity tier
    pub activity_level: Option<ActivityLevel>,
    /// Primary goal
    pub goal: Option<FitnessGoal>,
    /// Goal weight in kilograms
    pub target_weight: Option<f64>,
    /// Free-form timeline label ("3 months", ...)
    pub target_timeline: Option<String>,
    /// Whether onboarding has been completed
    pub onboarding_complete: bool,
    /// Consecutive active days
    pub streak_days: u32,
    /// Completed workouts
    pub total_workouts: u32,
    /// Lifetime calories burned
    pub total_calories_burned: u32,
    /// Lifetime workout hours
    pub total_workout_hours: u32,
    /// Number of achievements earned
    pub achievements_unlocked: u32,
    /// Account creation time
    pub created_at: DateTime<Utc>,
}

/// Request body for creating a user
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    /// Unique login name
    pub username: String,
    /// Unique email address
    pub email: String,
    /// Plain-text password, hashed before storage
    pub password: String,
    /// Display name
    pub full_name: String,
    /// Age in years
    #[serde(default)]
    pub age: Option<u32>,
    /// Height in centimeters
    #[serde(default, rename = "height")]
    pub height_cm: Option<f64>,
    /// Body weight in kilograms
    #[serde(default, rename = "weight")]
    pub weight_kg: Option<f64>,
    /// Weekly activity tier
    #[serde(default)]
    pub activity_level: Option<ActivityLevel>,
    /// Primary goal
    #[serde(default)]
    pub goal: Option<FitnessGoal>,
    /// Goal weight in kilograms
    #[serde(default)]
    pub target_weight: Option<f64>,
    /// Free-form timeline label
    #[serde(default)]
    pub target_timeline: Option<String>,
    /// Whether onboarding is already complete
    #[serde(default)]
    pub onboarding_complete: bool,
}

/// Partial update of a user profile; absent fields keep their stored value
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    /// Display name
    pub full_name: Option<String>,
    /// Age in years
    pub age: Option<u32>,
    /// Height in centimeters
    #[serde(rename = "height")]
    pub height_cm: Option<f64>,
    /// Body weight in kilograms
    #[serde(rename = "weight")]
    pub weight_kg: Option<f64>,
    /// Weekly activity tier
    pub activity_level: Option<ActivityLevel>,
    /// Primary goal
    pub goal: Option<FitnessGoal>,
    /// Goal weight in kilograms
    pub target_weight: Option<f64>,
    /// Free-form timeline label
    pub target_timeline: Option<String>,
    /// Onboarding flag
    pub onboarding_complete: Option<bool>,
    /// Consecutive active days
    pub streak_days: Option<u32>,
    /// Completed workouts
    pub total_workouts: Option<u32>,
    /// Lifetime calories burned
    pub total_calories_burned: Option<u32>,
    /// Lifetime workout hours
    pub total_workout_hours: Option<u32>,
    /// Number of achievements earned
    pub achievements_unlocked: Option<u32>,
}
