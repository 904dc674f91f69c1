// ABOUTME: Core data models and types for the FitTrack API
// ABOUTME: Re-exports User, Workout, Food, BodyMetric, Prediction and related structures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Records persisted by the server and exchanged over the REST API. Every
//! model serializes with camelCase field names, which is the wire contract
//! the mobile client consumes.
//!
//! ## Core Models
//!
//! - `User`: profile, body metrics, goal, and running totals
//! - `Exercise` / `WorkoutTemplate`: reference catalogue
//! - `Workout`: a logged training session
//! - `Food` / `NutritionLog`: food database and meal entries
//! - `BodyMetric`: weight, composition, and tape measurements
//! - `Achievement`: unlocked milestones
//! - `Prediction`: immutable record of a heuristic estimate

mod achievement;
mod body_metric;
mod nutrition;
mod prediction;
mod user;
mod workout;

pub use achievement::{Achievement, NewAchievement};
pub use body_metric::{BodyMeasurements, BodyMetric, NewBodyMetric, ProgressPhotos};
pub use nutrition::{Food, MealType, NewFood, NewNutritionLog, Nutrients, NutritionLog, ServingSize};
pub use prediction::{NewPrediction, Prediction, PredictionKind};
pub use user::{ActivityLevel, FitnessGoal, NewUser, User, UserUpdate};
pub use workout::{
    DifficultyLevel, Exercise, ExerciseCategory, NewExercise, NewWorkout, NewWorkoutTemplate,
    TemplateExerciseEntry, Workout, WorkoutExerciseEntry, WorkoutTemplate, WorkoutUpdate,
};
