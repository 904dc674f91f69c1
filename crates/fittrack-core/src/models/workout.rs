// ABOUTME: Exercise catalogue, logged workouts, and workout template models
// ABOUTME: Defines ExerciseCategory, DifficultyLevel and the per-exercise set/rep entries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Exercise family used to group the catalogue and templates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseCategory {
    /// Resistance training
    Strength,
    /// Aerobic conditioning
    Cardio,
    /// Mobility and stretching
    Flexibility,
    /// Team and racket sports
    Sports,
}

impl ExerciseCategory {
    /// Convert to database string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Strength => "strength",
            Self::Cardio => "cardio",
            Self::Flexibility => "flexibility",
            Self::Sports => "sports",
        }
    }

    /// Parse from database string representation
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "strength" => Some(Self::Strength),
            "cardio" => Some(Self::Cardio),
            "flexibility" => Some(Self::Flexibility),
            "sports" => Some(Self::Sports),
            _ => None,
        }
    }
}

/// Difficulty of an exercise or template, also the user's experience tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DifficultyLevel {
    /// New to training
    Beginner,
    /// Some training history
    Intermediate,
    /// Experienced trainee
    Advanced,
}

impl DifficultyLevel {
    /// Convert to database string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }

    /// Parse an exact tier key. Unknown labels yield `None`.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "beginner" => Some(Self::Beginner),
            "intermediate" => Some(Self::Intermediate),
            "advanced" => Some(Self::Advanced),
            _ => None,
        }
    }
}

/// Catalogue exercise
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    /// Unique identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Exercise family
    pub category: ExerciseCategory,
    /// Muscle groups worked
    pub muscle_groups: Vec<String>,
    /// Required equipment (bodyweight, barbell, ...)
    pub equipment: Option<String>,
    /// Difficulty tier
    pub difficulty: Option<DifficultyLevel>,
    /// Step-by-step instructions
    pub instructions: Option<String>,
    /// Demonstration video
    pub video_url: Option<String>,
}

/// Catalogue exercise prior to insertion
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewExercise {
    /// Display name
    pub name: String,
    /// Exercise family
    pub category: ExerciseCategory,
    /// Muscle groups worked
    pub muscle_groups: Vec<String>,
    /// Required equipment
    #[serde(default)]
    pub equipment: Option<String>,
    /// Difficulty tier
    #[serde(default)]
    pub difficulty: Option<DifficultyLevel>,
    /// Step-by-step instructions
    #[serde(default)]
    pub instructions: Option<String>,
    /// Demonstration video
    #[serde(default)]
    pub video_url: Option<String>,
}

/// One exercise performed within a logged workout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutExerciseEntry {
    /// Catalogue exercise reference
    pub exercise_id: String,
    /// Number of sets
    pub sets: u32,
    /// Repetitions per set
    pub reps: u32,
    /// Load in kilograms
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    /// Duration in seconds for timed sets
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
}

/// Logged workout session
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workout {
    /// Unique identifier
    pub id: String,
    /// Owning user
    pub user_id: String,
    /// Session name
    pub name: String,
    /// Session type label (strength, cardio, ...)
    #[serde(rename = "type")]
    pub workout_type: Option<String>,
    /// Session length in minutes
    #[serde(rename = "duration")]
    pub duration_minutes: Option<u32>,
    /// Calories burned during the session
    pub calories_burned: Option<u32>,
    /// Exercises performed
    pub exercises: Vec<WorkoutExerciseEntry>,
    /// Free-form notes
    pub notes: Option<String>,
    /// Whether the session was finished
    pub completed: bool,
    /// When the workout was logged
    pub created_at: DateTime<Utc>,
}

/// Request body for logging a workout
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewWorkout {
    /// Owning user
    pub user_id: String,
    /// Session name
    pub name: String,
    /// Session type label
    #[serde(default, rename = "type")]
    pub workout_type: Option<String>,
    /// Session length in minutes
    #[serde(default, rename = "duration")]
    pub duration_minutes: Option<u32>,
    /// Calories burned during the session
    #[serde(default)]
    pub calories_burned: Option<u32>,
    /// Exercises performed
    #[serde(default)]
    pub exercises: Vec<WorkoutExerciseEntry>,
    /// Free-form notes
    #[serde(default)]
    pub notes: Option<String>,
    /// Whether the session was finished
    #[serde(default)]
    pub completed: bool,
}

/// Partial update of a logged workout
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutUpdate {
    /// Session name
    pub name: Option<String>,
    /// Session type label
    #[serde(rename = "type")]
    pub workout_type: Option<String>,
    /// Session length in minutes
    #[serde(rename = "duration")]
    pub duration_minutes: Option<u32>,
    /// Calories burned during the session
    pub calories_burned: Option<u32>,
    /// Exercises performed
    pub exercises: Option<Vec<WorkoutExerciseEntry>>,
    /// Free-form notes
    pub notes: Option<String>,
    /// Whether the session was finished
    pub completed: Option<bool>,
}

/// One exercise prescribed by a template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateExerciseEntry {
    /// Catalogue exercise reference
    pub exercise_id: String,
    /// Number of sets
    pub sets: u32,
    /// Repetitions per set
    pub reps: u32,
    /// Rest between sets in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rest_time: Option<u32>,
}

/// Reusable workout plan
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutTemplate {
    /// Unique identifier
    pub id: String,
    /// Template name
    pub name: String,
    /// Summary of the plan
    pub description: Option<String>,
    /// Exercise family
    pub category: ExerciseCategory,
    /// Difficulty tier
    pub difficulty: DifficultyLevel,
    /// Expected length in minutes
    pub estimated_duration: Option<u32>,
    /// Prescribed exercises
    pub exercises: Vec<TemplateExerciseEntry>,
    /// Whether the template is listed publicly
    pub is_public: bool,
}

/// Workout template prior to insertion
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewWorkoutTemplate {
    /// Template name
    pub name: String,
    /// Summary of the plan
    #[serde(default)]
    pub description: Option<String>,
    /// Exercise family
    pub category: ExerciseCategory,
    /// Difficulty tier
    pub difficulty: DifficultyLevel,
    /// Expected length in minutes
    #[serde(default)]
    pub estimated_duration: Option<u32>,
    /// Prescribed exercises
    pub exercises: Vec<TemplateExerciseEntry>,
    /// Whether the template is listed publicly
    #[serde(default = "default_public")]
    pub is_public: bool,
}

const fn default_public() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_workout_defaults() {
        let workout: NewWorkout = serde_json::from_value(serde_json::json!({
            "userId": "u1",
            "name": "Morning run",
            "type": "cardio",
            "duration": 30
        }))
        .unwrap();

        assert_eq!(workout.workout_type.as_deref(), Some("cardio"));
        assert_eq!(workout.duration_minutes, Some(30));
        assert!(workout.exercises.is_empty());
        assert!(!workout.completed);
    }

    #[test]
    fn test_template_defaults_to_public() {
        let template: NewWorkoutTemplate = serde_json::from_value(serde_json::json!({
            "name": "Push Day",
            "category": "strength",
            "difficulty": "intermediate",
            "exercises": [{ "exerciseId": "e1", "sets": 4, "reps": 8, "restTime": 90 }]
        }))
        .unwrap();

        assert!(template.is_public);
        assert_eq!(template.exercises[0].rest_time, Some(90));
    }

    #[test]
    fn test_difficulty_parse() {
        assert_eq!(
            DifficultyLevel::parse("advanced"),
            Some(DifficultyLevel::Advanced)
        );
        assert_eq!(DifficultyLevel::parse("ADVANCED"), None);
        assert_eq!(DifficultyLevel::parse("expert"), None);
    }
}
