// ABOUTME: Workout plan selector keyed by fitness goal and experience tier
// ABOUTME: Fixed lookup table with a weight-loss beginner fallback for unknown keys
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use fittrack_core::models::{DifficultyLevel, FitnessGoal};
use serde::{Deserialize, Serialize};

/// Suggested weekly plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutRecommendation {
    /// Exercise identifiers in suggested order
    pub exercises: Vec<String>,
    /// Session length in minutes
    #[serde(rename = "duration")]
    pub duration_minutes: u32,
    /// Sessions per week
    #[serde(rename = "frequency")]
    pub sessions_per_week: u32,
}

struct PlanEntry {
    goal: FitnessGoal,
    level: DifficultyLevel,
    exercises: &'static [&'static str],
    duration_minutes: u32,
    sessions_per_week: u32,
}

impl PlanEntry {
    fn to_recommendation(&self) -> WorkoutRecommendation {
        WorkoutRecommendation {
            exercises: self.exercises.iter().map(|e| (*e).to_owned()).collect(),
            duration_minutes: self.duration_minutes,
            sessions_per_week: self.sessions_per_week,
        }
    }
}

// First entry doubles as the fallback plan.
const PLAN_TABLE: [PlanEntry; 6] = [
    PlanEntry {
        goal: FitnessGoal::WeightLoss,
        level: DifficultyLevel::Beginner,
        exercises: &["walking", "bodyweight_squats", "push_ups", "planks"],
        duration_minutes: 30,
        sessions_per_week: 3,
    },
    PlanEntry {
        goal: FitnessGoal::WeightLoss,
        level: DifficultyLevel::Intermediate,
        exercises: &["running", "burpees", "mountain_climbers", "jumping_jacks"],
        duration_minutes: 45,
        sessions_per_week: 4,
    },
    PlanEntry {
        goal: FitnessGoal::WeightLoss,
        level: DifficultyLevel::Advanced,
        exercises: &["hiit", "battle_ropes", "kettlebell_swings", "box_jumps"],
        duration_minutes: 60,
        sessions_per_week: 5,
    },
    PlanEntry {
        goal: FitnessGoal::MuscleGain,
        level: DifficultyLevel::Beginner,
        exercises: &["push_ups", "squats", "lunges", "planks"],
        duration_minutes: 45,
        sessions_per_week: 3,
    },
    PlanEntry {
        goal: FitnessGoal::MuscleGain,
        level: DifficultyLevel::Intermediate,
        exercises: &["bench_press", "deadlifts", "squats", "pull_ups"],
        duration_minutes: 60,
        sessions_per_week: 4,
    },
    PlanEntry {
        goal: FitnessGoal::MuscleGain,
        level: DifficultyLevel::Advanced,
        exercises: &[
            "heavy_compound_lifts",
            "progressive_overload",
            "isolation_exercises",
        ],
        duration_minutes: 75,
        sessions_per_week: 5,
    },
];

/// Select the plan for a goal and experience tier
///
/// Missing keys, and goals without a dedicated plan, resolve to the
/// weight-loss beginner plan.
#[must_use]
pub fn recommend_workout(
    goal: Option<FitnessGoal>,
    experience: Option<DifficultyLevel>,
) -> WorkoutRecommendation {
    let fallback = &PLAN_TABLE[0];
    let entry = match (goal, experience) {
        (Some(goal), Some(level)) => PLAN_TABLE
            .iter()
            .find(|entry| entry.goal == goal && entry.level == level)
            .unwrap_or(fallback),
        _ => fallback,
    };
    entry.to_recommendation()
}

/// Select the plan from exact goal and experience keys
#[must_use]
pub fn recommend_workout_for(goal: &str, experience: &str) -> WorkoutRecommendation {
    recommend_workout(FitnessGoal::parse(goal), DifficultyLevel::parse(experience))
}
