// ABOUTME: Reference data seeding for the exercise catalogue and public workout templates
// ABOUTME: Runs once per database; skipped whenever any exercise already exists
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::Database;
use crate::errors::{AppError, AppResult};
use crate::models::{
    DifficultyLevel, ExerciseCategory, NewExercise, NewWorkoutTemplate, TemplateExerciseEntry,
};
use std::collections::HashMap;
use tracing::info;

struct SeedExercise {
    name: &'static str,
    category: ExerciseCategory,
    muscle_groups: &'static [&'static str],
    equipment: &'static str,
    difficulty: DifficultyLevel,
    instructions: &'static str,
}

const SEED_EXERCISES: [SeedExercise; 4] = [
    SeedExercise {
        name: "Push-ups",
        category: ExerciseCategory::Strength,
        muscle_groups: &["chest", "triceps", "shoulders"],
        equipment: "bodyweight",
        difficulty: DifficultyLevel::Beginner,
        instructions: "Start in plank position, lower body until chest nearly touches floor, push back up",
    },
    SeedExercise {
        name: "Bench Press",
        category: ExerciseCategory::Strength,
        muscle_groups: &["chest", "triceps", "shoulders"],
        equipment: "barbell",
        difficulty: DifficultyLevel::Intermediate,
        instructions: "Lie on bench, lower bar to chest, press back up",
    },
    SeedExercise {
        name: "Pull-ups",
        category: ExerciseCategory::Strength,
        muscle_groups: &["back", "biceps"],
        equipment: "pull-up bar",
        difficulty: DifficultyLevel::Intermediate,
        instructions: "Hang from bar, pull body up until chin over bar",
    },
    SeedExercise {
        name: "Running",
        category: ExerciseCategory::Cardio,
        muscle_groups: &["legs", "core"],
        equipment: "none",
        difficulty: DifficultyLevel::Beginner,
        instructions: "Maintain steady pace, land on forefoot",
    },
];

impl Database {
    /// Insert the exercise catalogue and the public templates built on it
    ///
    /// Returns `false` when the catalogue was already present.
    ///
    /// # Errors
    ///
    /// Returns an error if any insert fails
    pub async fn seed_reference_data(&self) -> AppResult<bool> {
        if self.count_exercises().await? > 0 {
            info!("Reference data already present, skipping seed");
            return Ok(false);
        }

        let mut ids_by_name = HashMap::new();
        for seed in &SEED_EXERCISES {
            let exercise = self
                .create_exercise(&NewExercise {
                    name: seed.name.to_owned(),
                    category: seed.category,
                    muscle_groups: seed.muscle_groups.iter().map(|&m| m.to_owned()).collect(),
                    equipment: Some(seed.equipment.to_owned()),
                    difficulty: Some(seed.difficulty),
                    instructions: Some(seed.instructions.to_owned()),
                    video_url: None,
                })
                .await?;
            ids_by_name.insert(seed.name, exercise.id);
        }

        let entry = |name: &str, sets, reps, rest_time| -> AppResult<TemplateExerciseEntry> {
            let exercise_id = ids_by_name
                .get(name)
                .cloned()
                .ok_or_else(|| AppError::internal(format!("Seed exercise {name} missing")))?;
            Ok(TemplateExerciseEntry {
                exercise_id,
                sets,
                reps,
                rest_time: Some(rest_time),
            })
        };

        let templates = [
            NewWorkoutTemplate {
                name: "Push Day - Upper Body".to_owned(),
                description: Some(
                    "Focus on pushing movements for chest, shoulders, and triceps".to_owned(),
                ),
                category: ExerciseCategory::Strength,
                difficulty: DifficultyLevel::Intermediate,
                estimated_duration: Some(45),
                exercises: vec![entry("Bench Press", 4, 8, 90)?, entry("Push-ups", 3, 12, 60)?],
                is_public: true,
            },
            NewWorkoutTemplate {
                name: "HIIT Cardio Blast".to_owned(),
                description: Some(
                    "High-intensity interval training for maximum calorie burn".to_owned(),
                ),
                category: ExerciseCategory::Cardio,
                difficulty: DifficultyLevel::Intermediate,
                estimated_duration: Some(25),
                exercises: vec![entry("Running", 6, 30, 30)?],
                is_public: true,
            },
        ];

        for template in &templates {
            self.create_template(template).await?;
        }

        info!(
            exercises = SEED_EXERCISES.len(),
            templates = templates.len(),
            "Seeded reference data"
        );
        Ok(true)
    }
}
