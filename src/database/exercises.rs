// ABOUTME: Exercise catalogue and workout template database operations
// ABOUTME: Category-filtered listings plus inserts used by the API and reference-data seeding
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::Database;
use crate::errors::{AppError, AppResult};
use crate::models::{
    DifficultyLevel, Exercise, ExerciseCategory, NewExercise, NewWorkoutTemplate,
    TemplateExerciseEntry, WorkoutTemplate,
};
use sqlx::{sqlite::SqliteRow, Row};
use uuid::Uuid;

impl Database {
    pub(super) async fn migrate_exercises(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS exercises (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                category TEXT NOT NULL,
                muscle_groups TEXT NOT NULL DEFAULT '[]',
                equipment TEXT,
                difficulty TEXT,
                instructions TEXT,
                video_url TEXT
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS workout_templates (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                description TEXT,
                category TEXT NOT NULL,
                difficulty TEXT NOT NULL,
                estimated_duration INTEGER,
                exercises TEXT NOT NULL DEFAULT '[]',
                is_public INTEGER NOT NULL DEFAULT 1
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_exercises_category ON exercises(category)")
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// List exercises, optionally restricted to one category
    ///
    /// # Errors
    ///
    /// Returns an error if the query or row mapping fails
    pub async fn list_exercises(
        &self,
        category: Option<ExerciseCategory>,
    ) -> AppResult<Vec<Exercise>> {
        let rows = match category {
            Some(category) => {
                sqlx::query("SELECT * FROM exercises WHERE category = $1 ORDER BY rowid")
                    .bind(category.as_str())
                    .fetch_all(&self.pool)
                    .await
            }
            None => {
                sqlx::query("SELECT * FROM exercises ORDER BY rowid")
                    .fetch_all(&self.pool)
                    .await
            }
        }
        .map_err(|e| AppError::database(format!("Failed to list exercises: {e}")))?;

        rows.iter().map(row_to_exercise).collect()
    }

    /// Get an exercise by ID
    ///
    /// # Errors
    ///
    /// Returns an error if the query or row mapping fails
    pub async fn get_exercise(&self, exercise_id: &str) -> AppResult<Option<Exercise>> {
        let row = sqlx::query("SELECT * FROM exercises WHERE id = $1")
            .bind(exercise_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to get exercise: {e}")))?;

        row.map(|r| row_to_exercise(&r)).transpose()
    }

    /// Insert a catalogue exercise
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the insert fails
    pub async fn create_exercise(&self, request: &NewExercise) -> AppResult<Exercise> {
        let exercise = Exercise {
            id: Uuid::new_v4().to_string(),
            name: request.name.clone(),
            category: request.category,
            muscle_groups: request.muscle_groups.clone(),
            equipment: request.equipment.clone(),
            difficulty: request.difficulty,
            instructions: request.instructions.clone(),
            video_url: request.video_url.clone(),
        };

        sqlx::query(
            r"
            INSERT INTO exercises (
                id, name, category, muscle_groups, equipment, difficulty, instructions, video_url
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ",
        )
        .bind(&exercise.id)
        .bind(&exercise.name)
        .bind(exercise.category.as_str())
        .bind(serde_json::to_string(&exercise.muscle_groups)?)
        .bind(&exercise.equipment)
        .bind(exercise.difficulty.map(|difficulty| difficulty.as_str()))
        .bind(&exercise.instructions)
        .bind(&exercise.video_url)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create exercise: {e}")))?;

        Ok(exercise)
    }

    /// Count catalogue exercises
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn count_exercises(&self) -> AppResult<i64> {
        let row = sqlx::query("SELECT COUNT(*) AS count FROM exercises")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to count exercises: {e}")))?;

        Ok(row.get("count"))
    }

    /// List public workout templates, optionally restricted to one category
    ///
    /// # Errors
    ///
    /// Returns an error if the query or row mapping fails
    pub async fn list_public_templates(
        &self,
        category: Option<ExerciseCategory>,
    ) -> AppResult<Vec<WorkoutTemplate>> {
        let rows = match category {
            Some(category) => {
                sqlx::query(
                    "SELECT * FROM workout_templates WHERE is_public = 1 AND category = $1 ORDER BY rowid",
                )
                .bind(category.as_str())
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query("SELECT * FROM workout_templates WHERE is_public = 1 ORDER BY rowid")
                    .fetch_all(&self.pool)
                    .await
            }
        }
        .map_err(|e| AppError::database(format!("Failed to list workout templates: {e}")))?;

        rows.iter().map(row_to_template).collect()
    }

    /// Insert a workout template
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the insert fails
    pub async fn create_template(
        &self,
        request: &NewWorkoutTemplate,
    ) -> AppResult<WorkoutTemplate> {
        let template = WorkoutTemplate {
            id: Uuid::new_v4().to_string(),
            name: request.name.clone(),
            description: request.description.clone(),
            category: request.category,
            difficulty: request.difficulty,
            estimated_duration: request.estimated_duration,
            exercises: request.exercises.clone(),
            is_public: request.is_public,
        };

        sqlx::query(
            r"
            INSERT INTO workout_templates (
                id, name, description, category, difficulty, estimated_duration,
                exercises, is_public
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ",
        )
        .bind(&template.id)
        .bind(&template.name)
        .bind(&template.description)
        .bind(template.category.as_str())
        .bind(template.difficulty.as_str())
        .bind(template.estimated_duration.map(i64::from))
        .bind(serde_json::to_string(&template.exercises)?)
        .bind(i64::from(template.is_public))
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create workout template: {e}")))?;

        Ok(template)
    }
}

fn parse_category(value: &str) -> AppResult<ExerciseCategory> {
    ExerciseCategory::parse(value)
        .ok_or_else(|| AppError::internal(format!("Invalid exercise category: {value}")))
}

fn row_to_exercise(row: &SqliteRow) -> AppResult<Exercise> {
    let category: String = row.get("category");
    let muscle_groups: String = row.get("muscle_groups");
    let difficulty: Option<String> = row.get("difficulty");

    Ok(Exercise {
        id: row.get("id"),
        name: row.get("name"),
        category: parse_category(&category)?,
        muscle_groups: serde_json::from_str(&muscle_groups)?,
        equipment: row.get("equipment"),
        difficulty: difficulty.as_deref().and_then(DifficultyLevel::parse),
        instructions: row.get("instructions"),
        video_url: row.get("video_url"),
    })
}

fn row_to_template(row: &SqliteRow) -> AppResult<WorkoutTemplate> {
    let category: String = row.get("category");
    let difficulty: String = row.get("difficulty");
    let estimated_duration: Option<i64> = row.get("estimated_duration");
    let exercises: String = row.get("exercises");
    let is_public: i64 = row.get("is_public");

    let exercises: Vec<TemplateExerciseEntry> = serde_json::from_str(&exercises)?;

    Ok(WorkoutTemplate {
        id: row.get("id"),
        name: row.get("name"),
        description: row.get("description"),
        category: parse_category(&category)?,
        difficulty: DifficultyLevel::parse(&difficulty)
            .ok_or_else(|| AppError::internal(format!("Invalid difficulty: {difficulty}")))?,
        estimated_duration: estimated_duration.map(super::to_u32),
        exercises,
        is_public: is_public == 1,
    })
}
