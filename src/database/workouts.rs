// ABOUTME: Logged workout database operations
// ABOUTME: Per-user listing newest first, creation, partial update, and deletion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{format_timestamp, parse_timestamp, to_u32, Database};
use crate::errors::{AppError, AppResult};
use crate::models::{NewWorkout, Workout, WorkoutExerciseEntry, WorkoutUpdate};
use chrono::Utc;
use sqlx::{sqlite::SqliteRow, Row};
use uuid::Uuid;

impl Database {
    pub(super) async fn migrate_workouts(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS workouts (
                id TEXT PRIMARY KEY,
                user_id TEXT NOT NULL,
                name TEXT NOT NULL,
                workout_type TEXT,
                duration_minutes INTEGER,
                calories_burned INTEGER,
                exercises TEXT NOT NULL DEFAULT '[]',
                notes TEXT,
                completed INTEGER NOT NULL DEFAULT 0,
                created_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_workouts_user_id ON workouts(user_id)")
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// List a user's workouts, newest first
    ///
    /// # Errors
    ///
    /// Returns an error if the query or row mapping fails
    pub async fn list_workouts(&self, user_id: &str) -> AppResult<Vec<Workout>> {
        let rows = sqlx::query(
            "SELECT * FROM workouts WHERE user_id = $1 ORDER BY created_at DESC, rowid DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to list workouts: {e}")))?;

        rows.iter().map(row_to_workout).collect()
    }

    /// Get a workout by ID
    ///
    /// # Errors
    ///
    /// Returns an error if the query or row mapping fails
    pub async fn get_workout(&self, workout_id: &str) -> AppResult<Option<Workout>> {
        let row = sqlx::query("SELECT * FROM workouts WHERE id = $1")
            .bind(workout_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to get workout: {e}")))?;

        row.map(|r| row_to_workout(&r)).transpose()
    }

    /// Record a workout
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the insert fails
    pub async fn create_workout(&self, request: &NewWorkout) -> AppResult<Workout> {
        let workout = Workout {
            id: Uuid::new_v4().to_string(),
            user_id: request.user_id.clone(),
            name: request.name.clone(),
            workout_type: request.workout_type.clone(),
            duration_minutes: request.duration_minutes,
            calories_burned: request.calories_burned,
            exercises: request.exercises.clone(),
            notes: request.notes.clone(),
            completed: request.completed,
            created_at: Utc::now(),
        };

        sqlx::query(
            r"
            INSERT INTO workouts (
                id, user_id, name, workout_type, duration_minutes, calories_burned,
                exercises, notes, completed, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            ",
        )
        .bind(&workout.id)
        .bind(&workout.user_id)
        .bind(&workout.name)
        .bind(&workout.workout_type)
        .bind(workout.duration_minutes.map(i64::from))
        .bind(workout.calories_burned.map(i64::from))
        .bind(serde_json::to_string(&workout.exercises)?)
        .bind(&workout.notes)
        .bind(i64::from(workout.completed))
        .bind(format_timestamp(&workout.created_at))
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create workout: {e}")))?;

        Ok(workout)
    }

    /// Apply a partial update, returning `None` if the workout does not exist
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the update fails
    pub async fn update_workout(
        &self,
        workout_id: &str,
        update: &WorkoutUpdate,
    ) -> AppResult<Option<Workout>> {
        let Some(existing) = self.get_workout(workout_id).await? else {
            return Ok(None);
        };

        let workout = Workout {
            name: update.name.clone().unwrap_or(existing.name),
            workout_type: update.workout_type.clone().or(existing.workout_type),
            duration_minutes: update.duration_minutes.or(existing.duration_minutes),
            calories_burned: update.calories_burned.or(existing.calories_burned),
            exercises: update.exercises.clone().unwrap_or(existing.exercises),
            notes: update.notes.clone().or(existing.notes),
            completed: update.completed.unwrap_or(existing.completed),
            ..existing
        };

        let result = sqlx::query(
            r"
            UPDATE workouts SET
                name = $1, workout_type = $2, duration_minutes = $3, calories_burned = $4,
                exercises = $5, notes = $6, completed = $7
            WHERE id = $8
            ",
        )
        .bind(&workout.name)
        .bind(&workout.workout_type)
        .bind(workout.duration_minutes.map(i64::from))
        .bind(workout.calories_burned.map(i64::from))
        .bind(serde_json::to_string(&workout.exercises)?)
        .bind(&workout.notes)
        .bind(i64::from(workout.completed))
        .bind(workout_id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to update workout: {e}")))?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        Ok(Some(workout))
    }

    /// Delete a workout
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails
    pub async fn delete_workout(&self, workout_id: &str) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM workouts WHERE id = $1")
            .bind(workout_id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to delete workout: {e}")))?;

        Ok(result.rows_affected() > 0)
    }
}

fn row_to_workout(row: &SqliteRow) -> AppResult<Workout> {
    let duration_minutes: Option<i64> = row.get("duration_minutes");
    let calories_burned: Option<i64> = row.get("calories_burned");
    let exercises: String = row.get("exercises");
    let completed: i64 = row.get("completed");
    let created_at: String = row.get("created_at");

    let exercises: Vec<WorkoutExerciseEntry> = serde_json::from_str(&exercises)?;

    Ok(Workout {
        id: row.get("id"),
        user_id: row.get("user_id"),
        name: row.get("name"),
        workout_type: row.get("workout_type"),
        duration_minutes: duration_minutes.map(to_u32),
        calories_burned: calories_burned.map(to_u32),
        exercises,
        notes: row.get("notes"),
        completed: completed == 1,
        created_at: parse_timestamp(&created_at)?,
    })
}
