// ABOUTME: User profile database operations
// ABOUTME: Handles registration storage, profile lookups, and partial profile updates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{format_timestamp, parse_timestamp, to_u32, Database};
use crate::errors::{AppError, AppResult, ErrorCode};
use crate::models::{ActivityLevel, FitnessGoal, NewUser, User, UserUpdate};
use chrono::Utc;
use sqlx::{sqlite::SqliteRow, Row};
use tracing::debug;
use uuid::Uuid;

impl Database {
    /// Create the users table
    ///
    /// # Errors
    ///
    /// Returns an error if table or index creation fails
    pub(super) async fn migrate_users(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS users (
                id TEXT PRIMARY KEY,
                username TEXT UNIQUE NOT NULL,
                email TEXT UNIQUE NOT NULL,
                password_hash TEXT NOT NULL,
                full_name TEXT NOT NULL,
                age INTEGER,
                height_cm REAL,
                weight_kg REAL,
                activity_level TEXT,
                goal TEXT,
                target_weight REAL,
                target_timeline TEXT,
                onboarding_complete INTEGER NOT NULL DEFAULT 0,
                streak_days INTEGER NOT NULL DEFAULT 0,
                total_workouts INTEGER NOT NULL DEFAULT 0,
                total_calories_burned INTEGER NOT NULL DEFAULT 0,
                total_workout_hours INTEGER NOT NULL DEFAULT 0,
                achievements_unlocked INTEGER NOT NULL DEFAULT 0,
                created_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_users_email ON users(email)")
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Store a new user with an already hashed password
    ///
    /// # Errors
    ///
    /// Returns `ResourceAlreadyExists` if the username or email is taken
    pub async fn create_user(&self, request: &NewUser, password_hash: &str) -> AppResult<User> {
        let user = User {
            id: Uuid::new_v4().to_string(),
            username: request.username.clone(),
            email: request.email.clone(),
            password_hash: password_hash.to_owned(),
            full_name: request.full_name.clone(),
            age: request.age,
            height_cm: request.height_cm,
            weight_kg: request.weight_kg,
            activity_level: request.activity_level,
            goal: request.goal,
            target_weight: request.target_weight,
            target_timeline: request.target_timeline.clone(),
            onboarding_complete: request.onboarding_complete,
            streak_days: 0,
            total_workouts: 0,
            total_calories_burned: 0,
            total_workout_hours: 0,
            achievements_unlocked: 0,
            created_at: Utc::now(),
        };

        sqlx::query(
            r"
            INSERT INTO users (
                id, username, email, password_hash, full_name, age, height_cm, weight_kg,
                activity_level, goal, target_weight, target_timeline, onboarding_complete,
                created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            ",
        )
        .bind(&user.id)
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(&user.full_name)
        .bind(user.age.map(i64::from))
        .bind(user.height_cm)
        .bind(user.weight_kg)
        .bind(user.activity_level.map(|level| level.as_str()))
        .bind(user.goal.map(|goal| goal.as_str()))
        .bind(user.target_weight)
        .bind(&user.target_timeline)
        .bind(i64::from(user.onboarding_complete))
        .bind(format_timestamp(&user.created_at))
        .execute(&self.pool)
        .await
        .map_err(|e| {
            let error = AppError::from(e);
            if error.code == ErrorCode::ResourceAlreadyExists {
                AppError::already_exists("Username or email already registered")
            } else {
                error
            }
        })?;

        Ok(user)
    }

    /// Get a user by ID
    ///
    /// # Errors
    ///
    /// Returns an error if the query or row mapping fails
    pub async fn get_user(&self, user_id: &str) -> AppResult<Option<User>> {
        debug!(user_id, "Fetching user");
        let row = sqlx::query("SELECT * FROM users WHERE id = $1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to get user: {e}")))?;

        row.map(|r| row_to_user(&r)).transpose()
    }

    /// Get a user by username
    ///
    /// # Errors
    ///
    /// Returns an error if the query or row mapping fails
    pub async fn get_user_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let row = sqlx::query("SELECT * FROM users WHERE username = $1")
            .bind(username)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to get user by username: {e}")))?;

        row.map(|r| row_to_user(&r)).transpose()
    }

    /// Apply a partial profile update, returning `None` if the user does not exist
    ///
    /// # Errors
    ///
    /// Returns an error if the query or row mapping fails
    pub async fn update_user(&self, user_id: &str, update: &UserUpdate) -> AppResult<Option<User>> {
        let Some(existing) = self.get_user(user_id).await? else {
            return Ok(None);
        };

        let user = User {
            full_name: update.full_name.clone().unwrap_or(existing.full_name),
            age: update.age.or(existing.age),
            height_cm: update.height_cm.or(existing.height_cm),
            weight_kg: update.weight_kg.or(existing.weight_kg),
            activity_level: update.activity_level.or(existing.activity_level),
            goal: update.goal.or(existing.goal),
            target_weight: update.target_weight.or(existing.target_weight),
            target_timeline: update
                .target_timeline
                .clone()
                .or(existing.target_timeline),
            onboarding_complete: update
                .onboarding_complete
                .unwrap_or(existing.onboarding_complete),
            streak_days: update.streak_days.unwrap_or(existing.streak_days),
            total_workouts: update.total_workouts.unwrap_or(existing.total_workouts),
            total_calories_burned: update
                .total_calories_burned
                .unwrap_or(existing.total_calories_burned),
            total_workout_hours: update
                .total_workout_hours
                .unwrap_or(existing.total_workout_hours),
            achievements_unlocked: update
                .achievements_unlocked
                .unwrap_or(existing.achievements_unlocked),
            ..existing
        };

        let result = sqlx::query(
            r"
            UPDATE users SET
                full_name = $1, age = $2, height_cm = $3, weight_kg = $4,
                activity_level = $5, goal = $6, target_weight = $7, target_timeline = $8,
                onboarding_complete = $9, streak_days = $10, total_workouts = $11,
                total_calories_burned = $12, total_workout_hours = $13,
                achievements_unlocked = $14
            WHERE id = $15
            ",
        )
        .bind(&user.full_name)
        .bind(user.age.map(i64::from))
        .bind(user.height_cm)
        .bind(user.weight_kg)
        .bind(user.activity_level.map(|level| level.as_str()))
        .bind(user.goal.map(|goal| goal.as_str()))
        .bind(user.target_weight)
        .bind(&user.target_timeline)
        .bind(i64::from(user.onboarding_complete))
        .bind(i64::from(user.streak_days))
        .bind(i64::from(user.total_workouts))
        .bind(i64::from(user.total_calories_burned))
        .bind(i64::from(user.total_workout_hours))
        .bind(i64::from(user.achievements_unlocked))
        .bind(user_id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to update user: {e}")))?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        Ok(Some(user))
    }
}

fn row_to_user(row: &SqliteRow) -> AppResult<User> {
    let age: Option<i64> = row.get("age");
    let activity_level: Option<String> = row.get("activity_level");
    let goal: Option<String> = row.get("goal");
    let onboarding_complete: i64 = row.get("onboarding_complete");
    let created_at: String = row.get("created_at");

    Ok(User {
        id: row.get("id"),
        username: row.get("username"),
        email: row.get("email"),
        password_hash: row.get("password_hash"),
        full_name: row.get("full_name"),
        age: age.map(to_u32),
        height_cm: row.get("height_cm"),
        weight_kg: row.get("weight_kg"),
        activity_level: activity_level.as_deref().and_then(ActivityLevel::parse),
        goal: goal.as_deref().and_then(FitnessGoal::parse),
        target_weight: row.get("target_weight"),
        target_timeline: row.get("target_timeline"),
        onboarding_complete: onboarding_complete == 1,
        streak_days: to_u32(row.get("streak_days")),
        total_workouts: to_u32(row.get("total_workouts")),
        total_calories_burned: to_u32(row.get("total_calories_burned")),
        total_workout_hours: to_u32(row.get("total_workout_hours")),
        achievements_unlocked: to_u32(row.get("achievements_unlocked")),
        created_at: parse_timestamp(&created_at)?,
    })
}
