// ABOUTME: Achievement database operations
// ABOUTME: Lists unlocked achievements per user and records new unlocks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{format_timestamp, parse_timestamp, Database};
use crate::errors::{AppError, AppResult};
use crate::models::{Achievement, NewAchievement};
use chrono::Utc;
use sqlx::{sqlite::SqliteRow, Row};
use uuid::Uuid;

impl Database {
    pub(super) async fn migrate_achievements(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS achievements (
                id TEXT PRIMARY KEY,
                user_id TEXT NOT NULL,
                achievement_type TEXT NOT NULL,
                title TEXT NOT NULL,
                description TEXT NOT NULL,
                icon_name TEXT NOT NULL,
                unlocked_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_achievements_user_id ON achievements(user_id)",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// List a user's achievements, newest first
    ///
    /// # Errors
    ///
    /// Returns an error if the query or row mapping fails
    pub async fn list_achievements(&self, user_id: &str) -> AppResult<Vec<Achievement>> {
        let rows = sqlx::query(
            "SELECT * FROM achievements WHERE user_id = $1 ORDER BY unlocked_at DESC, rowid DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to list achievements: {e}")))?;

        rows.iter().map(row_to_achievement).collect()
    }

    /// Record an unlocked achievement
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails
    pub async fn create_achievement(&self, request: &NewAchievement) -> AppResult<Achievement> {
        let achievement = Achievement {
            id: Uuid::new_v4().to_string(),
            user_id: request.user_id.clone(),
            achievement_type: request.achievement_type.clone(),
            title: request.title.clone(),
            description: request.description.clone(),
            icon_name: request.icon_name.clone(),
            unlocked_at: Utc::now(),
        };

        sqlx::query(
            r"
            INSERT INTO achievements (
                id, user_id, achievement_type, title, description, icon_name, unlocked_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            ",
        )
        .bind(&achievement.id)
        .bind(&achievement.user_id)
        .bind(&achievement.achievement_type)
        .bind(&achievement.title)
        .bind(&achievement.description)
        .bind(&achievement.icon_name)
        .bind(format_timestamp(&achievement.unlocked_at))
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create achievement: {e}")))?;

        Ok(achievement)
    }
}

fn row_to_achievement(row: &SqliteRow) -> AppResult<Achievement> {
    let unlocked_at: String = row.get("unlocked_at");

    Ok(Achievement {
        id: row.get("id"),
        user_id: row.get("user_id"),
        achievement_type: row.get("achievement_type"),
        title: row.get("title"),
        description: row.get("description"),
        icon_name: row.get("icon_name"),
        unlocked_at: parse_timestamp(&unlocked_at)?,
    })
}
