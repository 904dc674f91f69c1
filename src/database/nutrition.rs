// ABOUTME: Nutrition log database operations
// ABOUTME: Per-user listing with an optional UTC day window, creation, and deletion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{format_timestamp, parse_timestamp, Database};
use crate::errors::{AppError, AppResult};
use crate::models::{MealType, Nutrients, NutritionLog};
use chrono::{Days, NaiveDate, Utc};
use sqlx::{sqlite::SqliteRow, Row};
use uuid::Uuid;

impl Database {
    pub(super) async fn migrate_nutrition(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS nutrition_logs (
                id TEXT PRIMARY KEY,
                user_id TEXT NOT NULL,
                food_id TEXT NOT NULL,
                meal_type TEXT NOT NULL,
                quantity REAL NOT NULL,
                calories REAL NOT NULL,
                protein REAL NOT NULL,
                carbs REAL NOT NULL,
                fat REAL NOT NULL,
                logged_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_nutrition_logs_user_id ON nutrition_logs(user_id, logged_at)",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// List a user's nutrition logs newest first, optionally for one UTC day
    ///
    /// # Errors
    ///
    /// Returns an error if the query or row mapping fails
    pub async fn list_nutrition_logs(
        &self,
        user_id: &str,
        day: Option<NaiveDate>,
    ) -> AppResult<Vec<NutritionLog>> {
        let rows = match day {
            Some(day) => {
                let start = day.and_time(chrono::NaiveTime::MIN).and_utc();
                let end = start
                    .checked_add_days(Days::new(1))
                    .ok_or_else(|| AppError::invalid_input(format!("Date out of range: {day}")))?;

                sqlx::query(
                    r"
                    SELECT * FROM nutrition_logs
                    WHERE user_id = $1 AND logged_at >= $2 AND logged_at < $3
                    ORDER BY logged_at DESC, rowid DESC
                    ",
                )
                .bind(user_id)
                .bind(format_timestamp(&start))
                .bind(format_timestamp(&end))
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query(
                    "SELECT * FROM nutrition_logs WHERE user_id = $1 ORDER BY logged_at DESC, rowid DESC",
                )
                .bind(user_id)
                .fetch_all(&self.pool)
                .await
            }
        }
        .map_err(|e| AppError::database(format!("Failed to list nutrition logs: {e}")))?;

        rows.iter().map(row_to_nutrition_log).collect()
    }

    /// Record an eaten quantity with its resolved nutrient values
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails
    pub async fn create_nutrition_log(
        &self,
        user_id: &str,
        food_id: &str,
        meal_type: MealType,
        quantity: f64,
        nutrients: Nutrients,
    ) -> AppResult<NutritionLog> {
        let log = NutritionLog {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_owned(),
            food_id: food_id.to_owned(),
            meal_type,
            quantity,
            calories: nutrients.calories,
            protein: nutrients.protein,
            carbs: nutrients.carbs,
            fat: nutrients.fat,
            logged_at: Utc::now(),
        };

        sqlx::query(
            r"
            INSERT INTO nutrition_logs (
                id, user_id, food_id, meal_type, quantity, calories, protein, carbs, fat, logged_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            ",
        )
        .bind(&log.id)
        .bind(&log.user_id)
        .bind(&log.food_id)
        .bind(log.meal_type.as_str())
        .bind(log.quantity)
        .bind(log.calories)
        .bind(log.protein)
        .bind(log.carbs)
        .bind(log.fat)
        .bind(format_timestamp(&log.logged_at))
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create nutrition log: {e}")))?;

        Ok(log)
    }

    /// Delete a nutrition log
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails
    pub async fn delete_nutrition_log(&self, log_id: &str) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM nutrition_logs WHERE id = $1")
            .bind(log_id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to delete nutrition log: {e}")))?;

        Ok(result.rows_affected() > 0)
    }
}

fn row_to_nutrition_log(row: &SqliteRow) -> AppResult<NutritionLog> {
    let meal_type: String = row.get("meal_type");
    let logged_at: String = row.get("logged_at");

    Ok(NutritionLog {
        id: row.get("id"),
        user_id: row.get("user_id"),
        food_id: row.get("food_id"),
        meal_type: MealType::parse(&meal_type)
            .ok_or_else(|| AppError::internal(format!("Invalid meal type: {meal_type}")))?,
        quantity: row.get("quantity"),
        calories: row.get("calories"),
        protein: row.get("protein"),
        carbs: row.get("carbs"),
        fat: row.get("fat"),
        logged_at: parse_timestamp(&logged_at)?,
    })
}
