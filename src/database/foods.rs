// ABOUTME: Food database operations
// ABOUTME: Listing, name search, barcode lookup, and CRUD of per-100 g food records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::Database;
use crate::errors::{AppError, AppResult};
use crate::models::{Food, NewFood, ServingSize};
use fittrack_core::constants::limits::{FOOD_LIST_LIMIT, FOOD_SEARCH_LIMIT};
use sqlx::{sqlite::SqliteRow, Row};
use uuid::Uuid;

impl Database {
    pub(super) async fn migrate_foods(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS foods (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                brand TEXT,
                barcode TEXT,
                calories_per_100g REAL NOT NULL,
                protein_per_100g REAL NOT NULL,
                carbs_per_100g REAL NOT NULL,
                fat_per_100g REAL NOT NULL,
                fiber_per_100g REAL,
                sugar_per_100g REAL,
                serving_sizes TEXT NOT NULL DEFAULT '[]'
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_foods_barcode ON foods(barcode)")
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// List foods up to the listing limit
    ///
    /// # Errors
    ///
    /// Returns an error if the query or row mapping fails
    pub async fn list_foods(&self) -> AppResult<Vec<Food>> {
        let rows = sqlx::query("SELECT * FROM foods ORDER BY rowid LIMIT $1")
            .bind(FOOD_LIST_LIMIT)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to list foods: {e}")))?;

        rows.iter().map(row_to_food).collect()
    }

    /// Case-insensitive substring search on food names
    ///
    /// # Errors
    ///
    /// Returns an error if the query or row mapping fails
    pub async fn search_foods(&self, query: &str) -> AppResult<Vec<Food>> {
        let pattern = format!("%{query}%");
        let rows = sqlx::query("SELECT * FROM foods WHERE name LIKE $1 ORDER BY rowid LIMIT $2")
            .bind(&pattern)
            .bind(FOOD_SEARCH_LIMIT)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to search foods: {e}")))?;

        rows.iter().map(row_to_food).collect()
    }

    /// Exact barcode lookup
    ///
    /// # Errors
    ///
    /// Returns an error if the query or row mapping fails
    pub async fn get_food_by_barcode(&self, barcode: &str) -> AppResult<Option<Food>> {
        let row = sqlx::query("SELECT * FROM foods WHERE barcode = $1 LIMIT 1")
            .bind(barcode)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to get food by barcode: {e}")))?;

        row.map(|r| row_to_food(&r)).transpose()
    }

    /// Get a food by ID
    ///
    /// # Errors
    ///
    /// Returns an error if the query or row mapping fails
    pub async fn get_food(&self, food_id: &str) -> AppResult<Option<Food>> {
        let row = sqlx::query("SELECT * FROM foods WHERE id = $1")
            .bind(food_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to get food: {e}")))?;

        row.map(|r| row_to_food(&r)).transpose()
    }

    /// Insert a food
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the insert fails
    pub async fn create_food(&self, request: &NewFood) -> AppResult<Food> {
        let food = Food {
            id: Uuid::new_v4().to_string(),
            name: request.name.clone(),
            brand: request.brand.clone(),
            barcode: request.barcode.clone(),
            calories_per_100g: request.calories_per_100g,
            protein_per_100g: request.protein_per_100g,
            carbs_per_100g: request.carbs_per_100g,
            fat_per_100g: request.fat_per_100g,
            fiber_per_100g: request.fiber_per_100g,
            sugar_per_100g: request.sugar_per_100g,
            serving_sizes: request.serving_sizes.clone(),
        };

        sqlx::query(
            r"
            INSERT INTO foods (
                id, name, brand, barcode, calories_per_100g, protein_per_100g,
                carbs_per_100g, fat_per_100g, fiber_per_100g, sugar_per_100g, serving_sizes
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            ",
        )
        .bind(&food.id)
        .bind(&food.name)
        .bind(&food.brand)
        .bind(&food.barcode)
        .bind(food.calories_per_100g)
        .bind(food.protein_per_100g)
        .bind(food.carbs_per_100g)
        .bind(food.fat_per_100g)
        .bind(food.fiber_per_100g)
        .bind(food.sugar_per_100g)
        .bind(serde_json::to_string(&food.serving_sizes)?)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create food: {e}")))?;

        Ok(food)
    }

    /// Replace every editable field of a food, keeping its ID
    ///
    /// Returns `None` when no food has the given ID.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the update fails
    pub async fn update_food(&self, food_id: &str, request: &NewFood) -> AppResult<Option<Food>> {
        let result = sqlx::query(
            r"
            UPDATE foods SET
                name = $1, brand = $2, barcode = $3, calories_per_100g = $4,
                protein_per_100g = $5, carbs_per_100g = $6, fat_per_100g = $7,
                fiber_per_100g = $8, sugar_per_100g = $9, serving_sizes = $10
            WHERE id = $11
            ",
        )
        .bind(&request.name)
        .bind(&request.brand)
        .bind(&request.barcode)
        .bind(request.calories_per_100g)
        .bind(request.protein_per_100g)
        .bind(request.carbs_per_100g)
        .bind(request.fat_per_100g)
        .bind(request.fiber_per_100g)
        .bind(request.sugar_per_100g)
        .bind(serde_json::to_string(&request.serving_sizes)?)
        .bind(food_id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to update food: {e}")))?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        self.get_food(food_id).await
    }

    /// Delete a food
    ///
    /// Nutrition logs keep their copied nutrient values and dangling food ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails
    pub async fn delete_food(&self, food_id: &str) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM foods WHERE id = $1")
            .bind(food_id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to delete food: {e}")))?;

        Ok(result.rows_affected() > 0)
    }
}

fn row_to_food(row: &SqliteRow) -> AppResult<Food> {
    let serving_sizes: String = row.get("serving_sizes");
    let serving_sizes: Vec<ServingSize> = serde_json::from_str(&serving_sizes)?;

    Ok(Food {
        id: row.get("id"),
        name: row.get("name"),
        brand: row.get("brand"),
        barcode: row.get("barcode"),
        calories_per_100g: row.get("calories_per_100g"),
        protein_per_100g: row.get("protein_per_100g"),
        carbs_per_100g: row.get("carbs_per_100g"),
        fat_per_100g: row.get("fat_per_100g"),
        fiber_per_100g: row.get("fiber_per_100g"),
        sugar_per_100g: row.get("sugar_per_100g"),
        serving_sizes,
    })
}
