// ABOUTME: Body metric database operations
// ABOUTME: Weight, composition, tape measurements and progress photo records per user
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{format_timestamp, parse_timestamp, Database};
use crate::errors::{AppError, AppResult};
use crate::models::{BodyMetric, NewBodyMetric};
use chrono::Utc;
use sqlx::{sqlite::SqliteRow, Row};
use uuid::Uuid;

impl Database {
    pub(super) async fn migrate_body_metrics(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS body_metrics (
                id TEXT PRIMARY KEY,
                user_id TEXT NOT NULL,
                weight REAL,
                body_fat REAL,
                muscle_mass REAL,
                measurements TEXT,
                photo_urls TEXT,
                recorded_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_body_metrics_user_id ON body_metrics(user_id, recorded_at)",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// List a user's body metrics, newest first
    ///
    /// # Errors
    ///
    /// Returns an error if the query or row mapping fails
    pub async fn list_body_metrics(&self, user_id: &str) -> AppResult<Vec<BodyMetric>> {
        let rows = sqlx::query(
            "SELECT * FROM body_metrics WHERE user_id = $1 ORDER BY recorded_at DESC, rowid DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to list body metrics: {e}")))?;

        rows.iter().map(row_to_body_metric).collect()
    }

    /// Most recent body metric for a user
    ///
    /// # Errors
    ///
    /// Returns an error if the query or row mapping fails
    pub async fn latest_body_metric(&self, user_id: &str) -> AppResult<Option<BodyMetric>> {
        let row = sqlx::query(
            r"
            SELECT * FROM body_metrics WHERE user_id = $1
            ORDER BY recorded_at DESC, rowid DESC
            LIMIT 1
            ",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to get latest body metric: {e}")))?;

        row.map(|r| row_to_body_metric(&r)).transpose()
    }

    /// Record a body metric
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the insert fails
    pub async fn create_body_metric(&self, request: &NewBodyMetric) -> AppResult<BodyMetric> {
        let metric = BodyMetric {
            id: Uuid::new_v4().to_string(),
            user_id: request.user_id.clone(),
            weight: request.weight,
            body_fat: request.body_fat,
            muscle_mass: request.muscle_mass,
            measurements: request.measurements.clone(),
            photo_urls: request.photo_urls.clone(),
            recorded_at: Utc::now(),
        };

        let measurements = metric
            .measurements
            .as_ref()
            .map(serde_json::to_string)
            .transpose()?;
        let photo_urls = metric
            .photo_urls
            .as_ref()
            .map(serde_json::to_string)
            .transpose()?;

        sqlx::query(
            r"
            INSERT INTO body_metrics (
                id, user_id, weight, body_fat, muscle_mass, measurements, photo_urls, recorded_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ",
        )
        .bind(&metric.id)
        .bind(&metric.user_id)
        .bind(metric.weight)
        .bind(metric.body_fat)
        .bind(metric.muscle_mass)
        .bind(measurements)
        .bind(photo_urls)
        .bind(format_timestamp(&metric.recorded_at))
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create body metric: {e}")))?;

        Ok(metric)
    }
}

fn row_to_body_metric(row: &SqliteRow) -> AppResult<BodyMetric> {
    let measurements: Option<String> = row.get("measurements");
    let photo_urls: Option<String> = row.get("photo_urls");
    let recorded_at: String = row.get("recorded_at");

    Ok(BodyMetric {
        id: row.get("id"),
        user_id: row.get("user_id"),
        weight: row.get("weight"),
        body_fat: row.get("body_fat"),
        muscle_mass: row.get("muscle_mass"),
        measurements: measurements
            .as_deref()
            .map(serde_json::from_str)
            .transpose()?,
        photo_urls: photo_urls.as_deref().map(serde_json::from_str).transpose()?,
        recorded_at: parse_timestamp(&recorded_at)?,
    })
}
