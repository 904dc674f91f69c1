// ABOUTME: Prediction record database operations
// ABOUTME: Stores immutable estimator outputs with their inputs and fixed confidence per kind
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{format_timestamp, parse_timestamp, Database};
use crate::errors::{AppError, AppResult};
use crate::models::{NewPrediction, Prediction, PredictionKind};
use chrono::Utc;
use sqlx::{sqlite::SqliteRow, Row};
use uuid::Uuid;

impl Database {
    pub(super) async fn migrate_predictions(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS predictions (
                id TEXT PRIMARY KEY,
                user_id TEXT NOT NULL,
                prediction_type TEXT NOT NULL
                    CHECK (prediction_type IN ('calorie_burn', 'weight_loss')),
                input_data TEXT NOT NULL,
                prediction REAL NOT NULL,
                confidence REAL NOT NULL,
                created_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_predictions_user_id ON predictions(user_id, created_at)",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Persist a prediction; confidence is fixed by its kind
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the insert fails
    pub async fn create_prediction(&self, request: NewPrediction) -> AppResult<Prediction> {
        let prediction = Prediction {
            id: Uuid::new_v4().to_string(),
            user_id: request.user_id,
            prediction_type: request.kind,
            confidence: request.kind.confidence(),
            input_data: request.input_data,
            prediction: request.prediction,
            created_at: Utc::now(),
        };

        sqlx::query(
            r"
            INSERT INTO predictions (
                id, user_id, prediction_type, input_data, prediction, confidence, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            ",
        )
        .bind(&prediction.id)
        .bind(&prediction.user_id)
        .bind(prediction.prediction_type.as_str())
        .bind(serde_json::to_string(&prediction.input_data)?)
        .bind(prediction.prediction)
        .bind(prediction.confidence)
        .bind(format_timestamp(&prediction.created_at))
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create prediction: {e}")))?;

        Ok(prediction)
    }

    /// List a user's predictions newest first, optionally of one kind
    ///
    /// # Errors
    ///
    /// Returns an error if the query or row mapping fails
    pub async fn list_predictions(
        &self,
        user_id: &str,
        kind: Option<PredictionKind>,
    ) -> AppResult<Vec<Prediction>> {
        let rows = match kind {
            Some(kind) => {
                sqlx::query(
                    r"
                    SELECT * FROM predictions WHERE user_id = $1 AND prediction_type = $2
                    ORDER BY created_at DESC, rowid DESC
                    ",
                )
                .bind(user_id)
                .bind(kind.as_str())
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query(
                    "SELECT * FROM predictions WHERE user_id = $1 ORDER BY created_at DESC, rowid DESC",
                )
                .bind(user_id)
                .fetch_all(&self.pool)
                .await
            }
        }
        .map_err(|e| AppError::database(format!("Failed to list predictions: {e}")))?;

        rows.iter().map(row_to_prediction).collect()
    }
}

fn row_to_prediction(row: &SqliteRow) -> AppResult<Prediction> {
    let prediction_type: String = row.get("prediction_type");
    let input_data: String = row.get("input_data");
    let created_at: String = row.get("created_at");

    Ok(Prediction {
        id: row.get("id"),
        user_id: row.get("user_id"),
        prediction_type: PredictionKind::parse(&prediction_type).ok_or_else(|| {
            AppError::internal(format!("Invalid prediction type: {prediction_type}"))
        })?,
        input_data: serde_json::from_str(&input_data)?,
        prediction: row.get("prediction"),
        confidence: row.get("confidence"),
        created_at: parse_timestamp(&created_at)?,
    })
}
