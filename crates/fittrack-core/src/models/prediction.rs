// ABOUTME: Immutable records of heuristic predictions served to users
// ABOUTME: PredictionKind with its fixed confidence, Prediction and NewPrediction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::confidence;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Which estimator produced a prediction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PredictionKind {
    /// Calories burned by an activity session
    CalorieBurn,
    /// Weeks needed to reach a target weight
    WeightLoss,
}

impl PredictionKind {
    /// Convert to database string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::CalorieBurn => "calorie_burn",
            Self::WeightLoss => "weight_loss",
        }
    }

    /// Parse from database string representation
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "calorie_burn" => Some(Self::CalorieBurn),
            "weight_loss" => Some(Self::WeightLoss),
            _ => None,
        }
    }

    /// Fixed confidence attached to every prediction of this kind
    #[must_use]
    pub const fn confidence(&self) -> f64 {
        match self {
            Self::CalorieBurn => confidence::CALORIE_BURN,
            Self::WeightLoss => confidence::WEIGHT_LOSS,
        }
    }
}

/// Persisted prediction
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prediction {
    /// Unique identifier
    pub id: String,
    /// Owning user
    pub user_id: String,
    /// Estimator that produced the value
    pub prediction_type: PredictionKind,
    /// Inputs echoed back as submitted
    pub input_data: serde_json::Value,
    /// Predicted value (kcal or weeks)
    pub prediction: f64,
    /// Fixed per-kind confidence
    pub confidence: f64,
    /// When the prediction was made
    pub created_at: DateTime<Utc>,
}

/// Prediction prior to insertion
#[derive(Debug, Clone)]
pub struct NewPrediction {
    /// Owning user
    pub user_id: String,
    /// Estimator that produced the value
    pub kind: PredictionKind,
    /// Inputs echoed back as submitted
    pub input_data: serde_json::Value,
    /// Predicted value
    pub prediction: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_per_kind() {
        assert!((PredictionKind::CalorieBurn.confidence() - 0.85).abs() < f64::EPSILON);
        assert!((PredictionKind::WeightLoss.confidence() - 0.75).abs() < f64::EPSILON);
    }

    #[test]
    fn test_kind_parse() {
        assert_eq!(
            PredictionKind::parse("weight_loss"),
            Some(PredictionKind::WeightLoss)
        );
        assert_eq!(PredictionKind::parse("weight_prediction"), None);
    }
}
