// ABOUTME: Body composition and tape measurement records
// ABOUTME: BodyMetric with optional measurements and progress photo links
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Tape measurements in centimeters
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BodyMeasurements {
    /// Chest circumference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chest: Option<f64>,
    /// Waist circumference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub waist: Option<f64>,
    /// Upper arm circumference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arms: Option<f64>,
    /// Thigh circumference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thighs: Option<f64>,
}

/// Progress photo links
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProgressPhotos {
    /// Front view
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub front: Option<String>,
    /// Side view
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub side: Option<String>,
    /// Back view
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub back: Option<String>,
}

/// Point-in-time body metric record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyMetric {
    /// Unique identifier
    pub id: String,
    /// Owning user
    pub user_id: String,
    /// Body weight in kilograms
    pub weight: Option<f64>,
    /// Body fat percentage
    pub body_fat: Option<f64>,
    /// Muscle mass in kilograms
    pub muscle_mass: Option<f64>,
    /// Tape measurements
    pub measurements: Option<BodyMeasurements>,
    /// Progress photos
    pub photo_urls: Option<ProgressPhotos>,
    /// When the metric was recorded
    pub recorded_at: DateTime<Utc>,
}

/// Request body for recording body metrics
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBodyMetric {
    /// Owning user
    pub user_id: String,
    /// Body weight in kilograms
    #[serde(default)]
    pub weight: Option<f64>,
    /// Body fat percentage
    #[serde(default)]
    pub body_fat: Option<f64>,
    /// Muscle mass in kilograms
    #[serde(default)]
    pub muscle_mass: Option<f64>,
    /// Tape measurements
    #[serde(default)]
    pub measurements: Option<BodyMeasurements>,
    /// Progress photos
    #[serde(default)]
    pub photo_urls: Option<ProgressPhotos>,
}
