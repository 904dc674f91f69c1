// ABOUTME: Achievement records for unlocked milestones
// ABOUTME: Streaks, personal records, weight-loss and consistency badges
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unlocked achievement
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    /// Unique identifier
    pub id: String,
    /// Owning user
    pub user_id: String,
    /// Achievement family (streak, pr, weight_loss, consistency, ...)
    #[serde(rename = "type")]
    pub achievement_type: String,
    /// Badge title
    pub title: String,
    /// Badge description
    pub description: String,
    /// Icon identifier used by the client
    pub icon_name: String,
    /// When the achievement was unlocked
    pub unlocked_at: DateTime<Utc>,
}

/// Achievement prior to insertion
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAchievement {
    /// Owning user
    pub user_id: String,
    /// Achievement family
    #[serde(rename = "type")]
    pub achievement_type: String,
    /// Badge title
    pub title: String,
    /// Badge description
    pub description: String,
    /// Icon identifier used by the client
    pub icon_name: String,
}
