// ABOUTME: Configuration module for the prediction engine
// ABOUTME: Global immutable estimator tables with environment overrides and validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Prediction Engine Configuration
//!
//! Tables are built once on first use and never mutated afterwards.
//! The jitter spread can be overridden with `PREDICTION_JITTER_SPREAD`, which
//! [`PredictionConfig::init`] reads and validates at startup.

mod error;
mod estimators;
mod nutrition;

pub use error::ConfigError;
pub use estimators::{CalorieBurnConfig, WeightLossConfig};
pub use nutrition::NutritionTargetsConfig;

use serde::{Deserialize, Serialize};
use std::env;
use std::sync::OnceLock;

/// Global configuration singleton
static PREDICTION_CONFIG: OnceLock<PredictionConfig> = OnceLock::new();

/// Prediction engine configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PredictionConfig {
    /// Calorie-burn estimator constants
    pub calorie_burn: CalorieBurnConfig,
    /// Weight-loss estimator constants
    pub weight_loss: WeightLossConfig,
    /// Daily nutrition targets
    pub nutrition: NutritionTargetsConfig,
}

impl PredictionConfig {
    /// Get the global configuration instance
    ///
    /// Returns the instance installed by [`Self::init`], or the built-in
    /// defaults when nothing was installed.
    pub fn global() -> &'static Self {
        PREDICTION_CONFIG.get_or_init(Self::default)
    }

    /// Load the environment configuration and install it as the global instance
    ///
    /// Validation runs on every call. The first successful call installs its
    /// configuration; later calls return the installed instance.
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn init() -> Result<&'static Self, ConfigError> {
        let config = Self::load()?;
        Ok(PREDICTION_CONFIG.get_or_init(|| config))
    }

    /// Load configuration from environment
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        match env::var("PREDICTION_JITTER_SPREAD") {
            Ok(val) => {
                config.calorie_burn.jitter_spread = val.parse().map_err(|_| {
                    ConfigError::Parse(format!("Invalid PREDICTION_JITTER_SPREAD: {val}"))
                })?;
            }
            Err(env::VarError::NotPresent) => {}
            Err(e) => return Err(e.into()),
        }
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if configuration values are invalid
    pub fn validate(&self) -> Result<(), ConfigError> {
        let burn = &self.calorie_burn;

        if burn.met_values.is_empty() {
            return Err(ConfigError::MissingField("calorie_burn.met_values"));
        }

        if burn
            .met_values
            .values()
            .chain(std::iter::once(&burn.default_met))
            .any(|met| !met.is_finite() || *met <= 0.0)
        {
            return Err(ConfigError::ValueOutOfRange("MET values must be > 0"));
        }

        if !(0.0..1.0).contains(&burn.jitter_spread) {
            return Err(ConfigError::InvalidRange(
                "jitter_spread must be in [0, 1)",
            ));
        }

        if !(0.0..=1.0).contains(&burn.min_age_factor) || burn.min_age_factor == 0.0 {
            return Err(ConfigError::InvalidRange("min_age_factor must be in (0, 1]"));
        }

        if burn.male_factor <= 0.0 {
            return Err(ConfigError::ValueOutOfRange("male_factor must be > 0"));
        }

        let loss = &self.weight_loss;
        if loss.kcal_per_kg <= 0.0 {
            return Err(ConfigError::ValueOutOfRange("kcal_per_kg must be > 0"));
        }

        if [
            loss.sedentary_multiplier,
            loss.lightly_active_multiplier,
            loss.moderately_active_multiplier,
            loss.very_active_multiplier,
            loss.default_multiplier,
        ]
        .iter()
        .any(|m| *m <= 0.0)
        {
            return Err(ConfigError::ValueOutOfRange(
                "activity multipliers must be > 0",
            ));
        }

        let targets = &self.nutrition;
        if [
            targets.calories_per_kg,
            targets.default_calories,
            targets.protein_per_kg,
            targets.default_protein,
            targets.carbs_target,
            targets.fat_target,
        ]
        .iter()
        .any(|t| *t <= 0.0)
        {
            return Err(ConfigError::ValueOutOfRange(
                "nutrition targets must be > 0",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(PredictionConfig::default().validate().is_ok());
    }

    #[test]
    fn test_met_table_has_ten_activities() {
        let config = PredictionConfig::default();
        assert_eq!(config.calorie_burn.met_values.len(), 10);
        assert!((config.calorie_burn.met_values["hiit"] - 12.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_rejects_full_jitter_spread() {
        let mut config = PredictionConfig::default();
        config.calorie_burn.jitter_spread = 1.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidRange(_))
        ));
    }

    #[test]
    fn test_rejects_non_positive_deficit_constant() {
        let mut config = PredictionConfig::default();
        config.weight_loss.kcal_per_kg = 0.0;
        assert!(config.validate().is_err());
    }
}
