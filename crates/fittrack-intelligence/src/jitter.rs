// ABOUTME: Injectable sources of the multiplicative jitter applied to calorie estimates
// ABOUTME: Thread RNG, seeded ChaCha RNG, and fixed-factor sources plus the JitterMode selector
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Jitter Sources
//!
//! Calorie-burn estimates are multiplied by a factor drawn uniformly from
//! `[1 - spread, 1 + spread]`. The source of that factor is injected so that
//! production uses fresh randomness, reproducible runs use a seeded stream,
//! and tests pin the factor to a constant.

use crate::config::ConfigError;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, Mutex, PoisonError};

/// Supplies the multiplicative jitter factor for an estimate
pub trait JitterSource: Send + Sync {
    /// Draw a factor in `[1 - spread, 1 + spread]`
    fn factor(&self, spread: f64) -> f64;
}

/// Inclusive bounds of the jitter band, or `None` when jitter is disabled
fn band(spread: f64) -> Option<(f64, f64)> {
    if spread.is_finite() && spread > 0.0 {
        Some((1.0 - spread, 1.0 + spread))
    } else {
        None
    }
}

/// Fresh randomness from the thread-local generator
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngJitter;

impl JitterSource for ThreadRngJitter {
    fn factor(&self, spread: f64) -> f64 {
        band(spread).map_or(1.0, |(low, high)| rand::thread_rng().gen_range(low..=high))
    }
}

/// Reproducible jitter stream from a fixed seed
#[derive(Debug)]
pub struct SeededJitter {
    rng: Mutex<ChaCha8Rng>,
}

impl SeededJitter {
    /// Create a stream seeded with `seed`
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }
}

impl JitterSource for SeededJitter {
    fn factor(&self, spread: f64) -> f64 {
        let Some((low, high)) = band(spread) else {
            return 1.0;
        };
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        rng.gen_range(low..=high)
    }
}

/// Constant factor, ignoring the spread
#[derive(Debug, Clone, Copy)]
pub struct FixedJitter(pub f64);

impl FixedJitter {
    /// No jitter at all
    pub const NONE: Self = Self(1.0);
}

impl JitterSource for FixedJitter {
    fn factor(&self, _spread: f64) -> f64 {
        self.0
    }
}

/// Jitter selection parsed from configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JitterMode {
    /// Thread RNG
    #[default]
    Random,
    /// Factor pinned to 1.0
    Off,
    /// Seeded ChaCha stream
    Seeded(u64),
}

impl JitterMode {
    /// Build the jitter source for this mode
    #[must_use]
    pub fn into_source(self) -> Arc<dyn JitterSource> {
        match self {
            Self::Random => Arc::new(ThreadRngJitter),
            Self::Off => Arc::new(FixedJitter::NONE),
            Self::Seeded(seed) => Arc::new(SeededJitter::new(seed)),
        }
    }
}

impl FromStr for JitterMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim().to_lowercase();
        match value.as_str() {
            "random" => Ok(Self::Random),
            "off" | "none" => Ok(Self::Off),
            other => other
                .strip_prefix("seed:")
                .and_then(|seed| seed.trim().parse::<u64>().ok())
                .map(Self::Seeded)
                .ok_or_else(|| {
                    ConfigError::Parse(format!(
                        "Invalid jitter mode '{s}': expected random, off, or seed:<u64>"
                    ))
                }),
        }
    }
}

impl fmt::Display for JitterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Random => write!(f, "random"),
            Self::Off => write!(f, "off"),
            Self::Seeded(seed) => write!(f, "seed:{seed}"),
        }
    }
}
