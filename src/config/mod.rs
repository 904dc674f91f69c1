// ABOUTME: Configuration management module for centralized server settings
// ABOUTME: Re-exports the environment-driven ServerConfig and its component types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module for the FitTrack server
//!
//! All settings come from environment variables; see [`ServerConfig::from_env`].
//! Prediction engine constants live in `fittrack_intelligence::config`.

/// Environment and server configuration
pub mod environment;

pub use environment::{CorsConfig, DatabaseUrl, Environment, ServerConfig};
