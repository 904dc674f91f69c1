// ABOUTME: Domain models re-exported from the core crate
// ABOUTME: Users, workouts, nutrition, body metrics, achievements, and prediction records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use fittrack_core::models::*;
