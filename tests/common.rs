// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides in-memory database, server resources, and record creation helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `fittrack_server`

use anyhow::Result;
use fittrack_server::{
    config::{DatabaseUrl, ServerConfig},
    database::Database,
    intelligence::{FixedJitter, JitterMode},
    models::{NewFood, NewUser, ServingSize, User},
    resources::ServerResources,
};
use std::sync::{Arc, Once};
use uuid::Uuid;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Fresh in-memory database with the schema applied
pub async fn create_test_database() -> Result<Database> {
    init_test_logging();
    Ok(Database::new("sqlite::memory:").await?)
}

/// Configuration pointing at an in-memory database with jitter disabled
pub fn test_config() -> ServerConfig {
    ServerConfig {
        database: DatabaseUrl::Memory,
        jitter: JitterMode::Off,
        bcrypt_cost: 4,
        ..ServerConfig::default()
    }
}

/// Server resources over a fresh in-memory database with a neutral jitter factor
pub async fn create_test_resources() -> Result<Arc<ServerResources>> {
    let database = create_test_database().await?;
    let resources = ServerResources::new(database, Arc::new(test_config()))
        .with_jitter(Arc::new(FixedJitter::NONE));
    Ok(Arc::new(resources))
}

/// Same as [`create_test_resources`] with the exercise catalogue seeded
pub async fn create_seeded_resources() -> Result<Arc<ServerResources>> {
    let resources = create_test_resources().await?;
    resources.database.seed_reference_data().await?;
    Ok(resources)
}

/// Registration payload with a unique username and email
pub fn new_user_request() -> NewUser {
    let suffix = Uuid::new_v4().simple().to_string();
    NewUser {
        username: format!("athlete_{}", &suffix[..8]),
        email: format!("athlete_{}@example.com", &suffix[..8]),
        password: "correct horse battery staple".to_owned(),
        full_name: "Test Athlete".to_owned(),
        age: Some(30),
        height_cm: Some(175.0),
        weight_kg: Some(80.0),
        activity_level: None,
        goal: None,
        target_weight: None,
        target_timeline: None,
        onboarding_complete: false,
    }
}

/// Insert a user directly, bypassing the HTTP layer
pub async fn create_test_user(database: &Database) -> Result<User> {
    let request = new_user_request();
    Ok(database.create_user(&request, "not-a-real-hash").await?)
}

/// Food with round per-100 g values
pub fn oats() -> NewFood {
    NewFood {
        name: "Rolled oats".to_owned(),
        brand: Some("Acme".to_owned()),
        barcode: Some("0123456789012".to_owned()),
        calories_per_100g: 380.0,
        protein_per_100g: 13.0,
        carbs_per_100g: 68.0,
        fat_per_100g: 7.0,
        fiber_per_100g: Some(10.0),
        sugar_per_100g: None,
        serving_sizes: vec![ServingSize {
            name: "1 cup".to_owned(),
            grams: 80.0,
        }],
    }
}
