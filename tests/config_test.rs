// ABOUTME: Environment-driven configuration tests for the server and prediction engine
// ABOUTME: Serialized because each test mutates process-wide environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use fittrack_server::config::{DatabaseUrl, Environment, ServerConfig};
use fittrack_server::intelligence::{ConfigError, JitterMode, PredictionConfig};
use fittrack_server::logging::{LogFormat, LoggingConfig};
use serial_test::serial;
use std::env;

const SERVER_VARS: &[&str] = &[
    "HTTP_PORT",
    "HOST",
    "DATABASE_URL",
    "ENVIRONMENT",
    "CORS_ALLOWED_ORIGINS",
    "SEED_REFERENCE_DATA",
    "PREDICTION_JITTER",
    "PREDICTION_JITTER_SPREAD",
    "LOG_FORMAT",
];

fn clear_env() {
    for var in SERVER_VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_server_config_defaults() {
    clear_env();
    let config = ServerConfig::from_env().unwrap();

    assert_eq!(config.http_port, 8081);
    assert_eq!(config.bind_address(), "127.0.0.1:8081");
    assert_eq!(config.environment, Environment::Development);
    assert_eq!(config.cors.allowed_origins, vec!["*"]);
    assert!(config.seed_reference_data);
    assert_eq!(config.jitter, JitterMode::Random);
    assert!(!config.database.is_memory());
}

#[test]
#[serial]
fn test_server_config_overrides() {
    clear_env();
    env::set_var("HTTP_PORT", "9090");
    env::set_var("DATABASE_URL", "sqlite::memory:");
    env::set_var("ENVIRONMENT", "production");
    env::set_var("CORS_ALLOWED_ORIGINS", "http://localhost:5173,https://app.example.com");
    env::set_var("SEED_REFERENCE_DATA", "false");
    env::set_var("PREDICTION_JITTER", "seed:42");

    let config = ServerConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.http_port, 9090);
    assert_eq!(config.database, DatabaseUrl::Memory);
    assert!(config.environment.is_production());
    assert_eq!(config.cors.allowed_origins.len(), 2);
    assert!(!config.seed_reference_data);
    assert_eq!(config.jitter, JitterMode::Seeded(42));
}

#[test]
#[serial]
fn test_server_config_rejects_bad_values() {
    clear_env();
    env::set_var("HTTP_PORT", "not-a-port");
    assert!(ServerConfig::from_env().is_err());

    clear_env();
    env::set_var("PREDICTION_JITTER", "sometimes");
    let err = ServerConfig::from_env().unwrap_err();
    assert!(format!("{err:#}").contains("PREDICTION_JITTER"));

    clear_env();
    env::set_var("SEED_REFERENCE_DATA", "perhaps");
    assert!(ServerConfig::from_env().is_err());
    clear_env();
}

#[test]
#[serial]
fn test_prediction_config_spread_override() {
    clear_env();
    env::set_var("PREDICTION_JITTER_SPREAD", "0.05");
    let config = PredictionConfig::load().unwrap();
    assert!((config.calorie_burn.jitter_spread - 0.05).abs() < f64::EPSILON);

    env::set_var("PREDICTION_JITTER_SPREAD", "1.0");
    assert!(matches!(
        PredictionConfig::load(),
        Err(ConfigError::InvalidRange(_))
    ));

    env::set_var("PREDICTION_JITTER_SPREAD", "wide");
    assert!(matches!(PredictionConfig::load(), Err(ConfigError::Parse(_))));
    clear_env();
}

#[test]
#[serial]
fn test_prediction_config_init_rejects_invalid_spread() {
    clear_env();
    env::set_var("PREDICTION_JITTER_SPREAD", "1.5");
    assert!(matches!(
        PredictionConfig::init(),
        Err(ConfigError::InvalidRange(_))
    ));

    env::set_var("PREDICTION_JITTER_SPREAD", "-0.2");
    assert!(PredictionConfig::init().is_err());

    env::set_var("PREDICTION_JITTER_SPREAD", "ten percent");
    assert!(matches!(PredictionConfig::init(), Err(ConfigError::Parse(_))));

    clear_env();
    let installed = PredictionConfig::init().unwrap();
    assert!(std::ptr::eq(installed, PredictionConfig::global()));
}

#[cfg(unix)]
#[test]
#[serial]
fn test_prediction_config_rejects_non_unicode_spread() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    clear_env();
    env::set_var("PREDICTION_JITTER_SPREAD", OsStr::from_bytes(&[0x30, 0x2e, 0x80]));
    assert!(matches!(PredictionConfig::load(), Err(ConfigError::EnvVar(_))));
    clear_env();
}

#[test]
#[serial]
fn test_logging_config_format_from_env() {
    clear_env();
    env::set_var("LOG_FORMAT", "json");
    let config = LoggingConfig::from_env();
    clear_env();

    assert_eq!(config.format, LogFormat::Json);
    assert_eq!(config.service_version, env!("CARGO_PKG_VERSION"));
}
