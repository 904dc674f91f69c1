// ABOUTME: FitTrack API server binary
// ABOUTME: Loads configuration, opens the database, seeds reference data, and serves HTTP
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # FitTrack Server Binary
//!
//! Starts the REST API. Environment variables supply defaults; command-line
//! flags override them.

use anyhow::{Context, Result};
use clap::Parser;
use fittrack_server::{
    config::{DatabaseUrl, ServerConfig},
    database::Database,
    intelligence::PredictionConfig,
    logging,
    resources::ServerResources,
    server,
};
use std::sync::Arc;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "fittrack-server")]
#[command(about = "FitTrack - fitness tracking API with heuristic predictions")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override database URL (`sqlite:path` or `sqlite::memory:`)
    #[arg(long)]
    database_url: Option<String>,

    /// Skip seeding the exercise catalogue and workout templates
    #[arg(long)]
    no_seed: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_from_env()?;

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(url) = args.database_url.as_deref() {
        config.database = DatabaseUrl::parse_url(url);
    }
    if args.no_seed {
        config.seed_reference_data = false;
    }

    let prediction_config =
        PredictionConfig::init().context("Invalid prediction engine configuration")?;

    info!("Starting FitTrack server");
    info!("{}", config.summary());
    info!(
        jitter_spread = prediction_config.calorie_burn.jitter_spread,
        activities = prediction_config.calorie_burn.met_values.len(),
        "Prediction engine configured"
    );

    if let DatabaseUrl::SQLite { path } = &config.database {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create database directory {}", parent.display())
            })?;
        }
    }

    let database = Database::new(&config.database.to_connection_string()).await?;
    if config.seed_reference_data {
        database.seed_reference_data().await?;
    }

    let resources = Arc::new(ServerResources::new(database, Arc::new(config)));

    if let Err(e) = server::serve(resources).await {
        error!("Server error: {e:#}");
        return Err(e);
    }

    Ok(())
}
