// ABOUTME: Bold Metrics integration HTTP server binary
// ABOUTME: Loads configuration, connects the database and serves the form, webhook and results routes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bold Metrics Integration contributors

//! # Bold Metrics Integration Server Binary

use anyhow::{Context, Result};
use boldmetrics_integration::{
    config::environment::ServerConfig, database::Database, logging, resources::ServerResources,
    server,
};
use clap::Parser;
use std::sync::Arc;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "boldmetrics-server")]
#[command(about = "Bold Metrics integration - measurement form, webhook and results service")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override database URL
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(database_url) = args.database_url {
        config.database_url = database_url;
    }

    logging::init_from_env()?;

    info!("Starting Bold Metrics integration server");
    info!("{}", config.summary());

    let database = Database::new(&config.database_url)
        .await
        .context("Failed to initialize database")?;

    let resources = ServerResources::with_boldmetrics_client(database, config)
        .context("Failed to initialize sizing API client")?;

    if let Err(e) = server::run_server(Arc::new(resources)).await {
        error!(error = %e, "Server terminated with an error");
        return Err(e.into());
    }

    Ok(())
}
