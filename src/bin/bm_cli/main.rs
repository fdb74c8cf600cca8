// ABOUTME: bm-cli - operator command-line tool for the Bold Metrics integration
// ABOUTME: Manages stored options, inspects stored results and performs the full uninstall
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bold Metrics Integration contributors
//!
//! Usage:
//! ```bash
//! # Save API credentials as stored options
//! bm-cli set-credentials --client-id my_client --user-key my_key
//!
//! # Require a shared secret on the legacy webhook
//! bm-cli set-webhook-secret s3cret
//!
//! # Show the effective configuration (secrets masked)
//! bm-cli show-config
//!
//! # Print the rendered HTML for a stored result
//! bm-cli show-result 6f1c2a6e-1d2b-4c1e-9a57-0c6f0f1f5a10
//!
//! # Delete every stored result and option
//! bm-cli uninstall --yes
//! ```

mod commands;

use boldmetrics_integration::{
    config::environment::ServerConfig,
    database::Database,
    errors::{AppError, AppResult},
};
use clap::{Parser, Subcommand};
use tracing::info;

#[derive(Parser)]
#[command(
    name = "bm-cli",
    about = "Bold Metrics integration management CLI",
    long_about = "Command-line tool for managing stored API options, inspecting stored results and uninstalling."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Database URL override
    #[arg(long, global = true)]
    database_url: Option<String>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Save the API client id and user key as stored options
    SetCredentials {
        /// API client id
        #[arg(long)]
        client_id: String,

        /// API user key
        #[arg(long)]
        user_key: String,
    },

    /// Save the webhook shared secret (empty string clears it)
    SetWebhookSecret {
        /// Shared secret expected in the X-BM-Webhook-Secret header
        secret: String,
    },

    /// Show the effective configuration with secrets masked
    ShowConfig,

    /// Print a stored result rendered as HTML
    ShowResult {
        /// Stored record id
        id: String,
    },

    /// Delete all stored results and options
    Uninstall {
        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> AppResult<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt().with_env_filter(log_level).init();

    let mut config = ServerConfig::from_env().map_err(|e| AppError::config(e.to_string()))?;
    if let Some(database_url) = cli.database_url {
        config.database_url = database_url;
    }

    info!("Connecting to database: {}", config.database_url);
    let database = Database::new(&config.database_url).await?;

    match cli.command {
        Command::SetCredentials {
            client_id,
            user_key,
        } => commands::options::set_credentials(&database, &client_id, &user_key).await?,
        Command::SetWebhookSecret { secret } => {
            commands::options::set_webhook_secret(&database, &secret).await?;
        }
        Command::ShowConfig => commands::options::show_config(&database, &config).await?,
        Command::ShowResult { id } => commands::results::show(&database, &id).await?,
        Command::Uninstall { yes } => commands::results::uninstall(&database, yes).await?,
    }

    Ok(())
}
