// ABOUTME: SQLite persistence for submission records and stored options
// ABOUTME: Append-only submissions keyed by a fresh UUID; options are a small key/value table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bold Metrics Integration contributors

//! # Database Management
//!
//! Two tables back the service:
//!
//! - `bm_submissions`: one row per successful API round trip, never updated
//! - `bm_settings`: client id, user key and webhook secret saved by operators

mod settings;
mod submissions;

pub use settings::SETTING_KEYS;

use crate::errors::{AppError, AppResult};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::fs;
use std::path::Path;
use std::str::FromStr;
use tracing::info;

/// Database manager for submissions and stored options
#[derive(Clone)]
pub struct Database {
    pool: Pool<Sqlite>,
}

impl Database {
    /// Connect, creating the database file if needed, and run migrations
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid, the connection fails or a
    /// migration fails
    pub async fn new(database_url: &str) -> AppResult<Self> {
        let in_memory = is_memory_url(database_url);
        if !in_memory {
            ensure_parent_dir(database_url)?;
        }

        let options = SqliteConnectOptions::from_str(database_url)
            .map_err(|e| AppError::config(format!("Invalid DATABASE_URL: {e}")))?
            .create_if_missing(true);

        // Every pooled connection to :memory: would otherwise see its own database
        let max_connections = if in_memory { 1 } else { 5 };

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await
            .map_err(|e| AppError::database(format!("Failed to connect to database: {e}")))?;

        let db = Self { pool };
        db.migrate().await?;

        info!(database_url, "Database ready");
        Ok(db)
    }

    /// Get a reference to the database pool for advanced operations
    #[must_use]
    pub const fn pool(&self) -> &Pool<Sqlite> {
        &self.pool
    }

    /// Run database migrations
    ///
    /// # Errors
    ///
    /// Returns an error if a table cannot be created
    pub async fn migrate(&self) -> AppResult<()> {
        self.migrate_submissions().await?;
        self.migrate_settings().await?;
        Ok(())
    }

    /// Full uninstall: remove every submission record and every stored option
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails
    pub async fn uninstall(&self) -> AppResult<()> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::database(format!("Failed to begin uninstall: {e}")))?;

        let submissions = sqlx::query("DELETE FROM bm_submissions")
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::database(format!("Failed to delete submissions: {e}")))?
            .rows_affected();

        let settings = sqlx::query("DELETE FROM bm_settings")
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::database(format!("Failed to delete stored options: {e}")))?
            .rows_affected();

        tx.commit()
            .await
            .map_err(|e| AppError::database(format!("Failed to commit uninstall: {e}")))?;

        info!(submissions, settings, "Removed all Bold Metrics data");
        Ok(())
    }
}

fn is_memory_url(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}

fn ensure_parent_dir(database_url: &str) -> AppResult<()> {
    let path = database_url
        .trim_start_matches("sqlite://")
        .trim_start_matches("sqlite:");
    let path = path.split('?').next().unwrap_or_default();

    match Path::new(path).parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent)
            .map_err(|e| {
                AppError::config(format!(
                    "Failed to create database directory {}: {e}",
                    parent.display()
                ))
            }),
        _ => Ok(()),
    }
}
