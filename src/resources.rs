// ABOUTME: Shared server state handed to every route
// ABOUTME: Holds the database, the outbound sizing API client and the startup configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bold Metrics Integration contributors

use crate::config::environment::ServerConfig;
use crate::database::Database;
use crate::errors::AppResult;
use crate::external::{BoldMetricsClient, BoldMetricsClientConfig, SizingApi};
use std::sync::Arc;

/// Centralized resource container; cloned cheaply into each handler
#[derive(Clone)]
pub struct ServerResources {
    /// Submission and option storage
    pub database: Arc<Database>,
    /// Outbound sizing API
    pub api: Arc<dyn SizingApi>,
    /// Startup configuration
    pub config: Arc<ServerConfig>,
}

impl ServerResources {
    /// Assemble resources from already-built parts
    #[must_use]
    pub fn new(database: Database, api: Arc<dyn SizingApi>, config: ServerConfig) -> Self {
        Self {
            database: Arc::new(database),
            api,
            config: Arc::new(config),
        }
    }

    /// Build the real Bold Metrics client from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed
    pub fn with_boldmetrics_client(database: Database, config: ServerConfig) -> AppResult<Self> {
        let client = BoldMetricsClient::new(BoldMetricsClientConfig {
            endpoint: config.boldmetrics.endpoint(),
            timeout: config.boldmetrics.timeout(),
        })?;
        Ok(Self::new(database, Arc::new(client), config))
    }
}
