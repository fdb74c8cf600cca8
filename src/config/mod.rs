// ABOUTME: Configuration module organization for environment and sizing API settings
// ABOUTME: Environment-only configuration; stored options are merged per request
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bold Metrics Integration contributors

/// Resolution of credentials and webhook secret from environment and stored options
pub mod boldmetrics;
/// Environment-based server configuration
pub mod environment;

pub use boldmetrics::{BoldMetricsConfig, StoredOptions};
pub use environment::{ApiVariant, BoldMetricsEnv, Environment, LogLevel, ServerConfig};
