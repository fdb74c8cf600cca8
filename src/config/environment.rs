// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Parses ports, database URL, sizing API endpoint and credential constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bold Metrics Integration contributors

//! Environment-based configuration management

use crate::constants::api;
use bm_core::models::credentials::mask_secret;
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::time::Duration;

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Default level
    #[default]
    Info,
    /// Verbose
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Which sizing API product the deployment talks to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ApiVariant {
    /// Size matching (`good_matches` / `predictions`)
    #[default]
    Sizer,
    /// Full-body dimension prediction (`dimensions` / `customer` / `outlier`)
    Tailor,
}

impl ApiVariant {
    /// Parse `sizer` / `tailor`
    ///
    /// # Errors
    ///
    /// Returns an error for any other value
    pub fn parse(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "sizer" | "virtualsizer" => Ok(Self::Sizer),
            "tailor" | "virtualtailor" => Ok(Self::Tailor),
            other => bail!("Unknown BM_API_VARIANT '{other}', expected 'sizer' or 'tailor'"),
        }
    }

    /// Endpoint path for this variant
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Sizer => api::VIRTUAL_SIZER_PATH,
            Self::Tailor => api::VIRTUAL_TAILOR_PATH,
        }
    }
}

impl fmt::Display for ApiVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sizer => write!(f, "sizer"),
            Self::Tailor => write!(f, "tailor"),
        }
    }
}

/// Sizing API settings that come from the environment
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BoldMetricsEnv {
    /// `BM_CLIENT_ID`; overrides the stored option when set
    pub client_id: Option<String>,
    /// `BM_USER_KEY`; overrides the stored option when set
    pub user_key: Option<String>,
    /// `BM_WEBHOOK_SECRET`; overrides the stored option when set
    pub webhook_secret: Option<String>,
    /// Base URL of the sizing API
    pub base_url: String,
    /// Product variant, selects the endpoint path
    pub variant: ApiVariant,
    /// Outbound timeout in seconds
    pub timeout_secs: u64,
}

impl Default for BoldMetricsEnv {
    fn default() -> Self {
        Self {
            client_id: None,
            user_key: None,
            webhook_secret: None,
            base_url: api::DEFAULT_BASE_URL.to_owned(),
            variant: ApiVariant::Sizer,
            timeout_secs: api::DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl BoldMetricsEnv {
    /// Full endpoint URL, base plus variant path
    #[must_use]
    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), self.variant.path())
    }

    /// Outbound timeout
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl fmt::Debug for BoldMetricsEnv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoldMetricsEnv")
            .field("client_id", &self.client_id)
            .field("user_key", &self.user_key.as_deref().map(mask_secret))
            .field("webhook_secret", &self.webhook_secret.as_ref().map(|_| "***"))
            .field("base_url", &self.base_url)
            .field("variant", &self.variant)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// Server configuration loaded once at startup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP listen address
    pub http_host: String,
    /// HTTP listen port
    pub http_port: u16,
    /// Database connection string
    pub database_url: String,
    /// Log level
    pub log_level: LogLevel,
    /// Deployment environment
    pub environment: Environment,
    /// Sizing API settings
    pub boldmetrics: BoldMetricsEnv,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_host: "127.0.0.1".to_owned(),
            http_port: 8081,
            database_url: "sqlite:./data/boldmetrics.db".to_owned(),
            log_level: LogLevel::Info,
            environment: Environment::Development,
            boldmetrics: BoldMetricsEnv::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is present but cannot be parsed
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let http_port = match env::var("HTTP_PORT") {
            Ok(value) => value
                .parse::<u16>()
                .with_context(|| format!("Invalid HTTP_PORT value: {value}"))?,
            Err(_) => defaults.http_port,
        };

        let timeout_secs = match env::var("BM_API_TIMEOUT_SECS") {
            Ok(value) => value
                .parse::<u64>()
                .with_context(|| format!("Invalid BM_API_TIMEOUT_SECS value: {value}"))?,
            Err(_) => api::DEFAULT_TIMEOUT_SECS,
        };
        if timeout_secs == 0 {
            bail!("BM_API_TIMEOUT_SECS must be greater than zero");
        }

        let variant = match env::var("BM_API_VARIANT") {
            Ok(value) => ApiVariant::parse(&value)?,
            Err(_) => ApiVariant::default(),
        };

        Ok(Self {
            http_host: env::var("HTTP_HOST").unwrap_or(defaults.http_host),
            http_port,
            database_url: env::var("DATABASE_URL").unwrap_or(defaults.database_url),
            log_level: LogLevel::from_str_or_default(
                &env::var("RUST_LOG").unwrap_or_else(|_| "info".to_owned()),
            ),
            environment: Environment::from_str_or_default(
                &env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_owned()),
            ),
            boldmetrics: BoldMetricsEnv {
                client_id: non_blank_var("BM_CLIENT_ID"),
                user_key: non_blank_var("BM_USER_KEY"),
                webhook_secret: non_blank_var("BM_WEBHOOK_SECRET"),
                base_url: non_blank_var("BM_API_BASE_URL")
                    .unwrap_or_else(|| api::DEFAULT_BASE_URL.to_owned()),
                variant,
                timeout_secs,
            },
        })
    }

    /// One-line redacted summary for startup logs
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "environment={} listen={}:{} database={} api_endpoint={} api_timeout={}s client_id={} user_key={} webhook_secret={}",
            self.environment,
            self.http_host,
            self.http_port,
            self.database_url,
            self.boldmetrics.endpoint(),
            self.boldmetrics.timeout_secs,
            self.boldmetrics.client_id.as_deref().unwrap_or("<stored option>"),
            self.boldmetrics
                .user_key
                .as_deref()
                .map_or_else(|| "<stored option>".to_owned(), mask_secret),
            if self.boldmetrics.webhook_secret.is_some() { "set" } else { "<stored option>" },
        )
    }
}

/// Read an environment variable, treating blank values as unset
fn non_blank_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}
