// ABOUTME: HTTP client for the Bold Metrics sizing API
// ABOUTME: Sends one GET per call and classifies the outcome as JSON or a typed ApiError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bold Metrics Integration contributors

//! Bold Metrics API Client
//!
//! The client performs exactly one request per [`SizingApi::fetch`] call; there
//! is no retry. Success means HTTP 200 with a JSON body that is not `null`.
//!
//! # Example
//! ```rust,no_run
//! use boldmetrics_integration::external::{BoldMetricsClient, BoldMetricsClientConfig, SizingApi};
//! use boldmetrics_integration::models::ApiQuery;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = BoldMetricsClient::new(BoldMetricsClientConfig::default())?;
//! let mut query = ApiQuery::new();
//! query.insert("client_id", "my_client");
//! query.insert("user_key", "my_key");
//! let raw = client.fetch(&query).await?;
//! # Ok(())
//! # }
//! ```

use crate::constants::{api, limits};
use crate::errors::{ApiError, AppError};
use crate::models::ApiQuery;
use crate::utils::text::trim_words;
use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

/// Outbound sizing API seam, mocked in tests
#[async_trait]
pub trait SizingApi: Send + Sync {
    /// Perform a single call and return the raw JSON payload
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] describing why no usable payload was obtained
    async fn fetch(&self, query: &ApiQuery) -> Result<Value, ApiError>;
}

/// Bold Metrics client configuration
#[derive(Debug, Clone)]
pub struct BoldMetricsClientConfig {
    /// Full endpoint URL (base URL plus variant path)
    pub endpoint: String,
    /// Request timeout (default: 15 seconds)
    pub timeout: Duration,
}

impl Default for BoldMetricsClientConfig {
    fn default() -> Self {
        Self {
            endpoint: format!("{}{}", api::DEFAULT_BASE_URL, api::VIRTUAL_SIZER_PATH),
            timeout: Duration::from_secs(api::DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Bold Metrics sizing API client
pub struct BoldMetricsClient {
    config: BoldMetricsClientConfig,
    http_client: reqwest::Client,
}

impl BoldMetricsClient {
    /// Create a client with the configured timeout
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed
    pub fn new(config: BoldMetricsClientConfig) -> Result<Self, AppError> {
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AppError::config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            config,
            http_client,
        })
    }

    /// Endpoint this client calls
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }
}

#[async_trait]
impl SizingApi for BoldMetricsClient {
    async fn fetch(&self, query: &ApiQuery) -> Result<Value, ApiError> {
        if !query.has_credentials() {
            warn!("Bold Metrics credentials are not configured; skipping API call");
            return Err(ApiError::MissingCredentials);
        }

        debug!(
            endpoint = %self.config.endpoint,
            query = ?query.redacted(),
            "Calling {}", api::SERVICE_NAME
        );

        let response = self
            .http_client
            .get(&self.config.endpoint)
            .query(query.pairs())
            .send()
            .await
            .map_err(|e| {
                let cause = if e.is_timeout() {
                    format!("request timed out after {:?}", self.config.timeout)
                } else {
                    e.to_string()
                };
                warn!(error = %cause, "{} request failed", api::SERVICE_NAME);
                ApiError::Transport(cause)
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            warn!(error = %e, "Failed to read {} response body", api::SERVICE_NAME);
            ApiError::Transport(e.to_string())
        })?;

        if status != StatusCode::OK {
            let body_snippet = trim_words(&body, limits::ERROR_BODY_SNIPPET_WORDS);
            warn!(
                status = status.as_u16(),
                body = %body_snippet,
                "{} returned a non-200 status", api::SERVICE_NAME
            );
            return Err(ApiError::Http {
                code: status.as_u16(),
                body_snippet,
            });
        }

        match serde_json::from_str::<Value>(&body) {
            Ok(Value::Null) => {
                warn!("{} returned a null body", api::SERVICE_NAME);
                Err(ApiError::Parse("response body is null".to_owned()))
            }
            Ok(value) => Ok(value),
            Err(e) => {
                warn!(error = %e, "{} returned invalid JSON", api::SERVICE_NAME);
                Err(ApiError::Parse(e.to_string()))
            }
        }
    }
}
