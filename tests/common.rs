// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides in-memory database, canned sizing API and resource helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bold Metrics Integration contributors
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `boldmetrics_integration`

use async_trait::async_trait;
use boldmetrics_integration::{
    config::environment::{BoldMetricsEnv, ServerConfig},
    database::Database,
    errors::ApiError,
    external::SizingApi,
    models::ApiQuery,
    resources::ServerResources,
    validation::RawFields,
};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, Once};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Fresh in-memory database with migrations applied
pub async fn create_test_database() -> Database {
    init_test_logging();
    Database::new("sqlite::memory:")
        .await
        .expect("Failed to create in-memory database")
}

/// Sizing API stand-in returning a canned outcome and recording every query
pub struct CannedSizingApi {
    outcome: Result<Value, ApiError>,
    calls: AtomicUsize,
    last_query: Mutex<Option<ApiQuery>>,
}

impl CannedSizingApi {
    pub fn ok(response: Value) -> Arc<Self> {
        Arc::new(Self {
            outcome: Ok(response),
            calls: AtomicUsize::new(0),
            last_query: Mutex::new(None),
        })
    }

    pub fn failing(error: ApiError) -> Arc<Self> {
        Arc::new(Self {
            outcome: Err(error),
            calls: AtomicUsize::new(0),
            last_query: Mutex::new(None),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_query(&self) -> Option<ApiQuery> {
        self.last_query.lock().unwrap().clone()
    }
}

#[async_trait]
impl SizingApi for CannedSizingApi {
    async fn fetch(&self, query: &ApiQuery) -> Result<Value, ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_query.lock().unwrap() = Some(query.clone());
        self.outcome.clone()
    }
}

/// Configuration with environment credentials and an optional webhook secret
pub fn test_config(webhook_secret: Option<&str>) -> ServerConfig {
    ServerConfig {
        boldmetrics: BoldMetricsEnv {
            client_id: Some("test_client".to_owned()),
            user_key: Some("test_user_key_123".to_owned()),
            webhook_secret: webhook_secret.map(ToOwned::to_owned),
            ..BoldMetricsEnv::default()
        },
        ..ServerConfig::default()
    }
}

/// Resources over an in-memory database and the given API stand-in
pub async fn create_test_resources(
    api: Arc<dyn SizingApi>,
    config: ServerConfig,
) -> Arc<ServerResources> {
    let database = create_test_database().await;
    Arc::new(ServerResources::new(database, api, config))
}

/// Virtual Sizer response used across tests
pub fn sizer_response() -> Value {
    json!({
        "good_matches": [
            {"brand_size": "M", "size": "Medium", "fit_score": "92%"},
            {"size": "L", "fit_score": 81}
        ],
        "predictions": {"chest_circum": 40.0, "waist_circum_stomach": 35.25},
        "request_id": "abc-123"
    })
}

/// Scenario A form fields
pub fn male_form_fields() -> RawFields {
    RawFields::from_pairs([
        ("sex", "male"),
        ("height_ft", "5"),
        ("height_in", "10"),
        ("weight", "180"),
        ("age", "35"),
        ("waist", "34"),
    ])
}

/// Valid female form fields
pub fn female_form_fields() -> RawFields {
    RawFields::from_pairs([
        ("sex", "female"),
        ("height_ft", "5"),
        ("height_in", "5"),
        ("weight", "140"),
        ("age", "29"),
        ("strap_size", "34"),
        ("cup_size", "C"),
    ])
}
