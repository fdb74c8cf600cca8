// ABOUTME: Tests for environment configuration parsing and credential resolution
// ABOUTME: Serialized because they mutate process environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bold Metrics Integration contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use boldmetrics_integration::config::{
    ApiVariant, BoldMetricsConfig, BoldMetricsEnv, ServerConfig, StoredOptions,
};
use boldmetrics_integration::models::CredentialSource;
use serial_test::serial;
use std::env;
use std::time::Duration;

const VARS: [&str; 9] = [
    "HTTP_PORT",
    "DATABASE_URL",
    "BM_CLIENT_ID",
    "BM_USER_KEY",
    "BM_WEBHOOK_SECRET",
    "BM_API_BASE_URL",
    "BM_API_VARIANT",
    "BM_API_TIMEOUT_SECS",
    "ENVIRONMENT",
];

fn clear_env() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_defaults_without_environment() {
    clear_env();
    let config = ServerConfig::from_env().unwrap();

    assert_eq!(config.http_port, 8081);
    assert_eq!(config.boldmetrics.variant, ApiVariant::Sizer);
    assert_eq!(
        config.boldmetrics.endpoint(),
        "https://api.boldmetrics.io/virtualsizer/get"
    );
    assert_eq!(config.boldmetrics.timeout(), Duration::from_secs(15));
    assert!(config.boldmetrics.client_id.is_none());
}

#[test]
#[serial]
fn test_environment_overrides() {
    clear_env();
    env::set_var("HTTP_PORT", "9090");
    env::set_var("DATABASE_URL", "sqlite::memory:");
    env::set_var("BM_CLIENT_ID", "env_client");
    env::set_var("BM_USER_KEY", "   ");
    env::set_var("BM_API_BASE_URL", "http://localhost:4000/");
    env::set_var("BM_API_VARIANT", "Tailor");
    env::set_var("BM_API_TIMEOUT_SECS", "5");

    let config = ServerConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.http_port, 9090);
    assert_eq!(config.database_url, "sqlite::memory:");
    assert_eq!(config.boldmetrics.client_id.as_deref(), Some("env_client"));
    assert!(config.boldmetrics.user_key.is_none());
    assert_eq!(
        config.boldmetrics.endpoint(),
        "http://localhost:4000/virtualtailor/get"
    );
    assert_eq!(config.boldmetrics.timeout(), Duration::from_secs(5));
}

#[test]
#[serial]
fn test_invalid_values_are_errors() {
    clear_env();
    env::set_var("BM_API_TIMEOUT_SECS", "0");
    assert!(ServerConfig::from_env().is_err());

    clear_env();
    env::set_var("BM_API_VARIANT", "fitter");
    assert!(ServerConfig::from_env().is_err());

    clear_env();
    env::set_var("HTTP_PORT", "not-a-port");
    assert!(ServerConfig::from_env().is_err());
    clear_env();
}

#[test]
fn test_environment_wins_over_stored_options() {
    let env_settings = BoldMetricsEnv {
        client_id: Some("env_client".to_owned()),
        ..BoldMetricsEnv::default()
    };
    let stored = StoredOptions {
        client_id: Some("stored_client".to_owned()),
        user_key: Some("stored_key".to_owned()),
        webhook_secret: Some("  ".to_owned()),
    };

    let config = BoldMetricsConfig::resolve(&env_settings, &stored);

    assert_eq!(config.credentials.client_id, "env_client");
    assert_eq!(config.client_id_source, CredentialSource::Environment);
    assert_eq!(config.credentials.user_key, "stored_key");
    assert_eq!(config.user_key_source, CredentialSource::StoredOption);
    assert!(config.webhook_secret.is_none());
    assert!(config.credentials.is_complete());
}

#[test]
fn test_nothing_configured_is_incomplete() {
    let config = BoldMetricsConfig::resolve(&BoldMetricsEnv::default(), &StoredOptions::default());
    assert_eq!(config.client_id_source, CredentialSource::Unset);
    assert!(!config.credentials.is_complete());
}

#[test]
fn test_summary_masks_secrets() {
    let config = ServerConfig {
        boldmetrics: BoldMetricsEnv {
            client_id: Some("client".to_owned()),
            user_key: Some("supersecretuserkey".to_owned()),
            webhook_secret: Some("hook-secret".to_owned()),
            ..BoldMetricsEnv::default()
        },
        ..ServerConfig::default()
    };

    let summary = config.summary();
    assert!(!summary.contains("supersecretuserkey"));
    assert!(!summary.contains("hook-secret"));
    assert!(summary.contains("webhook_secret=set"));

    let debug = format!("{:?}", config.boldmetrics);
    assert!(!debug.contains("supersecretuserkey"));
    assert!(!debug.contains("hook-secret"));
}
