// ABOUTME: Explicit sizing API configuration threaded into the query builder, client and webhook guard
// ABOUTME: Resolves each credential from the environment constant first, then the stored option
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bold Metrics Integration contributors

use super::environment::BoldMetricsEnv;
use crate::models::{ApiCredentials, CredentialSource};
use serde::{Deserialize, Serialize};

/// Values saved through the operator CLI
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredOptions {
    /// Stored client id
    pub client_id: Option<String>,
    /// Stored user key
    pub user_key: Option<String>,
    /// Stored webhook secret
    pub webhook_secret: Option<String>,
}

/// Per-request sizing API configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoldMetricsConfig {
    /// Resolved credentials, possibly incomplete
    pub credentials: ApiCredentials,
    /// Origin of the client id
    pub client_id_source: CredentialSource,
    /// Origin of the user key
    pub user_key_source: CredentialSource,
    /// Shared secret required on the legacy webhook, if any
    pub webhook_secret: Option<String>,
}

impl BoldMetricsConfig {
    /// Merge environment constants over stored options, field by field
    #[must_use]
    pub fn resolve(env: &BoldMetricsEnv, stored: &StoredOptions) -> Self {
        let (client_id, client_id_source) =
            pick(env.client_id.as_deref(), stored.client_id.as_deref());
        let (user_key, user_key_source) = pick(env.user_key.as_deref(), stored.user_key.as_deref());
        let (webhook_secret, _) = pick(
            env.webhook_secret.as_deref(),
            stored.webhook_secret.as_deref(),
        );

        Self {
            credentials: ApiCredentials::new(client_id, user_key),
            client_id_source,
            user_key_source,
            webhook_secret: Some(webhook_secret).filter(|s| !s.is_empty()),
        }
    }
}

fn pick(env_value: Option<&str>, stored_value: Option<&str>) -> (String, CredentialSource) {
    let non_blank = |v: Option<&str>| v.map(str::trim).filter(|v| !v.is_empty()).map(str::to_owned);
    if let Some(value) = non_blank(env_value) {
        (value, CredentialSource::Environment)
    } else if let Some(value) = non_blank(stored_value) {
        (value, CredentialSource::StoredOption)
    } else {
        (String::new(), CredentialSource::Unset)
    }
}
