// ABOUTME: Sizing API credentials resolved from environment constants or stored options
// ABOUTME: Debug output masks the user key so credentials never reach the logs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bold Metrics Integration contributors

use serde::Serialize;
use std::fmt;

/// Where a credential value was read from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CredentialSource {
    /// Process environment (deployment constant)
    Environment,
    /// Stored options table
    StoredOption,
    /// Neither source had a value
    Unset,
}

/// Client id and user key for the sizing API
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ApiCredentials {
    /// API client identifier
    pub client_id: String,
    /// API user key (secret)
    pub user_key: String,
}

impl ApiCredentials {
    /// Create credentials from raw values
    pub fn new(client_id: impl Into<String>, user_key: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            user_key: user_key.into(),
        }
    }

    /// Both values are present and non-blank
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.client_id.trim().is_empty() && !self.user_key.trim().is_empty()
    }

    /// User key with everything after the first four characters masked
    #[must_use]
    pub fn masked_user_key(&self) -> String {
        mask_secret(&self.user_key)
    }
}

impl fmt::Debug for ApiCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiCredentials")
            .field("client_id", &self.client_id)
            .field("user_key", &self.masked_user_key())
            .finish()
    }
}

/// Keep the first four characters of a secret and star out the rest
#[must_use]
pub fn mask_secret(secret: &str) -> String {
    let visible: String = secret.chars().take(4).collect();
    let hidden = secret.chars().count().saturating_sub(4);
    format!("{visible}{}", "*".repeat(hidden))
}
