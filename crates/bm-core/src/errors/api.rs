// ABOUTME: Error kinds produced by the outbound sizing API call
// ABOUTME: Distinguishes missing credentials, transport, HTTP status and JSON parse failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bold Metrics Integration contributors

use thiserror::Error;

/// Outcome of a failed sizing API call. No kind is retried automatically.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Client id or user key empty; raised before any network activity
    #[error("Bold Metrics credentials are not configured.")]
    MissingCredentials,

    /// Network failure or timeout before a response arrived
    #[error("Transport error contacting Bold Metrics: {0}")]
    Transport(String),

    /// The API answered with a non-200 status
    #[error("Bold Metrics returned HTTP {code}: {body_snippet}")]
    Http {
        /// HTTP status code
        code: u16,
        /// First words of the response body
        body_snippet: String,
    },

    /// The 200 body is not valid JSON
    #[error("Unable to parse Bold Metrics response as JSON: {0}")]
    Parse(String),
}

impl ApiError {
    /// Stable short name for structured logs
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::MissingCredentials => "missing_credentials",
            Self::Transport(_) => "transport_error",
            Self::Http { .. } => "http_error",
            Self::Parse(_) => "parse_error",
        }
    }
}
