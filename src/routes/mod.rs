// ABOUTME: HTTP route modules for the form, submission endpoints, results view and health checks
// ABOUTME: Shared body parsing turns JSON or form-encoded requests into raw fields
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bold Metrics Integration contributors

//! Route modules
//!
//! Each module exposes a `*Routes` type with a `routes()` constructor that the
//! server merges into one router.

/// Health and readiness endpoints
pub mod health;
/// Form page and client script
pub mod pages;
/// Stored result view
pub mod results;
/// Front-end form submission endpoint
pub mod submit;
/// Legacy webhook endpoint
pub mod webhook;

pub use health::HealthRoutes;
pub use pages::PageRoutes;
pub use results::ResultRoutes;
pub use submit::SubmitRoutes;
pub use webhook::WebhookRoutes;

use crate::errors::{AppError, AppResult};
use crate::validation::RawFields;
use axum::http::{header, HeaderMap};

/// Flatten a request into raw fields. JSON and form bodies are both accepted;
/// query-string parameters fill in anything the body does not set.
pub(crate) fn request_fields(
    headers: &HeaderMap,
    query: Option<&str>,
    body: &[u8],
) -> AppResult<RawFields> {
    let is_json = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.trim_start().starts_with("application/json"));

    let from_body = if body.iter().all(u8::is_ascii_whitespace) {
        RawFields::new()
    } else if is_json {
        let value: serde_json::Value = serde_json::from_slice(body)
            .map_err(|e| AppError::invalid_input(format!("Request body is not valid JSON: {e}")))?;
        RawFields::from_json(&value)?
    } else {
        RawFields::from_urlencoded(body)?
    };

    let from_query = match query {
        Some(query) if !query.is_empty() => RawFields::from_urlencoded(query.as_bytes())?,
        _ => RawFields::new(),
    };

    Ok(from_body.merged_under(from_query))
}
