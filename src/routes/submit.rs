// ABOUTME: Front-end submission endpoint: validate, call the sizing API, store, return the result
// ABOUTME: Validation errors carry the offending field; API failures return one generic message
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bold Metrics Integration contributors

use super::request_fields;
use crate::constants::http;
use crate::errors::{AppError, AppResult};
use crate::resources::ServerResources;
use crate::services::SizingService;
use crate::validation::ValidatedSubmission;
use axum::{
    body::Bytes,
    extract::{RawQuery, State},
    http::HeaderMap,
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

/// Successful submission body
#[derive(Debug, Serialize, Deserialize)]
pub struct SubmitResponse {
    /// Always `true`
    pub success: bool,
    /// Id of the stored record, for the results view
    pub post_id: Uuid,
    /// Raw API response
    pub result: Value,
}

/// Form submission routes
pub struct SubmitRoutes;

impl SubmitRoutes {
    /// Create the submission route
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(http::SUBMIT_PATH, post(Self::handle_submit))
            .with_state(resources)
    }

    async fn handle_submit(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        RawQuery(query): RawQuery,
        body: Bytes,
    ) -> AppResult<Json<SubmitResponse>> {
        let fields = request_fields(&headers, query.as_deref(), &body)?;
        let submission = ValidatedSubmission::from_form(&fields).map_err(|e| {
            debug!(field = e.field(), error = %e, "Rejected form submission");
            AppError::from(e)
        })?;

        let outcome = SizingService::new(&resources).submit(submission).await?;

        Ok(Json(SubmitResponse {
            success: true,
            post_id: outcome.record.id,
            result: outcome.record.response,
        }))
    }
}
