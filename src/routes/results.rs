// ABOUTME: Results view rendering a stored submission by id
// ABOUTME: Absent, unknown or incomplete ids render the dedicated not-found page
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bold Metrics Integration contributors

use crate::constants::http;
use crate::errors::ErrorCode;
use crate::formatters::{render_error_page, render_not_found_page, render_results_page};
use crate::resources::ServerResources;
use crate::services::SizingService;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Html,
    routing::get,
    Router,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::error;

/// `?id=<uuid>`
#[derive(Debug, Deserialize)]
pub struct ResultsQuery {
    /// Stored record id
    pub id: Option<String>,
}

/// Results view routes
pub struct ResultRoutes;

impl ResultRoutes {
    /// Create the results route
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(http::RESULTS_PATH, get(Self::handle_results))
            .with_state(resources)
    }

    async fn handle_results(
        State(resources): State<Arc<ServerResources>>,
        Query(params): Query<ResultsQuery>,
    ) -> (StatusCode, Html<String>) {
        match SizingService::new(&resources)
            .load_result(params.id.as_deref())
            .await
        {
            Ok(view) => (
                StatusCode::OK,
                Html(render_results_page(&view.title, &view.model)),
            ),
            Err(e) if e.code == ErrorCode::ResourceNotFound => {
                (StatusCode::NOT_FOUND, Html(render_not_found_page()))
            }
            Err(e) => {
                error!(error = %e, "Failed to load stored result");
                (StatusCode::INTERNAL_SERVER_ERROR, Html(render_error_page()))
            }
        }
    }
}
