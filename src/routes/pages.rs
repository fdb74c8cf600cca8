// ABOUTME: Serves the measurement form page and its client-side script
// ABOUTME: The script drives the Idle, Validating, Submitting, Success or Error cycle
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bold Metrics Integration contributors

use crate::formatters::pages::{render_form_page, FORM_SCRIPT_PATH};
use axum::{
    http::header,
    response::{Html, IntoResponse},
    routing::get,
    Router,
};

const FORM_SCRIPT: &str = include_str!("../../assets/bm-form.js");

/// Form page routes
pub struct PageRoutes;

impl PageRoutes {
    /// Create the page routes
    pub fn routes() -> Router {
        Router::new()
            .route("/", get(Self::handle_form))
            .route(FORM_SCRIPT_PATH, get(Self::handle_script))
    }

    async fn handle_form() -> Html<String> {
        Html(render_form_page())
    }

    async fn handle_script() -> impl IntoResponse {
        (
            [(header::CONTENT_TYPE, "application/javascript; charset=utf-8")],
            FORM_SCRIPT,
        )
    }
}
