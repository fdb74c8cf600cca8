// ABOUTME: Legacy webhook endpoint accepting raw measurement payloads from external systems
// ABOUTME: Guarded by an optional shared secret header compared in constant time
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bold Metrics Integration contributors

use super::request_fields;
use crate::constants::{http, messages};
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
use subtle::ConstantTimeEq;
use tracing::{debug, warn};
use uuid::Uuid;

/// Successful webhook body
#[derive(Debug, Serialize, Deserialize)]
pub struct WebhookResponse {
    /// Always `true`
    pub ok: bool,
    /// Id of the stored record
    pub post_id: Uuid,
    /// Raw API response
    pub response: Value,
}

/// Legacy webhook routes
pub struct WebhookRoutes;

impl WebhookRoutes {
    /// Create the webhook route
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(http::WEBHOOK_PATH, post(Self::handle_webhook))
            .with_state(resources)
    }

    async fn handle_webhook(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        RawQuery(query): RawQuery,
        body: Bytes,
    ) -> AppResult<Json<WebhookResponse>> {
        let service = SizingService::new(&resources);
        let config = service.api_config().await?;

        if let Some(secret) = config.webhook_secret.as_deref() {
            let provided = headers
                .get(http::WEBHOOK_SECRET_HEADER)
                .and_then(|v| v.to_str().ok())
                .unwrap_or_default();
            if !secret_matches(provided, secret) {
                warn!("Rejected webhook call with a missing or invalid secret");
                return Err(AppError::forbidden(messages::INVALID_WEBHOOK_SECRET));
            }
        }

        let fields = request_fields(&headers, query.as_deref(), &body)?;
        let submission = ValidatedSubmission::from_webhook(&fields).map_err(|e| {
            debug!(field = e.field(), error = %e, "Rejected webhook payload");
            AppError::from(e)
        })?;

        let outcome = service.submit_with(&config, submission).await?;

        Ok(Json(WebhookResponse {
            ok: true,
            post_id: outcome.record.id,
            response: outcome.record.response,
        }))
    }
}

fn secret_matches(provided: &str, expected: &str) -> bool {
    bool::from(provided.as_bytes().ct_eq(expected.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secret_comparison() {
        assert!(secret_matches("s3cret", "s3cret"));
        assert!(!secret_matches("s3cret ", "s3cret"));
        assert!(!secret_matches("", "s3cret"));
    }
}
