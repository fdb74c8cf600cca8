// ABOUTME: Submission pipeline: build query, call the sizing API, persist, load for display
// ABOUTME: Records are only stored after a full successful round trip
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bold Metrics Integration contributors

use crate::config::BoldMetricsConfig;
use crate::errors::{AppError, AppResult};
use crate::models::{DisplayModel, StoredSubmission, SubmissionInput};
use crate::resources::ServerResources;
use crate::results::{input_summary_from_measurements, normalize};
use crate::sizing::build_query;
use crate::validation::ValidatedSubmission;
use serde_json::Value;
use tracing::{error, info, warn};
use uuid::Uuid;

/// A stored round trip
#[derive(Debug, Clone)]
pub struct SubmissionOutcome {
    /// Persisted record
    pub record: StoredSubmission,
    /// Anonymous id sent to the API
    pub anon_id: String,
}

impl SubmissionOutcome {
    /// Raw API response as stored
    #[must_use]
    pub const fn response(&self) -> &Value {
        &self.record.response
    }
}

/// A stored record prepared for rendering
#[derive(Debug, Clone, PartialEq)]
pub struct ResultView {
    /// Record title
    pub title: String,
    /// Normalized response
    pub model: DisplayModel,
}

/// Submission pipeline over shared server resources
pub struct SizingService<'a> {
    resources: &'a ServerResources,
}

impl<'a> SizingService<'a> {
    /// Service borrowing the shared resources
    #[must_use]
    pub const fn new(resources: &'a ServerResources) -> Self {
        Self { resources }
    }

    /// Resolve credentials and webhook secret for this request
    ///
    /// # Errors
    ///
    /// Returns an error if stored options cannot be read
    pub async fn api_config(&self) -> AppResult<BoldMetricsConfig> {
        let stored = self.resources.database.stored_options().await?;
        Ok(BoldMetricsConfig::resolve(
            &self.resources.config.boldmetrics,
            &stored,
        ))
    }

    /// Run a validated submission through the API and store the result
    ///
    /// # Errors
    ///
    /// Returns the generic external-service error when the API call fails, or
    /// a database error if the record cannot be stored
    pub async fn submit(&self, submission: ValidatedSubmission) -> AppResult<SubmissionOutcome> {
        let config = self.api_config().await?;
        self.submit_with(&config, submission).await
    }

    /// Same as [`Self::submit`] with an already resolved configuration
    ///
    /// # Errors
    ///
    /// Returns the generic external-service error when the API call fails, or
    /// a database error if the record cannot be stored
    pub async fn submit_with(
        &self,
        config: &BoldMetricsConfig,
        submission: ValidatedSubmission,
    ) -> AppResult<SubmissionOutcome> {
        let built = build_query(
            &submission.measurements,
            &config.credentials,
            submission.anon_id.as_deref(),
            &submission.extras,
        );

        let response = self.resources.api.fetch(&built.query).await.map_err(|e| {
            error!(
                error_kind = e.kind(),
                error = %e,
                anon_id = %built.anon_id,
                "Sizing API call failed"
            );
            AppError::from(e)
        })?;

        let input = SubmissionInput {
            measurements: submission.measurements,
            anon_id: built.anon_id.clone(),
            extras: submission.extras,
        };
        let record = self.resources.database.insert_submission(&input, &response).await?;

        info!(
            post_id = %record.id,
            anon_id = %built.anon_id,
            sex = %input.measurements.sex(),
            "Stored sizing result"
        );

        Ok(SubmissionOutcome {
            record,
            anon_id: built.anon_id,
        })
    }

    /// Load a stored record for display
    ///
    /// Absent, malformed, unknown and incomplete ids all yield the same
    /// not-found error.
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for anything that cannot be displayed, or a
    /// database error if the lookup itself fails
    pub async fn load_result(&self, id: Option<&str>) -> AppResult<ResultView> {
        let not_found = || AppError::not_found("Result");

        let id = id.map(str::trim).filter(|id| !id.is_empty()).ok_or_else(not_found)?;
        let Ok(id) = Uuid::parse_str(id) else {
            warn!(id, "Malformed result id");
            return Err(not_found());
        };

        let record = self
            .resources
            .database
            .get_submission(id)
            .await?
            .ok_or_else(not_found)?;

        result_view(record)
    }
}

/// Prepare a stored record for display
///
/// # Errors
///
/// Returns `ResourceNotFound` when the stored response is incomplete
pub fn result_view(record: StoredSubmission) -> AppResult<ResultView> {
    if !record.is_complete() {
        warn!(post_id = %record.id, "Stored result is incomplete");
        return Err(AppError::not_found("Result"));
    }

    Ok(ResultView {
        model: display_model_for(&record),
        title: record.title,
    })
}

/// Normalize a stored record, filling the input summary from the stored input
/// when the response has no echo of it
#[must_use]
pub fn display_model_for(record: &StoredSubmission) -> DisplayModel {
    let mut model = normalize(&record.response);
    if model.input_summary.is_empty() {
        if let Some(input) = record.typed_input() {
            model.input_summary = input_summary_from_measurements(&input.measurements);
        }
    }
    model
}
