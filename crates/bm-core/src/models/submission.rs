// ABOUTME: Persisted submission record pairing the normalized input with the raw API response
// ABOUTME: Created once per successful API call and never mutated afterwards
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bold Metrics Integration contributors

use crate::models::measurement::MeasurementInput;
use crate::models::query::QueryExtras;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// The input half of a stored record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionInput {
    /// Validated measurements
    pub measurements: MeasurementInput,
    /// Anonymous identifier sent with the query
    pub anon_id: String,
    /// Optional descriptive fields that were forwarded
    #[serde(default)]
    pub extras: QueryExtras,
}

/// A stored submission as read back from persistence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredSubmission {
    /// Opaque identifier
    pub id: Uuid,
    /// Admin-facing title, `BM Result: <anon_id>`
    pub title: String,
    /// Input record as JSON
    pub input: Value,
    /// Raw API response
    pub response: Value,
    /// Creation time
    pub created_at: DateTime<Utc>,
}

impl StoredSubmission {
    /// A record is displayable only when it carries a non-empty response object
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.response.as_object().is_some_and(|o| !o.is_empty())
    }

    /// Typed view of the stored input, if it still matches the current schema
    #[must_use]
    pub fn typed_input(&self) -> Option<SubmissionInput> {
        serde_json::from_value(self.input.clone()).ok()
    }
}

/// Title used for new records
#[must_use]
pub fn submission_title(anon_id: &str) -> String {
    format!("BM Result: {anon_id}")
}
