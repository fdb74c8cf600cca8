// ABOUTME: Domain models shared by the validator, query builder, normalizer and renderer
// ABOUTME: Measurement input, API credentials and query, display model, stored submissions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bold Metrics Integration contributors

//! Core data models

/// API credentials and where they came from
pub mod credentials;
/// Render-only view of an API response
pub mod display;
/// Validated body measurements
pub mod measurement;
/// Flat key/value query for the sizing API
pub mod query;
/// Persisted submission records
pub mod submission;

pub use credentials::{ApiCredentials, CredentialSource};
pub use display::{DisplayModel, GoodMatch, ResponseKind};
pub use measurement::{MeasurementInput, Sex, SexProfile};
pub use query::{ApiQuery, QueryExtras};
pub use submission::{submission_title, StoredSubmission, SubmissionInput};
