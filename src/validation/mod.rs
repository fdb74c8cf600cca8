// ABOUTME: Input validation for form submissions and legacy webhook payloads
// ABOUTME: Pure, fail-fast checks turning untrusted fields into a normalized measurement record
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bold Metrics Integration contributors

//! # Input Validator
//!
//! Raw request bodies are first flattened into [`RawFields`] (JSON or
//! form-encoded, scalars only). The validators then apply their rules in a fixed
//! order and stop at the first failure: height, weight, age, sex, then the
//! sex-specific fields.

/// Optional descriptive fields and dimension overrides
pub mod extras;
/// Flattened raw request fields
pub mod fields;
/// Front-end form rules
pub mod form;
/// Legacy webhook rules
pub mod webhook;

pub use extras::{extract_anon_id, extract_extras};
pub use fields::RawFields;
pub use form::validate_submission;
pub use webhook::validate_webhook;

use crate::errors::ValidationError;
use crate::models::{MeasurementInput, QueryExtras};

/// A validated request: measurements plus the optional fields forwarded as-is
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedSubmission {
    /// Range-checked measurement record
    pub measurements: MeasurementInput,
    /// Caller-supplied anonymous id, if any
    pub anon_id: Option<String>,
    /// Optional descriptive fields and overrides
    pub extras: QueryExtras,
}

impl ValidatedSubmission {
    /// Validate a front-end form submission
    ///
    /// # Errors
    ///
    /// Returns the first failing [`ValidationError`]
    pub fn from_form(fields: &RawFields) -> Result<Self, ValidationError> {
        Ok(Self {
            measurements: validate_submission(fields)?,
            anon_id: extract_anon_id(fields),
            extras: extract_extras(fields),
        })
    }

    /// Validate a legacy webhook payload
    ///
    /// # Errors
    ///
    /// Returns the first failing [`ValidationError`]
    pub fn from_webhook(fields: &RawFields) -> Result<Self, ValidationError> {
        Ok(Self {
            measurements: validate_webhook(fields)?,
            anon_id: extract_anon_id(fields),
            extras: extract_extras(fields),
        })
    }
}
