// ABOUTME: Field-specific validation errors for measurement submissions
// ABOUTME: Each variant names the offending field so the form can highlight it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bold Metrics Integration contributors

use crate::constants::{limits, messages};
use thiserror::Error;

/// A rejected measurement submission. Only the first failing rule is reported.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is absent or blank
    #[error("{label} is required")]
    MissingField {
        /// Submitted field name
        field: &'static str,
        /// Human-readable field label
        label: &'static str,
    },

    /// A field that must be numeric could not be parsed
    #[error("{label} must be a number")]
    NotNumeric {
        /// Submitted field name
        field: &'static str,
        /// Human-readable field label
        label: &'static str,
    },

    /// A field that must be a whole number carried a fraction
    #[error("{label} must be a whole number")]
    NotWholeNumber {
        /// Submitted field name
        field: &'static str,
        /// Human-readable field label
        label: &'static str,
    },

    /// Feet component outside the accepted range
    #[error(
        "Height (feet) must be between {} and {}",
        limits::HEIGHT_FEET_MIN,
        limits::HEIGHT_FEET_MAX
    )]
    HeightFeetOutOfRange,

    /// Inches component outside the accepted range
    #[error(
        "Height (inches) must be between {} and {}",
        limits::HEIGHT_INCHES_MIN,
        limits::HEIGHT_INCHES_MAX
    )]
    HeightInchesOutOfRange,

    /// Total height in inches outside 3 ft 0 in .. 8 ft 11 in
    #[error(
        "Height must be between {} and {} inches",
        limits::HEIGHT_TOTAL_MIN,
        limits::HEIGHT_TOTAL_MAX
    )]
    HeightOutOfRange,

    /// Weight outside the accepted range
    #[error(
        "Weight must be between {} and {} lbs",
        limits::WEIGHT_MIN_LBS,
        limits::WEIGHT_MAX_LBS
    )]
    WeightOutOfRange,

    /// Age outside the accepted range
    #[error("Age must be between {} and {}", limits::AGE_MIN, limits::AGE_MAX)]
    AgeOutOfRange,

    /// Sex missing or not one of male/female
    #[error("Please select male or female")]
    InvalidSex,

    /// Male profile without a waist measurement
    #[error("Waist size is required for males")]
    MissingWaist,

    /// Waist outside the accepted range
    #[error(
        "Waist must be between {} and {} inches",
        limits::WAIST_MIN_IN,
        limits::WAIST_MAX_IN
    )]
    WaistOutOfRange,

    /// Female profile without strap and cup size
    #[error("Strap and cup size are required for females")]
    MissingBraFields,

    /// Legacy webhook payload lacking height/weight/age or a body measurement
    #[error("{}", messages::WEBHOOK_MISSING_FIELDS)]
    MissingRequiredFields,
}

impl ValidationError {
    /// Name of the submitted field the error refers to
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::MissingField { field, .. }
            | Self::NotNumeric { field, .. }
            | Self::NotWholeNumber { field, .. } => field,
            Self::HeightFeetOutOfRange => "height_ft",
            Self::HeightInchesOutOfRange => "height_in",
            Self::HeightOutOfRange => "height",
            Self::WeightOutOfRange => "weight",
            Self::AgeOutOfRange => "age",
            Self::InvalidSex => "sex",
            Self::MissingWaist | Self::WaistOutOfRange => "waist",
            Self::MissingBraFields => "strap_size",
            Self::MissingRequiredFields => "body",
        }
    }

    /// Whether the value was present but outside its range
    #[must_use]
    pub const fn is_range_error(&self) -> bool {
        matches!(
            self,
            Self::HeightFeetOutOfRange
                | Self::HeightInchesOutOfRange
                | Self::HeightOutOfRange
                | Self::WeightOutOfRange
                | Self::AgeOutOfRange
                | Self::WaistOutOfRange
        )
    }

    /// Whether a required value was absent
    #[must_use]
    pub const fn is_missing_field(&self) -> bool {
        matches!(
            self,
            Self::MissingField { .. }
                | Self::MissingWaist
                | Self::MissingBraFields
                | Self::MissingRequiredFields
        )
    }
}
