// ABOUTME: Stable display model derived from the sizing API's JSON response
// ABOUTME: Ephemeral, render-only view with no lifecycle of its own
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bold Metrics Integration contributors

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Which response shape the display model was built from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ResponseKind {
    /// `good_matches` / `predictions`
    Sizer,
    /// `dimensions` / `customer` / `outlier`
    Tailor,
    /// Neither shape recognized
    #[default]
    Unknown,
}

/// One recommended size
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoodMatch {
    /// Brand size if given, else generic size
    pub label: String,
    /// Fit score text, e.g. "92%"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fit_score: Option<String>,
}

/// Everything the presentation renderer needs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayModel {
    /// Shape the model was derived from
    pub kind: ResponseKind,
    /// Recommended sizes in API order
    pub good_matches: Vec<GoodMatch>,
    /// Display name to formatted value
    pub predicted_measurements: BTreeMap<String, String>,
    /// Whether the API flagged the input as a statistical outlier
    pub outlier: bool,
    /// Specific outlier explanations
    pub outlier_messages: Vec<String>,
    /// Echo of the submitted measurements, display name to value
    pub input_summary: BTreeMap<String, String>,
}

impl DisplayModel {
    /// No section has any content
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.good_matches.is_empty()
            && self.predicted_measurements.is_empty()
            && !self.outlier
            && self.outlier_messages.is_empty()
            && self.input_summary.is_empty()
    }
}
