// ABOUTME: Maps raw sizing API JSON to a stable DisplayModel
// ABOUTME: Branches on a tagged union of the two known response shapes; unknown keys are ignored
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bold Metrics Integration contributors

//! # Result Normalizer
//!
//! Two response shapes are known:
//!
//! - **Virtual Sizer**: `good_matches` (list of `{brand_size | size, fit_score}`)
//!   and `predictions` (name to number or string).
//! - **Virtual Tailor**: `dimensions` (name to inches), `customer` (input echo),
//!   `outlier` and `outlier_messages.specifics`. Tailor responses may also carry
//!   `size_recommendations.good_matches`. A tailor payload without
//!   `dimensions` falls back to any top-level `predictions`.
//!
//! Normalization is pure: the same raw JSON always yields the same model.

use crate::constants::messages;
use crate::models::{DisplayModel, GoodMatch, MeasurementInput, ResponseKind, SexProfile};
use crate::utils::text::{format_fixed, format_percent, title_case};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

const TAILOR_KEYS: [&str; 4] = ["dimensions", "customer", "outlier", "outlier_messages"];

/// Virtual Sizer payload fields the display uses
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SizerResponse {
    /// Candidate sizes
    pub good_matches: Vec<Value>,
    /// Predicted body measurements
    pub predictions: Map<String, Value>,
}

/// Virtual Tailor payload fields the display uses
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TailorResponse {
    /// Candidate sizes, when the tailor call included a product
    pub good_matches: Vec<Value>,
    /// Predicted body dimensions in inches
    pub dimensions: Map<String, Value>,
    /// Sizer-style predictions carried alongside the tailor keys
    pub predictions: Map<String, Value>,
    /// Echo of the submitted measurements
    pub customer: Map<String, Value>,
    /// Whether the API flagged the input as statistically unusual
    pub outlier: bool,
    /// Per-measurement outlier explanations
    pub outlier_messages: Vec<String>,
}

/// Discriminated view over the known response shapes
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseShape {
    /// `good_matches` / `predictions`
    Sizer(SizerResponse),
    /// `dimensions` / `customer` / `outlier`
    Tailor(TailorResponse),
    /// Neither shape recognized
    Unknown,
}

impl ResponseShape {
    /// Classify a raw payload by the top-level keys it carries
    #[must_use]
    pub fn detect(raw: &Value) -> Self {
        let Some(object) = raw.as_object() else {
            return Self::Unknown;
        };

        if TAILOR_KEYS.iter().any(|key| object.contains_key(*key)) {
            return Self::Tailor(TailorResponse {
                good_matches: good_matches(object),
                dimensions: object_field(object, "dimensions"),
                predictions: object_field(object, "predictions"),
                customer: object_field(object, "customer"),
                outlier: truthy(object.get("outlier")),
                outlier_messages: outlier_messages(object),
            });
        }

        let matches = good_matches(object);
        if !matches.is_empty() || object.contains_key("good_matches") || object.contains_key("predictions")
        {
            return Self::Sizer(SizerResponse {
                good_matches: matches,
                predictions: object_field(object, "predictions"),
            });
        }

        Self::Unknown
    }

    /// Which kind of response this is
    #[must_use]
    pub const fn kind(&self) -> ResponseKind {
        match self {
            Self::Sizer(_) => ResponseKind::Sizer,
            Self::Tailor(_) => ResponseKind::Tailor,
            Self::Unknown => ResponseKind::Unknown,
        }
    }
}

/// Normalize a raw payload. Never fails; unrecognized input yields an empty model.
#[must_use]
pub fn normalize(raw: &Value) -> DisplayModel {
    let shape = ResponseShape::detect(raw);
    let kind = shape.kind();

    match shape {
        ResponseShape::Sizer(sizer) => DisplayModel {
            kind,
            good_matches: sizer.good_matches.iter().filter_map(to_good_match).collect(),
            predicted_measurements: format_map(&sizer.predictions, format_prediction),
            ..DisplayModel::default()
        },
        ResponseShape::Tailor(tailor) => DisplayModel {
            kind,
            good_matches: tailor.good_matches.iter().filter_map(to_good_match).collect(),
            predicted_measurements: if tailor.dimensions.is_empty() {
                format_map(&tailor.predictions, format_prediction)
            } else {
                format_map(&tailor.dimensions, format_dimension)
            },
            outlier: tailor.outlier,
            outlier_messages: tailor.outlier_messages,
            input_summary: format_map(&tailor.customer, format_summary_value),
        },
        ResponseShape::Unknown => DisplayModel::default(),
    }
}

/// Input summary built from a stored measurement record, for responses without
/// a `customer` echo
#[must_use]
pub fn input_summary_from_measurements(input: &MeasurementInput) -> BTreeMap<String, String> {
    let mut summary = BTreeMap::new();
    summary.insert(title_case("height"), format_number(input.height));
    summary.insert(title_case("weight"), format_number(input.weight));
    summary.insert(title_case("age"), input.age.to_string());
    summary.insert(title_case("sex"), title_case(&input.sex().to_string()));
    match &input.profile {
        SexProfile::Male { waist } => {
            summary.insert(title_case("waist"), format_number(*waist));
        }
        profile @ SexProfile::Female { .. } => {
            if let Some(bra_size) = profile.bra_size() {
                summary.insert(title_case("bra_size"), bra_size);
            }
        }
    }
    summary
}

fn good_matches(object: &Map<String, Value>) -> Vec<Value> {
    object
        .get("good_matches")
        .or_else(|| {
            object
                .get("size_recommendations")
                .and_then(|recs| recs.get("good_matches"))
        })
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default()
}

fn object_field(object: &Map<String, Value>, key: &str) -> Map<String, Value> {
    object
        .get(key)
        .and_then(Value::as_object)
        .cloned()
        .unwrap_or_default()
}

fn truthy(value: Option<&Value>) -> bool {
    match value {
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|v| v != 0.0),
        Some(Value::String(s)) => matches!(s.trim(), "true" | "1" | "yes"),
        _ => false,
    }
}

fn outlier_messages(object: &Map<String, Value>) -> Vec<String> {
    let Some(messages) = object.get("outlier_messages") else {
        return Vec::new();
    };

    let specifics: Vec<String> = messages
        .get("specifics")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(|item| match item {
                    Value::String(s) => Some(s.trim().to_owned()),
                    other => other
                        .get("message")
                        .and_then(Value::as_str)
                        .map(|s| s.trim().to_owned()),
                })
                .filter(|s| !s.is_empty())
                .collect()
        })
        .unwrap_or_default();

    if !specifics.is_empty() || !truthy(object.get("outlier")) {
        return specifics;
    }

    messages
        .get("overall")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| vec![s.to_owned()])
        .unwrap_or_default()
}

/// Label preference: `brand_size`, then `size`, then `garment.size`
fn to_good_match(value: &Value) -> Option<GoodMatch> {
    let object = value.as_object()?;
    let label = ["brand_size", "size"]
        .iter()
        .find_map(|key| scalar_text(object.get(*key)))
        .or_else(|| scalar_text(object.get("garment").and_then(|g| g.get("size"))))
        .unwrap_or_else(|| messages::UNKNOWN_SIZE.to_owned());

    Some(GoodMatch {
        label,
        fit_score: object.get("fit_score").and_then(format_fit_score),
    })
}

fn scalar_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_owned()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Fit score as a percentage string; structured scores are not displayed
fn format_fit_score(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => {
            let s = s.trim();
            if s.is_empty() {
                None
            } else if s.parse::<f64>().is_ok() {
                Some(format!("{s}%"))
            } else {
                Some(s.to_owned())
            }
        }
        Value::Number(n) => n.as_f64().map(format_percent),
        _ => None,
    }
}

fn format_map(
    source: &Map<String, Value>,
    format: fn(&Value) -> Option<String>,
) -> BTreeMap<String, String> {
    source
        .iter()
        .filter_map(|(key, value)| format(value).map(|text| (title_case(key), text)))
        .collect()
}

fn format_prediction(value: &Value) -> Option<String> {
    match value {
        Value::Number(n) => n.as_f64().map(|v| format_fixed(v, 1)),
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_owned()),
        Value::Bool(b) => Some(yes_no(*b)),
        Value::Object(inner) => inner.get("value").and_then(format_prediction),
        _ => None,
    }
}

fn format_dimension(value: &Value) -> Option<String> {
    match value {
        Value::Number(n) => n.as_f64().map(|v| format!("{} in", format_fixed(v, 2))),
        Value::String(s) => match s.trim().parse::<f64>() {
            Ok(v) if v.is_finite() => Some(format!("{} in", format_fixed(v, 2))),
            _ if !s.trim().is_empty() => Some(s.trim().to_owned()),
            _ => None,
        },
        _ => None,
    }
}

fn format_summary_value(value: &Value) -> Option<String> {
    match value {
        Value::Number(n) => n.as_f64().map(format_number),
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_owned()),
        Value::Bool(b) => Some(yes_no(*b)),
        _ => None,
    }
}

/// Whole numbers plain, everything else with one decimal
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format_fixed(value, 0)
    } else {
        format_fixed(value, 1)
    }
}

fn yes_no(value: bool) -> String {
    if value { "Yes" } else { "No" }.to_owned()
}
