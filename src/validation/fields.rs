// ABOUTME: Flattened view of an untrusted request body as string fields
// ABOUTME: Accepts JSON objects or form-encoded bodies and parses numeric fields on demand
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bold Metrics Integration contributors

use crate::errors::{AppError, AppResult, ValidationError};
use serde_json::Value;
use std::collections::BTreeMap;

/// Submitted fields keyed by name; blank values are treated as absent
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawFields {
    values: BTreeMap<String, String>,
}

impl RawFields {
    /// Empty field set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from key/value pairs; later duplicates win
    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self {
            values: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Build from a JSON object. Strings, numbers and booleans are kept; nulls,
    /// arrays and nested objects are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not a JSON object
    pub fn from_json(value: &Value) -> AppResult<Self> {
        let object = value
            .as_object()
            .ok_or_else(|| AppError::invalid_input("Request body must be a JSON object"))?;

        let values = object
            .iter()
            .filter_map(|(key, value)| {
                let text = match value {
                    Value::String(s) => s.clone(),
                    Value::Number(n) => n.to_string(),
                    Value::Bool(b) => b.to_string(),
                    Value::Null | Value::Array(_) | Value::Object(_) => return None,
                };
                Some((key.clone(), text))
            })
            .collect();

        Ok(Self { values })
    }

    /// Build from an `application/x-www-form-urlencoded` body or query string
    ///
    /// # Errors
    ///
    /// Returns an error if the body is not valid form encoding
    pub fn from_urlencoded(body: &[u8]) -> AppResult<Self> {
        let pairs: Vec<(String, String)> = serde_urlencoded::from_bytes(body)
            .map_err(|e| AppError::invalid_input(format!("Malformed form body: {e}")))?;
        Ok(Self::from_pairs(pairs))
    }

    /// Add fields from `other` that are not already present
    #[must_use]
    pub fn merged_under(mut self, other: Self) -> Self {
        for (key, value) in other.values {
            self.values.entry(key).or_insert(value);
        }
        self
    }

    /// Set a field
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Trimmed, non-blank value of `key`
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values
            .get(key)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }

    /// Whether `key` has a non-blank value
    #[must_use]
    pub fn has(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Required number
    pub(crate) fn require_number(
        &self,
        field: &'static str,
        label: &'static str,
    ) -> Result<f64, ValidationError> {
        let raw = self
            .get(field)
            .ok_or(ValidationError::MissingField { field, label })?;
        parse_number(raw, field, label)
    }

    /// Required non-negative whole number
    pub(crate) fn require_whole(
        &self,
        field: &'static str,
        label: &'static str,
    ) -> Result<u32, ValidationError> {
        let value = self.require_number(field, label)?;
        to_whole(value, field, label)
    }

    /// Optional non-negative whole number
    pub(crate) fn optional_whole(
        &self,
        field: &'static str,
        label: &'static str,
    ) -> Result<Option<u32>, ValidationError> {
        self.get(field)
            .map(|raw| parse_number(raw, field, label).and_then(|v| to_whole(v, field, label)))
            .transpose()
    }
}

/// Parse a finite decimal number
pub(crate) fn parse_number(
    raw: &str,
    field: &'static str,
    label: &'static str,
) -> Result<f64, ValidationError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or(ValidationError::NotNumeric { field, label })
}

fn to_whole(value: f64, field: &'static str, label: &'static str) -> Result<u32, ValidationError> {
    if value.fract() != 0.0 || value < 0.0 || value > f64::from(u32::MAX) {
        return Err(ValidationError::NotWholeNumber { field, label });
    }
    Ok(value as u32)
}
