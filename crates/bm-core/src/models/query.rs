// ABOUTME: Flat key/value query sent to the sizing API and the optional descriptive extras
// ABOUTME: Blank values are never stored, so omitted fields never become empty parameters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bold Metrics Integration contributors

use crate::constants::query_keys;
use crate::models::credentials::mask_secret;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Ordered query parameters for one outbound call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiQuery {
    params: Vec<(String, String)>,
}

impl ApiQuery {
    /// Create an empty query
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` to `value`. Blank values are ignored; an existing key is replaced.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        if value.trim().is_empty() {
            return;
        }
        if let Some(slot) = self.params.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = value;
        } else {
            self.params.push((key, value));
        }
    }

    /// Set `key` when `value` is present and non-blank
    pub fn insert_opt(&mut self, key: impl Into<String>, value: Option<&str>) {
        if let Some(value) = value {
            self.insert(key, value);
        }
    }

    /// Value for `key`
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Whether `key` is present
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Parameters in insertion order, ready for URL serialization
    #[must_use]
    pub fn pairs(&self) -> &[(String, String)] {
        &self.params
    }

    /// Number of parameters
    #[must_use]
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Whether the query has no parameters
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Both credential parameters are present
    #[must_use]
    pub fn has_credentials(&self) -> bool {
        self.contains_key(query_keys::CLIENT_ID) && self.contains_key(query_keys::USER_KEY)
    }

    /// Copy of the parameters with the user key masked, for logging
    #[must_use]
    pub fn redacted(&self) -> Vec<(String, String)> {
        self.params
            .iter()
            .map(|(k, v)| {
                if k == query_keys::USER_KEY {
                    (k.clone(), mask_secret(v))
                } else {
                    (k.clone(), v.clone())
                }
            })
            .collect()
    }
}

/// Optional descriptive fields forwarded to the API when present
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryExtras {
    /// Brand the shopper is looking at
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desired_brand: Option<String>,
    /// Garment type, e.g. `t_shirt`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desired_garment_type: Option<String>,
    /// Retailer product identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
    /// Shopper locale
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    /// Virtual Tailor body-dimension overrides keyed by API parameter name
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub dimension_overrides: BTreeMap<String, String>,
}

impl QueryExtras {
    /// No extra field is set
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.desired_brand.is_none()
            && self.desired_garment_type.is_none()
            && self.product_id.is_none()
            && self.locale.is_none()
            && self.dimension_overrides.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_values_are_skipped() {
        let mut query = ApiQuery::new();
        query.insert("desired_brand", "");
        query.insert("locale", "   ");
        query.insert_opt("product_id", None);
        assert!(query.is_empty());
    }

    #[test]
    fn test_insert_replaces_existing_key() {
        let mut query = ApiQuery::new();
        query.insert("age", "30");
        query.insert("age", "31");
        assert_eq!(query.len(), 1);
        assert_eq!(query.get("age"), Some("31"));
    }

    #[test]
    fn test_redacted_masks_user_key() {
        let mut query = ApiQuery::new();
        query.insert(query_keys::CLIENT_ID, "client");
        query.insert(query_keys::USER_KEY, "secretkey");
        let redacted = query.redacted();
        assert_eq!(redacted[1].1, "secr*****");
        assert_eq!(query.get(query_keys::USER_KEY), Some("secretkey"));
    }
}
