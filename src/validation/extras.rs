// ABOUTME: Extraction of optional descriptive fields and body-dimension overrides
// ABOUTME: Blank or malformed optional values are dropped instead of being forwarded empty
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bold Metrics Integration contributors

use super::fields::RawFields;
use crate::constants::query_keys;
use crate::models::QueryExtras;
use crate::utils::text::sanitize_text;
use tracing::debug;

fn optional_text(fields: &RawFields, key: &str) -> Option<String> {
    fields
        .get(key)
        .map(sanitize_text)
        .filter(|value| !value.is_empty())
}

/// Caller-supplied anonymous id, sanitized
#[must_use]
pub fn extract_anon_id(fields: &RawFields) -> Option<String> {
    optional_text(fields, query_keys::ANON_ID)
}

/// Collect the optional fields. Dimension overrides must be positive numbers.
#[must_use]
pub fn extract_extras(fields: &RawFields) -> QueryExtras {
    let mut extras = QueryExtras {
        desired_brand: optional_text(fields, query_keys::DESIRED_BRAND),
        desired_garment_type: optional_text(fields, query_keys::DESIRED_GARMENT_TYPE),
        product_id: optional_text(fields, query_keys::PRODUCT_ID),
        locale: optional_text(fields, query_keys::LOCALE),
        ..QueryExtras::default()
    };

    for key in query_keys::DIMENSION_OVERRIDES {
        let Some(raw) = fields.get(key) else {
            continue;
        };
        match raw.parse::<f64>() {
            Ok(value) if value.is_finite() && value > 0.0 => {
                extras
                    .dimension_overrides
                    .insert(key.to_owned(), raw.to_owned());
            }
            _ => debug!(field = key, value = raw, "Dropping invalid dimension override"),
        }
    }

    extras
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_optionals_are_absent() {
        let fields = RawFields::from_pairs([("desired_brand", "  "), ("locale", "en_US")]);
        let extras = extract_extras(&fields);
        assert_eq!(extras.desired_brand, None);
        assert_eq!(extras.locale.as_deref(), Some("en_US"));
    }

    #[test]
    fn test_overrides_require_positive_numbers() {
        let fields = RawFields::from_pairs([
            ("chest_circum", "41.5"),
            ("inseam", "-3"),
            ("hip_circum", "wide"),
            ("not_a_dimension", "12"),
        ]);
        let extras = extract_extras(&fields);
        assert_eq!(extras.dimension_overrides.len(), 1);
        assert_eq!(
            extras.dimension_overrides.get("chest_circum").map(String::as_str),
            Some("41.5")
        );
    }

    #[test]
    fn test_anon_id_is_sanitized() {
        let fields = RawFields::from_pairs([("anon_id", " abc\u{0007}def ")]);
        assert_eq!(extract_anon_id(&fields).as_deref(), Some("abc def"));
    }
}
