// ABOUTME: Validation rules for the legacy webhook payload
// ABOUTME: Takes total-inch height and infers the sex-specific profile from the body fields present
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bold Metrics Integration contributors

use super::fields::RawFields;
use super::form::{
    validate_age, validate_bra_fields, validate_total_height, validate_waist, validate_weight,
};
use crate::constants::query_keys;
use crate::errors::ValidationError;
use crate::models::{MeasurementInput, Sex, SexProfile};

/// Validate a webhook payload
///
/// Height, weight and age plus one body measurement (waist or bra size) must be
/// present, otherwise [`ValidationError::MissingRequiredFields`]. The same
/// numeric ranges as the form then apply. Without an explicit `sex`, a waist
/// measurement selects the male profile and a bra size the female one.
///
/// # Errors
///
/// Returns the first failing [`ValidationError`]
pub fn validate_webhook(fields: &RawFields) -> Result<MeasurementInput, ValidationError> {
    let waist = fields
        .get(query_keys::WAIST)
        .or_else(|| fields.get("waist"));
    let bra = bra_parts(fields);

    let has_core = [query_keys::HEIGHT, query_keys::WEIGHT, query_keys::AGE]
        .iter()
        .all(|key| fields.has(key));
    if !has_core || (waist.is_none() && bra.is_none()) {
        return Err(ValidationError::MissingRequiredFields);
    }

    let height = validate_total_height(fields)?;
    let weight = validate_weight(fields)?;
    let age = validate_age(fields)?;

    let sex = match fields.get("sex") {
        Some(raw) => Sex::parse(raw).ok_or(ValidationError::InvalidSex)?,
        None if waist.is_some() => Sex::Male,
        None => Sex::Female,
    };

    let profile = match sex {
        Sex::Male => SexProfile::Male {
            waist: validate_waist(waist)?,
        },
        Sex::Female => {
            let (strap, cup) = bra.unwrap_or_default();
            let (strap_size, cup_size) = validate_bra_fields(
                Some(strap.as_str()).filter(|s| !s.is_empty()),
                Some(cup.as_str()),
            )?;
            SexProfile::Female {
                strap_size,
                cup_size,
            }
        }
    };

    Ok(MeasurementInput {
        weight,
        height,
        age,
        profile,
    })
}

/// Strap and cup from either `bra_size` or the separate form fields
fn bra_parts(fields: &RawFields) -> Option<(String, String)> {
    if let Some(bra_size) = fields.get(query_keys::BRA_SIZE) {
        return Some(split_bra_size(bra_size));
    }
    match (fields.get("strap_size"), fields.get("cup_size")) {
        (Some(strap), Some(cup)) => Some((strap.to_owned(), cup.to_owned())),
        _ => None,
    }
}

/// Split "34C" into ("34", "C"). Values without a numeric band are kept whole
/// as the strap so the concatenated bra size is unchanged.
pub fn split_bra_size(bra_size: &str) -> (String, String) {
    let compact: String = bra_size.split_whitespace().collect();
    let split_at = compact
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(compact.len());
    let (strap, cup) = compact.split_at(split_at);
    if strap.is_empty() || cup.is_empty() {
        return (compact.clone(), String::new());
    }
    (strap.to_owned(), cup.to_owned())
}
