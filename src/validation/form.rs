// ABOUTME: Validation rules for the front-end measurement form
// ABOUTME: Height is feet plus inches (or total inches), then weight, age, sex and sex-specific fields
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bold Metrics Integration contributors

use super::fields::{parse_number, RawFields};
use crate::constants::limits;
use crate::errors::ValidationError;
use crate::models::{MeasurementInput, Sex, SexProfile};

/// Validate a form submission, reporting only the first failing rule
///
/// # Errors
///
/// Returns the first [`ValidationError`] in the order height, weight, age,
/// sex, sex-specific fields
pub fn validate_submission(fields: &RawFields) -> Result<MeasurementInput, ValidationError> {
    let height = validate_height(fields)?;
    let weight = validate_weight(fields)?;
    let age = validate_age(fields)?;
    let sex = validate_sex(fields)?;

    let profile = match sex {
        Sex::Male => SexProfile::Male {
            waist: validate_waist(fields.get("waist"))?,
        },
        Sex::Female => {
            let (strap_size, cup_size) =
                validate_bra_fields(fields.get("strap_size"), fields.get("cup_size"))?;
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

/// Feet and inches combine into total inches. A bare `height` field is taken as
/// total inches when no feet value was submitted.
fn validate_height(fields: &RawFields) -> Result<f64, ValidationError> {
    if !fields.has("height_ft") && fields.has("height") {
        return validate_total_height(fields);
    }

    let feet = fields.require_whole("height_ft", "Height (feet)")?;
    if !(limits::HEIGHT_FEET_MIN..=limits::HEIGHT_FEET_MAX).contains(&feet) {
        return Err(ValidationError::HeightFeetOutOfRange);
    }

    let inches = fields
        .optional_whole("height_in", "Height (inches)")?
        .unwrap_or(0);
    if !(limits::HEIGHT_INCHES_MIN..=limits::HEIGHT_INCHES_MAX).contains(&inches) {
        return Err(ValidationError::HeightInchesOutOfRange);
    }

    Ok(f64::from(feet * limits::INCHES_PER_FOOT + inches))
}

pub(super) fn validate_total_height(fields: &RawFields) -> Result<f64, ValidationError> {
    let height = fields.require_number("height", "Height")?;
    if !(limits::HEIGHT_TOTAL_MIN..=limits::HEIGHT_TOTAL_MAX).contains(&height) {
        return Err(ValidationError::HeightOutOfRange);
    }
    Ok(height)
}

pub(super) fn validate_weight(fields: &RawFields) -> Result<f64, ValidationError> {
    let weight = fields.require_number("weight", "Weight")?;
    if !(limits::WEIGHT_MIN_LBS..=limits::WEIGHT_MAX_LBS).contains(&weight) {
        return Err(ValidationError::WeightOutOfRange);
    }
    Ok(weight)
}

pub(super) fn validate_age(fields: &RawFields) -> Result<u32, ValidationError> {
    let age = fields.require_whole("age", "Age")?;
    if !(limits::AGE_MIN..=limits::AGE_MAX).contains(&age) {
        return Err(ValidationError::AgeOutOfRange);
    }
    Ok(age)
}

fn validate_sex(fields: &RawFields) -> Result<Sex, ValidationError> {
    fields
        .get("sex")
        .and_then(Sex::parse)
        .ok_or(ValidationError::InvalidSex)
}

pub(super) fn validate_waist(raw: Option<&str>) -> Result<f64, ValidationError> {
    let raw = raw.ok_or(ValidationError::MissingWaist)?;
    let waist = parse_number(raw, "waist", "Waist")?;
    if !(limits::WAIST_MIN_IN..=limits::WAIST_MAX_IN).contains(&waist) {
        return Err(ValidationError::WaistOutOfRange);
    }
    Ok(waist)
}

pub(super) fn validate_bra_fields(
    strap: Option<&str>,
    cup: Option<&str>,
) -> Result<(String, String), ValidationError> {
    match (strap, cup) {
        (Some(strap), Some(cup)) => Ok((strap.to_owned(), cup.to_owned())),
        _ => Err(ValidationError::MissingBraFields),
    }
}
