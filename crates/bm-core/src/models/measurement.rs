// ABOUTME: Validated measurement record produced by the input validator
// ABOUTME: Sex-conditioned fields are an enum so waist and bra size can never coexist
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bold Metrics Integration contributors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sex selected on the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    /// Male profile, sized by waist
    Male,
    /// Female profile, sized by bra size
    Female,
}

impl Sex {
    /// Parse a submitted value; only `male` and `female` (any case) are accepted
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.eq_ignore_ascii_case("male") {
            Some(Self::Male)
        } else if value.eq_ignore_ascii_case("female") {
            Some(Self::Female)
        } else {
            None
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Male => write!(f, "male"),
            Self::Female => write!(f, "female"),
        }
    }
}

/// Sex-specific part of a measurement record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "sex", rename_all = "lowercase")]
pub enum SexProfile {
    /// Waist circumference in inches
    Male {
        /// Preferred waist, inches
        waist: f64,
    },
    /// Bra strap and cup, kept separate until the query is built
    Female {
        /// Band size, e.g. "34"
        strap_size: String,
        /// Cup size, e.g. "C"
        cup_size: String,
    },
}

impl SexProfile {
    /// Sex this profile belongs to
    #[must_use]
    pub const fn sex(&self) -> Sex {
        match self {
            Self::Male { .. } => Sex::Male,
            Self::Female { .. } => Sex::Female,
        }
    }

    /// Waist in inches for the male profile
    #[must_use]
    pub const fn waist(&self) -> Option<f64> {
        match self {
            Self::Male { waist } => Some(*waist),
            Self::Female { .. } => None,
        }
    }

    /// Strap and cup concatenated with no separator ("34" + "C" = "34C")
    #[must_use]
    pub fn bra_size(&self) -> Option<String> {
        match self {
            Self::Male { .. } => None,
            Self::Female {
                strap_size,
                cup_size,
            } => Some(format!("{strap_size}{cup_size}")),
        }
    }
}

/// A normalized, range-checked submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementInput {
    /// Weight in pounds
    pub weight: f64,
    /// Total height in inches
    pub height: f64,
    /// Age in whole years
    pub age: u32,
    /// Waist or bra measurements, depending on sex
    #[serde(flatten)]
    pub profile: SexProfile,
}

impl MeasurementInput {
    /// Sex of the record
    #[must_use]
    pub const fn sex(&self) -> Sex {
        self.profile.sex()
    }
}
