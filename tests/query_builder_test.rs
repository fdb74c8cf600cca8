// ABOUTME: Integration tests for sizing API query construction
// ABOUTME: Checks sex-conditioned keys, omission of empty optionals and anon_id handling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bold Metrics Integration contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use boldmetrics_integration::models::{ApiCredentials, MeasurementInput, QueryExtras, SexProfile};
use boldmetrics_integration::sizing::build_query;
use boldmetrics_integration::validation::{extract_extras, validate_submission, RawFields};
use common::{female_form_fields, male_form_fields};
use uuid::Uuid;

fn credentials() -> ApiCredentials {
    ApiCredentials::new("united_shield", "bc8c8d307c93")
}

fn male(waist: f64) -> MeasurementInput {
    MeasurementInput {
        weight: 180.0,
        height: 70.0,
        age: 35,
        profile: SexProfile::Male { waist },
    }
}

fn female(strap: &str, cup: &str) -> MeasurementInput {
    MeasurementInput {
        weight: 140.0,
        height: 65.0,
        age: 29,
        profile: SexProfile::Female {
            strap_size: strap.to_owned(),
            cup_size: cup.to_owned(),
        },
    }
}

#[test]
fn test_required_keys_always_present() {
    let built = build_query(&male(34.0), &credentials(), None, &QueryExtras::default());
    let query = &built.query;

    assert_eq!(query.get("client_id"), Some("united_shield"));
    assert_eq!(query.get("user_key"), Some("bc8c8d307c93"));
    assert_eq!(query.get("height"), Some("70"));
    assert_eq!(query.get("weight"), Some("180"));
    assert_eq!(query.get("age"), Some("35"));
}

#[test]
fn test_male_query_has_waist_and_no_bra_keys() {
    for waist in [20.0, 34.0, 34.5, 60.0] {
        let built = build_query(&male(waist), &credentials(), None, &QueryExtras::default());
        assert!(built.query.contains_key("waist_circum_preferred"));
        assert!(!built.query.contains_key("bra_size"));
        assert!(!built.query.contains_key("strap_size"));
        assert!(!built.query.contains_key("cup_size"));
    }
    let built = build_query(&male(34.5), &credentials(), None, &QueryExtras::default());
    assert_eq!(built.query.get("waist_circum_preferred"), Some("34.5"));
}

#[test]
fn test_female_query_concatenates_bra_size() {
    for (strap, cup) in [("34", "C"), ("32", "DD"), ("40", "A")] {
        let built = build_query(&female(strap, cup), &credentials(), None, &QueryExtras::default());
        assert_eq!(
            built.query.get("bra_size"),
            Some(format!("{strap}{cup}").as_str())
        );
        assert!(!built.query.contains_key("waist_circum_preferred"));
    }
}

#[test]
fn test_scenario_b_from_form_fields() {
    let input = validate_submission(&female_form_fields()).unwrap();
    let built = build_query(&input, &credentials(), None, &QueryExtras::default());
    assert_eq!(built.query.get("bra_size"), Some("34C"));
    assert!(!built.query.contains_key("waist_circum_preferred"));
}

#[test]
fn test_height_round_trip_reaches_query() {
    let input = validate_submission(&male_form_fields()).unwrap();
    let built = build_query(&input, &credentials(), None, &QueryExtras::default());
    assert_eq!(built.query.get("height"), Some("70"));
}

#[test]
fn test_no_empty_entries() {
    let fields = RawFields::from_pairs([
        ("desired_brand", ""),
        ("desired_garment_type", "   "),
        ("product_id", "SKU-1"),
        ("locale", ""),
        ("chest_circum", ""),
    ]);
    let extras = extract_extras(&fields);
    let built = build_query(&male(34.0), &credentials(), None, &extras);

    assert!(built
        .query
        .pairs()
        .iter()
        .all(|(_, value)| !value.trim().is_empty()));
    assert_eq!(built.query.get("product_id"), Some("SKU-1"));
    assert!(!built.query.contains_key("desired_brand"));
    assert!(!built.query.contains_key("chest_circum"));
}

#[test]
fn test_blank_credentials_are_not_sent_as_empty_values() {
    let built = build_query(
        &male(34.0),
        &ApiCredentials::default(),
        None,
        &QueryExtras::default(),
    );
    assert!(!built.query.contains_key("client_id"));
    assert!(!built.query.contains_key("user_key"));
    assert!(!built.query.has_credentials());
}

#[test]
fn test_extras_and_overrides_are_forwarded() {
    let fields = RawFields::from_pairs([
        ("desired_brand", "Acme"),
        ("desired_garment_type", "shirt"),
        ("locale", "en_US"),
        ("chest_circum", "41"),
        ("inseam", "32.5"),
    ]);
    let built = build_query(&male(34.0), &credentials(), None, &extract_extras(&fields));

    assert_eq!(built.query.get("desired_brand"), Some("Acme"));
    assert_eq!(built.query.get("desired_garment_type"), Some("shirt"));
    assert_eq!(built.query.get("locale"), Some("en_US"));
    assert_eq!(built.query.get("chest_circum"), Some("41"));
    assert_eq!(built.query.get("inseam"), Some("32.5"));
}

#[test]
fn test_anon_id_supplied_is_used() {
    let built = build_query(
        &male(34.0),
        &credentials(),
        Some("visitor-42"),
        &QueryExtras::default(),
    );
    assert_eq!(built.anon_id, "visitor-42");
    assert_eq!(built.query.get("anon_id"), Some("visitor-42"));
}

#[test]
fn test_anon_id_generated_fresh_per_call() {
    let first = build_query(&male(34.0), &credentials(), None, &QueryExtras::default());
    let second = build_query(&male(34.0), &credentials(), Some("  "), &QueryExtras::default());

    assert!(Uuid::parse_str(&first.anon_id).is_ok());
    assert!(Uuid::parse_str(&second.anon_id).is_ok());
    assert_ne!(first.anon_id, second.anon_id);
    assert_eq!(first.query.get("anon_id"), Some(first.anon_id.as_str()));
}
