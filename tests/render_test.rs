// ABOUTME: Integration tests for the presentation renderer and page templates
// ABOUTME: Checks escaping, omitted sections, placeholders and size-card formatting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bold Metrics Integration contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use boldmetrics_integration::formatters::{
    render_display_model, render_form_page, render_not_found_page, render_results_page,
};
use boldmetrics_integration::models::{DisplayModel, GoodMatch, ResponseKind};
use boldmetrics_integration::results::normalize;
use serde_json::json;
use std::collections::BTreeMap;

fn full_model() -> DisplayModel {
    DisplayModel {
        kind: ResponseKind::Tailor,
        good_matches: vec![GoodMatch {
            label: "M".to_owned(),
            fit_score: Some("92%".to_owned()),
        }],
        predicted_measurements: BTreeMap::from([("Chest Circum".to_owned(), "40.0".to_owned())]),
        outlier: true,
        outlier_messages: vec!["Waist is unusually small".to_owned()],
        input_summary: BTreeMap::from([("Height".to_owned(), "70".to_owned())]),
    }
}

#[test]
fn test_full_model_renders_every_section() {
    let html = render_display_model(&full_model());
    assert!(html.contains("bm-outlier-warning"));
    assert!(html.contains("<div class=\"bm-size\">M</div>"));
    assert!(html.contains("Fit: 92%"));
    assert!(html.contains("Predicted Measurements"));
    assert!(html.contains("<th scope=\"row\">Chest Circum</th><td>40.0</td>"));
    assert!(html.contains("Your Measurements"));
    assert!(html.contains("<li>Waist is unusually small</li>"));
}

#[test]
fn test_missing_sections_are_omitted() {
    let model = DisplayModel {
        good_matches: vec![GoodMatch {
            label: "L".to_owned(),
            fit_score: None,
        }],
        ..DisplayModel::default()
    };
    let html = render_display_model(&model);
    assert!(!html.contains("bm-outlier-warning"));
    assert!(!html.contains("Predicted Measurements"));
    assert!(!html.contains("Your Measurements"));
    assert!(!html.contains("<table"));
    assert!(!html.contains("Fit:"));
}

#[test]
fn test_no_matches_renders_placeholder() {
    let html = render_display_model(&DisplayModel::default());
    assert!(html.contains("No size recommendations available."));
    assert!(!html.contains("bm-size-card"));
}

#[test]
fn test_api_supplied_text_is_escaped() {
    let model = DisplayModel {
        good_matches: vec![GoodMatch {
            label: "<script>alert(1)</script>".to_owned(),
            fit_score: Some("\"90%\" & <b>".to_owned()),
        }],
        predicted_measurements: BTreeMap::from([(
            "<img src=x onerror=alert(1)>".to_owned(),
            "<b>40</b>".to_owned(),
        )]),
        outlier: true,
        outlier_messages: vec!["<iframe>".to_owned()],
        ..DisplayModel::default()
    };
    let html = render_display_model(&model);

    assert!(!html.contains("<script>"));
    assert!(!html.contains("<img"));
    assert!(!html.contains("<iframe>"));
    assert!(!html.contains("<b>"));
    assert!(html.contains("&lt;script&gt;"));
}

#[test]
fn test_outlier_flag_without_messages_still_warns() {
    let model = DisplayModel {
        outlier: true,
        ..DisplayModel::default()
    };
    let html = render_display_model(&model);
    assert!(html.contains("bm-outlier-warning"));
    assert!(!html.contains("<ul>"));
}

#[test]
fn test_normalized_titles_render_title_case() {
    let model = normalize(&json!({
        "good_matches": [{"brand_size": "M", "fit_score": "92%"}],
        "predictions": {"chest_circum": 40.0, "sleeve_length": 33.44}
    }));
    let html = render_display_model(&model);
    assert!(html.contains("Chest Circum"));
    assert!(html.contains("Sleeve Length"));
    assert!(!html.contains("chest_circum"));
}

#[test]
fn test_results_page_escapes_title() {
    let html = render_results_page("BM Result: <anon>", &full_model());
    assert!(html.contains("BM Result: &lt;anon&gt;"));
    assert!(html.contains("bm-results"));
    assert!(!html.contains("{{"));
}

#[test]
fn test_not_found_page() {
    let html = render_not_found_page();
    assert!(html.contains("Result Not Found"));
    assert!(!html.contains("{{"));
}

#[test]
fn test_form_page_is_fully_rendered() {
    let html = render_form_page();
    assert!(html.contains("data-submit-url=\"/boldmetrics/v1/submit\""));
    assert!(html.contains("/assets/bm-form.js"));
    assert!(html.contains("name=\"strap_size\""));
    assert!(html.contains("data-field=\"height_ft height_in height\""));
    assert!(!html.contains("{{"));
}
