// ABOUTME: Full-page HTML for the form, stored results and not-found views
// ABOUTME: Templates live under templates/ and are filled with escaped values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bold Metrics Integration contributors

use super::html::render_display_model;
use crate::constants::{http, limits, messages};
use crate::models::DisplayModel;
use crate::utils::html::{escape_html, escape_html_attribute};

const FORM_TEMPLATE: &str = include_str!("../../templates/bm_form.html");
const RESULTS_TEMPLATE: &str = include_str!("../../templates/bm_results.html");
const MESSAGE_TEMPLATE: &str = include_str!("../../templates/bm_message.html");

/// Path the form page loads its script from
pub const FORM_SCRIPT_PATH: &str = "/assets/bm-form.js";

/// Measurement form page
#[must_use]
pub fn render_form_page() -> String {
    FORM_TEMPLATE
        .replace("{{SUBMIT_URL}}", &escape_html_attribute(http::SUBMIT_PATH))
        .replace("{{RESULTS_URL}}", &escape_html_attribute(http::RESULTS_PATH))
        .replace("{{SCRIPT_URL}}", &escape_html_attribute(FORM_SCRIPT_PATH))
        .replace("{{HEIGHT_FEET_MIN}}", &limits::HEIGHT_FEET_MIN.to_string())
        .replace("{{HEIGHT_FEET_MAX}}", &limits::HEIGHT_FEET_MAX.to_string())
        .replace("{{HEIGHT_INCHES_MIN}}", &limits::HEIGHT_INCHES_MIN.to_string())
        .replace("{{HEIGHT_INCHES_MAX}}", &limits::HEIGHT_INCHES_MAX.to_string())
        .replace("{{WEIGHT_MIN}}", &limits::WEIGHT_MIN_LBS.to_string())
        .replace("{{WEIGHT_MAX}}", &limits::WEIGHT_MAX_LBS.to_string())
        .replace("{{AGE_MIN}}", &limits::AGE_MIN.to_string())
        .replace("{{AGE_MAX}}", &limits::AGE_MAX.to_string())
        .replace("{{WAIST_MIN}}", &limits::WAIST_MIN_IN.to_string())
        .replace("{{WAIST_MAX}}", &limits::WAIST_MAX_IN.to_string())
}

/// Stored result page wrapping the rendered display model
#[must_use]
pub fn render_results_page(title: &str, model: &DisplayModel) -> String {
    RESULTS_TEMPLATE
        .replace("{{TITLE}}", &escape_html(title))
        .replace("{{RESULTS}}", &render_display_model(model))
}

/// Dedicated view for absent, unknown or incomplete records
#[must_use]
pub fn render_not_found_page() -> String {
    render_message_page(
        messages::RESULT_NOT_FOUND,
        "We couldn't find those results. The link may be incomplete or the results may have been removed.",
    )
}

/// Generic failure page; details stay in the logs
#[must_use]
pub fn render_error_page() -> String {
    render_message_page("Something Went Wrong", messages::API_FAILURE)
}

fn render_message_page(title: &str, message: &str) -> String {
    MESSAGE_TEMPLATE
        .replace("{{TITLE}}", &escape_html(title))
        .replace("{{MESSAGE}}", &escape_html(message))
}
