// ABOUTME: Presentation renderer turning a DisplayModel into an HTML fragment
// ABOUTME: Sections render independently; empty sections are omitted, never left as bare headings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bold Metrics Integration contributors

//! # Presentation Renderer
//!
//! Section order: outlier warning, size cards, predicted measurements, input
//! summary. The size-card section always renders, falling back to a
//! placeholder when the API returned no matches. The other three sections
//! disappear entirely when they have nothing to show.

use crate::constants::messages;
use crate::models::{DisplayModel, GoodMatch};
use crate::utils::html::escape_html;
use std::collections::BTreeMap;

/// Render the full results fragment
#[must_use]
pub fn render_display_model(model: &DisplayModel) -> String {
    let mut html = String::from("<div class=\"bm-results\">\n");
    if let Some(section) = render_outlier_warning(model) {
        html.push_str(&section);
    }
    html.push_str(&render_good_matches(&model.good_matches));
    if let Some(section) = render_table(
        "bm-predictions",
        "Predicted Measurements",
        &model.predicted_measurements,
    ) {
        html.push_str(&section);
    }
    if let Some(section) =
        render_table("bm-input-summary", "Your Measurements", &model.input_summary)
    {
        html.push_str(&section);
    }
    html.push_str("</div>\n");
    html
}

fn render_outlier_warning(model: &DisplayModel) -> Option<String> {
    if !model.outlier && model.outlier_messages.is_empty() {
        return None;
    }

    let mut html = String::from(
        "<div class=\"bm-outlier-warning\" role=\"alert\">\n\
         <strong>Note:</strong> Some of your measurements are outside the typical range, \
         so these results may be less accurate.\n",
    );
    if !model.outlier_messages.is_empty() {
        html.push_str("<ul>\n");
        for message in &model.outlier_messages {
            html.push_str(&format!("<li>{}</li>\n", escape_html(message)));
        }
        html.push_str("</ul>\n");
    }
    html.push_str("</div>\n");
    Some(html)
}

fn render_good_matches(matches: &[GoodMatch]) -> String {
    let mut html = String::from(
        "<section class=\"bm-good-matches\">\n<h3>Recommended Sizes</h3>\n",
    );
    if matches.is_empty() {
        html.push_str(&format!(
            "<p class=\"bm-placeholder\">{}</p>\n",
            escape_html(messages::NO_MATCHES)
        ));
    } else {
        html.push_str("<div class=\"bm-size-cards\">\n");
        for good_match in matches {
            html.push_str(&render_size_card(good_match));
        }
        html.push_str("</div>\n");
    }
    html.push_str("</section>\n");
    html
}

fn render_size_card(good_match: &GoodMatch) -> String {
    let fit = good_match
        .fit_score
        .as_deref()
        .map(|score| format!("<div class=\"bm-fit\">Fit: {}</div>", escape_html(score)))
        .unwrap_or_default();
    format!(
        "<div class=\"bm-size-card\"><div class=\"bm-size\">{}</div>{fit}</div>\n",
        escape_html(&good_match.label)
    )
}

fn render_table(class: &str, heading: &str, rows: &BTreeMap<String, String>) -> Option<String> {
    if rows.is_empty() {
        return None;
    }

    let mut html = format!(
        "<section class=\"{class}\">\n<h3>{heading}</h3>\n<table class=\"bm-table\">\n<tbody>\n"
    );
    for (name, value) in rows {
        html.push_str(&format!(
            "<tr><th scope=\"row\">{}</th><td>{}</td></tr>\n",
            escape_html(name),
            escape_html(value)
        ));
    }
    html.push_str("</tbody>\n</table>\n</section>\n");
    Some(html)
}
