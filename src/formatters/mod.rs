// ABOUTME: HTML rendering of display models and full pages
// ABOUTME: Pure string rendering; every API- or user-supplied value is escaped
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bold Metrics Integration contributors

/// Display model to HTML fragment
pub mod html;
/// Page templates (form, results, not found)
pub mod pages;

pub use html::render_display_model;
pub use pages::{render_error_page, render_form_page, render_not_found_page, render_results_page};
