// ABOUTME: HTML escaping utilities to prevent XSS in server-rendered fragments
// ABOUTME: Every user- and API-supplied string passes through here before reaching markup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bold Metrics Integration contributors

/// Escape text for an HTML text node or a quoted attribute value.
///
/// Encodes `&`, `<`, `>`, `"`, `'` and `/`, so the result is safe in both
/// element content and single- or double-quoted attributes.
#[must_use]
pub fn escape_html(input: &str) -> String {
    html_escape::encode_safe(input).into_owned()
}

/// Escape a value for a double-quoted HTML attribute
#[must_use]
pub fn escape_html_attribute(input: &str) -> String {
    html_escape::encode_double_quoted_attribute(input).into_owned()
}
