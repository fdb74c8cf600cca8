// ABOUTME: Text helpers for display labels, numeric formatting and snippet trimming
// ABOUTME: Pure functions, idempotent where the normalizer relies on it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bold Metrics Integration contributors

/// Convert a snake-case key to title case: `chest_circum` becomes `Chest Circum`.
///
/// Applying it to an already converted label returns the label unchanged.
#[must_use]
pub fn title_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut at_word_start = true;
    for ch in key.chars() {
        let ch = if ch == '_' { ' ' } else { ch };
        if ch.is_alphanumeric() {
            if at_word_start {
                out.extend(ch.to_uppercase());
            } else {
                out.push(ch);
            }
            at_word_start = false;
        } else {
            out.push(ch);
            at_word_start = true;
        }
    }
    out
}

/// Format with a fixed number of decimals
#[must_use]
pub fn format_fixed(value: f64, decimals: usize) -> String {
    format!("{value:.decimals$}")
}

/// Shortest representation for URL parameters: `70.0` becomes `70`, `34.5` stays `34.5`
#[must_use]
pub fn format_query_number(value: f64) -> String {
    value.to_string()
}

/// Percentage text: whole numbers without decimals, otherwise one decimal
#[must_use]
pub fn format_percent(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}%")
    } else {
        format!("{value:.1}%")
    }
}

/// Keep the first `max_words` whitespace-separated words, appending an ellipsis when cut
#[must_use]
pub fn trim_words(text: &str, max_words: usize) -> String {
    let mut words = text.split_whitespace();
    let kept: Vec<&str> = words.by_ref().take(max_words).collect();
    let mut out = kept.join(" ");
    if words.next().is_some() {
        out.push_str("\u{2026}");
    }
    out
}

/// Strip control characters and collapse runs of whitespace
#[must_use]
pub fn sanitize_text(input: &str) -> String {
    input
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("chest_circum"), "Chest Circum");
        assert_eq!(title_case("acromion_radial_len"), "Acromion Radial Len");
        assert_eq!(title_case("Chest Circum"), "Chest Circum");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_number_formats() {
        assert_eq!(format_fixed(40.0, 1), "40.0");
        assert_eq!(format_fixed(58.567, 2), "58.57");
        assert_eq!(format_query_number(70.0), "70");
        assert_eq!(format_query_number(34.5), "34.5");
        assert_eq!(format_percent(92.0), "92%");
        assert_eq!(format_percent(87.26), "87.3%");
    }

    #[test]
    fn test_trim_words() {
        assert_eq!(trim_words("a b c", 5), "a b c");
        assert_eq!(trim_words("a b c d", 2), "a b\u{2026}");
    }

    #[test]
    fn test_sanitize_text() {
        assert_eq!(sanitize_text("  34\u{0}\n C "), "34 C");
    }
}
