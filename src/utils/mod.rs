// ABOUTME: Utility module organization for HTML escaping and text formatting
// ABOUTME: Small pure helpers shared by the normalizer, renderer and validator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bold Metrics Integration contributors

/// HTML escaping for server-rendered fragments
pub mod html;
/// Title casing, number formatting and word trimming
pub mod text;
