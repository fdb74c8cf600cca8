// ABOUTME: Normalization of sizing API responses into the display model
// ABOUTME: Detects the Virtual Sizer or Virtual Tailor shape and tolerates absent keys
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bold Metrics Integration contributors

/// Response shape detection and display-model mapping
pub mod normalizer;

pub use normalizer::{input_summary_from_measurements, normalize, ResponseShape};
