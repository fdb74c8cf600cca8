// ABOUTME: Service layer orchestrating the submission pipeline
// ABOUTME: Route handlers stay thin and delegate here
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bold Metrics Integration contributors

/// Validate, query, call, persist and load results
pub mod sizing;

pub use sizing::{display_model_for, result_view, ResultView, SizingService, SubmissionOutcome};
