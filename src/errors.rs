// ABOUTME: Unified error types re-exported from bm-core
// ABOUTME: Keeps `crate::errors::AppError` as the single error path for handlers and services
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bold Metrics Integration contributors

pub use bm_core::errors::*;
