// ABOUTME: Domain models re-exported from bm-core
// ABOUTME: Measurement input, API query, display model and stored submission types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bold Metrics Integration contributors

pub use bm_core::models::*;
