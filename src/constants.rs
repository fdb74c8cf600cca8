// ABOUTME: Application constants re-exported from bm-core
// ABOUTME: Measurement limits, API contract keys, HTTP paths and user-facing messages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bold Metrics Integration contributors

pub use bm_core::constants::*;
