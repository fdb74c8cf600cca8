// ABOUTME: bm-cli command implementations
// ABOUTME: Stored option management and stored result inspection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bold Metrics Integration contributors

pub mod options;
pub mod results;
