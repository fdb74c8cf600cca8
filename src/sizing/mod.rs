// ABOUTME: Query construction for the Bold Metrics sizing API
// ABOUTME: Maps a validated measurement record plus credentials onto the flat parameter contract
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bold Metrics Integration contributors

/// Measurement record to API query mapping
pub mod query_builder;

pub use query_builder::{build_query, generate_anon_id, BuiltQuery};
