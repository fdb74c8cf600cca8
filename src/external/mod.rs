// ABOUTME: External API client modules (Bold Metrics Virtual Sizer / Virtual Tailor)
// ABOUTME: Single outbound call per submission with a fixed timeout and classified failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bold Metrics Integration contributors

//! External API Clients

pub mod boldmetrics_client;

pub use boldmetrics_client::{BoldMetricsClient, BoldMetricsClientConfig, SizingApi};
