// ABOUTME: Main library entry point for the Bold Metrics integration service
// ABOUTME: Wires the validate-build-call-normalize-persist-render pipeline behind an HTTP surface
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bold Metrics Integration contributors

#![recursion_limit = "256"]
#![deny(unsafe_code)]

//! # Bold Metrics Integration
//!
//! Collects body measurements from a web form (or a legacy webhook), forwards
//! them to the Bold Metrics Virtual Sizer / Virtual Tailor API, stores the JSON
//! response and renders it back as HTML.
//!
//! ## Pipeline
//!
//! - **Validation**: raw form fields to a range-checked [`models::MeasurementInput`]
//! - **Sizing**: measurement record plus credentials to a flat [`models::ApiQuery`]
//! - **External**: the outbound HTTP call with a fixed timeout
//! - **Results**: the two response shapes normalized into a [`models::DisplayModel`]
//! - **Database**: append-only submission records keyed by an opaque id
//! - **Formatters**: display model to escaped HTML fragments
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use boldmetrics_integration::config::environment::ServerConfig;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("Bold Metrics integration configured on port {}", config.http_port);
//!     Ok(())
//! }
//! ```

/// Configuration management from the process environment
pub mod config;

/// Application constants re-exported from `bm-core`
pub mod constants;

/// Submission and stored-option persistence (`SQLite`)
pub mod database;

/// Unified error handling re-exported from `bm-core`
pub mod errors;

/// Outbound sizing API client
pub mod external;

/// HTML rendering of display models and pages
pub mod formatters;

/// Structured logging setup
pub mod logging;

/// Domain models re-exported from `bm-core`
pub mod models;

/// Sizing API response normalization
pub mod results;

/// HTTP route handlers
pub mod routes;

/// HTTP server assembly
pub mod server;

/// Shared server state
pub mod resources;

/// Submission pipeline orchestration
pub mod services;

/// Query construction for the sizing API
pub mod sizing;

/// Text and HTML helpers
pub mod utils;

/// Raw submission parsing and validation
pub mod validation;
