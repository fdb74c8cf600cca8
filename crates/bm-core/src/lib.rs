// ABOUTME: Core types and constants for the Bold Metrics integration
// ABOUTME: Foundation crate with error handling, domain models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bold Metrics Integration contributors

#![deny(unsafe_code)]

//! # BM Core
//!
//! Foundation crate providing shared types and constants for the Bold Metrics
//! integration. It has no I/O of its own: the validator, query builder, API
//! client and renderer in the main crate all speak in these types.
//!
//! ## Modules
//!
//! - **errors**: `AppError`, `ErrorCode`, and the domain errors `ValidationError` / `ApiError`
//! - **constants**: Range limits, query keys, endpoint paths and user-facing messages
//! - **models**: Measurement input, API query, display model and stored submission types

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (measurements, queries, display model, submissions)
pub mod models;
