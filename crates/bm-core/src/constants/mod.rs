// ABOUTME: Application constants for measurement limits, API contract keys, and messages
// ABOUTME: Centralizes every magic number and string shared across the pipeline
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bold Metrics Integration contributors

//! Constants organized by domain

/// Accepted ranges for submitted measurements (inclusive)
pub mod limits {
    /// Minimum height, whole feet
    pub const HEIGHT_FEET_MIN: u32 = 3;
    /// Maximum height, whole feet
    pub const HEIGHT_FEET_MAX: u32 = 8;
    /// Minimum additional inches on top of the feet component
    pub const HEIGHT_INCHES_MIN: u32 = 0;
    /// Maximum additional inches on top of the feet component
    pub const HEIGHT_INCHES_MAX: u32 = 11;
    /// Inches per foot
    pub const INCHES_PER_FOOT: u32 = 12;
    /// Smallest total height in inches (3 ft 0 in)
    pub const HEIGHT_TOTAL_MIN: f64 = 36.0;
    /// Largest total height in inches (8 ft 11 in)
    pub const HEIGHT_TOTAL_MAX: f64 = 107.0;
    /// Weight range in pounds
    pub const WEIGHT_MIN_LBS: f64 = 50.0;
    /// Weight range in pounds
    pub const WEIGHT_MAX_LBS: f64 = 500.0;
    /// Age range in years
    pub const AGE_MIN: u32 = 18;
    /// Age range in years
    pub const AGE_MAX: u32 = 100;
    /// Waist range in inches
    pub const WAIST_MIN_IN: f64 = 20.0;
    /// Waist range in inches
    pub const WAIST_MAX_IN: f64 = 60.0;
    /// Words kept from a non-200 body when building the error snippet
    pub const ERROR_BODY_SNIPPET_WORDS: usize = 30;
}

/// External sizing API contract
pub mod api {
    /// Default base URL of the sizing API
    pub const DEFAULT_BASE_URL: &str = "https://api.boldmetrics.io";
    /// Path of the Virtual Sizer endpoint
    pub const VIRTUAL_SIZER_PATH: &str = "/virtualsizer/get";
    /// Path of the Virtual Tailor endpoint
    pub const VIRTUAL_TAILOR_PATH: &str = "/virtualtailor/get";
    /// Outbound request timeout in seconds
    pub const DEFAULT_TIMEOUT_SECS: u64 = 15;
    /// Display name used in logs and error messages
    pub const SERVICE_NAME: &str = "Bold Metrics API";
}

/// Query parameter names sent to the sizing API
pub mod query_keys {
    /// API client identifier
    pub const CLIENT_ID: &str = "client_id";
    /// API user key
    pub const USER_KEY: &str = "user_key";
    /// Height in inches
    pub const HEIGHT: &str = "height";
    /// Weight in pounds
    pub const WEIGHT: &str = "weight";
    /// Age in years
    pub const AGE: &str = "age";
    /// Anonymous shopper identifier
    pub const ANON_ID: &str = "anon_id";
    /// Waist measurement (male profile)
    pub const WAIST: &str = "waist_circum_preferred";
    /// Composed bra size (female profile)
    pub const BRA_SIZE: &str = "bra_size";
    /// Desired brand
    pub const DESIRED_BRAND: &str = "desired_brand";
    /// Desired garment type
    pub const DESIRED_GARMENT_TYPE: &str = "desired_garment_type";
    /// Product identifier
    pub const PRODUCT_ID: &str = "product_id";
    /// Shopper locale
    pub const LOCALE: &str = "locale";

    /// Body-dimension overrides accepted by the Virtual Tailor variant
    pub const DIMENSION_OVERRIDES: [&str; 15] = [
        "chest_circum",
        "waist_circum_stomach",
        "hip_circum",
        "neck_circum_base",
        "shoulder_breadth",
        "sleeve_length",
        "arm_length",
        "bicep_circum",
        "wrist_circum",
        "inseam",
        "outseam",
        "thigh_circum",
        "calf_circum",
        "shirt_length",
        "jacket_length",
    ];
}

/// Keys of the stored options table
pub mod settings_keys {
    /// Stored API client identifier
    pub const CLIENT_ID: &str = "client_id";
    /// Stored API user key
    pub const USER_KEY: &str = "user_key";
    /// Stored webhook shared secret
    pub const WEBHOOK_SECRET: &str = "webhook_secret";
}

/// Service names for logging
pub mod service_names {
    /// Name reported by the HTTP server
    pub const BOLDMETRICS_SERVER: &str = "boldmetrics-server";
}

/// HTTP surface constants
pub mod http {
    /// Header carrying the legacy webhook shared secret
    pub const WEBHOOK_SECRET_HEADER: &str = "x-bm-webhook-secret";
    /// Form submission endpoint
    pub const SUBMIT_PATH: &str = "/boldmetrics/v1/submit";
    /// Legacy webhook endpoint
    pub const WEBHOOK_PATH: &str = "/boldmetrics/v1/process";
    /// Results display surface
    pub const RESULTS_PATH: &str = "/results";
}

/// User-facing messages
pub mod messages {
    /// Generic message shown for every sizing API failure
    pub const API_FAILURE: &str =
        "We couldn't get your size recommendations right now. Please try again.";
    /// Legacy webhook: required fields missing
    pub const WEBHOOK_MISSING_FIELDS: &str = "Missing required fields";
    /// Legacy webhook: bad or missing shared secret
    pub const INVALID_WEBHOOK_SECRET: &str = "Invalid webhook secret";
    /// Placeholder when no size matched
    pub const NO_MATCHES: &str = "No size recommendations available.";
    /// Heading of the not-found view
    pub const RESULT_NOT_FOUND: &str = "Result Not Found";
    /// Label used when a match carries neither brand size nor size
    pub const UNKNOWN_SIZE: &str = "Unknown Size";
}
