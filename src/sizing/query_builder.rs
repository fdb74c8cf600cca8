// ABOUTME: Builds the outbound query from measurements, credentials and optional extras
// ABOUTME: Sex decides between waist and bra size; absent optional values never become parameters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bold Metrics Integration contributors

use crate::constants::query_keys;
use crate::models::{ApiCredentials, ApiQuery, MeasurementInput, QueryExtras, SexProfile};
use crate::utils::text::format_query_number;
use uuid::Uuid;

/// A query ready to send, plus the anonymous id it carries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltQuery {
    /// Parameters in contract order
    pub query: ApiQuery,
    /// Anonymous id sent with this call (supplied or freshly generated)
    pub anon_id: String,
}

/// Fresh random anonymous id
#[must_use]
pub fn generate_anon_id() -> String {
    Uuid::new_v4().to_string()
}

/// Map a measurement record onto the sizing API parameters
///
/// `anon_id` is used as given when present and non-blank; otherwise a new
/// UUID v4 is generated for this call only.
#[must_use]
pub fn build_query(
    input: &MeasurementInput,
    credentials: &ApiCredentials,
    anon_id: Option<&str>,
    extras: &QueryExtras,
) -> BuiltQuery {
    let anon_id = anon_id
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map_or_else(generate_anon_id, ToOwned::to_owned);

    let mut query = ApiQuery::new();
    query.insert(query_keys::CLIENT_ID, credentials.client_id.trim());
    query.insert(query_keys::USER_KEY, credentials.user_key.trim());
    query.insert(query_keys::HEIGHT, format_query_number(input.height));
    query.insert(query_keys::WEIGHT, format_query_number(input.weight));
    query.insert(query_keys::AGE, input.age.to_string());
    query.insert(query_keys::ANON_ID, anon_id.as_str());

    match &input.profile {
        SexProfile::Male { waist } => {
            query.insert(query_keys::WAIST, format_query_number(*waist));
        }
        profile @ SexProfile::Female { .. } => {
            query.insert_opt(query_keys::BRA_SIZE, profile.bra_size().as_deref());
        }
    }

    query.insert_opt(query_keys::DESIRED_BRAND, extras.desired_brand.as_deref());
    query.insert_opt(
        query_keys::DESIRED_GARMENT_TYPE,
        extras.desired_garment_type.as_deref(),
    );
    query.insert_opt(query_keys::PRODUCT_ID, extras.product_id.as_deref());
    query.insert_opt(query_keys::LOCALE, extras.locale.as_deref());

    for (key, value) in &extras.dimension_overrides {
        // Overrides never displace the contract fields above
        if !query.contains_key(key) {
            query.insert(key.as_str(), value.as_str());
        }
    }

    BuiltQuery { query, anon_id }
}
