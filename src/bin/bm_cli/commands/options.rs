// ABOUTME: Stored option commands: credentials, webhook secret and effective configuration
// ABOUTME: Secrets are masked whenever they are printed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bold Metrics Integration contributors

use boldmetrics_integration::{
    config::{environment::ServerConfig, BoldMetricsConfig},
    constants::settings_keys,
    database::Database,
    errors::AppResult,
    models::{credentials::mask_secret, CredentialSource},
};

/// Save client id and user key
pub async fn set_credentials(database: &Database, client_id: &str, user_key: &str) -> AppResult<()> {
    database.set_setting(settings_keys::CLIENT_ID, client_id).await?;
    database.set_setting(settings_keys::USER_KEY, user_key).await?;
    println!("Stored credentials: client_id={client_id} user_key={}", mask_secret(user_key));
    Ok(())
}

/// Save or clear the webhook secret
pub async fn set_webhook_secret(database: &Database, secret: &str) -> AppResult<()> {
    database
        .set_setting(settings_keys::WEBHOOK_SECRET, secret)
        .await?;
    if secret.trim().is_empty() {
        println!("Webhook secret cleared; the webhook accepts unauthenticated calls");
    } else {
        println!("Webhook secret stored");
    }
    Ok(())
}

/// Print the configuration a request would see right now
pub async fn show_config(database: &Database, config: &ServerConfig) -> AppResult<()> {
    let stored = database.stored_options().await?;
    let resolved = BoldMetricsConfig::resolve(&config.boldmetrics, &stored);

    println!("Endpoint:        {}", config.boldmetrics.endpoint());
    println!("Timeout:         {}s", config.boldmetrics.timeout_secs);
    println!(
        "Client id:       {} ({})",
        display_or_unset(&resolved.credentials.client_id),
        source_label(resolved.client_id_source)
    );
    println!(
        "User key:        {} ({})",
        display_or_unset(&resolved.credentials.masked_user_key()),
        source_label(resolved.user_key_source)
    );
    println!(
        "Webhook secret:  {}",
        if resolved.webhook_secret.is_some() { "set" } else { "not set" }
    );
    println!("Stored results:  {}", database.count_submissions().await?);
    Ok(())
}

fn display_or_unset(value: &str) -> &str {
    if value.is_empty() {
        "<unset>"
    } else {
        value
    }
}

const fn source_label(source: CredentialSource) -> &'static str {
    match source {
        CredentialSource::Environment => "environment",
        CredentialSource::StoredOption => "stored option",
        CredentialSource::Unset => "unset",
    }
}
