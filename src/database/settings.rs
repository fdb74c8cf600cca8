// ABOUTME: Stored option persistence for API credentials and the webhook secret
// ABOUTME: Values are sanitized on write; blank values remove the option
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bold Metrics Integration contributors

use super::Database;
use crate::config::StoredOptions;
use crate::constants::settings_keys;
use crate::errors::{AppError, AppResult};
use crate::utils::text::sanitize_text;
use chrono::Utc;

/// Option keys accepted by the settings store
pub const SETTING_KEYS: [&str; 3] = [
    settings_keys::CLIENT_ID,
    settings_keys::USER_KEY,
    settings_keys::WEBHOOK_SECRET,
];

impl Database {
    pub(super) async fn migrate_settings(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS bm_settings (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create bm_settings: {e}")))?;
        Ok(())
    }

    /// Read a stored option
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn get_setting(&self, key: &str) -> AppResult<Option<String>> {
        sqlx::query_scalar("SELECT value FROM bm_settings WHERE key = ?1")
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to get setting {key}: {e}")))
    }

    /// Save a stored option. A value that is blank after sanitizing deletes it.
    ///
    /// # Errors
    ///
    /// Returns an error for unknown keys or if the write fails
    pub async fn set_setting(&self, key: &str, value: &str) -> AppResult<()> {
        if !SETTING_KEYS.contains(&key) {
            return Err(AppError::invalid_input(format!("Unknown setting: {key}")).with_field("key"));
        }

        let value = sanitize_text(value);
        if value.is_empty() {
            sqlx::query("DELETE FROM bm_settings WHERE key = ?1")
                .bind(key)
                .execute(&self.pool)
                .await
                .map_err(|e| AppError::database(format!("Failed to clear setting {key}: {e}")))?;
            return Ok(());
        }

        sqlx::query(
            r"
            INSERT INTO bm_settings (key, value, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(key) DO UPDATE SET
                value = ?2,
                updated_at = ?3
            ",
        )
        .bind(key)
        .bind(&value)
        .bind(Utc::now().to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to save setting {key}: {e}")))?;

        Ok(())
    }

    /// All stored options at once
    ///
    /// # Errors
    ///
    /// Returns an error if a read fails
    pub async fn stored_options(&self) -> AppResult<StoredOptions> {
        Ok(StoredOptions {
            client_id: self.get_setting(settings_keys::CLIENT_ID).await?,
            user_key: self.get_setting(settings_keys::USER_KEY).await?,
            webhook_secret: self.get_setting(settings_keys::WEBHOOK_SECRET).await?,
        })
    }
}
