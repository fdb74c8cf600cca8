// ABOUTME: Submission record persistence: insert once, read by id, never update
// ABOUTME: Input and raw API response are stored as JSON text alongside a display title
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bold Metrics Integration contributors

use super::Database;
use crate::errors::{AppError, AppResult};
use crate::models::{submission_title, StoredSubmission, SubmissionInput};
use chrono::{DateTime, Utc};
use serde_json::Value;
use sqlx::Row;
use tracing::warn;
use uuid::Uuid;

impl Database {
    pub(super) async fn migrate_submissions(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS bm_submissions (
                id TEXT PRIMARY KEY,
                title TEXT NOT NULL,
                input TEXT NOT NULL,
                response TEXT NOT NULL,
                created_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create bm_submissions: {e}")))?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_bm_submissions_created_at ON bm_submissions(created_at)",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to index bm_submissions: {e}")))?;

        Ok(())
    }

    /// Store a completed round trip under a fresh id
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the insert fails
    pub async fn insert_submission(
        &self,
        input: &SubmissionInput,
        response: &Value,
    ) -> AppResult<StoredSubmission> {
        let record = StoredSubmission {
            id: Uuid::new_v4(),
            title: submission_title(&input.anon_id),
            input: serde_json::to_value(input)?,
            response: response.clone(),
            created_at: Utc::now(),
        };

        sqlx::query(
            r"
            INSERT INTO bm_submissions (id, title, input, response, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            ",
        )
        .bind(record.id.to_string())
        .bind(&record.title)
        .bind(record.input.to_string())
        .bind(record.response.to_string())
        .bind(record.created_at.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to store submission: {e}")))?;

        Ok(record)
    }

    /// Fetch a record; `None` when the id is unknown. A JSON column that no
    /// longer parses loads as `null`, which makes the record incomplete.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn get_submission(&self, id: Uuid) -> AppResult<Option<StoredSubmission>> {
        let row = sqlx::query(
            r"
            SELECT id, title, input, response, created_at
            FROM bm_submissions
            WHERE id = ?1
            ",
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to load submission: {e}")))?;

        let Some(row) = row else {
            return Ok(None);
        };

        let input: String = row.get("input");
        let response: String = row.get("response");
        let created_at: String = row.get("created_at");

        Ok(Some(StoredSubmission {
            id,
            title: row.get("title"),
            input: parse_json_column(id, "input", &input),
            response: parse_json_column(id, "response", &response),
            created_at: DateTime::parse_from_rfc3339(&created_at)
                .map_or_else(|_| Utc::now(), |dt| dt.with_timezone(&Utc)),
        }))
    }

    /// Number of stored records
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn count_submissions(&self) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM bm_submissions")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to count submissions: {e}")))
    }
}

fn parse_json_column(id: Uuid, column: &str, raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|e| {
        warn!(post_id = %id, column, error = %e, "Stored submission column is not valid JSON");
        Value::Null
    })
}
