// ABOUTME: Integration tests for submission and stored option persistence
// ABOUTME: Runs against an in-memory SQLite database
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bold Metrics Integration contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use boldmetrics_integration::constants::settings_keys;
use boldmetrics_integration::database::Database;
use boldmetrics_integration::errors::ErrorCode;
use boldmetrics_integration::models::{QueryExtras, SubmissionInput};
use boldmetrics_integration::services::result_view;
use boldmetrics_integration::validation::validate_submission;
use common::{create_test_database, male_form_fields, sizer_response};
use serde_json::json;
use tempfile::TempDir;
use uuid::Uuid;

fn sample_input(anon_id: &str) -> SubmissionInput {
    SubmissionInput {
        measurements: validate_submission(&male_form_fields()).unwrap(),
        anon_id: anon_id.to_owned(),
        extras: QueryExtras::default(),
    }
}

#[tokio::test]
async fn test_insert_and_get_submission() {
    let db = create_test_database().await;
    let stored = db
        .insert_submission(&sample_input("visitor-42"), &sizer_response())
        .await
        .unwrap();

    assert_eq!(stored.title, "BM Result: visitor-42");

    let loaded = db.get_submission(stored.id).await.unwrap().unwrap();
    assert_eq!(loaded.id, stored.id);
    assert_eq!(loaded.title, stored.title);
    assert_eq!(loaded.response, sizer_response());
    assert_eq!(loaded.input["anon_id"], json!("visitor-42"));
    assert_eq!(loaded.typed_input().unwrap(), sample_input("visitor-42"));
    assert!(loaded.is_complete());
}

#[tokio::test]
async fn test_unknown_id_is_none() {
    let db = create_test_database().await;
    assert!(db.get_submission(Uuid::new_v4()).await.unwrap().is_none());
}

#[tokio::test]
async fn test_each_insert_creates_new_record() {
    let db = create_test_database().await;
    let first = db
        .insert_submission(&sample_input("same"), &sizer_response())
        .await
        .unwrap();
    let second = db
        .insert_submission(&sample_input("same"), &sizer_response())
        .await
        .unwrap();

    assert_ne!(first.id, second.id);
    assert_eq!(db.count_submissions().await.unwrap(), 2);
}

#[tokio::test]
async fn test_settings_round_trip_and_sanitize() {
    let db = create_test_database().await;
    assert!(db.get_setting(settings_keys::CLIENT_ID).await.unwrap().is_none());

    db.set_setting(settings_keys::CLIENT_ID, "  united_shield\n")
        .await
        .unwrap();
    db.set_setting(settings_keys::USER_KEY, "key-1").await.unwrap();
    db.set_setting(settings_keys::USER_KEY, "key-2").await.unwrap();

    let options = db.stored_options().await.unwrap();
    assert_eq!(options.client_id.as_deref(), Some("united_shield"));
    assert_eq!(options.user_key.as_deref(), Some("key-2"));
    assert!(options.webhook_secret.is_none());
}

#[tokio::test]
async fn test_blank_setting_clears_value() {
    let db = create_test_database().await;
    db.set_setting(settings_keys::WEBHOOK_SECRET, "s3cret")
        .await
        .unwrap();
    db.set_setting(settings_keys::WEBHOOK_SECRET, "   ")
        .await
        .unwrap();
    assert!(db
        .get_setting(settings_keys::WEBHOOK_SECRET)
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn test_unknown_setting_key_is_rejected() {
    let db = create_test_database().await;
    assert!(db.set_setting("admin_password", "x").await.is_err());
}

#[tokio::test]
async fn test_uninstall_removes_everything() {
    let db = create_test_database().await;
    let stored = db
        .insert_submission(&sample_input("visitor"), &sizer_response())
        .await
        .unwrap();
    db.set_setting(settings_keys::CLIENT_ID, "client").await.unwrap();

    db.uninstall().await.unwrap();

    assert_eq!(db.count_submissions().await.unwrap(), 0);
    assert!(db.get_submission(stored.id).await.unwrap().is_none());
    assert_eq!(db.stored_options().await.unwrap(), Default::default());
}

#[tokio::test]
async fn test_file_database_is_created_and_persists() {
    let dir = TempDir::new().unwrap();
    let url = format!("sqlite:{}", dir.path().join("nested/bm.db").display());

    let id = {
        let db = Database::new(&url).await.unwrap();
        db.insert_submission(&sample_input("persisted"), &sizer_response())
            .await
            .unwrap()
            .id
    };

    let reopened = Database::new(&url).await.unwrap();
    let loaded = reopened.get_submission(id).await.unwrap().unwrap();
    assert_eq!(loaded.title, "BM Result: persisted");
}

async fn insert_raw_row(db: &Database, input: &str, response: &str) -> Uuid {
    let id = Uuid::new_v4();
    sqlx::query(
        "INSERT INTO bm_submissions (id, title, input, response, created_at) VALUES (?1, ?2, ?3, ?4, ?5)",
    )
    .bind(id.to_string())
    .bind("BM Result: raw")
    .bind(input)
    .bind(response)
    .bind("2025-01-01T00:00:00+00:00")
    .execute(db.pool())
    .await
    .unwrap();
    id
}

#[tokio::test]
async fn test_corrupt_json_columns_load_as_incomplete() {
    let db = create_test_database().await;
    let id = insert_raw_row(&db, "{broken", "not json").await;

    let loaded = db.get_submission(id).await.unwrap().unwrap();
    assert!(loaded.response.is_null());
    assert!(loaded.input.is_null());
    assert!(!loaded.is_complete());
    assert!(loaded.typed_input().is_none());
}

#[tokio::test]
async fn test_result_view_rejects_incomplete_records() {
    let db = create_test_database().await;
    let empty = insert_raw_row(&db, "{}", "{}").await;
    let record = db.get_submission(empty).await.unwrap().unwrap();

    let error = result_view(record).unwrap_err();
    assert_eq!(error.code, ErrorCode::ResourceNotFound);

    let stored = db
        .insert_submission(&sample_input("visitor"), &sizer_response())
        .await
        .unwrap();
    let view = result_view(stored).unwrap();
    assert_eq!(view.title, "BM Result: visitor");
    assert_eq!(view.model.good_matches.len(), 2);
}
