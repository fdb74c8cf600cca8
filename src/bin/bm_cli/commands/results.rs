// ABOUTME: Stored result commands: render one record, or remove everything
// ABOUTME: Uninstall refuses to run without explicit confirmation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bold Metrics Integration contributors

use boldmetrics_integration::{
    database::Database,
    errors::{AppError, AppResult},
    formatters::render_display_model,
    services::result_view,
};
use uuid::Uuid;

/// Print the rendered fragment for a stored record; incomplete records are
/// reported as not found, as on the results page
pub async fn show(database: &Database, id: &str) -> AppResult<()> {
    let id = Uuid::parse_str(id.trim())
        .map_err(|_| AppError::invalid_input(format!("Not a valid result id: {id}")))?;
    let record = database
        .get_submission(id)
        .await?
        .ok_or_else(|| AppError::not_found("Result"))?;

    let created_at = record.created_at.to_rfc3339();
    let view = result_view(record)?;

    println!("{} ({created_at})", view.title);
    println!("{}", render_display_model(&view.model));
    Ok(())
}

/// Delete every stored record and option
pub async fn uninstall(database: &Database, confirmed: bool) -> AppResult<()> {
    if !confirmed {
        return Err(AppError::invalid_input(
            "Refusing to delete all data without --yes",
        ));
    }
    let removed = database.count_submissions().await?;
    database.uninstall().await?;
    println!("Removed {removed} stored results and all stored options");
    Ok(())
}
