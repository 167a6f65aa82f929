//! Warranty reminder settings, scoped to a placeholder identity until real
//! session auth exists.

use axum::{extract::State, Json};
use sqlx::Connection;
use std::sync::Arc;

use crate::api::error::ApiError;
use crate::db::{MessageResponse, ReminderRow, ReminderSettings, SaveReminderRequest};
use crate::AppState;

// TODO: derive the user from a session once login issues real tokens.
const PLACEHOLDER_USER_ID: &str = "user123";

/// Returns the caller's reminder settings, or an empty object when none
/// have been saved yet.
pub async fn get_reminder_settings(
    State(state): State<Arc<AppState>>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let mut conn = state.db.connect().await?;
    let row = sqlx::query_as::<_, ReminderRow>("SELECT * FROM reminder_settings WHERE user_id = ?")
        .bind(PLACEHOLDER_USER_ID)
        .fetch_optional(&mut conn)
        .await?;
    conn.close().await?;

    let body = match row {
        Some(row) => serde_json::to_value(ReminderSettings::try_from(row)?)?,
        None => serde_json::json!({}),
    };
    Ok(Json(body))
}

/// Saves the settings as sent, replacing any previous row for the user.
pub async fn save_reminder_settings(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SaveReminderRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    // Whatever JSON shape the client sent for reminderDays is kept verbatim.
    let reminder_days = req
        .reminder_days
        .as_ref()
        .map(serde_json::to_string)
        .transpose()?;

    let mut conn = state.db.connect().await?;
    sqlx::query(
        r#"
        INSERT OR REPLACE INTO reminder_settings (user_id, email, phone_number, reminder_days)
        VALUES (?, ?, ?, ?)
        "#,
    )
    .bind(PLACEHOLDER_USER_ID)
    .bind(&req.email)
    .bind(&req.phone_number)
    .bind(&reminder_days)
    .execute(&mut conn)
    .await?;
    conn.close().await?;

    tracing::info!(user_id = PLACEHOLDER_USER_ID, "reminder settings saved");
    Ok(Json(MessageResponse::new("Settings saved successfully")))
}
