//! Warranty reminder settings, one row per user.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row of the `reminder_settings` table. `reminder_days` is stored as a
/// JSON string so the client can send a list, a number, or anything else.
#[derive(Debug, Clone, FromRow)]
pub struct ReminderRow {
    pub user_id: String,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub reminder_days: Option<String>,
}

/// Body of a save-settings call. Every field is optional; whatever the
/// client omits is stored as NULL, replacing any previous value.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveReminderRequest {
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub reminder_days: Option<serde_json::Value>,
}

/// Settings as returned to the client, with `reminder_days` decoded back
/// into JSON. Absent fields are omitted rather than sent as null.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderSettings {
    pub user_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reminder_days: Option<serde_json::Value>,
}

impl TryFrom<ReminderRow> for ReminderSettings {
    type Error = serde_json::Error;

    fn try_from(row: ReminderRow) -> Result<Self, Self::Error> {
        let reminder_days = row
            .reminder_days
            .as_deref()
            .map(serde_json::from_str)
            .transpose()?;
        Ok(Self {
            user_id: row.user_id,
            email: row.email,
            phone_number: row.phone_number,
            reminder_days,
        })
    }
}
