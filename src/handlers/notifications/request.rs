//! Notification request DTOs

use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

/// Create or update a contest reminder subscription
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpsertNotificationRequest {
    #[validate(length(min = 1, max = 128))]
    pub contest_id: String,

    #[validate(length(min = 1, max = 256))]
    pub contest_name: String,

    #[validate(length(min = 1, max = 32))]
    pub contest_platform: String,

    #[validate(url)]
    pub contest_url: String,

    pub contest_start_time: DateTime<Utc>,
    pub contest_end_time: DateTime<Utc>,

    pub notify_via_email: bool,
    pub notify_via_whatsapp: bool,

    pub email: Option<String>,
    pub whatsapp_number: Option<String>,
}

/// Query parameters for deleting a subscription
#[derive(Debug, Deserialize)]
pub struct DeleteNotificationQuery {
    pub id: Uuid,
}
