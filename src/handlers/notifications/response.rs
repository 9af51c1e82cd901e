//! Notification response DTOs

use serde::Serialize;

use crate::models::ContestNotification;

/// A user's subscription list
#[derive(Debug, Serialize)]
pub struct NotificationsListResponse {
    pub notifications: Vec<ContestNotification>,
}

/// Result of a create-or-update request
#[derive(Debug, Serialize)]
pub struct UpsertNotificationResponse {
    pub notification: ContestNotification,
    pub created: bool,
}

/// Deletion confirmation
#[derive(Debug, Serialize)]
pub struct DeleteNotificationResponse {
    pub message: String,
}
