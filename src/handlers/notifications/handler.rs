//! Notification handler implementations

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use validator::Validate;

use crate::{
    error::AppResult,
    middleware::auth::AuthenticatedUser,
    services::NotificationService,
    state::AppState,
};

use super::{
    request::{DeleteNotificationQuery, UpsertNotificationRequest},
    response::{
        DeleteNotificationResponse, NotificationsListResponse, UpsertNotificationResponse,
    },
};

/// List the caller's subscriptions, purging expired ones first
pub async fn list_notifications(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
) -> AppResult<Json<NotificationsListResponse>> {
    let notifications = NotificationService::list(state.db(), &auth_user.id).await?;

    Ok(Json(NotificationsListResponse { notifications }))
}

/// Create or update the caller's subscription for one contest
pub async fn upsert_notification(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<UpsertNotificationRequest>,
) -> AppResult<(StatusCode, Json<UpsertNotificationResponse>)> {
    payload.validate()?;

    let (notification, created) =
        NotificationService::upsert(state.db(), &auth_user.id, payload).await?;

    let status = if created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };

    Ok((status, Json(UpsertNotificationResponse { notification, created })))
}

/// Delete one of the caller's subscriptions
pub async fn delete_notification(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Query(query): Query<DeleteNotificationQuery>,
) -> AppResult<Json<DeleteNotificationResponse>> {
    NotificationService::delete(state.db(), &auth_user.id, &query.id).await?;

    Ok(Json(DeleteNotificationResponse {
        message: "Notification deleted".to_string(),
    }))
}
