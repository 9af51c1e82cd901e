//! Notification subscription service

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    db::repositories::NotificationRepository,
    error::{AppError, AppResult},
    handlers::notifications::request::UpsertNotificationRequest,
    models::{ContestNotification, contest::Platform},
    utils::validation::{validate_email, validate_whatsapp_number},
};

/// Service for managing contest reminder subscriptions
pub struct NotificationService;

impl NotificationService {
    /// List a user's active subscriptions, purging expired ones first
    pub async fn list(pool: &PgPool, user_id: &Uuid) -> AppResult<Vec<ContestNotification>> {
        let now = Utc::now();
        NotificationRepository::delete_expired_for_user(pool, user_id, now).await?;
        NotificationRepository::list_active_for_user(pool, user_id, now).await
    }

    /// Create or update the subscription for a (user, contest) pair.
    ///
    /// Returns the stored record and whether it was newly created.
    pub async fn upsert(
        pool: &PgPool,
        user_id: &Uuid,
        payload: UpsertNotificationRequest,
    ) -> AppResult<(ContestNotification, bool)> {
        Self::validate_channels(&payload)?;

        if payload.contest_platform.parse::<Platform>().is_err() {
            return Err(AppError::Validation(format!(
                "Unknown platform: {}",
                payload.contest_platform
            )));
        }

        if payload.contest_end_time < payload.contest_start_time {
            return Err(AppError::Validation(
                "Contest end time must not be before start time".to_string(),
            ));
        }

        if let Some(existing) =
            NotificationRepository::find_by_user_and_contest(pool, user_id, &payload.contest_id)
                .await?
        {
            let updated = NotificationRepository::update_channels(
                pool,
                &existing.id,
                payload.notify_via_email,
                payload.notify_via_whatsapp,
                payload.email.as_deref(),
                payload.whatsapp_number.as_deref(),
            )
            .await?;
            return Ok((updated, false));
        }

        let created = NotificationRepository::create(
            pool,
            user_id,
            &payload.contest_id,
            &payload.contest_name,
            &payload.contest_platform,
            &payload.contest_url,
            payload.contest_start_time,
            payload.contest_end_time,
            payload.notify_via_email,
            payload.notify_via_whatsapp,
            payload.email.as_deref(),
            payload.whatsapp_number.as_deref(),
        )
        .await?;

        Ok((created, true))
    }

    /// Delete a subscription owned by the user
    pub async fn delete(pool: &PgPool, user_id: &Uuid, id: &Uuid) -> AppResult<()> {
        let notification = NotificationRepository::find_owned(pool, id, user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Notification not found".to_string()))?;

        NotificationRepository::delete(pool, &notification.id).await
    }

    /// A subscription must request at least one channel, and each requested
    /// channel must come with a usable contact field.
    fn validate_channels(payload: &UpsertNotificationRequest) -> AppResult<()> {
        if !payload.notify_via_email && !payload.notify_via_whatsapp {
            return Err(AppError::Validation(
                "At least one notification channel must be selected".to_string(),
            ));
        }

        if payload.notify_via_email {
            let email = payload
                .email
                .as_deref()
                .ok_or_else(|| AppError::Validation("Email address is required".to_string()))?;
            validate_email(email).map_err(|e| AppError::Validation(e.to_string()))?;
        }

        if payload.notify_via_whatsapp {
            let number = payload.whatsapp_number.as_deref().ok_or_else(|| {
                AppError::Validation("WhatsApp number is required".to_string())
            })?;
            validate_whatsapp_number(number).map_err(|e| AppError::Validation(e.to_string()))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    fn payload() -> UpsertNotificationRequest {
        let start = Utc::now() + Duration::hours(5);
        UpsertNotificationRequest {
            contest_id: "abc123".to_string(),
            contest_name: "Weekly Contest 378".to_string(),
            contest_platform: "leetcode".to_string(),
            contest_url: "https://leetcode.com/contest/weekly-contest-378/".to_string(),
            contest_start_time: start,
            contest_end_time: start + Duration::minutes(90),
            notify_via_email: true,
            notify_via_whatsapp: false,
            email: Some("user@example.com".to_string()),
            whatsapp_number: None,
        }
    }

    #[test]
    fn test_channels_require_contact_fields() {
        assert!(NotificationService::validate_channels(&payload()).is_ok());

        let mut no_channel = payload();
        no_channel.notify_via_email = false;
        assert!(NotificationService::validate_channels(&no_channel).is_err());

        let mut missing_email = payload();
        missing_email.email = None;
        assert!(NotificationService::validate_channels(&missing_email).is_err());

        let mut whatsapp_only = payload();
        whatsapp_only.notify_via_email = false;
        whatsapp_only.email = None;
        whatsapp_only.notify_via_whatsapp = true;
        whatsapp_only.whatsapp_number = Some("+14155552671".to_string());
        assert!(NotificationService::validate_channels(&whatsapp_only).is_ok());

        whatsapp_only.whatsapp_number = None;
        assert!(NotificationService::validate_channels(&whatsapp_only).is_err());
    }
}
