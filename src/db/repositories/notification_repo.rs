//! Contest notification repository

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::{error::AppResult, models::ContestNotification};

/// Repository for contest notification subscriptions
pub struct NotificationRepository;

impl NotificationRepository {
    /// Create a new subscription
    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        pool: &PgPool,
        user_id: &Uuid,
        contest_id: &str,
        contest_name: &str,
        contest_platform: &str,
        contest_url: &str,
        contest_start_time: DateTime<Utc>,
        contest_end_time: DateTime<Utc>,
        notify_via_email: bool,
        notify_via_whatsapp: bool,
        email: Option<&str>,
        whatsapp_number: Option<&str>,
    ) -> AppResult<ContestNotification> {
        let notification = sqlx::query_as::<_, ContestNotification>(
            r#"
            INSERT INTO contest_notifications (
                user_id, contest_id, contest_name, contest_platform, contest_url,
                contest_start_time, contest_end_time, notify_via_email,
                notify_via_whatsapp, email, whatsapp_number
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(contest_id)
        .bind(contest_name)
        .bind(contest_platform)
        .bind(contest_url)
        .bind(contest_start_time)
        .bind(contest_end_time)
        .bind(notify_via_email)
        .bind(notify_via_whatsapp)
        .bind(email)
        .bind(whatsapp_number)
        .fetch_one(pool)
        .await?;

        Ok(notification)
    }

    /// Update the channel choices and contact fields of an existing subscription
    pub async fn update_channels(
        pool: &PgPool,
        id: &Uuid,
        notify_via_email: bool,
        notify_via_whatsapp: bool,
        email: Option<&str>,
        whatsapp_number: Option<&str>,
    ) -> AppResult<ContestNotification> {
        let notification = sqlx::query_as::<_, ContestNotification>(
            r#"
            UPDATE contest_notifications
            SET
                notify_via_email = $2,
                notify_via_whatsapp = $3,
                email = $4,
                whatsapp_number = $5,
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(notify_via_email)
        .bind(notify_via_whatsapp)
        .bind(email)
        .bind(whatsapp_number)
        .fetch_one(pool)
        .await?;

        Ok(notification)
    }

    /// Find the subscription for a (user, contest) pair
    pub async fn find_by_user_and_contest(
        pool: &PgPool,
        user_id: &Uuid,
        contest_id: &str,
    ) -> AppResult<Option<ContestNotification>> {
        let notification = sqlx::query_as::<_, ContestNotification>(
            r#"SELECT * FROM contest_notifications WHERE user_id = $1 AND contest_id = $2"#,
        )
        .bind(user_id)
        .bind(contest_id)
        .fetch_optional(pool)
        .await?;

        Ok(notification)
    }

    /// Find a subscription by id, only if owned by the given user
    pub async fn find_owned(
        pool: &PgPool,
        id: &Uuid,
        user_id: &Uuid,
    ) -> AppResult<Option<ContestNotification>> {
        let notification = sqlx::query_as::<_, ContestNotification>(
            r#"SELECT * FROM contest_notifications WHERE id = $1 AND user_id = $2"#,
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

        Ok(notification)
    }

    /// List a user's subscriptions for contests that have not ended yet,
    /// ordered by contest start time ascending
    pub async fn list_active_for_user(
        pool: &PgPool,
        user_id: &Uuid,
        now: DateTime<Utc>,
    ) -> AppResult<Vec<ContestNotification>> {
        let notifications = sqlx::query_as::<_, ContestNotification>(
            r#"
            SELECT * FROM contest_notifications
            WHERE user_id = $1 AND contest_end_time >= $2
            ORDER BY contest_start_time ASC
            "#,
        )
        .bind(user_id)
        .bind(now)
        .fetch_all(pool)
        .await?;

        Ok(notifications)
    }

    /// Delete a subscription by id
    pub async fn delete(pool: &PgPool, id: &Uuid) -> AppResult<()> {
        sqlx::query(r#"DELETE FROM contest_notifications WHERE id = $1"#)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(())
    }

    /// Delete a user's subscriptions whose contest has already ended
    pub async fn delete_expired_for_user(
        pool: &PgPool,
        user_id: &Uuid,
        now: DateTime<Utc>,
    ) -> AppResult<u64> {
        let result = sqlx::query(
            r#"DELETE FROM contest_notifications WHERE user_id = $1 AND contest_end_time < $2"#,
        )
        .bind(user_id)
        .bind(now)
        .execute(pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Delete every subscription whose contest has already ended
    pub async fn delete_expired(pool: &PgPool, now: DateTime<Utc>) -> AppResult<u64> {
        let result =
            sqlx::query(r#"DELETE FROM contest_notifications WHERE contest_end_time < $1"#)
                .bind(now)
                .execute(pool)
                .await?;

        Ok(result.rows_affected())
    }

    /// Select subscriptions due an email reminder: email channel enabled, not
    /// yet sent, contact present, contest starting within [from, until]
    pub async fn find_email_due(
        pool: &PgPool,
        from: DateTime<Utc>,
        until: DateTime<Utc>,
    ) -> AppResult<Vec<ContestNotification>> {
        let notifications = sqlx::query_as::<_, ContestNotification>(
            r#"
            SELECT * FROM contest_notifications
            WHERE notify_via_email = TRUE
              AND email_sent = FALSE
              AND email IS NOT NULL
              AND contest_start_time >= $1
              AND contest_start_time <= $2
            ORDER BY contest_start_time ASC
            "#,
        )
        .bind(from)
        .bind(until)
        .fetch_all(pool)
        .await?;

        Ok(notifications)
    }

    /// Atomically claim a subscription for sending.
    ///
    /// Returns false if another dispatcher run already claimed it.
    pub async fn claim_email(pool: &PgPool, id: &Uuid) -> AppResult<bool> {
        let result = sqlx::query(
            r#"
            UPDATE contest_notifications
            SET email_sent = TRUE, updated_at = NOW()
            WHERE id = $1 AND email_sent = FALSE
            "#,
        )
        .bind(id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() == 1)
    }

    /// Release a claim after a failed delivery so a later run can retry
    pub async fn release_email_claim(pool: &PgPool, id: &Uuid) -> AppResult<()> {
        sqlx::query(
            r#"
            UPDATE contest_notifications
            SET email_sent = FALSE, updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(pool)
        .await?;

        Ok(())
    }
}
