//! Reminder dispatcher
//!
//! Invoked by an external scheduler. Selects subscriptions whose contest
//! starts within the lookahead window, sends reminder emails one at a time,
//! and purges subscriptions for contests that have already finished.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use sqlx::PgPool;

use crate::{
    constants::REMINDER_LOOKAHEAD_MINUTES,
    db::repositories::{NotificationRepository, UserRepository},
    error::AppResult,
    mail::{Mailer, ReminderEmail},
    models::ContestNotification,
};

/// Outcome of one dispatcher run
#[derive(Debug, Default, Serialize)]
pub struct DispatchSummary {
    /// Candidates selected for this run
    pub total: usize,
    /// Reminders delivered
    pub sent: usize,
    /// Deliveries that failed (claim released, retried next run)
    pub failed: usize,
    /// Expired subscriptions purged
    pub deleted: u64,
    /// One message per failed delivery
    pub errors: Vec<String>,
}

/// The reminder dispatcher
pub struct DispatcherService;

impl DispatcherService {
    /// The inclusive selection window for a run starting at `now`
    pub fn reminder_window(now: DateTime<Utc>) -> (DateTime<Utc>, DateTime<Utc>) {
        (now, now + Duration::minutes(REMINDER_LOOKAHEAD_MINUTES))
    }

    /// Execute one dispatcher run
    pub async fn run(pool: &PgPool, mailer: &Mailer) -> AppResult<DispatchSummary> {
        let now = Utc::now();
        let (from, until) = Self::reminder_window(now);

        let candidates = NotificationRepository::find_email_due(pool, from, until).await?;
        tracing::info!(count = candidates.len(), "pending email reminders selected");

        let mut summary = DispatchSummary {
            total: candidates.len(),
            ..Default::default()
        };

        for notification in candidates {
            Self::process_one(pool, mailer, &notification, &mut summary).await;
        }

        summary.deleted = NotificationRepository::delete_expired(pool, now).await?;
        tracing::info!(
            sent = summary.sent,
            failed = summary.failed,
            deleted = summary.deleted,
            "dispatcher run complete"
        );

        Ok(summary)
    }

    /// Send one reminder. Failures are recorded in the summary and never
    /// propagate, so one bad address cannot abort the batch.
    async fn process_one(
        pool: &PgPool,
        mailer: &Mailer,
        notification: &ContestNotification,
        summary: &mut DispatchSummary,
    ) {
        let Some(email) = notification.email.as_deref() else {
            return;
        };

        // Claim before sending; a concurrent run that claimed first wins.
        match NotificationRepository::claim_email(pool, &notification.id).await {
            Ok(true) => {}
            Ok(false) => {
                tracing::debug!(id = %notification.id, "already claimed, skipping");
                return;
            }
            Err(e) => {
                summary.failed += 1;
                summary.errors.push(format!("Failed to claim {}: {e}", notification.id));
                return;
            }
        }

        let user_name = match UserRepository::find_by_id(pool, &notification.user_id).await {
            Ok(user) => user.map(|u| u.name),
            Err(_) => None,
        };

        let reminder = ReminderEmail {
            contest_name: notification.contest_name.clone(),
            contest_platform: notification.contest_platform.clone(),
            contest_url: notification.contest_url.clone(),
            contest_start_time: notification.contest_start_time,
            user_name,
        };

        match mailer.send_contest_reminder(email, &reminder).await {
            Ok(()) => {
                summary.sent += 1;
                tracing::info!(
                    contest = %notification.contest_name,
                    "reminder email sent"
                );
            }
            Err(e) => {
                summary.failed += 1;
                summary.errors.push(format!("Failed to send to {email}: {e}"));
                tracing::warn!(
                    contest = %notification.contest_name,
                    error = %e,
                    "reminder email failed"
                );
                if let Err(release_err) =
                    NotificationRepository::release_email_claim(pool, &notification.id).await
                {
                    tracing::error!(
                        id = %notification.id,
                        error = %release_err,
                        "failed to release claim after delivery failure"
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reminder_window_is_sixty_minutes() {
        let now = Utc::now();
        let (from, until) = DispatcherService::reminder_window(now);
        assert_eq!(from, now);
        assert_eq!(until - from, Duration::minutes(60));
    }

    #[test]
    fn test_summary_serializes_counts() {
        let summary = DispatchSummary {
            total: 3,
            sent: 2,
            failed: 1,
            deleted: 4,
            errors: vec!["Failed to send to a@example.com: timeout".to_string()],
        };

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["total"], 3);
        assert_eq!(json["sent"], 2);
        assert_eq!(json["failed"], 1);
        assert_eq!(json["deleted"], 4);
        assert_eq!(json["errors"].as_array().unwrap().len(), 1);
    }
}
