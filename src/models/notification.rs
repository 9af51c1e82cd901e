//! Contest notification subscription model

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A user's reminder subscription for one contest
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContestNotification {
    pub id: Uuid,
    pub user_id: Uuid,
    pub contest_id: String,
    pub contest_name: String,
    pub contest_platform: String,
    pub contest_url: String,
    pub contest_start_time: DateTime<Utc>,
    pub contest_end_time: DateTime<Utc>,
    pub notify_via_email: bool,
    pub notify_via_whatsapp: bool,
    pub email: Option<String>,
    pub whatsapp_number: Option<String>,
    pub email_sent: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ContestNotification {
    /// Whether this subscription should receive a reminder email for a
    /// dispatcher run at `now` with the given lookahead window.
    ///
    /// Both window bounds are inclusive: a contest starting exactly at `now`
    /// or exactly at the window end is still due.
    pub fn is_email_due(&self, now: DateTime<Utc>, lookahead: Duration) -> bool {
        self.notify_via_email
            && !self.email_sent
            && self.email.is_some()
            && self.contest_start_time >= now
            && self.contest_start_time <= now + lookahead
    }

    /// Whether the contest this subscription refers to has already ended
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.contest_end_time < now
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subscription(start_offset: Duration) -> ContestNotification {
        let now = Utc::now();
        ContestNotification {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            contest_id: "abc123".to_string(),
            contest_name: "Weekly Contest 378".to_string(),
            contest_platform: "leetcode".to_string(),
            contest_url: "https://leetcode.com/contest/weekly-contest-378/".to_string(),
            contest_start_time: now + start_offset,
            contest_end_time: now + start_offset + Duration::minutes(90),
            notify_via_email: true,
            notify_via_whatsapp: false,
            email: Some("user@example.com".to_string()),
            whatsapp_number: None,
            email_sent: false,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_due_window_selection() {
        let now = Utc::now();
        let lookahead = Duration::minutes(60);

        // Fixed offsets from the dispatcher-selection property: only contests
        // inside [now, now+60m] are due.
        let started = {
            let mut n = subscription(Duration::minutes(-1));
            n.contest_start_time = now - Duration::minutes(1);
            n
        };
        assert!(!started.is_email_due(now, lookahead));

        let mut soon = subscription(Duration::minutes(30));
        soon.contest_start_time = now + Duration::minutes(30);
        assert!(soon.is_email_due(now, lookahead));

        let mut boundary = subscription(Duration::minutes(60));
        boundary.contest_start_time = now + lookahead;
        assert!(boundary.is_email_due(now, lookahead));

        let mut beyond = subscription(Duration::minutes(61));
        beyond.contest_start_time = now + Duration::minutes(61);
        assert!(!beyond.is_email_due(now, lookahead));

        let mut far = subscription(Duration::minutes(120));
        far.contest_start_time = now + Duration::minutes(120);
        assert!(!far.is_email_due(now, lookahead));
    }

    #[test]
    fn test_sent_flag_blocks_reselection() {
        let now = Utc::now();
        let mut sub = subscription(Duration::minutes(30));
        assert!(sub.is_email_due(now, Duration::minutes(60)));

        sub.email_sent = true;
        assert!(!sub.is_email_due(now, Duration::minutes(60)));
    }

    #[test]
    fn test_missing_contact_is_not_due() {
        let now = Utc::now();
        let mut sub = subscription(Duration::minutes(30));
        sub.email = None;
        assert!(!sub.is_email_due(now, Duration::minutes(60)));
    }

    #[test]
    fn test_expiry() {
        let now = Utc::now();
        let mut sub = subscription(Duration::minutes(30));
        assert!(!sub.is_expired(now));

        sub.contest_end_time = now - Duration::minutes(1);
        assert!(sub.is_expired(now));
    }
}
