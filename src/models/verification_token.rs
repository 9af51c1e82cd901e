//! Email verification token model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A pending email verification code
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct VerificationToken {
    /// Email address the code was issued for
    pub identifier: String,
    /// The 6-digit OTP
    pub token: String,
    pub expires: DateTime<Utc>,
}

impl VerificationToken {
    /// Check if the code is past its expiry
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires < now
    }
}
