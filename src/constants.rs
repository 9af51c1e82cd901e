//! Application-wide constants

/// Default server host
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

/// Default maximum database connections
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 10;

/// Default JWT expiry in hours
pub const DEFAULT_JWT_EXPIRY_HOURS: i64 = 24;

/// Default timeout for upstream feed requests, in seconds
pub const DEFAULT_FEED_TIMEOUT_SECONDS: u64 = 10;

/// How far ahead of a contest start the reminder dispatcher looks, in minutes
pub const REMINDER_LOOKAHEAD_MINUTES: i64 = 60;

/// Fallback contest duration when the upstream value is missing or non-positive
pub const DEFAULT_CONTEST_DURATION_MINUTES: i64 = 120;

/// Contest category label when the upstream feed does not supply one
pub const DEFAULT_CONTEST_TYPE: &str = "General";

/// Number of digits in an email verification code
pub const OTP_LENGTH: usize = 6;

/// Email verification code lifetime, in minutes
pub const OTP_TTL_MINUTES: i64 = 10;

/// Maximum length of a user's display name
pub const MAX_NAME_LENGTH: u64 = 64;

/// Minimum password length
pub const MIN_PASSWORD_LENGTH: u64 = 8;

/// Upstream feed endpoints, one per platform
pub mod feeds {
    pub const CODEFORCES: &str = "https://kontests.net/api/v1/codeforces";
    pub const CODECHEF: &str = "https://kontests.net/api/v1/code_chef";
    pub const LEETCODE: &str = "https://kontests.net/api/v1/leet_code";
    pub const HACKERRANK: &str = "https://kontests.net/api/v1/hacker_rank";
    pub const HACKEREARTH: &str = "https://kontests.net/api/v1/hacker_earth";
    pub const ATCODER: &str = "https://kontests.net/api/v1/at_coder";
}
