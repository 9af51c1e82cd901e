//! Time utilities

use chrono::{DateTime, Utc};

/// Parse a datetime string in ISO 8601 format
pub fn parse_datetime(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
}

/// Format a contest start for the reminder email, e.g.
/// "Saturday, June 1, 2024 at 12:00 UTC"
pub fn format_contest_start(dt: DateTime<Utc>) -> String {
    dt.format("%A, %B %-d, %Y at %H:%M UTC").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_datetime() {
        let dt = parse_datetime("2024-01-15T12:00:00Z");
        assert!(dt.is_some());

        let invalid = parse_datetime("not a date");
        assert!(invalid.is_none());
    }

    #[test]
    fn test_format_contest_start() {
        let dt = parse_datetime("2024-06-01T12:00:00Z").unwrap();
        assert_eq!(format_contest_start(dt), "Saturday, June 1, 2024 at 12:00 UTC");
    }
}
