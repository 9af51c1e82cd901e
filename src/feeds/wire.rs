//! Upstream feed wire format and normalization
//!
//! All six platform feeds share a kontests-style JSON shape: a flat array of
//! entries with string timestamps, an optional duration, and (for most
//! platforms) a literal status field.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Deserialize;

use crate::constants::DEFAULT_CONTEST_TYPE;
use crate::error::{AppError, AppResult};
use crate::models::contest::{Contest, Phase, Platform};

/// Status sentinel marking a not-yet-started contest
pub const STATUS_UPCOMING: &str = "BEFORE";

/// Unit of the upstream `duration` field, declared per adapter rather than
/// guessed from the value's magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DurationUnit {
    Seconds,
    Minutes,
}

/// One entry of an upstream contest feed
#[derive(Debug, Clone, Deserialize)]
pub struct FeedEntry {
    pub name: String,
    pub url: String,
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl FeedEntry {
    /// Whether the feed's own status field marks this entry as upcoming
    pub fn has_upcoming_status(&self) -> bool {
        self.status.as_deref() == Some(STATUS_UPCOMING)
    }
}

/// Fetch and deserialize a feed, with caching disabled.
///
/// A non-2xx response or a malformed body is an error, distinguishable from
/// a feed that legitimately contains zero contests.
pub async fn fetch_feed(
    http: &reqwest::Client,
    platform: Platform,
    url: &str,
) -> AppResult<Vec<FeedEntry>> {
    let response = http
        .get(url)
        .header(reqwest::header::CACHE_CONTROL, "no-cache")
        .send()
        .await
        .map_err(|e| AppError::Upstream(format!("{platform}: {e}")))?;

    let status = response.status();
    if !status.is_success() {
        return Err(AppError::Upstream(format!(
            "{platform}: upstream returned {status}"
        )));
    }

    response
        .json::<Vec<FeedEntry>>()
        .await
        .map_err(|e| AppError::Upstream(format!("{platform}: malformed feed body: {e}")))
}

/// Parse a feed timestamp. Feeds emit either RFC 3339 or the older
/// `YYYY-MM-DD HH:MM:SS UTC` form.
pub fn parse_feed_time(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S UTC")
        .ok()
        .map(|naive| naive.and_utc())
}

/// Normalize one feed entry into a Contest in BEFORE phase.
///
/// Returns None for entries that are unparseable or whose start time is not
/// strictly in the future: adapters never emit started contests regardless
/// of what the upstream status field claims.
pub fn normalize(
    entry: FeedEntry,
    platform: Platform,
    unit: DurationUnit,
    now: DateTime<Utc>,
) -> Option<Contest> {
    let start_time = parse_feed_time(&entry.start_time)?;
    if start_time <= now {
        return None;
    }

    let parsed_end = parse_feed_time(&entry.end_time);

    let duration = entry
        .duration
        .as_deref()
        .and_then(|d| d.trim().parse::<f64>().ok())
        .map(|value| match unit {
            DurationUnit::Seconds => (value / 60.0) as i64,
            DurationUnit::Minutes => value as i64,
        })
        .filter(|minutes| *minutes > 0)
        .unwrap_or_else(|| {
            let end = parsed_end.unwrap_or(start_time);
            Contest::derive_duration_minutes(start_time, end)
        });

    // Keep endTime >= startTime even when the upstream bounds are inverted
    let end_time = match parsed_end {
        Some(end) if end >= start_time => end,
        _ => start_time + chrono::Duration::minutes(duration),
    };

    Some(Contest {
        id: Contest::canonical_id(platform, &entry.name, start_time),
        name: entry.name,
        platform,
        start_time,
        end_time,
        duration,
        url: entry.url,
        phase: Phase::Before,
        contest_type: DEFAULT_CONTEST_TYPE.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    fn entry(start: DateTime<Utc>, end: DateTime<Utc>, duration: Option<&str>) -> FeedEntry {
        FeedEntry {
            name: "Test Round".to_string(),
            url: "https://example.com/contest/1".to_string(),
            start_time: start.to_rfc3339(),
            end_time: end.to_rfc3339(),
            duration: duration.map(|d| d.to_string()),
            status: Some(STATUS_UPCOMING.to_string()),
        }
    }

    #[test]
    fn test_normalize_converts_seconds_to_minutes() {
        let now = Utc::now();
        let start = now + Duration::hours(2);
        let e = entry(start, start + Duration::hours(2), Some("7200.0"));

        let contest = normalize(e, Platform::Codeforces, DurationUnit::Seconds, now).unwrap();
        assert_eq!(contest.duration, 120);
        assert_eq!(contest.phase, Phase::Before);
    }

    #[test]
    fn test_normalize_derives_duration_when_missing() {
        let now = Utc::now();
        let start = now + Duration::hours(1);
        let e = entry(start, start + Duration::minutes(90), None);

        let contest = normalize(e, Platform::Leetcode, DurationUnit::Seconds, now).unwrap();
        assert_eq!(contest.duration, 90);
    }

    #[test]
    fn test_normalize_duration_floor_on_inverted_bounds() {
        let now = Utc::now();
        let start = now + Duration::hours(1);
        let e = entry(start, start - Duration::hours(1), None);

        let contest = normalize(e, Platform::Codechef, DurationUnit::Seconds, now).unwrap();
        assert_eq!(contest.duration, 120);
        assert!(contest.end_time >= contest.start_time);
    }

    #[test]
    fn test_normalize_drops_started_contests() {
        let now = Utc::now();
        let start = now - Duration::minutes(1);
        let e = entry(start, start + Duration::hours(2), Some("7200"));

        assert!(normalize(e, Platform::Hackerrank, DurationUnit::Seconds, now).is_none());

        let at_now = FeedEntry {
            start_time: now.to_rfc3339(),
            ..entry(now, now + Duration::hours(2), Some("7200"))
        };
        assert!(normalize(at_now, Platform::Hackerrank, DurationUnit::Seconds, now).is_none());
    }

    #[test]
    fn test_parse_feed_time_formats() {
        assert!(parse_feed_time("2024-06-01T12:00:00.000Z").is_some());
        assert!(parse_feed_time("2024-06-01 12:00:00 UTC").is_some());
        assert!(parse_feed_time("next tuesday").is_none());
    }

    #[test]
    fn test_upcoming_status() {
        let now = Utc::now();
        let mut e = entry(now + Duration::hours(1), now + Duration::hours(2), None);
        assert!(e.has_upcoming_status());

        e.status = Some("CODING".to_string());
        assert!(!e.has_upcoming_status());

        e.status = None;
        assert!(!e.has_upcoming_status());
    }
}
