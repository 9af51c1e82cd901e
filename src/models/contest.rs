//! Contest model
//!
//! Contests are ephemeral: they are rebuilt from the upstream feeds on every
//! aggregation call and never persisted.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_CONTEST_DURATION_MINUTES;
use crate::utils::crypto::hash_string;

/// Supported contest platforms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Leetcode,
    Codeforces,
    Codechef,
    Hackerrank,
    Hackerearth,
    Atcoder,
}

impl Platform {
    /// All platforms, in aggregation order
    pub const ALL: [Platform; 6] = [
        Platform::Codeforces,
        Platform::Codechef,
        Platform::Leetcode,
        Platform::Atcoder,
        Platform::Hackerrank,
        Platform::Hackerearth,
    ];

    /// Stable lowercase identifier used in URLs and stored records
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Leetcode => "leetcode",
            Self::Codeforces => "codeforces",
            Self::Codechef => "codechef",
            Self::Hackerrank => "hackerrank",
            Self::Hackerearth => "hackerearth",
            Self::Atcoder => "atcoder",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "leetcode" => Ok(Self::Leetcode),
            "codeforces" => Ok(Self::Codeforces),
            "codechef" => Ok(Self::Codechef),
            "hackerrank" => Ok(Self::Hackerrank),
            "hackerearth" => Ok(Self::Hackerearth),
            "atcoder" => Ok(Self::Atcoder),
            _ => Err(()),
        }
    }
}

/// Contest lifecycle phase as reported by the upstream feed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Phase {
    Before,
    Coding,
    Finished,
}

/// A single upcoming contest
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contest {
    pub id: String,
    pub name: String,
    pub platform: Platform,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    /// Duration in minutes
    pub duration: i64,
    pub url: String,
    pub phase: Phase,
    #[serde(rename = "type")]
    pub contest_type: String,
}

impl Contest {
    /// Canonical contest id: hash of platform, normalized name, and start time.
    ///
    /// Every adapter mints ids this way, so the same contest produces the same
    /// id regardless of which feed it came from.
    pub fn canonical_id(platform: Platform, name: &str, start_time: DateTime<Utc>) -> String {
        let normalized = name.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase();
        let input = format!("{}|{}|{}", platform, normalized, start_time.to_rfc3339());
        hash_string(&input)[..16].to_string()
    }

    /// Derive a duration in minutes from the contest time bounds.
    ///
    /// Falls back to 120 minutes when the computed value is non-positive.
    pub fn derive_duration_minutes(start: DateTime<Utc>, end: DateTime<Utc>) -> i64 {
        let minutes = (end - start).num_minutes();
        if minutes > 0 {
            minutes
        } else {
            DEFAULT_CONTEST_DURATION_MINUTES
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn ts(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    #[test]
    fn test_platform_roundtrip() {
        for platform in Platform::ALL {
            assert_eq!(platform.as_str().parse::<Platform>(), Ok(platform));
        }
        assert!("topcoder".parse::<Platform>().is_err());
    }

    #[test]
    fn test_derive_duration_positive() {
        let start = ts("2024-06-01T12:00:00Z");
        let end = ts("2024-06-01T14:30:00Z");
        assert_eq!(Contest::derive_duration_minutes(start, end), 150);
    }

    #[test]
    fn test_derive_duration_floor() {
        let start = ts("2024-06-01T12:00:00Z");
        assert_eq!(Contest::derive_duration_minutes(start, start), 120);

        let earlier = ts("2024-06-01T10:00:00Z");
        assert_eq!(Contest::derive_duration_minutes(start, earlier), 120);
    }

    #[test]
    fn test_canonical_id_stable_across_whitespace_and_case() {
        let start = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let a = Contest::canonical_id(Platform::Codeforces, "Round  912 (Div. 2)", start);
        let b = Contest::canonical_id(Platform::Codeforces, "round 912 (div. 2)", start);
        assert_eq!(a, b);
        assert_eq!(a.len(), 16);
    }

    #[test]
    fn test_canonical_id_distinguishes_platform_and_start() {
        let start = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let a = Contest::canonical_id(Platform::Codeforces, "Weekly Contest", start);
        let b = Contest::canonical_id(Platform::Leetcode, "Weekly Contest", start);
        let c = Contest::canonical_id(
            Platform::Codeforces,
            "Weekly Contest",
            start + chrono::Duration::hours(1),
        );
        assert_ne!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_contest_serializes_camel_case() {
        let start = ts("2024-06-01T12:00:00Z");
        let contest = Contest {
            id: "abc".to_string(),
            name: "Weekly Contest 378".to_string(),
            platform: Platform::Leetcode,
            start_time: start,
            end_time: start + chrono::Duration::minutes(90),
            duration: 90,
            url: "https://leetcode.com/contest/weekly-contest-378/".to_string(),
            phase: Phase::Before,
            contest_type: "Weekly Contest".to_string(),
        };

        let json = serde_json::to_value(&contest).unwrap();
        assert_eq!(json["platform"], "leetcode");
        assert_eq!(json["phase"], "BEFORE");
        assert_eq!(json["type"], "Weekly Contest");
        assert!(json.get("startTime").is_some());
        assert!(json.get("start_time").is_none());
    }
}
