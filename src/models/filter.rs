//! Contest list filtering
//!
//! Pure predicate composition over an aggregated contest list. All active
//! dimensions are ANDed together; an empty platform set means "no platform
//! restriction".

use std::collections::HashSet;

use chrono::{DateTime, Utc};

use super::contest::{Contest, Platform};

/// Filter criteria for a contest list
#[derive(Debug, Clone, Default)]
pub struct ContestFilter {
    /// Platforms to keep; empty = all platforms
    pub platforms: HashSet<Platform>,
    /// Case-insensitive substring match against the contest name
    pub search_query: Option<String>,
    /// Inclusive lower bound on start time
    pub start_after: Option<DateTime<Utc>>,
    /// Inclusive upper bound on start time
    pub start_before: Option<DateTime<Utc>>,
}

impl ContestFilter {
    /// Whether a single contest satisfies every active predicate
    pub fn matches(&self, contest: &Contest) -> bool {
        if !self.platforms.is_empty() && !self.platforms.contains(&contest.platform) {
            return false;
        }

        if let Some(query) = &self.search_query {
            if !query.is_empty()
                && !contest.name.to_lowercase().contains(&query.to_lowercase())
            {
                return false;
            }
        }

        if let Some(start) = self.start_after {
            if contest.start_time < start {
                return false;
            }
        }

        if let Some(end) = self.start_before {
            if contest.start_time > end {
                return false;
            }
        }

        true
    }

    /// Apply the filter to a contest list, preserving input order
    pub fn apply(&self, contests: Vec<Contest>) -> Vec<Contest> {
        contests.into_iter().filter(|c| self.matches(c)).collect()
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;
    use crate::models::contest::Phase;

    fn contest(name: &str, platform: Platform, start_offset_hours: i64) -> Contest {
        let start = Utc::now() + Duration::hours(start_offset_hours);
        Contest {
            id: Contest::canonical_id(platform, name, start),
            name: name.to_string(),
            platform,
            start_time: start,
            end_time: start + Duration::minutes(120),
            duration: 120,
            url: format!("https://{}.example/contest", platform),
            phase: Phase::Before,
            contest_type: "General".to_string(),
        }
    }

    fn sample() -> Vec<Contest> {
        vec![
            contest("Weekly Contest 378", Platform::Leetcode, 2),
            contest("Round 912 (Div. 2)", Platform::Codeforces, 4),
            contest("January Cook-Off", Platform::Codechef, 6),
        ]
    }

    #[test]
    fn test_empty_filter_keeps_everything() {
        let filter = ContestFilter::default();
        assert_eq!(filter.apply(sample()).len(), 3);
    }

    #[test]
    fn test_platform_restriction() {
        let filter = ContestFilter {
            platforms: [Platform::Codeforces].into_iter().collect(),
            ..Default::default()
        };
        let result = filter.apply(sample());
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].platform, Platform::Codeforces);
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let filter = ContestFilter {
            search_query: Some("wEEkly".to_string()),
            ..Default::default()
        };
        let result = filter.apply(sample());
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Weekly Contest 378");
    }

    #[test]
    fn test_dimensions_compose_with_and() {
        let filter = ContestFilter {
            platforms: [Platform::Leetcode, Platform::Codeforces].into_iter().collect(),
            search_query: Some("round".to_string()),
            ..Default::default()
        };
        let result = filter.apply(sample());
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].platform, Platform::Codeforces);
    }

    #[test]
    fn test_date_range_bounds_are_inclusive() {
        let contests = sample();
        let second_start = contests[1].start_time;

        let filter = ContestFilter {
            start_after: Some(second_start),
            start_before: Some(second_start),
            ..Default::default()
        };
        let result = filter.apply(contests);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Round 912 (Div. 2)");
    }
}
