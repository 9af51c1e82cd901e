//! Upstream contest feeds
//!
//! One adapter per platform, each fetching a fixed remote feed and
//! normalizing it into Contests in BEFORE phase, plus the aggregator that
//! fans out to every adapter concurrently and merges the results.

pub mod atcoder;
pub mod codechef;
pub mod codeforces;
pub mod hackerearth;
pub mod hackerrank;
pub mod leetcode;
pub mod wire;

use async_trait::async_trait;
use futures::future::join_all;

use crate::error::AppResult;
use crate::models::contest::{Contest, Platform};

pub use atcoder::AtcoderAdapter;
pub use codechef::CodechefAdapter;
pub use codeforces::CodeforcesAdapter;
pub use hackerearth::HackerearthAdapter;
pub use hackerrank::HackerrankAdapter;
pub use leetcode::LeetcodeAdapter;

/// Per-platform contest-feed fetch-and-normalize unit
#[async_trait]
pub trait FeedAdapter: Send + Sync {
    /// The platform this adapter serves
    fn platform(&self) -> Platform;

    /// Fetch the remote feed and return upcoming contests only.
    ///
    /// A fetch or parse failure is an error for this platform alone; it must
    /// never be conflated with an empty feed.
    async fn fetch_upcoming(&self, http: &reqwest::Client) -> AppResult<Vec<Contest>>;
}

/// All production adapters, in aggregation order
pub fn default_adapters() -> Vec<Box<dyn FeedAdapter>> {
    vec![
        Box::new(CodeforcesAdapter),
        Box::new(CodechefAdapter),
        Box::new(LeetcodeAdapter),
        Box::new(AtcoderAdapter),
        Box::new(HackerrankAdapter),
        Box::new(HackerearthAdapter),
    ]
}

/// The adapter for a single platform
pub fn adapter_for(platform: Platform) -> Box<dyn FeedAdapter> {
    match platform {
        Platform::Codeforces => Box::new(CodeforcesAdapter),
        Platform::Codechef => Box::new(CodechefAdapter),
        Platform::Leetcode => Box::new(LeetcodeAdapter),
        Platform::Atcoder => Box::new(AtcoderAdapter),
        Platform::Hackerrank => Box::new(HackerrankAdapter),
        Platform::Hackerearth => Box::new(HackerearthAdapter),
    }
}

/// Fan out to every adapter concurrently and merge the results.
///
/// A failing adapter contributes zero contests instead of failing the whole
/// aggregation; the merged list is stable-sorted by start time ascending.
pub async fn aggregate(
    http: &reqwest::Client,
    adapters: &[Box<dyn FeedAdapter>],
) -> Vec<Contest> {
    let results = join_all(adapters.iter().map(|a| a.fetch_upcoming(http))).await;

    let mut contests = Vec::new();
    for (adapter, result) in adapters.iter().zip(results) {
        match result {
            Ok(mut list) => {
                tracing::debug!(
                    platform = %adapter.platform(),
                    count = list.len(),
                    "feed fetched"
                );
                contests.append(&mut list);
            }
            Err(e) => {
                tracing::warn!(
                    platform = %adapter.platform(),
                    error = %e,
                    "feed fetch failed, skipping platform"
                );
            }
        }
    }

    contests.sort_by_key(|c| c.start_time);
    contests
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Duration, Utc};

    use super::*;
    use crate::error::AppError;
    use crate::models::contest::Phase;

    struct StubAdapter {
        platform: Platform,
        contests: Vec<Contest>,
        fail: bool,
    }

    #[async_trait]
    impl FeedAdapter for StubAdapter {
        fn platform(&self) -> Platform {
            self.platform
        }

        async fn fetch_upcoming(&self, _http: &reqwest::Client) -> AppResult<Vec<Contest>> {
            if self.fail {
                Err(AppError::Upstream(format!("{}: upstream returned 503", self.platform)))
            } else {
                Ok(self.contests.clone())
            }
        }
    }

    fn contest(name: &str, platform: Platform, start: DateTime<Utc>) -> Contest {
        Contest {
            id: Contest::canonical_id(platform, name, start),
            name: name.to_string(),
            platform,
            start_time: start,
            end_time: start + Duration::minutes(120),
            duration: 120,
            url: format!("https://{platform}.example/c"),
            phase: Phase::Before,
            contest_type: "General".to_string(),
        }
    }

    fn ok(platform: Platform, contests: Vec<Contest>) -> Box<dyn FeedAdapter> {
        Box::new(StubAdapter { platform, contests, fail: false })
    }

    fn failing(platform: Platform) -> Box<dyn FeedAdapter> {
        Box::new(StubAdapter { platform, contests: vec![], fail: true })
    }

    #[tokio::test]
    async fn test_aggregate_sorts_by_start_time() {
        let base = Utc::now();
        let adapters = vec![
            ok(Platform::Codeforces, vec![
                contest("CF Late", Platform::Codeforces, base + Duration::hours(5)),
                contest("CF Early", Platform::Codeforces, base + Duration::hours(1)),
            ]),
            ok(Platform::Leetcode, vec![
                contest("LC Mid", Platform::Leetcode, base + Duration::hours(3)),
            ]),
        ];

        let merged = aggregate(&reqwest::Client::new(), &adapters).await;
        let names: Vec<&str> = merged.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["CF Early", "LC Mid", "CF Late"]);
    }

    #[tokio::test]
    async fn test_aggregate_sort_is_stable_for_ties() {
        let base = Utc::now() + Duration::hours(1);
        let adapters = vec![
            ok(Platform::Codeforces, vec![contest("First", Platform::Codeforces, base)]),
            ok(Platform::Leetcode, vec![contest("Second", Platform::Leetcode, base)]),
        ];

        let merged = aggregate(&reqwest::Client::new(), &adapters).await;
        let names: Vec<&str> = merged.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["First", "Second"]);
    }

    #[tokio::test]
    async fn test_aggregate_tolerates_single_adapter_failure() {
        let base = Utc::now();
        let survivors = vec![
            contest("LC A", Platform::Leetcode, base + Duration::hours(1)),
            contest("LC B", Platform::Leetcode, base + Duration::hours(2)),
        ];

        let with_failure = vec![
            failing(Platform::Codeforces),
            ok(Platform::Leetcode, survivors.clone()),
        ];
        let without_failure = vec![
            ok(Platform::Codeforces, vec![]),
            ok(Platform::Leetcode, survivors),
        ];

        let client = reqwest::Client::new();
        let a = aggregate(&client, &with_failure).await;
        let b = aggregate(&client, &without_failure).await;

        assert_eq!(a.len(), 2);
        let ids_a: Vec<&str> = a.iter().map(|c| c.id.as_str()).collect();
        let ids_b: Vec<&str> = b.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids_a, ids_b);
    }

    #[tokio::test]
    async fn test_aggregate_all_failed_is_empty() {
        let adapters = vec![failing(Platform::Codeforces), failing(Platform::Leetcode)];
        let merged = aggregate(&reqwest::Client::new(), &adapters).await;
        assert!(merged.is_empty());
    }
}
