//! LeetCode feed adapter

use async_trait::async_trait;
use chrono::Utc;

use crate::constants::feeds;
use crate::error::AppResult;
use crate::models::contest::{Contest, Platform};

use super::FeedAdapter;
use super::wire::{self, DurationUnit};

/// LeetCode contest feed
pub struct LeetcodeAdapter;

#[async_trait]
impl FeedAdapter for LeetcodeAdapter {
    fn platform(&self) -> Platform {
        Platform::Leetcode
    }

    async fn fetch_upcoming(&self, http: &reqwest::Client) -> AppResult<Vec<Contest>> {
        let entries = wire::fetch_feed(http, self.platform(), feeds::LEETCODE).await?;
        let now = Utc::now();
        Ok(entries
            .into_iter()
            .filter(|e| e.has_upcoming_status())
            .filter_map(|e| wire::normalize(e, Platform::Leetcode, DurationUnit::Seconds, now))
            .collect())
    }
}
