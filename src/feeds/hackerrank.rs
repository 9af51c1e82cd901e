//! HackerRank feed adapter
//!
//! The HackerRank feed carries no status field, so "upcoming" is decided by
//! timestamp alone: start time strictly after the fetch time.

use async_trait::async_trait;
use chrono::Utc;

use crate::constants::feeds;
use crate::error::AppResult;
use crate::models::contest::{Contest, Platform};

use super::FeedAdapter;
use super::wire::{self, DurationUnit};

/// HackerRank contest feed
pub struct HackerrankAdapter;

#[async_trait]
impl FeedAdapter for HackerrankAdapter {
    fn platform(&self) -> Platform {
        Platform::Hackerrank
    }

    async fn fetch_upcoming(&self, http: &reqwest::Client) -> AppResult<Vec<Contest>> {
        let entries = wire::fetch_feed(http, self.platform(), feeds::HACKERRANK).await?;
        let now = Utc::now();
        // normalize drops entries with start_time <= now
        Ok(entries
            .into_iter()
            .filter_map(|e| wire::normalize(e, Platform::Hackerrank, DurationUnit::Seconds, now))
            .collect())
    }
}
