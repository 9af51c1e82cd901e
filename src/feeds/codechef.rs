//! CodeChef feed adapter

use async_trait::async_trait;
use chrono::Utc;

use crate::constants::feeds;
use crate::error::AppResult;
use crate::models::contest::{Contest, Platform};

use super::FeedAdapter;
use super::wire::{self, DurationUnit};

/// CodeChef contest feed
pub struct CodechefAdapter;

#[async_trait]
impl FeedAdapter for CodechefAdapter {
    fn platform(&self) -> Platform {
        Platform::Codechef
    }

    async fn fetch_upcoming(&self, http: &reqwest::Client) -> AppResult<Vec<Contest>> {
        let entries = wire::fetch_feed(http, self.platform(), feeds::CODECHEF).await?;
        let now = Utc::now();
        Ok(entries
            .into_iter()
            .filter(|e| e.has_upcoming_status())
            .filter_map(|e| wire::normalize(e, Platform::Codechef, DurationUnit::Seconds, now))
            .collect())
    }
}
