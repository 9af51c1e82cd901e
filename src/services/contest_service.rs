//! Contest aggregation service

use crate::{
    error::AppResult,
    feeds::{self, FeedAdapter},
    models::contest::{Contest, Platform},
    models::filter::ContestFilter,
};

/// Service for fetching and merging upstream contest feeds
pub struct ContestService;

impl ContestService {
    /// Fetch upcoming contests for a single platform.
    ///
    /// Upstream failures propagate so the caller can distinguish a dead feed
    /// from an empty one.
    pub async fn fetch_platform(
        http: &reqwest::Client,
        platform: Platform,
    ) -> AppResult<Vec<Contest>> {
        feeds::adapter_for(platform).fetch_upcoming(http).await
    }

    /// Fetch all platforms concurrently, merge, sort by start time, and apply
    /// the given filter. Failed feeds contribute nothing.
    pub async fn aggregate(http: &reqwest::Client, filter: &ContestFilter) -> Vec<Contest> {
        let adapters = feeds::default_adapters();
        let merged = feeds::aggregate(http, &adapters).await;
        filter.apply(merged)
    }
}
