//! Contest request DTOs

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::{
    error::{AppError, AppResult},
    models::contest::Platform,
    models::filter::ContestFilter,
};

/// Query parameters for the aggregate endpoint
#[derive(Debug, Default, Deserialize)]
pub struct AggregateQuery {
    /// Comma-separated platform ids; absent or empty = all platforms
    pub platforms: Option<String>,
    /// Case-insensitive substring match on contest name
    pub q: Option<String>,
    /// Inclusive lower bound on start time (RFC 3339)
    pub from: Option<DateTime<Utc>>,
    /// Inclusive upper bound on start time (RFC 3339)
    pub to: Option<DateTime<Utc>>,
}

impl AggregateQuery {
    /// Build the filter, rejecting unknown platform ids
    pub fn into_filter(self) -> AppResult<ContestFilter> {
        let mut platforms = HashSet::new();
        if let Some(raw) = &self.platforms {
            for id in raw.split(',').map(str::trim).filter(|s| !s.is_empty()) {
                let platform = id
                    .parse::<Platform>()
                    .map_err(|_| AppError::InvalidInput(format!("Unknown platform: {id}")))?;
                platforms.insert(platform);
            }
        }

        Ok(ContestFilter {
            platforms,
            search_query: self.q,
            start_after: self.from,
            start_before: self.to,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_means_no_restriction() {
        let filter = AggregateQuery::default().into_filter().unwrap();
        assert!(filter.platforms.is_empty());
        assert!(filter.search_query.is_none());
    }

    #[test]
    fn test_platform_list_parsing() {
        let query = AggregateQuery {
            platforms: Some("codeforces, leetcode".to_string()),
            ..Default::default()
        };
        let filter = query.into_filter().unwrap();
        assert_eq!(filter.platforms.len(), 2);
        assert!(filter.platforms.contains(&Platform::Codeforces));
        assert!(filter.platforms.contains(&Platform::Leetcode));
    }

    #[test]
    fn test_unknown_platform_rejected() {
        let query = AggregateQuery {
            platforms: Some("topcoder".to_string()),
            ..Default::default()
        };
        assert!(query.into_filter().is_err());
    }
}
