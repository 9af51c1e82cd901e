//! Contest response DTOs

use serde::Serialize;

use crate::models::contest::Contest;

/// Per-platform contest list response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformContestsResponse {
    pub upcoming_contests: Vec<Contest>,
}

/// Aggregated contest list response
#[derive(Debug, Serialize)]
pub struct AggregateResponse {
    pub contests: Vec<Contest>,
}
