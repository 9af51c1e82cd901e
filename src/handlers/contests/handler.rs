//! Contest handler implementations

use axum::{
    Json,
    extract::{Path, Query, State},
};

use crate::{
    error::{AppError, AppResult},
    models::contest::Platform,
    services::ContestService,
    state::AppState,
};

use super::{
    request::AggregateQuery,
    response::{AggregateResponse, PlatformContestsResponse},
};

/// List upcoming contests for one platform
pub async fn get_platform_contests(
    State(state): State<AppState>,
    Path(platform): Path<String>,
) -> AppResult<Json<PlatformContestsResponse>> {
    let platform = platform
        .parse::<Platform>()
        .map_err(|_| AppError::NotFound(format!("Unknown platform: {platform}")))?;

    let upcoming_contests = ContestService::fetch_platform(state.http(), platform).await?;

    Ok(Json(PlatformContestsResponse { upcoming_contests }))
}

/// List upcoming contests across all platforms, merged and sorted
pub async fn get_aggregate(
    State(state): State<AppState>,
    Query(query): Query<AggregateQuery>,
) -> AppResult<Json<AggregateResponse>> {
    let filter = query.into_filter()?;
    let contests = ContestService::aggregate(state.http(), &filter).await;

    Ok(Json(AggregateResponse { contests }))
}
