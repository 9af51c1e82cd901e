//! Cron handler implementations

use axum::{Json, extract::State, http::HeaderMap};
use chrono::Utc;
use serde::Serialize;

use crate::{
    error::{AppError, AppResult},
    services::{DispatchSummary, DispatcherService},
    state::AppState,
};

/// Dispatcher run response
#[derive(Debug, Serialize)]
pub struct CronRunResponse {
    pub success: bool,
    pub message: String,
    pub results: DispatchSummary,
    pub timestamp: String,
}

/// Run the reminder dispatcher.
///
/// Only the external scheduler knows the shared secret; any mismatch is
/// rejected before any work happens.
pub async fn send_notifications(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> AppResult<Json<CronRunResponse>> {
    let expected = format!("Bearer {}", state.config().cron.secret);
    let presented = headers
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    if presented != Some(expected.as_str()) {
        return Err(AppError::Unauthorized);
    }

    let summary = DispatcherService::run(state.db(), state.mailer()).await?;

    Ok(Json(CronRunResponse {
        success: true,
        message: format!("Processed {} notifications", summary.total),
        results: summary,
        timestamp: Utc::now().to_rfc3339(),
    }))
}
