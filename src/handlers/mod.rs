//! HTTP Request Handlers
//!
//! This module contains all HTTP request handlers organized by domain.

pub mod auth;
pub mod contests;
pub mod cron;
pub mod health;
pub mod notifications;

use axum::Router;

use crate::state::AppState;

/// Create all API routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .nest("/auth", auth::routes())
        .nest("/contests", contests::routes())
        .nest("/notifications", notifications::routes())
        .nest("/cron", cron::routes())
}
