//! Cron handlers

mod handler;

pub use handler::*;

use axum::{Router, routing::get};

use crate::state::AppState;

/// Cron routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/send-notifications", get(handler::send_notifications))
}
