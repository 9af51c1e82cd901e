//! Authentication handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Authentication routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(handler::register))
        .route("/verify-email", post(handler::verify_email))
        .route("/resend-otp", post(handler::resend_otp))
        .route("/login", post(handler::login))
        .route("/me", get(handler::get_current_user))
}
