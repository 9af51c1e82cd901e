//! HTTP middleware

pub mod auth;
pub mod logging;

pub use auth::AuthenticatedUser;
pub use logging::logging_middleware;
