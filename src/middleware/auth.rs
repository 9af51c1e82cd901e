//! Authentication middleware

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::{error::AppError, services::AuthService, state::AppState};

/// Authenticated user extracted from a bearer JWT
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts).ok_or_else(|| {
            debug!(path = %parts.uri.path(), "Auth failed: missing or malformed Authorization header");
            AppError::Unauthorized
        })?;

        let claims = AuthService::verify_token(token, &state.config().jwt.secret)?;

        let user_id = Uuid::parse_str(&claims.sub).map_err(|_| {
            debug!(sub = %claims.sub, "Auth failed: invalid user ID in token");
            AppError::InvalidToken
        })?;

        Ok(AuthenticatedUser {
            id: user_id,
            name: claims.name,
            email: claims.email,
        })
    }
}

/// Extract the bearer token from the Authorization header, if any
pub fn bearer_token(parts: &Parts) -> Option<&str> {
    parts
        .headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
}
