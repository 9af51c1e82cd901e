//! Authentication handler implementations

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    middleware::auth::AuthenticatedUser,
    models::User,
    services::AuthService,
    state::AppState,
};

use super::{
    request::{LoginRequest, RegisterRequest, ResendOtpRequest, VerifyEmailRequest},
    response::{
        AuthResponse, CurrentUserResponse, MessageResponse, RegisterResponse, UserResponse,
    },
};

fn user_response(user: User) -> UserResponse {
    UserResponse {
        id: user.id,
        name: user.name,
        email: user.email,
        email_verified: user.email_verified,
        created_at: user.created_at,
    }
}

/// Register a new user and send a verification code
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<RegisterResponse>)> {
    payload.validate()?;

    let user = AuthService::register(
        state.db(),
        state.mailer(),
        &payload.name,
        &payload.email,
        &payload.password,
    )
    .await?;

    let response = RegisterResponse {
        message: "Verification code sent to your email".to_string(),
        requires_verification: true,
        user: user_response(user),
    };

    Ok((StatusCode::CREATED, Json(response)))
}

/// Consume a verification code and mark the account verified
pub async fn verify_email(
    State(state): State<AppState>,
    Json(payload): Json<VerifyEmailRequest>,
) -> AppResult<Json<MessageResponse>> {
    payload.validate()?;

    AuthService::verify_email(state.db(), &payload.email, &payload.otp).await?;

    Ok(Json(MessageResponse {
        message: "Email verified successfully".to_string(),
    }))
}

/// Re-issue a verification code for an unverified account
pub async fn resend_otp(
    State(state): State<AppState>,
    Json(payload): Json<ResendOtpRequest>,
) -> AppResult<Json<MessageResponse>> {
    payload.validate()?;

    AuthService::resend_otp(state.db(), state.mailer(), &payload.email).await?;

    Ok(Json(MessageResponse {
        message: "Verification code sent".to_string(),
    }))
}

/// Login with email and password
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    payload.validate()?;

    let (user, access_token, expires_in) = AuthService::login(
        state.db(),
        state.config(),
        &payload.email,
        &payload.password,
    )
    .await?;

    Ok(Json(AuthResponse {
        access_token,
        token_type: "Bearer".to_string(),
        expires_in,
        user: user_response(user),
    }))
}

/// Get current authenticated user
pub async fn get_current_user(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
) -> AppResult<Json<CurrentUserResponse>> {
    let user = AuthService::get_user_by_id(state.db(), &auth_user.id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    Ok(Json(CurrentUserResponse {
        user: user_response(user),
    }))
}
