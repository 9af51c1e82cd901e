//! Authentication service
//!
//! Registration with email OTP verification, login, and JWT handling.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    config::Config,
    constants::OTP_TTL_MINUTES,
    db::repositories::{TokenRepository, UserRepository},
    error::{AppError, AppResult},
    mail::Mailer,
    models::User,
    utils::crypto::generate_otp,
};

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // user_id
    pub name: String,
    pub email: String,
    pub exp: i64,
    pub iat: i64,
}

/// Authentication service
pub struct AuthService;

impl AuthService {
    /// Register a new user and send a verification code.
    ///
    /// An unverified account with the same email is replaced; a verified one
    /// is a conflict.
    pub async fn register(
        pool: &PgPool,
        mailer: &Mailer,
        name: &str,
        email: &str,
        password: &str,
    ) -> AppResult<User> {
        if let Some(existing) = UserRepository::find_by_email(pool, email).await? {
            if existing.is_verified() {
                return Err(AppError::AlreadyExists(
                    "User with this email already exists".to_string(),
                ));
            }
            // Allow re-registration of an account that never finished verification
            UserRepository::delete_by_email(pool, email).await?;
        }

        TokenRepository::delete_for_identifier(pool, email).await?;

        let password_hash = Self::hash_password(password)?;
        let user = UserRepository::create(pool, name, email, &password_hash).await?;

        Self::issue_otp(pool, mailer, email).await?;

        Ok(user)
    }

    /// Issue a fresh verification code for an unverified account
    pub async fn resend_otp(pool: &PgPool, mailer: &Mailer, email: &str) -> AppResult<()> {
        let user = UserRepository::find_by_email(pool, email)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        if user.is_verified() {
            return Err(AppError::InvalidInput(
                "Email is already verified".to_string(),
            ));
        }

        TokenRepository::delete_for_identifier(pool, email).await?;
        Self::issue_otp(pool, mailer, email).await?;

        Ok(())
    }

    /// Consume a verification code and mark the account verified
    pub async fn verify_email(pool: &PgPool, email: &str, otp: &str) -> AppResult<()> {
        let token = TokenRepository::find(pool, email, otp)
            .await?
            .ok_or_else(|| AppError::InvalidInput("Invalid verification code".to_string()))?;

        let now = Utc::now();
        if token.is_expired(now) {
            TokenRepository::delete(pool, email, otp).await?;
            return Err(AppError::InvalidInput(
                "Verification code has expired".to_string(),
            ));
        }

        UserRepository::set_email_verified(pool, email, now).await?;
        TokenRepository::delete(pool, email, otp).await?;

        Ok(())
    }

    /// Login with email and password
    pub async fn login(
        pool: &PgPool,
        config: &Config,
        email: &str,
        password: &str,
    ) -> AppResult<(User, String, i64)> {
        let user = UserRepository::find_by_email(pool, email)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        if !Self::verify_password(password, &user.password_hash)? {
            return Err(AppError::InvalidCredentials);
        }

        if !user.is_verified() {
            return Err(AppError::EmailNotVerified);
        }

        let (access_token, expires_in) = Self::generate_access_token(&user, config)?;

        Ok((user, access_token, expires_in))
    }

    /// Get user by ID
    pub async fn get_user_by_id(pool: &PgPool, user_id: &Uuid) -> AppResult<Option<User>> {
        UserRepository::find_by_id(pool, user_id).await
    }

    /// Verify JWT token and extract claims
    pub fn verify_token(token: &str, secret: &str) -> AppResult<Claims> {
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::default(),
        )?;

        Ok(token_data.claims)
    }

    async fn issue_otp(pool: &PgPool, mailer: &Mailer, email: &str) -> AppResult<()> {
        let otp = generate_otp();
        let expires = Utc::now() + Duration::minutes(OTP_TTL_MINUTES);

        TokenRepository::create(pool, email, &otp, expires).await?;
        mailer.send_verification(email, &otp).await?;

        Ok(())
    }

    /// Hash password using Argon2
    fn hash_password(password: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();

        let hash = argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Password hashing failed: {}", e)))?
            .to_string();

        Ok(hash)
    }

    /// Verify password against hash
    fn verify_password(password: &str, hash: &str) -> AppResult<bool> {
        let parsed_hash = PasswordHash::new(hash)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Invalid password hash: {}", e)))?;

        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }

    /// Generate access token
    fn generate_access_token(user: &User, config: &Config) -> AppResult<(String, i64)> {
        let now = Utc::now();
        let expires_at = now + Duration::hours(config.jwt.expiry_hours);
        let expires_in = config.jwt.expiry_hours * 3600;

        let claims = Claims {
            sub: user.id.to_string(),
            name: user.name.clone(),
            email: user.email.clone(),
            exp: expires_at.timestamp(),
            iat: now.timestamp(),
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config.jwt.secret.as_bytes()),
        )
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Token generation failed: {}", e)))?;

        Ok((token, expires_in))
    }
}
