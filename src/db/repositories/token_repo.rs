//! Verification token repository

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::{error::AppResult, models::VerificationToken};

/// Repository for email verification codes
pub struct TokenRepository;

impl TokenRepository {
    /// Store a new verification code for an email address
    pub async fn create(
        pool: &PgPool,
        identifier: &str,
        token: &str,
        expires: DateTime<Utc>,
    ) -> AppResult<VerificationToken> {
        let record = sqlx::query_as::<_, VerificationToken>(
            r#"
            INSERT INTO verification_tokens (identifier, token, expires)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(identifier)
        .bind(token)
        .bind(expires)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }

    /// Find a code for an email address
    pub async fn find(
        pool: &PgPool,
        identifier: &str,
        token: &str,
    ) -> AppResult<Option<VerificationToken>> {
        let record = sqlx::query_as::<_, VerificationToken>(
            r#"SELECT * FROM verification_tokens WHERE identifier = $1 AND token = $2"#,
        )
        .bind(identifier)
        .bind(token)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    /// Delete one code
    pub async fn delete(pool: &PgPool, identifier: &str, token: &str) -> AppResult<()> {
        sqlx::query(r#"DELETE FROM verification_tokens WHERE identifier = $1 AND token = $2"#)
            .bind(identifier)
            .bind(token)
            .execute(pool)
            .await?;

        Ok(())
    }

    /// Delete every pending code for an email address
    pub async fn delete_for_identifier(pool: &PgPool, identifier: &str) -> AppResult<()> {
        sqlx::query(r#"DELETE FROM verification_tokens WHERE identifier = $1"#)
            .bind(identifier)
            .execute(pool)
            .await?;

        Ok(())
    }
}
