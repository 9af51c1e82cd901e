//! User repository

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::{error::AppResult, models::User};

/// Repository for user database operations
pub struct UserRepository;

impl UserRepository {
    /// Create a new (unverified) user
    pub async fn create(
        pool: &PgPool,
        name: &str,
        email: &str,
        password_hash: &str,
    ) -> AppResult<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, email, password_hash)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(name)
        .bind(email)
        .bind(password_hash)
        .fetch_one(pool)
        .await?;

        Ok(user)
    }

    /// Find user by ID
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(r#"SELECT * FROM users WHERE id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(user)
    }

    /// Find user by email
    pub async fn find_by_email(pool: &PgPool, email: &str) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(r#"SELECT * FROM users WHERE email = $1"#)
            .bind(email)
            .fetch_optional(pool)
            .await?;

        Ok(user)
    }

    /// Delete a user by email
    pub async fn delete_by_email(pool: &PgPool, email: &str) -> AppResult<()> {
        sqlx::query(r#"DELETE FROM users WHERE email = $1"#)
            .bind(email)
            .execute(pool)
            .await?;

        Ok(())
    }

    /// Mark a user's email as verified
    pub async fn set_email_verified(
        pool: &PgPool,
        email: &str,
        verified_at: DateTime<Utc>,
    ) -> AppResult<()> {
        sqlx::query(
            r#"UPDATE users SET email_verified = $2, updated_at = NOW() WHERE email = $1"#,
        )
        .bind(email)
        .bind(verified_at)
        .execute(pool)
        .await?;

        Ok(())
    }
}
