//! MySQL implementation of the TokenRepository trait.
//!
//! Persists refresh token digests in the `refresh_tokens` table. The
//! consume transition is a single conditional UPDATE, so concurrent
//! presenters of the same token resolve to exactly one winner in the
//! database rather than in application code.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use sg_core::domain::entities::token::{ConsumeOutcome, RefreshToken};
use sg_core::errors::{DomainError, StoreError};
use sg_core::repositories::TokenRepository;

/// MySQL implementation of TokenRepository
pub struct MySqlTokenRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlTokenRepository {
    /// Create a new MySQL token repository
    ///
    /// # Arguments
    /// * `pool` - MySQL connection pool from SQLx
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn store_error(context: &str, e: sqlx::Error) -> DomainError {
        StoreError::Unavailable {
            message: format!("{}: {}", context, e),
        }
        .into()
    }

    /// Convert a database row to a RefreshToken entity
    fn row_to_token(row: &sqlx::mysql::MySqlRow) -> Result<RefreshToken, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| Self::store_error("Failed to get id", e))?;
        let principal_id: String = row
            .try_get("principal_id")
            .map_err(|e| Self::store_error("Failed to get principal_id", e))?;

        Ok(RefreshToken {
            id: Uuid::parse_str(&id).map_err(|e| StoreError::Unavailable {
                message: format!("Invalid token UUID: {}", e),
            })?,
            principal_id: Uuid::parse_str(&principal_id).map_err(|e| StoreError::Unavailable {
                message: format!("Invalid principal UUID: {}", e),
            })?,
            token_hash: row
                .try_get("token_hash")
                .map_err(|e| Self::store_error("Failed to get token_hash", e))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| Self::store_error("Failed to get created_at", e))?,
            expires_at: row
                .try_get::<DateTime<Utc>, _>("expires_at")
                .map_err(|e| Self::store_error("Failed to get expires_at", e))?,
            consumed_at: row
                .try_get::<Option<DateTime<Utc>>, _>("consumed_at")
                .map_err(|e| Self::store_error("Failed to get consumed_at", e))?,
            is_revoked: row
                .try_get("is_revoked")
                .map_err(|e| Self::store_error("Failed to get is_revoked", e))?,
        })
    }
}

#[async_trait]
impl TokenRepository for MySqlTokenRepository {
    async fn save_refresh_token(&self, token: RefreshToken) -> Result<RefreshToken, DomainError> {
        let query = r#"
            INSERT INTO refresh_tokens (
                id, principal_id, token_hash, created_at, expires_at,
                consumed_at, is_revoked
            ) VALUES (?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(token.id.to_string())
            .bind(token.principal_id.to_string())
            .bind(&token.token_hash)
            .bind(token.created_at)
            .bind(token.expires_at)
            .bind(token.consumed_at)
            .bind(token.is_revoked)
            .execute(&self.pool)
            .await
            .map_err(|e| Self::store_error("Failed to save refresh token", e))?;

        Ok(token)
    }

    async fn find_refresh_token(
        &self,
        token_hash: &str,
    ) -> Result<Option<RefreshToken>, DomainError> {
        let query = r#"
            SELECT id, principal_id, token_hash, created_at, expires_at,
                   consumed_at, is_revoked
            FROM refresh_tokens
            WHERE token_hash = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(token_hash)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| Self::store_error("Failed to find refresh token", e))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_token(&row)?)),
            None => Ok(None),
        }
    }

    async fn consume_refresh_token(
        &self,
        token_hash: &str,
    ) -> Result<ConsumeOutcome, DomainError> {
        // Compare-and-set: only a live token matches the WHERE clause, so at
        // most one concurrent caller gets rows_affected == 1.
        let update = r#"
            UPDATE refresh_tokens
            SET consumed_at = ?
            WHERE token_hash = ? AND consumed_at IS NULL AND is_revoked = FALSE
        "#;

        let result = sqlx::query(update)
            .bind(Utc::now())
            .bind(token_hash)
            .execute(&self.pool)
            .await
            .map_err(|e| Self::store_error("Failed to consume refresh token", e))?;

        let token = self.find_refresh_token(token_hash).await?;

        match token {
            None => Ok(ConsumeOutcome::Missing),
            Some(token) if result.rows_affected() == 1 => Ok(ConsumeOutcome::Consumed(token)),
            Some(token) if token.is_consumed() => Ok(ConsumeOutcome::AlreadyConsumed(token)),
            Some(token) => Ok(ConsumeOutcome::Revoked(token)),
        }
    }

    async fn revoke_all_for_principal(&self, principal_id: Uuid) -> Result<usize, DomainError> {
        let query = r#"
            UPDATE refresh_tokens
            SET is_revoked = TRUE
            WHERE principal_id = ? AND is_revoked = FALSE
        "#;

        let result = sqlx::query(query)
            .bind(principal_id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| Self::store_error("Failed to revoke principal tokens", e))?;

        Ok(result.rows_affected() as usize)
    }

    async fn delete_expired_tokens(&self) -> Result<usize, DomainError> {
        let result = sqlx::query("DELETE FROM refresh_tokens WHERE expires_at < ?")
            .bind(Utc::now())
            .execute(&self.pool)
            .await
            .map_err(|e| Self::store_error("Failed to delete expired tokens", e))?;

        Ok(result.rows_affected() as usize)
    }
}
