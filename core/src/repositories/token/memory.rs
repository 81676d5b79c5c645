//! In-memory implementation of TokenRepository.
//!
//! Backs unit and integration tests, and serves as the reference semantics
//! for database-backed implementations.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::token::{ConsumeOutcome, RefreshToken};
use crate::errors::{DomainError, StoreError};

use super::r#trait::TokenRepository;

/// In-memory token repository keyed by token hash
///
/// The consume transition runs under a single write lock, mirroring the
/// compare-and-set a database implementation performs in one statement.
pub struct InMemoryTokenRepository {
    tokens: Arc<RwLock<HashMap<String, RefreshToken>>>,
}

impl InMemoryTokenRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self {
            tokens: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for InMemoryTokenRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TokenRepository for InMemoryTokenRepository {
    async fn save_refresh_token(&self, token: RefreshToken) -> Result<RefreshToken, DomainError> {
        let mut tokens = self.tokens.write().await;

        if tokens.contains_key(&token.token_hash) {
            return Err(StoreError::Unavailable {
                message: "refresh token hash collision".to_string(),
            }
            .into());
        }

        tokens.insert(token.token_hash.clone(), token.clone());
        Ok(token)
    }

    async fn find_refresh_token(
        &self,
        token_hash: &str,
    ) -> Result<Option<RefreshToken>, DomainError> {
        let tokens = self.tokens.read().await;
        Ok(tokens.get(token_hash).cloned())
    }

    async fn consume_refresh_token(
        &self,
        token_hash: &str,
    ) -> Result<ConsumeOutcome, DomainError> {
        let mut tokens = self.tokens.write().await;

        let token = match tokens.get_mut(token_hash) {
            Some(token) => token,
            None => return Ok(ConsumeOutcome::Missing),
        };

        if token.is_consumed() {
            return Ok(ConsumeOutcome::AlreadyConsumed(token.clone()));
        }
        if token.is_revoked {
            return Ok(ConsumeOutcome::Revoked(token.clone()));
        }

        token.mark_consumed();
        Ok(ConsumeOutcome::Consumed(token.clone()))
    }

    async fn revoke_all_for_principal(&self, principal_id: Uuid) -> Result<usize, DomainError> {
        let mut tokens = self.tokens.write().await;
        let mut count = 0;

        for token in tokens.values_mut() {
            if token.principal_id == principal_id && !token.is_revoked {
                token.revoke();
                count += 1;
            }
        }

        Ok(count)
    }

    async fn delete_expired_tokens(&self) -> Result<usize, DomainError> {
        let mut tokens = self.tokens.write().await;
        let initial_count = tokens.len();

        tokens.retain(|_, token| !token.is_expired());

        Ok(initial_count - tokens.len())
    }
}
