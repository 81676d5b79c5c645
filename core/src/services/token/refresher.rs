//! Refresh token rotation

use std::sync::Arc;

use crate::domain::entities::token::{ConsumeOutcome, TokenPair};
use crate::errors::{AuthError, DomainError, TokenError};
use crate::repositories::{PrincipalRepository, TokenRepository};

use super::service::TokenService;

/// Exchanges a live refresh token for a fresh token pair
///
/// A refresh token is single-use. The refresher consumes the presented token
/// atomically and only then issues the replacement pair, so replaying a
/// stale token can never produce valid credentials. A replay additionally
/// revokes every outstanding refresh token of the owning principal, since it
/// signals that the token leaked.
pub struct TokenRefresher<P, R>
where
    P: PrincipalRepository,
    R: TokenRepository,
{
    principal_repository: Arc<P>,
    token_repository: Arc<R>,
    token_service: Arc<TokenService<R>>,
}

impl<P, R> TokenRefresher<P, R>
where
    P: PrincipalRepository,
    R: TokenRepository,
{
    /// Creates a new token refresher
    pub fn new(
        principal_repository: Arc<P>,
        token_repository: Arc<R>,
        token_service: Arc<TokenService<R>>,
    ) -> Self {
        Self {
            principal_repository,
            token_repository,
            token_service,
        }
    }

    /// Rotates a refresh token
    ///
    /// State transitions of the presented token:
    /// - active → consumed, new pair issued
    /// - expired → `TokenError::TokenExpired` (the token is still consumed)
    /// - already consumed → `TokenError::TokenReuseDetected`, all tokens of
    ///   the owner revoked
    /// - revoked or unknown → `TokenError::InvalidToken`
    ///
    /// # Returns
    ///
    /// * `Ok(TokenPair)` - The replacement pair
    /// * `Err(DomainError)` - The presented token was rejected
    pub async fn refresh(&self, refresh_token: &str) -> Result<TokenPair, DomainError> {
        let token_hash = TokenService::<R>::hash_token(refresh_token);

        // Consume before issuing anything: the atomic transition is what
        // closes the replay race.
        let consumed = match self
            .token_repository
            .consume_refresh_token(&token_hash)
            .await?
        {
            ConsumeOutcome::Consumed(token) => token,
            ConsumeOutcome::AlreadyConsumed(token) => {
                tracing::warn!(
                    principal_id = %token.principal_id,
                    "refresh token replayed after consumption, revoking all tokens"
                );
                let _ = self
                    .token_service
                    .revoke_all_for_principal(token.principal_id)
                    .await;
                return Err(DomainError::Token(TokenError::TokenReuseDetected));
            }
            ConsumeOutcome::Revoked(token) => {
                tracing::warn!(
                    principal_id = %token.principal_id,
                    "revoked refresh token presented"
                );
                return Err(DomainError::Token(TokenError::InvalidToken));
            }
            ConsumeOutcome::Missing => {
                return Err(DomainError::Token(TokenError::InvalidToken));
            }
        };

        if consumed.is_expired() {
            return Err(DomainError::Token(TokenError::TokenExpired));
        }

        let principal = self
            .principal_repository
            .find_by_id(consumed.principal_id)
            .await?
            .ok_or(DomainError::Auth(AuthError::PrincipalNotFound))?;

        self.token_service.issue_tokens(&principal).await
    }
}
