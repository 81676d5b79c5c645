//! Token repository trait defining the interface for refresh token persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::token::{ConsumeOutcome, RefreshToken};
use crate::errors::DomainError;

/// Repository trait for RefreshToken entity persistence operations
///
/// # Security Considerations
/// - Only token digests are stored, never the opaque token strings
/// - `consume_refresh_token` must be atomic: for a given token, exactly one
///   caller may observe `ConsumeOutcome::Consumed`
/// - Expired tokens should be periodically cleaned up
#[async_trait]
pub trait TokenRepository: Send + Sync {
    /// Save a new refresh token to the repository
    async fn save_refresh_token(&self, token: RefreshToken) -> Result<RefreshToken, DomainError>;

    /// Find a refresh token by its hashed value
    async fn find_refresh_token(
        &self,
        token_hash: &str,
    ) -> Result<Option<RefreshToken>, DomainError>;

    /// Atomically transition a live refresh token to consumed
    ///
    /// The transition must be a single compare-and-set step, not a read
    /// followed by a write, so concurrent presenters of the same token cannot
    /// both succeed. Already-consumed and revoked tokens are reported as such
    /// without being modified.
    async fn consume_refresh_token(&self, token_hash: &str)
        -> Result<ConsumeOutcome, DomainError>;

    /// Revoke every live token belonging to a principal
    ///
    /// # Returns
    /// * `Ok(count)` - Number of tokens newly revoked
    async fn revoke_all_for_principal(&self, principal_id: Uuid) -> Result<usize, DomainError>;

    /// Delete all expired tokens
    ///
    /// # Returns
    /// * `Ok(count)` - Number of tokens removed
    async fn delete_expired_tokens(&self) -> Result<usize, DomainError>;
}
