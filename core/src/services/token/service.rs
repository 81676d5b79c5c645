//! Main token service implementation

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use rand::Rng;
use sha2::{Digest, Sha256};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::principal::Principal;
use crate::domain::entities::token::{Claims, RefreshToken, TokenPair};
use crate::errors::{DomainError, TokenError};
use crate::repositories::TokenRepository;

use super::config::TokenServiceConfig;

/// Service for issuing and verifying JWT access tokens and opaque refresh
/// tokens
///
/// Access tokens are stateless: verification consults only the signature and
/// the embedded expiry. Refresh tokens are opaque random strings persisted as
/// SHA-256 digests; the plain value exists solely in the pair handed to the
/// caller.
pub struct TokenService<R: TokenRepository> {
    repository: Arc<R>,
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl<R: TokenRepository> TokenService<R> {
    /// Creates a new token service instance
    ///
    /// # Arguments
    ///
    /// * `repository` - Token repository for refresh token persistence
    /// * `config` - Token service configuration
    pub fn new(repository: Arc<R>, config: TokenServiceConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&config.issuer]);
        validation.set_audience(&[&config.audience]);
        validation.validate_exp = true;
        validation.validate_nbf = true;

        Self {
            repository,
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Issues a new token pair (access + refresh) for an authenticated
    /// principal
    ///
    /// # Returns
    ///
    /// * `Ok(TokenPair)` - The generated token pair
    /// * `Err(DomainError)` - Token generation or persistence failed
    pub async fn issue_tokens(&self, principal: &Principal) -> Result<TokenPair, DomainError> {
        let access_token = self.generate_access_token(principal)?;
        let refresh_token = self.generate_refresh_token(principal.id).await?;

        Ok(TokenPair::new(
            access_token,
            refresh_token,
            self.config.access_token_expiry_minutes * 60,
            self.config.refresh_token_expiry_days * 86400,
        ))
    }

    /// Generates a signed access token for a principal
    fn generate_access_token(&self, principal: &Principal) -> Result<String, DomainError> {
        let mut claims = Claims::new_access_token(
            principal.id,
            principal.kind,
            principal.role,
            self.config.access_token_expiry_minutes,
        );
        claims.iss = self.config.issuer.clone();
        claims.aud = self.config.audience.clone();

        self.encode_jwt(&claims)
    }

    /// Generates an opaque refresh token and stores its digest
    async fn generate_refresh_token(&self, principal_id: Uuid) -> Result<String, DomainError> {
        let token_string: String = {
            let mut rng = rand::thread_rng();
            (0..32)
                .map(|_| {
                    let idx = rng.gen_range(0..62);
                    match idx {
                        0..10 => (b'0' + idx) as char,
                        10..36 => (b'a' + idx - 10) as char,
                        36..62 => (b'A' + idx - 36) as char,
                        _ => unreachable!(),
                    }
                })
                .collect()
        };

        let token_hash = Self::hash_token(&token_string);
        let refresh_token = RefreshToken::new(
            principal_id,
            token_hash,
            self.config.refresh_token_expiry_days,
        );

        self.repository
            .save_refresh_token(refresh_token)
            .await
            .map_err(|_| DomainError::Token(TokenError::TokenGenerationFailed))?;

        Ok(token_string)
    }

    /// Encodes claims into a JWT
    fn encode_jwt(&self, claims: &Claims) -> Result<String, DomainError> {
        let header = Header::new(Algorithm::HS256);
        encode(&header, claims, &self.encoding_key)
            .map_err(|_| DomainError::Token(TokenError::TokenGenerationFailed))
    }

    /// Verifies an access token and returns the claims
    ///
    /// Pure and stateless: only the signature, expiry, and not-before are
    /// checked; no shared state is consulted.
    ///
    /// # Returns
    ///
    /// * `Ok(Claims)` - The decoded claims if valid
    /// * `Err(DomainError)` - Token is invalid, expired, or not yet valid
    pub fn verify_access_token(&self, token: &str) -> Result<Claims, DomainError> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                        DomainError::Token(TokenError::TokenExpired)
                    }
                    jsonwebtoken::errors::ErrorKind::ImmatureSignature => {
                        DomainError::Token(TokenError::TokenNotYetValid)
                    }
                    _ => DomainError::Token(TokenError::InvalidToken),
                }
            })?;

        Ok(token_data.claims)
    }

    /// Revokes every live refresh token belonging to a principal
    ///
    /// # Returns
    ///
    /// * `Ok(count)` - Number of tokens newly revoked
    pub async fn revoke_all_for_principal(&self, principal_id: Uuid) -> Result<usize, DomainError> {
        self.repository.revoke_all_for_principal(principal_id).await
    }

    /// Removes expired refresh tokens from storage
    ///
    /// # Returns
    ///
    /// * `Ok(count)` - Number of tokens cleaned up
    pub async fn cleanup_expired_tokens(&self) -> Result<usize, DomainError> {
        self.repository.delete_expired_tokens().await
    }

    /// Hashes a token string for storage and lookup
    pub(crate) fn hash_token(token: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(token.as_bytes());
        format!("{:x}", hasher.finalize())
    }
}
