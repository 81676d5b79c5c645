//! Token entities for JWT-based authentication.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::principal::{PrincipalKind, Role};

/// Default access token expiration time (15 minutes)
pub const ACCESS_TOKEN_EXPIRY_MINUTES: i64 = 15;

/// Default refresh token expiration time (7 days)
pub const REFRESH_TOKEN_EXPIRY_DAYS: i64 = 7;

/// JWT issuer
pub const JWT_ISSUER: &str = "signet";

/// JWT audience
pub const JWT_AUDIENCE: &str = "signet-api";

/// Claims structure for JWT payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (principal ID)
    pub sub: String,

    /// Kind of principal ("user" or "organization")
    pub kind: String,

    /// Role of the principal ("user" or "admin")
    pub role: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Not before timestamp
    pub nbf: i64,

    /// Issuer
    pub iss: String,

    /// Audience
    pub aud: String,

    /// JWT ID (unique identifier for the token)
    pub jti: String,
}

impl Claims {
    /// Creates new claims for an access token
    ///
    /// # Arguments
    ///
    /// * `principal_id` - The principal's UUID
    /// * `kind` - The principal's kind
    /// * `role` - The principal's role
    /// * `expiry_minutes` - Access token lifetime in minutes
    pub fn new_access_token(
        principal_id: Uuid,
        kind: PrincipalKind,
        role: Role,
        expiry_minutes: i64,
    ) -> Self {
        let now = Utc::now();
        let expiry = now + Duration::minutes(expiry_minutes);

        Self {
            sub: principal_id.to_string(),
            kind: kind.as_str().to_string(),
            role: role.as_str().to_string(),
            iat: now.timestamp(),
            exp: expiry.timestamp(),
            nbf: now.timestamp(),
            iss: JWT_ISSUER.to_string(),
            aud: JWT_AUDIENCE.to_string(),
            jti: Uuid::new_v4().to_string(),
        }
    }

    /// Checks if the claims have expired
    pub fn is_expired(&self) -> bool {
        let now = Utc::now().timestamp();
        now >= self.exp
    }

    /// Checks if the claims are valid (not expired and after nbf)
    pub fn is_valid(&self) -> bool {
        let now = Utc::now().timestamp();
        now >= self.nbf && now < self.exp
    }

    /// Gets the principal ID from the claims
    pub fn principal_id(&self) -> Result<Uuid, uuid::Error> {
        Uuid::parse_str(&self.sub)
    }
}

/// Refresh token entity stored in the database
///
/// Only the SHA-256 digest of the opaque token string is stored; the plain
/// value exists solely in the pair handed to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshToken {
    /// Unique identifier for the refresh token
    pub id: Uuid,

    /// Principal this token belongs to
    pub principal_id: Uuid,

    /// Hashed token value
    pub token_hash: String,

    /// Timestamp when the token was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the token expires
    pub expires_at: DateTime<Utc>,

    /// Timestamp when the token was consumed by a refresh, if ever
    pub consumed_at: Option<DateTime<Utc>>,

    /// Whether the token has been revoked
    pub is_revoked: bool,
}

impl RefreshToken {
    /// Creates a new refresh token
    ///
    /// # Arguments
    ///
    /// * `principal_id` - The owning principal's UUID
    /// * `token_hash` - The hashed token value
    /// * `expiry_days` - Refresh token lifetime in days
    pub fn new(principal_id: Uuid, token_hash: String, expiry_days: i64) -> Self {
        let now = Utc::now();
        let expires_at = now + Duration::days(expiry_days);

        Self {
            id: Uuid::new_v4(),
            principal_id,
            token_hash,
            created_at: now,
            expires_at,
            consumed_at: None,
            is_revoked: false,
        }
    }

    /// Checks if the refresh token has expired
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }

    /// Checks if the refresh token has been consumed by a refresh
    pub fn is_consumed(&self) -> bool {
        self.consumed_at.is_some()
    }

    /// Checks if the refresh token is still usable
    ///
    /// A token is usable if it has not expired, has not been revoked, and has
    /// not already been consumed.
    pub fn is_valid(&self) -> bool {
        !self.is_expired() && !self.is_revoked && !self.is_consumed()
    }

    /// Marks the token as consumed
    pub fn mark_consumed(&mut self) {
        self.consumed_at = Some(Utc::now());
    }

    /// Revokes the refresh token
    pub fn revoke(&mut self) {
        self.is_revoked = true;
    }
}

/// Result of an atomic consume attempt on a refresh token
///
/// The consume transition is the single-use guarantee for refresh tokens:
/// exactly one caller observes `Consumed` for a given token, every later
/// caller observes `AlreadyConsumed`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsumeOutcome {
    /// The token was live and this call transitioned it to consumed
    Consumed(RefreshToken),
    /// The token had already been consumed before this call
    AlreadyConsumed(RefreshToken),
    /// The token exists but has been revoked
    Revoked(RefreshToken),
    /// No token with the given hash exists
    Missing,
}

/// Token pair returned to the client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// JWT access token
    pub access_token: String,

    /// Opaque refresh token
    pub refresh_token: String,

    /// Access token expiry time in seconds
    pub access_expires_in: i64,

    /// Refresh token expiry time in seconds
    pub refresh_expires_in: i64,
}

impl TokenPair {
    /// Creates a new token pair
    pub fn new(
        access_token: String,
        refresh_token: String,
        access_expires_in: i64,
        refresh_expires_in: i64,
    ) -> Self {
        Self {
            access_token,
            refresh_token,
            access_expires_in,
            refresh_expires_in,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_token_claims() {
        let principal_id = Uuid::new_v4();
        let claims = Claims::new_access_token(
            principal_id,
            PrincipalKind::Organization,
            Role::User,
            ACCESS_TOKEN_EXPIRY_MINUTES,
        );

        assert_eq!(claims.sub, principal_id.to_string());
        assert_eq!(claims.kind, "organization");
        assert_eq!(claims.role, "user");
        assert_eq!(claims.iss, JWT_ISSUER);
        assert_eq!(claims.aud, JWT_AUDIENCE);
        assert!(claims.is_valid());
        assert!(!claims.is_expired());
    }

    #[test]
    fn test_claims_principal_id_parsing() {
        let principal_id = Uuid::new_v4();
        let claims = Claims::new_access_token(
            principal_id,
            PrincipalKind::User,
            Role::User,
            ACCESS_TOKEN_EXPIRY_MINUTES,
        );

        let parsed = claims.principal_id().unwrap();
        assert_eq!(parsed, principal_id);
    }

    #[test]
    fn test_claims_expiration() {
        let mut claims = Claims::new_access_token(
            Uuid::new_v4(),
            PrincipalKind::User,
            Role::User,
            ACCESS_TOKEN_EXPIRY_MINUTES,
        );

        claims.exp = Utc::now().timestamp() - 1;

        assert!(claims.is_expired());
        assert!(!claims.is_valid());
    }

    #[test]
    fn test_claims_not_before() {
        let mut claims = Claims::new_access_token(
            Uuid::new_v4(),
            PrincipalKind::User,
            Role::User,
            ACCESS_TOKEN_EXPIRY_MINUTES,
        );

        claims.nbf = Utc::now().timestamp() + 3600;

        assert!(!claims.is_valid());
    }

    #[test]
    fn test_refresh_token_creation() {
        let principal_id = Uuid::new_v4();
        let token = RefreshToken::new(
            principal_id,
            "hashed_token_value".to_string(),
            REFRESH_TOKEN_EXPIRY_DAYS,
        );

        assert_eq!(token.principal_id, principal_id);
        assert!(!token.is_revoked);
        assert!(!token.is_consumed());
        assert!(!token.is_expired());
        assert!(token.is_valid());
    }

    #[test]
    fn test_refresh_token_consumption() {
        let mut token = RefreshToken::new(
            Uuid::new_v4(),
            "hash".to_string(),
            REFRESH_TOKEN_EXPIRY_DAYS,
        );

        assert!(token.is_valid());

        token.mark_consumed();

        assert!(token.is_consumed());
        assert!(!token.is_valid());
    }

    #[test]
    fn test_refresh_token_revocation() {
        let mut token = RefreshToken::new(
            Uuid::new_v4(),
            "hash".to_string(),
            REFRESH_TOKEN_EXPIRY_DAYS,
        );

        token.revoke();

        assert!(token.is_revoked);
        assert!(!token.is_valid());
    }

    #[test]
    fn test_refresh_token_expiration() {
        let mut token = RefreshToken::new(
            Uuid::new_v4(),
            "hash".to_string(),
            REFRESH_TOKEN_EXPIRY_DAYS,
        );

        token.expires_at = Utc::now() - Duration::days(1);

        assert!(token.is_expired());
        assert!(!token.is_valid());
    }

    #[test]
    fn test_token_pair_creation() {
        let pair = TokenPair::new(
            "access_token_jwt".to_string(),
            "opaque_refresh".to_string(),
            15 * 60,
            7 * 24 * 60 * 60,
        );

        assert_eq!(pair.access_expires_in, 15 * 60);
        assert_eq!(pair.refresh_expires_in, 7 * 24 * 60 * 60);
    }

    #[test]
    fn test_claims_serialization() {
        let claims = Claims::new_access_token(
            Uuid::new_v4(),
            PrincipalKind::User,
            Role::Admin,
            ACCESS_TOKEN_EXPIRY_MINUTES,
        );

        let json = serde_json::to_string(&claims).unwrap();
        let deserialized: Claims = serde_json::from_str(&json).unwrap();

        assert_eq!(claims, deserialized);
    }
}
