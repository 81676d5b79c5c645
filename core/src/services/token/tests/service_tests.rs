//! Unit tests for token service

use chrono::Utc;
use std::sync::Arc;

use crate::domain::entities::principal::{Principal, PrincipalKind};
use crate::domain::entities::token::{JWT_AUDIENCE, JWT_ISSUER};
use crate::errors::{DomainError, TokenError};
use crate::repositories::token::{InMemoryTokenRepository, TokenRepository};
use crate::services::token::{TokenService, TokenServiceConfig};

fn test_service() -> (Arc<InMemoryTokenRepository>, TokenService<InMemoryTokenRepository>) {
    let repository = Arc::new(InMemoryTokenRepository::new());
    let service = TokenService::new(repository.clone(), TokenServiceConfig::default());
    (repository, service)
}

fn test_principal() -> Principal {
    Principal::new_user("user@example.com".to_string(), "$2b$08$hash".to_string())
}

#[tokio::test]
async fn test_issue_tokens_returns_pair_with_expiries() {
    let (_, service) = test_service();
    let principal = test_principal();

    let pair = service.issue_tokens(&principal).await.unwrap();

    assert!(!pair.access_token.is_empty());
    assert_eq!(pair.refresh_token.len(), 32);
    assert_eq!(pair.access_expires_in, 15 * 60);
    assert_eq!(pair.refresh_expires_in, 7 * 24 * 60 * 60);
}

#[tokio::test]
async fn test_issued_access_token_verifies() {
    let (_, service) = test_service();
    let principal = test_principal();

    let pair = service.issue_tokens(&principal).await.unwrap();
    let claims = service.verify_access_token(&pair.access_token).unwrap();

    assert_eq!(claims.sub, principal.id.to_string());
    assert_eq!(claims.kind, "user");
    assert_eq!(claims.role, "user");
    assert_eq!(claims.iss, JWT_ISSUER);
    assert_eq!(claims.aud, JWT_AUDIENCE);
}

#[tokio::test]
async fn test_access_token_carries_organization_kind() {
    let (_, service) = test_service();
    let mut principal = test_principal();
    principal.kind = PrincipalKind::Organization;

    let pair = service.issue_tokens(&principal).await.unwrap();
    let claims = service.verify_access_token(&pair.access_token).unwrap();

    assert_eq!(claims.kind, "organization");
}

#[tokio::test]
async fn test_garbage_access_token_is_invalid() {
    let (_, service) = test_service();

    let result = service.verify_access_token("not-a-jwt");

    assert!(matches!(
        result,
        Err(DomainError::Token(TokenError::InvalidToken))
    ));
}

#[tokio::test]
async fn test_token_signed_with_other_secret_is_rejected() {
    let repository = Arc::new(InMemoryTokenRepository::new());
    let issuing = TokenService::new(
        repository.clone(),
        TokenServiceConfig {
            jwt_secret: "secret-a".to_string(),
            ..Default::default()
        },
    );
    let verifying = TokenService::new(
        repository,
        TokenServiceConfig {
            jwt_secret: "secret-b".to_string(),
            ..Default::default()
        },
    );

    let pair = issuing.issue_tokens(&test_principal()).await.unwrap();
    let result = verifying.verify_access_token(&pair.access_token);

    assert!(matches!(
        result,
        Err(DomainError::Token(TokenError::InvalidToken))
    ));
}

#[tokio::test]
async fn test_expired_access_token_is_rejected() {
    let repository = Arc::new(InMemoryTokenRepository::new());
    let config = TokenServiceConfig {
        // Issues tokens already past their expiry instant, beyond the
        // decoder's default leeway
        access_token_expiry_minutes: -5,
        ..Default::default()
    };
    let service = TokenService::new(repository, config);

    let pair = service.issue_tokens(&test_principal()).await.unwrap();
    let result = service.verify_access_token(&pair.access_token);

    assert!(matches!(
        result,
        Err(DomainError::Token(TokenError::TokenExpired))
    ));
}

#[tokio::test]
async fn test_refresh_token_stored_as_digest_only() {
    let (repository, service) = test_service();

    let pair = service.issue_tokens(&test_principal()).await.unwrap();

    // The opaque string itself must not be findable; only its hash is.
    assert!(repository
        .find_refresh_token(&pair.refresh_token)
        .await
        .unwrap()
        .is_none());

    let hash = TokenService::<InMemoryTokenRepository>::hash_token(&pair.refresh_token);
    let stored = repository
        .find_refresh_token(&hash)
        .await
        .unwrap()
        .expect("digest should be stored");

    assert!(stored.expires_at > Utc::now());
    assert!(!stored.is_consumed());
}

#[tokio::test]
async fn test_revoke_all_for_principal() {
    let (_, service) = test_service();
    let principal = test_principal();

    service.issue_tokens(&principal).await.unwrap();
    service.issue_tokens(&principal).await.unwrap();

    let revoked = service.revoke_all_for_principal(principal.id).await.unwrap();
    assert_eq!(revoked, 2);
}

#[tokio::test]
async fn test_cleanup_ignores_live_tokens() {
    let (_, service) = test_service();

    service.issue_tokens(&test_principal()).await.unwrap();

    let removed = service.cleanup_expired_tokens().await.unwrap();
    assert_eq!(removed, 0);
}
