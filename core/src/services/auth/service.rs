//! Credential verifier implementation

use std::sync::Arc;

use sg_shared::utils::email::{mask_email, normalize_email};

use crate::domain::entities::principal::{Principal, PrincipalKind};
use crate::domain::value_objects::auth_response::AuthResponse;
use crate::domain::value_objects::principal_view::PrincipalView;
use crate::errors::{AuthError, DomainResult};
use crate::repositories::{PrincipalRepository, TokenRepository};
use crate::services::password::PasswordHasher;
use crate::services::token::TokenService;

/// Service verifying login credentials and issuing tokens on success
///
/// Unknown email and wrong password are deliberately indistinguishable to
/// callers: both fail with `AuthError::InvalidCredentials`, so login cannot
/// be used to enumerate registered accounts.
pub struct CredentialVerifier<P, T>
where
    P: PrincipalRepository,
    T: TokenRepository,
{
    principal_repository: Arc<P>,
    token_service: Arc<TokenService<T>>,
    password_hasher: PasswordHasher,
}

impl<P, T> CredentialVerifier<P, T>
where
    P: PrincipalRepository,
    T: TokenRepository,
{
    /// Creates a new credential verifier
    pub fn new(
        principal_repository: Arc<P>,
        token_service: Arc<TokenService<T>>,
        password_hasher: PasswordHasher,
    ) -> Self {
        Self {
            principal_repository,
            token_service,
            password_hasher,
        }
    }

    /// Authenticates a principal by email and password
    ///
    /// # Returns
    ///
    /// * `Ok(AuthResponse)` - The principal view and a fresh token pair
    /// * `Err(AuthError::InvalidCredentials)` - Unknown email or wrong
    ///   password, without distinction
    pub async fn login(
        &self,
        kind: PrincipalKind,
        email: &str,
        password: &str,
    ) -> DomainResult<AuthResponse> {
        let principal = self.verify_credentials(kind, email, password).await?;
        let token_pair = self.token_service.issue_tokens(&principal).await?;

        tracing::info!(
            principal_id = %principal.id,
            kind = principal.kind.as_str(),
            "login succeeded"
        );

        Ok(AuthResponse::from_token_pair(
            token_pair,
            PrincipalView::from(&principal),
        ))
    }

    /// Checks an email/password pair against the store
    ///
    /// The lookup is scoped to the requested kind; the password check runs
    /// against the stored bcrypt digest.
    async fn verify_credentials(
        &self,
        kind: PrincipalKind,
        email: &str,
        password: &str,
    ) -> DomainResult<Principal> {
        let email = normalize_email(email);

        let principal = match self.principal_repository.find_by_email(kind, &email).await? {
            Some(principal) => principal,
            None => {
                tracing::warn!(
                    email = %mask_email(&email),
                    kind = kind.as_str(),
                    "login failed, unknown email"
                );
                return Err(AuthError::InvalidCredentials.into());
            }
        };

        if !self.password_hasher.verify(password, &principal.password_hash) {
            tracing::warn!(
                email = %mask_email(&email),
                kind = kind.as_str(),
                "login failed, wrong password"
            );
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(principal)
    }
}
