//! Account service implementation

use std::sync::Arc;
use uuid::Uuid;

use sg_shared::utils::email::{mask_email, normalize_email};

use crate::domain::entities::principal::{Principal, PrincipalKind};
use crate::domain::value_objects::auth_response::RegistrationResponse;
use crate::domain::value_objects::principal_view::PrincipalView;
use crate::domain::value_objects::unique_code::UniqueCode;
use crate::errors::{AuthError, DomainResult, ValidationError};
use crate::repositories::{PrincipalRepository, TokenRepository};
use crate::services::password::PasswordHasher;
use crate::services::token::TokenService;

use super::requests::{PrincipalUpdate, RegisterOrganizationRequest, RegisterUserRequest};
use super::validation::{validate_email, validate_password, validate_profile};

/// Service for registering and maintaining principals
///
/// Registration runs an explicit pipeline: normalize → uniqueness check →
/// validate → hash → persist → issue code and tokens. The uniqueness check
/// spans both principal kinds; the store re-checks atomically at write time,
/// so a concurrent registrant losing the race still observes a duplicate
/// error.
pub struct AccountService<P, T>
where
    P: PrincipalRepository,
    T: TokenRepository,
{
    principal_repository: Arc<P>,
    token_service: Arc<TokenService<T>>,
    password_hasher: PasswordHasher,
}

impl<P, T> AccountService<P, T>
where
    P: PrincipalRepository,
    T: TokenRepository,
{
    /// Creates a new account service
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

    /// Registers a new individual user
    ///
    /// # Returns
    ///
    /// * `Ok(RegistrationResponse)` - The created principal view, onboarding
    ///   code, and initial token pair
    /// * `Err(AuthError::DuplicateEmail)` - The email is already registered
    ///   under either kind
    /// * `Err(ValidationError)` - A field failed validation
    pub async fn register_user(
        &self,
        request: RegisterUserRequest,
    ) -> DomainResult<RegistrationResponse> {
        let email = self.check_new_email(&request.email, None).await?;
        validate_password(&request.password)?;

        let password_hash = self.password_hasher.hash(&request.password)?;
        let principal = Principal::new_user(email, password_hash);

        self.persist_and_issue(principal).await
    }

    /// Registers a new organization
    ///
    /// Same pipeline as `register_user`, with the organization profile
    /// validated field by field (fail-fast) before hashing.
    pub async fn register_organization(
        &self,
        request: RegisterOrganizationRequest,
    ) -> DomainResult<RegistrationResponse> {
        let email = self.check_new_email(&request.email, None).await?;
        validate_password(&request.password)?;
        validate_profile(&request.profile)?;

        let password_hash = self.password_hasher.hash(&request.password)?;
        let principal = Principal::new_organization(email, password_hash, request.profile);

        self.persist_and_issue(principal).await
    }

    /// Fetches a principal by kind and id
    ///
    /// A kind mismatch is treated as absence: asking for an organization by
    /// a user's id yields `PrincipalNotFound`.
    pub async fn get_principal(
        &self,
        kind: PrincipalKind,
        id: Uuid,
    ) -> DomainResult<PrincipalView> {
        let principal = self.load(kind, id).await?;
        Ok(PrincipalView::from(&principal))
    }

    /// Applies a patch to an existing principal
    ///
    /// An email change is re-checked for uniqueness excluding this record; a
    /// password change runs the same shape validation and hashing as
    /// registration; a profile change is only valid for organizations.
    pub async fn update_principal(
        &self,
        kind: PrincipalKind,
        id: Uuid,
        update: PrincipalUpdate,
    ) -> DomainResult<PrincipalView> {
        let mut principal = self.load(kind, id).await?;

        if let Some(email) = update.email {
            let email = self.check_new_email(&email, Some(id)).await?;
            principal.set_email(email);
        }

        if let Some(password) = update.password {
            validate_password(&password)?;
            let password_hash = self.password_hasher.hash(&password)?;
            principal.set_password_hash(password_hash);
        }

        if let Some(profile) = update.profile {
            if !principal.is_organization() {
                return Err(ValidationError::UnexpectedField {
                    field: "profile".to_string(),
                }
                .into());
            }
            validate_profile(&profile)?;
            principal.set_profile(profile);
        }

        let updated = self.principal_repository.update(principal).await?;

        tracing::info!(
            principal_id = %updated.id,
            kind = updated.kind.as_str(),
            "principal updated"
        );

        Ok(PrincipalView::from(&updated))
    }

    /// Deletes a principal, returning its last outward view
    pub async fn delete_principal(
        &self,
        kind: PrincipalKind,
        id: Uuid,
    ) -> DomainResult<PrincipalView> {
        // Kind check first, so a mismatched delete cannot remove the record
        self.load(kind, id).await?;
        let removed = self.principal_repository.delete(id).await?;

        tracing::info!(
            principal_id = %removed.id,
            kind = removed.kind.as_str(),
            "principal deleted"
        );

        Ok(PrincipalView::from(&removed))
    }

    /// Normalizes an email and rejects it if taken anywhere in the principal
    /// namespace
    async fn check_new_email(
        &self,
        email: &str,
        exclude: Option<Uuid>,
    ) -> DomainResult<String> {
        let email = normalize_email(email);

        if self.principal_repository.email_taken(&email, exclude).await? {
            tracing::warn!(email = %mask_email(&email), "email already registered");
            return Err(AuthError::DuplicateEmail.into());
        }

        validate_email(&email)?;
        Ok(email)
    }

    /// Writes the principal, then issues the onboarding code and token pair
    async fn persist_and_issue(
        &self,
        principal: Principal,
    ) -> DomainResult<RegistrationResponse> {
        let created = self.principal_repository.create(principal).await?;
        let unique_code = UniqueCode::generate();
        let token_pair = self.token_service.issue_tokens(&created).await?;

        tracing::info!(
            principal_id = %created.id,
            kind = created.kind.as_str(),
            email = %mask_email(&created.email),
            "principal registered"
        );

        Ok(RegistrationResponse::new(
            PrincipalView::from(&created),
            unique_code,
            token_pair,
        ))
    }

    /// Loads a principal by id, requiring the expected kind
    async fn load(&self, kind: PrincipalKind, id: Uuid) -> DomainResult<Principal> {
        self.principal_repository
            .find_by_id(id)
            .await?
            .filter(|p| p.kind == kind)
            .ok_or_else(|| AuthError::PrincipalNotFound.into())
    }
}
