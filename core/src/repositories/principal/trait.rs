//! Principal repository trait defining the interface for credential storage.
//!
//! This is the credential store boundary: the domain services only ever see
//! this trait, never a concrete database handle.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::principal::{Principal, PrincipalKind};
use crate::errors::DomainError;

/// Repository trait for Principal entity persistence operations
///
/// Implementations must enforce email uniqueness across both principal kinds
/// with an atomic guarantee (a unique constraint or equivalent), so that of
/// two concurrent registrations with the same email at most one succeeds.
///
/// # Example
/// ```no_run
/// # use sg_core::repositories::PrincipalRepository;
/// # use sg_core::domain::entities::principal::PrincipalKind;
/// # async fn example(repo: &impl PrincipalRepository) -> Result<(), Box<dyn std::error::Error>> {
/// match repo.find_by_email(PrincipalKind::User, "user@example.com").await? {
///     Some(principal) => println!("found {}", principal.id),
///     None => println!("not registered"),
/// }
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait PrincipalRepository: Send + Sync {
    /// Find a principal by normalized email within the given kind's namespace
    ///
    /// # Returns
    /// * `Ok(Some(Principal))` - Principal found
    /// * `Ok(None)` - No principal of this kind with the given email
    /// * `Err(DomainError)` - Store error occurred
    async fn find_by_email(
        &self,
        kind: PrincipalKind,
        email: &str,
    ) -> Result<Option<Principal>, DomainError>;

    /// Find a principal by its unique identifier, regardless of kind
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Principal>, DomainError>;

    /// Create a new principal
    ///
    /// # Returns
    /// * `Ok(Principal)` - The created principal
    /// * `Err(StoreError::DuplicateEmail)` - The email is already registered,
    ///   including the case where a concurrent writer won the race
    async fn create(&self, principal: Principal) -> Result<Principal, DomainError>;

    /// Update an existing principal
    ///
    /// # Returns
    /// * `Ok(Principal)` - The updated principal
    /// * `Err(StoreError::NotFound)` - No principal with this id exists
    async fn update(&self, principal: Principal) -> Result<Principal, DomainError>;

    /// Delete a principal, returning the deleted record
    ///
    /// # Returns
    /// * `Ok(Principal)` - The record as it was before deletion
    /// * `Err(StoreError::NotFound)` - No principal with this id exists
    async fn delete(&self, id: Uuid) -> Result<Principal, DomainError>;

    /// Check whether an email is taken by any principal of either kind
    ///
    /// `exclude` skips one record, so updates can keep their own email.
    /// Uniqueness spans the whole principal namespace: a user and an
    /// organization can never share an email.
    async fn email_taken(&self, email: &str, exclude: Option<Uuid>) -> Result<bool, DomainError>;
}
