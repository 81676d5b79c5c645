//! In-memory implementation of PrincipalRepository.
//!
//! Backs unit and integration tests, and serves as the reference semantics
//! for database-backed implementations.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::principal::{Principal, PrincipalKind};
use crate::errors::{DomainError, StoreError};

use super::trait_::PrincipalRepository;

/// In-memory principal repository
///
/// All uniqueness checks run under a single write lock, which gives the same
/// at-most-one-winner guarantee a unique index provides in a real store.
pub struct InMemoryPrincipalRepository {
    principals: Arc<RwLock<HashMap<Uuid, Principal>>>,
}

impl InMemoryPrincipalRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self {
            principals: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for InMemoryPrincipalRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PrincipalRepository for InMemoryPrincipalRepository {
    async fn find_by_email(
        &self,
        kind: PrincipalKind,
        email: &str,
    ) -> Result<Option<Principal>, DomainError> {
        let principals = self.principals.read().await;
        Ok(principals
            .values()
            .find(|p| p.kind == kind && p.email == email)
            .cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Principal>, DomainError> {
        let principals = self.principals.read().await;
        Ok(principals.get(&id).cloned())
    }

    async fn create(&self, principal: Principal) -> Result<Principal, DomainError> {
        let mut principals = self.principals.write().await;

        // Unified namespace: the email may not exist under either kind
        if principals.values().any(|p| p.email == principal.email) {
            return Err(StoreError::DuplicateEmail.into());
        }

        principals.insert(principal.id, principal.clone());
        Ok(principal)
    }

    async fn update(&self, principal: Principal) -> Result<Principal, DomainError> {
        let mut principals = self.principals.write().await;

        if !principals.contains_key(&principal.id) {
            return Err(StoreError::NotFound.into());
        }
        if principals
            .values()
            .any(|p| p.id != principal.id && p.email == principal.email)
        {
            return Err(StoreError::DuplicateEmail.into());
        }

        principals.insert(principal.id, principal.clone());
        Ok(principal)
    }

    async fn delete(&self, id: Uuid) -> Result<Principal, DomainError> {
        let mut principals = self.principals.write().await;
        principals.remove(&id).ok_or_else(|| StoreError::NotFound.into())
    }

    async fn email_taken(&self, email: &str, exclude: Option<Uuid>) -> Result<bool, DomainError> {
        let principals = self.principals.read().await;
        Ok(principals
            .values()
            .any(|p| p.email == email && Some(p.id) != exclude))
    }
}
