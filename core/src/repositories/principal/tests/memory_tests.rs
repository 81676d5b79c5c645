//! Unit tests for the in-memory principal repository

use crate::domain::entities::principal::{OrganizationProfile, Principal, PrincipalKind};
use crate::errors::{DomainError, StoreError};
use crate::repositories::principal::{InMemoryPrincipalRepository, PrincipalRepository};

fn user(email: &str) -> Principal {
    Principal::new_user(email.to_string(), "$2b$08$hash".to_string())
}

fn organization(email: &str) -> Principal {
    Principal::new_organization(
        email.to_string(),
        "$2b$08$hash".to_string(),
        OrganizationProfile {
            display_name: "Jane Doe".to_string(),
            organization: "Acme".to_string(),
            phone_number: "08012345678".to_string(),
            alternate_phone_number: None,
            address: "12 Harbour St".to_string(),
            state: "Lagos".to_string(),
            landmark: "Old mill".to_string(),
            position: "Manager".to_string(),
            next_of_kin: "John Doe".to_string(),
        },
    )
}

#[tokio::test]
async fn test_create_and_find_by_email() {
    let repo = InMemoryPrincipalRepository::new();
    let created = repo.create(user("a@x.com")).await.unwrap();

    let found = repo
        .find_by_email(PrincipalKind::User, "a@x.com")
        .await
        .unwrap()
        .expect("principal should be found");

    assert_eq!(found.id, created.id);
}

#[tokio::test]
async fn test_find_by_email_is_scoped_to_kind() {
    let repo = InMemoryPrincipalRepository::new();
    repo.create(user("a@x.com")).await.unwrap();

    let as_org = repo
        .find_by_email(PrincipalKind::Organization, "a@x.com")
        .await
        .unwrap();

    assert!(as_org.is_none());
}

#[tokio::test]
async fn test_duplicate_email_rejected_across_kinds() {
    let repo = InMemoryPrincipalRepository::new();
    repo.create(user("shared@x.com")).await.unwrap();

    let result = repo.create(organization("shared@x.com")).await;

    assert!(matches!(
        result.unwrap_err(),
        DomainError::Store(StoreError::DuplicateEmail)
    ));
}

#[tokio::test]
async fn test_update_missing_principal() {
    let repo = InMemoryPrincipalRepository::new();
    let never_stored = user("ghost@x.com");

    let result = repo.update(never_stored).await;

    assert!(matches!(
        result.unwrap_err(),
        DomainError::Store(StoreError::NotFound)
    ));
}

#[tokio::test]
async fn test_update_rejects_email_owned_by_other() {
    let repo = InMemoryPrincipalRepository::new();
    repo.create(user("first@x.com")).await.unwrap();
    let mut second = repo.create(user("second@x.com")).await.unwrap();

    second.set_email("first@x.com".to_string());
    let result = repo.update(second).await;

    assert!(matches!(
        result.unwrap_err(),
        DomainError::Store(StoreError::DuplicateEmail)
    ));
}

#[tokio::test]
async fn test_delete_returns_removed_record() {
    let repo = InMemoryPrincipalRepository::new();
    let created = repo.create(user("a@x.com")).await.unwrap();

    let deleted = repo.delete(created.id).await.unwrap();
    assert_eq!(deleted.id, created.id);

    let result = repo.delete(created.id).await;
    assert!(matches!(
        result.unwrap_err(),
        DomainError::Store(StoreError::NotFound)
    ));
}

#[tokio::test]
async fn test_email_taken_with_exclusion() {
    let repo = InMemoryPrincipalRepository::new();
    let created = repo.create(user("a@x.com")).await.unwrap();

    assert!(repo.email_taken("a@x.com", None).await.unwrap());
    // A record keeping its own email is not a conflict
    assert!(!repo.email_taken("a@x.com", Some(created.id)).await.unwrap());
    assert!(!repo.email_taken("other@x.com", None).await.unwrap());
}
