//! Request types for account operations

use serde::{Deserialize, Serialize};

use crate::domain::entities::principal::OrganizationProfile;

/// Fields required to register an individual user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterUserRequest {
    /// Email address (normalized before any check)
    pub email: String,

    /// Plaintext password; hashed before persistence, never stored
    pub password: String,
}

/// Fields required to register an organization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterOrganizationRequest {
    /// Email address (normalized before any check)
    pub email: String,

    /// Plaintext password; hashed before persistence, never stored
    pub password: String,

    /// Organization profile fields
    pub profile: OrganizationProfile,
}

/// Patch applied to an existing principal
///
/// Absent fields are left untouched. A profile patch is only valid for
/// organization principals.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PrincipalUpdate {
    /// Replacement email address
    pub email: Option<String>,

    /// Replacement plaintext password
    pub password: Option<String>,

    /// Replacement organization profile
    pub profile: Option<OrganizationProfile>,
}
