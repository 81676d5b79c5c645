//! Outward-facing principal representation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::principal::{OrganizationProfile, Principal, PrincipalKind, Role};

/// Serializable projection of a principal
///
/// This is the only representation of a principal that crosses the crate
/// boundary. It has no password field at all, so no serializer configuration
/// can leak the hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrincipalView {
    /// Unique identifier
    pub id: Uuid,

    /// Kind of principal
    pub kind: PrincipalKind,

    /// Normalized email address
    pub email: String,

    /// Assigned role
    pub role: Role,

    /// Organization profile, present for organization principals
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<OrganizationProfile>,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl From<&Principal> for PrincipalView {
    fn from(principal: &Principal) -> Self {
        Self {
            id: principal.id,
            kind: principal.kind,
            email: principal.email.clone(),
            role: principal.role,
            profile: principal.profile.clone(),
            created_at: principal.created_at,
            updated_at: principal.updated_at,
        }
    }
}
