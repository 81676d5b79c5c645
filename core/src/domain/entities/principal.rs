//! Principal entity representing an authenticatable account in the Signet system.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents the kind of principal in the system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrincipalKind {
    /// An individual user account
    User,
    /// An organization account
    Organization,
}

impl PrincipalKind {
    /// String form used in claims and database rows
    pub fn as_str(&self) -> &'static str {
        match self {
            PrincipalKind::User => "user",
            PrincipalKind::Organization => "organization",
        }
    }
}

/// Role assigned to a principal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Regular account
    User,
    /// Administrative account
    Admin,
}

impl Default for Role {
    fn default() -> Self {
        Role::User
    }
}

impl Role {
    /// String form used in claims and database rows
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
        }
    }
}

/// Profile fields carried only by organization principals
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationProfile {
    /// Contact person's display name
    pub display_name: String,

    /// Registered organization name
    pub organization: String,

    /// Primary phone number
    pub phone_number: String,

    /// Optional secondary phone number
    pub alternate_phone_number: Option<String>,

    /// Street address
    pub address: String,

    /// State or region
    pub state: String,

    /// Nearby landmark for the address
    pub landmark: String,

    /// Contact person's position within the organization
    pub position: String,

    /// Next of kin for the contact person
    pub next_of_kin: String,
}

/// Principal entity representing a registered account
///
/// The password hash never leaves this crate in serialized form: the entity
/// deliberately has no serde derives, and the only outward representation is
/// `PrincipalView`, which carries no password field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    /// Unique identifier for the principal
    pub id: Uuid,

    /// Kind of principal (User or Organization)
    pub kind: PrincipalKind,

    /// Email address, normalized (trimmed, lowercased) before storage
    pub email: String,

    /// One-way hash of the password
    pub password_hash: String,

    /// Assigned role
    pub role: Role,

    /// Organization profile, present exactly when kind is Organization
    pub profile: Option<OrganizationProfile>,

    /// Timestamp when the principal was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the principal was last updated
    pub updated_at: DateTime<Utc>,
}

impl Principal {
    /// Creates a new individual user principal
    pub fn new_user(email: String, password_hash: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            kind: PrincipalKind::User,
            email,
            password_hash,
            role: Role::default(),
            profile: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Creates a new organization principal
    pub fn new_organization(
        email: String,
        password_hash: String,
        profile: OrganizationProfile,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            kind: PrincipalKind::Organization,
            email,
            password_hash,
            role: Role::default(),
            profile: Some(profile),
            created_at: now,
            updated_at: now,
        }
    }

    /// Replaces the email address
    pub fn set_email(&mut self, email: String) {
        self.email = email;
        self.updated_at = Utc::now();
    }

    /// Replaces the stored password hash
    pub fn set_password_hash(&mut self, password_hash: String) {
        self.password_hash = password_hash;
        self.updated_at = Utc::now();
    }

    /// Replaces the organization profile
    pub fn set_profile(&mut self, profile: OrganizationProfile) {
        self.profile = Some(profile);
        self.updated_at = Utc::now();
    }

    /// Checks if the principal is an individual user
    pub fn is_user(&self) -> bool {
        self.kind == PrincipalKind::User
    }

    /// Checks if the principal is an organization
    pub fn is_organization(&self) -> bool {
        self.kind == PrincipalKind::Organization
    }
}
