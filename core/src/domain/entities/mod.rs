//! Domain entities representing core business objects.

pub mod principal;
pub mod token;

// Re-export commonly used types
pub use principal::{OrganizationProfile, Principal, PrincipalKind, Role};
pub use token::{
    Claims, ConsumeOutcome, RefreshToken, TokenPair,
    ACCESS_TOKEN_EXPIRY_MINUTES, REFRESH_TOKEN_EXPIRY_DAYS,
    JWT_ISSUER, JWT_AUDIENCE,
};
