//! Business services containing domain logic and use cases.

pub mod account;
pub mod auth;
pub mod password;
pub mod token;

// Re-export commonly used types
pub use account::{
    AccountService, PrincipalUpdate, RegisterOrganizationRequest, RegisterUserRequest,
};
pub use auth::CredentialVerifier;
pub use password::PasswordHasher;
pub use token::{TokenRefresher, TokenService, TokenServiceConfig};
