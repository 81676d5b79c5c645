//! Value objects representing immutable domain concepts.

pub mod auth_response;
pub mod principal_view;
pub mod unique_code;

// Re-export commonly used types
pub use auth_response::{AuthResponse, RegistrationResponse};
pub use principal_view::PrincipalView;
pub use unique_code::{UniqueCode, CODE_BYTE_LENGTH};
