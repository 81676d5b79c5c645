//! Account registration and maintenance module
//!
//! This module owns the principal lifecycle outside of login:
//! - Registration of user and organization principals (uniqueness check,
//!   field and password validation, hashing, onboarding code)
//! - Fetch, update, and delete by kind and id

mod requests;
mod service;
mod validation;

#[cfg(test)]
mod tests;

pub use requests::{PrincipalUpdate, RegisterOrganizationRequest, RegisterUserRequest};
pub use service::AccountService;
pub use validation::{validate_password, PASSWORD_MIN_LENGTH};
