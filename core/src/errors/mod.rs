//! Domain-specific error types and error handling.

mod types;

#[cfg(test)]
mod tests;

// Re-export all error types
pub use types::{AuthError, StoreError, TokenError, ValidationError};

use sg_shared::errors::{error_codes, ErrorResponse, IntoErrorResponse};
use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    ValidationErr(#[from] ValidationError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type DomainResult<T> = Result<T, DomainError>;

impl DomainError {
    /// Stable error code for transport-layer mapping
    pub fn error_code(&self) -> &'static str {
        match self {
            DomainError::Internal { .. } => error_codes::INTERNAL_ERROR,
            DomainError::Auth(AuthError::InvalidCredentials) => error_codes::INVALID_CREDENTIALS,
            DomainError::Auth(AuthError::DuplicateEmail) => error_codes::DUPLICATE_EMAIL,
            DomainError::Auth(AuthError::PrincipalNotFound) => error_codes::NOT_FOUND,
            DomainError::Token(TokenError::TokenExpired) => error_codes::TOKEN_EXPIRED,
            DomainError::Token(TokenError::TokenReuseDetected) => error_codes::TOKEN_REUSED,
            DomainError::Token(TokenError::TokenGenerationFailed) => error_codes::INTERNAL_ERROR,
            DomainError::Token(_) => error_codes::TOKEN_INVALID,
            DomainError::ValidationErr(_) => error_codes::VALIDATION_ERROR,
            DomainError::Store(StoreError::NotFound) => error_codes::NOT_FOUND,
            DomainError::Store(StoreError::DuplicateEmail) => error_codes::DUPLICATE_EMAIL,
            DomainError::Store(StoreError::Unavailable { .. }) => error_codes::DATABASE_ERROR,
        }
    }
}

impl IntoErrorResponse for DomainError {
    fn to_error_response(&self) -> ErrorResponse {
        let response = ErrorResponse::new(self.error_code(), self.to_string());
        match self {
            DomainError::ValidationErr(err) => match err.field() {
                Some(field) => response.add_detail("field", field),
                None => response,
            },
            _ => response,
        }
    }
}
