//! Domain-specific error types for authentication and related operations
//!
//! This module provides error type definitions for registration, credential
//! verification, token management, and input validation. Error messages are
//! mapped to transport responses in the presentation layer.

use thiserror::Error;

/// Authentication-related errors
///
/// These errors represent registration and credential verification failures.
/// `InvalidCredentials` deliberately covers both "no such email" and "wrong
/// password" so callers cannot enumerate registered accounts.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Email already registered")]
    DuplicateEmail,

    #[error("Principal not found")]
    PrincipalNotFound,
}

/// Token-related errors
///
/// These errors represent token validation and lifecycle failures.
#[derive(Error, Debug)]
pub enum TokenError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Token not yet valid")]
    TokenNotYetValid,

    #[error("Refresh token reuse detected")]
    TokenReuseDetected,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}

/// Validation errors
///
/// These errors represent input validation failures. Each variant names the
/// offending field so the presentation layer can attach field-level details.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Required field: {field}")]
    RequiredField { field: String },

    #[error("Invalid email")]
    InvalidEmail,

    #[error("Invalid length: {field} (minimum: {min}, actual: {actual})")]
    InvalidLength {
        field: String,
        min: usize,
        actual: usize,
    },

    #[error("Pattern mismatch: {field}")]
    PatternMismatch { field: String },

    #[error("Field not applicable: {field}")]
    UnexpectedField { field: String },
}

impl ValidationError {
    /// The name of the field that failed validation, if any
    pub fn field(&self) -> Option<&str> {
        match self {
            ValidationError::RequiredField { field } => Some(field),
            ValidationError::InvalidEmail => Some("email"),
            ValidationError::InvalidLength { field, .. } => Some(field),
            ValidationError::PatternMismatch { field } => Some(field),
            ValidationError::UnexpectedField { field } => Some(field),
        }
    }
}

/// Credential store errors
///
/// These errors surface from repository implementations. `Unavailable` marks
/// infrastructure faults that callers must not retry silently.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Record not found")]
    NotFound,

    #[error("Duplicate email")]
    DuplicateEmail,

    #[error("Store unavailable: {message}")]
    Unavailable { message: String },
}
