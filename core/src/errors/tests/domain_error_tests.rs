//! Unit tests for domain error conversion and response mapping

use sg_shared::errors::{error_codes, IntoErrorResponse};

use crate::errors::{AuthError, DomainError, StoreError, TokenError, ValidationError};

#[test]
fn test_auth_error_bridges_into_domain_error() {
    let err: DomainError = AuthError::InvalidCredentials.into();
    assert!(matches!(err, DomainError::Auth(AuthError::InvalidCredentials)));
    assert_eq!(err.to_string(), "Invalid credentials");
}

#[test]
fn test_token_error_bridges_into_domain_error() {
    let err: DomainError = TokenError::TokenReuseDetected.into();
    assert!(matches!(
        err,
        DomainError::Token(TokenError::TokenReuseDetected)
    ));
}

#[test]
fn test_error_codes() {
    let cases: Vec<(DomainError, &str)> = vec![
        (
            AuthError::InvalidCredentials.into(),
            error_codes::INVALID_CREDENTIALS,
        ),
        (AuthError::DuplicateEmail.into(), error_codes::DUPLICATE_EMAIL),
        (AuthError::PrincipalNotFound.into(), error_codes::NOT_FOUND),
        (TokenError::TokenExpired.into(), error_codes::TOKEN_EXPIRED),
        (TokenError::InvalidToken.into(), error_codes::TOKEN_INVALID),
        (
            TokenError::TokenReuseDetected.into(),
            error_codes::TOKEN_REUSED,
        ),
        (StoreError::NotFound.into(), error_codes::NOT_FOUND),
        (
            StoreError::Unavailable {
                message: "pool exhausted".to_string(),
            }
            .into(),
            error_codes::DATABASE_ERROR,
        ),
    ];

    for (err, expected) in cases {
        assert_eq!(err.error_code(), expected, "wrong code for {:?}", err);
    }
}

#[test]
fn test_validation_error_response_carries_field_detail() {
    let err: DomainError = ValidationError::RequiredField {
        field: "address".to_string(),
    }
    .into();

    let response = err.to_error_response();
    assert_eq!(response.error, error_codes::VALIDATION_ERROR);

    let details = response.details.expect("field detail should be attached");
    assert_eq!(details.get("field").unwrap(), "address");
}

#[test]
fn test_invalid_email_reports_email_field() {
    let err = ValidationError::InvalidEmail;
    assert_eq!(err.field(), Some("email"));
}

#[test]
fn test_password_length_error_message() {
    let err = ValidationError::InvalidLength {
        field: "password".to_string(),
        min: 8,
        actual: 5,
    };
    assert_eq!(
        err.to_string(),
        "Invalid length: password (minimum: 8, actual: 5)"
    );
}
