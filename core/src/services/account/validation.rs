//! Field and password validation for account operations
//!
//! Validation is an explicit pipeline stage run by the account service
//! before hashing and persistence, and it fails fast: the first violation
//! encountered is reported, not the full set.

use once_cell::sync::Lazy;
use regex::Regex;

use sg_shared::utils::email::is_valid_email;
use sg_shared::utils::validation::validators;

use crate::domain::entities::principal::OrganizationProfile;
use crate::errors::ValidationError;

/// Minimum password length
pub const PASSWORD_MIN_LENGTH: usize = 8;

/// Minimum phone number length (digits plus leading zero, original format)
pub const PHONE_MIN_LENGTH: usize = 11;

static CONTAINS_LETTER: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Za-z]").unwrap());
static CONTAINS_DIGIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d").unwrap());

/// Validates password shape: minimum length, at least one letter and one
/// digit
pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.len() < PASSWORD_MIN_LENGTH {
        return Err(ValidationError::InvalidLength {
            field: "password".to_string(),
            min: PASSWORD_MIN_LENGTH,
            actual: password.len(),
        });
    }
    if !CONTAINS_LETTER.is_match(password) || !CONTAINS_DIGIT.is_match(password) {
        return Err(ValidationError::PatternMismatch {
            field: "password".to_string(),
        });
    }
    Ok(())
}

/// Validates the shape of an already-normalized email address
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if !is_valid_email(email) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

/// Validates an organization profile, failing on the first bad field
pub fn validate_profile(profile: &OrganizationProfile) -> Result<(), ValidationError> {
    let required = [
        ("display_name", &profile.display_name),
        ("organization", &profile.organization),
        ("phone_number", &profile.phone_number),
        ("address", &profile.address),
        ("state", &profile.state),
        ("landmark", &profile.landmark),
        ("position", &profile.position),
        ("next_of_kin", &profile.next_of_kin),
    ];

    for (field, value) in required {
        if !validators::not_empty(value) {
            return Err(ValidationError::RequiredField {
                field: field.to_string(),
            });
        }
    }

    validate_phone("phone_number", &profile.phone_number)?;
    if let Some(alternate) = &profile.alternate_phone_number {
        validate_phone("alternate_phone_number", alternate)?;
    }

    Ok(())
}

fn validate_phone(field: &str, phone: &str) -> Result<(), ValidationError> {
    if !validators::min_length(phone, PHONE_MIN_LENGTH) {
        return Err(ValidationError::InvalidLength {
            field: field.to_string(),
            min: PHONE_MIN_LENGTH,
            actual: phone.len(),
        });
    }
    Ok(())
}
