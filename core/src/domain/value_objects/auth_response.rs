//! Authentication and registration response value objects.

use serde::{Deserialize, Serialize};

use crate::domain::entities::token::TokenPair;
use crate::domain::value_objects::principal_view::PrincipalView;
use crate::domain::value_objects::unique_code::UniqueCode;

/// Response returned after successful login
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    /// The authenticated principal, without its password
    pub principal: PrincipalView,

    /// JWT access token for API authentication
    pub access_token: String,

    /// Opaque refresh token for obtaining new access tokens
    pub refresh_token: String,

    /// Access token expiration time in seconds
    pub expires_in: i64,
}

impl AuthResponse {
    /// Creates an authentication response from a token pair and principal view
    pub fn from_token_pair(token_pair: TokenPair, principal: PrincipalView) -> Self {
        Self {
            principal,
            access_token: token_pair.access_token,
            refresh_token: token_pair.refresh_token,
            expires_in: token_pair.access_expires_in,
        }
    }
}

/// Response returned after successful registration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistrationResponse {
    /// The newly created principal, without its password
    pub principal: PrincipalView,

    /// One-time onboarding code, hex encoded
    pub unique_code: String,

    /// JWT access token for API authentication
    pub access_token: String,

    /// Opaque refresh token for obtaining new access tokens
    pub refresh_token: String,

    /// Access token expiration time in seconds
    pub expires_in: i64,
}

impl RegistrationResponse {
    /// Creates a registration response from its parts
    pub fn new(principal: PrincipalView, unique_code: UniqueCode, token_pair: TokenPair) -> Self {
        Self {
            principal,
            unique_code: unique_code.to_hex(),
            access_token: token_pair.access_token,
            refresh_token: token_pair.refresh_token,
            expires_in: token_pair.access_expires_in,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::principal::Principal;

    #[test]
    fn test_registration_response_hex_encodes_code() {
        let principal = Principal::new_user("a@x.com".to_string(), "hash".to_string());
        let code = UniqueCode::generate();
        let pair = TokenPair::new("access".to_string(), "refresh".to_string(), 900, 604800);

        let response = RegistrationResponse::new(PrincipalView::from(&principal), code, pair);

        assert_eq!(response.unique_code, code.to_hex());
        assert_eq!(response.unique_code.len(), 8);
        assert_eq!(response.expires_in, 900);
    }

    #[test]
    fn test_auth_response_from_token_pair() {
        let principal = Principal::new_user("a@x.com".to_string(), "hash".to_string());
        let pair = TokenPair::new("access".to_string(), "refresh".to_string(), 900, 604800);

        let response = AuthResponse::from_token_pair(pair, PrincipalView::from(&principal));

        assert_eq!(response.access_token, "access");
        assert_eq!(response.refresh_token, "refresh");
        assert_eq!(response.expires_in, 900);
        assert_eq!(response.principal.email, "a@x.com");
    }
}
