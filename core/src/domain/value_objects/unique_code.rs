//! One-time onboarding code issued at registration.

use rand::rngs::OsRng;
use rand::RngCore;

/// Number of random bytes in a unique code
pub const CODE_BYTE_LENGTH: usize = 4;

/// Random onboarding code returned to the caller at registration time
///
/// The code is not persisted by this crate; downstream collaborators own any
/// further lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UniqueCode {
    bytes: [u8; CODE_BYTE_LENGTH],
}

impl UniqueCode {
    /// Generates a new code from the operating system CSPRNG
    pub fn generate() -> Self {
        let mut bytes = [0u8; CODE_BYTE_LENGTH];
        OsRng.fill_bytes(&mut bytes);
        Self { bytes }
    }

    /// Raw code bytes
    pub fn as_bytes(&self) -> &[u8; CODE_BYTE_LENGTH] {
        &self.bytes
    }

    /// Lowercase hex representation (two characters per byte)
    pub fn to_hex(&self) -> String {
        hex::encode(self.bytes)
    }
}

impl std::fmt::Display for UniqueCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_code_has_fixed_length() {
        let code = UniqueCode::generate();
        assert_eq!(code.as_bytes().len(), CODE_BYTE_LENGTH);
        assert_eq!(code.to_hex().len(), CODE_BYTE_LENGTH * 2);
    }

    #[test]
    fn test_hex_is_lowercase_hex() {
        let code = UniqueCode::generate();
        assert!(code.to_hex().chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(code.to_hex(), code.to_string());
    }

    #[test]
    fn test_codes_are_random() {
        // Two fresh codes colliding is a 1-in-2^32 event; treat as failure.
        let first = UniqueCode::generate();
        let second = UniqueCode::generate();
        assert_ne!(first, second);
    }
}
