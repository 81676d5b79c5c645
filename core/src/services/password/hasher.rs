//! Password hashing service implementation

use crate::errors::{DomainError, DomainResult};

/// bcrypt cost factor applied to newly created hashes
pub const HASH_COST: u32 = 8;

/// One-way, salted password hashing with verification by re-derivation
///
/// Hashing is deliberately CPU-expensive; callers must complete it before
/// proceeding (it is not cancellable). Verification never inverts the hash.
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    /// Creates a hasher with the standard cost factor
    pub fn new() -> Self {
        Self { cost: HASH_COST }
    }

    /// Creates a hasher with an explicit cost factor
    ///
    /// Intended for tests that want cheaper hashes; production callers use
    /// `new`.
    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }

    /// Hashes a plaintext password with a per-call random salt
    pub fn hash(&self, plaintext: &str) -> DomainResult<String> {
        bcrypt::hash(plaintext, self.cost).map_err(|e| DomainError::Internal {
            message: format!("Password hashing failed: {}", e),
        })
    }

    /// Verifies a plaintext password against a stored hash
    ///
    /// Malformed stored values verify as `false` rather than raising; a
    /// stored hash that cannot be parsed proves nothing about the password.
    pub fn verify(&self, plaintext: &str, hashed: &str) -> bool {
        bcrypt::verify(plaintext, hashed).unwrap_or(false)
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_never_equals_plaintext() {
        let hasher = PasswordHasher::new();
        let hashed = hasher.hash("pass1234").unwrap();

        assert_ne!(hashed, "pass1234");
        assert!(hashed.starts_with("$2"));
    }

    #[test]
    fn test_verify_round_trip() {
        let hasher = PasswordHasher::new();
        let hashed = hasher.hash("pass1234").unwrap();

        assert!(hasher.verify("pass1234", &hashed));
        assert!(!hasher.verify("wrong", &hashed));
    }

    #[test]
    fn test_hashes_are_salted() {
        let hasher = PasswordHasher::new();
        let first = hasher.hash("pass1234").unwrap();
        let second = hasher.hash("pass1234").unwrap();

        assert_ne!(first, second);
        assert!(hasher.verify("pass1234", &first));
        assert!(hasher.verify("pass1234", &second));
    }

    #[test]
    fn test_malformed_hash_verifies_false() {
        let hasher = PasswordHasher::new();

        assert!(!hasher.verify("pass1234", "not-a-bcrypt-hash"));
        assert!(!hasher.verify("pass1234", ""));
    }
}
