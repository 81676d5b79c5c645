//! Password hashing module
//!
//! One-way, salted credential transformation. Verification re-derives and
//! compares; the plaintext is never recoverable from the stored value.

mod hasher;

pub use hasher::{PasswordHasher, HASH_COST};
