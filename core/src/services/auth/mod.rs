//! Credential verification module
//!
//! Verifies email/password pairs at login and hands successful callers an
//! authenticated principal plus a fresh token pair.

mod service;

#[cfg(test)]
mod tests;

pub use service::CredentialVerifier;
