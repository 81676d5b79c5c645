//! Tests for the credential verifier
