//! Shared utilities and common types for Signet server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Error response structures
//! - Utility functions (email handling, field validation)

pub mod config;
pub mod errors;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{DatabaseConfig, JwtConfig};
pub use errors::{error_codes, ErrorResponse, IntoErrorResponse};
pub use utils::{email, validation};
