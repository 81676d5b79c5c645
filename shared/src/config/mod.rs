//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `auth` - JWT signing and token lifetime configuration
//! - `database` - Database connection and pool configuration

pub mod auth;
pub mod database;

// Re-export commonly used types
pub use auth::JwtConfig;
pub use database::DatabaseConfig;
