//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for the Signet backend.
//! It provides the MySQL-backed implementations of the credential store and
//! refresh token store that `sg_core` defines as traits, plus the connection
//! pool they run on.

pub mod database;

pub use database::connection::{DatabasePool, PoolStatistics};
pub use database::mysql::{MySqlPrincipalRepository, MySqlTokenRepository};

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection or query error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
