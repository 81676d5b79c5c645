//! Token service module for JWT management
//!
//! This module handles all token-related operations including:
//! - JWT access token generation and verification
//! - Opaque refresh token issuance and storage
//! - Refresh token rotation with reuse detection

mod config;
mod refresher;
mod service;

#[cfg(test)]
mod tests;

pub use config::TokenServiceConfig;
pub use refresher::TokenRefresher;
pub use service::TokenService;
