pub mod principal;
pub mod token;

pub use principal::{InMemoryPrincipalRepository, PrincipalRepository};
pub use token::{InMemoryTokenRepository, TokenRepository};
