//! Authentication
//!
//! The identity provider is external; this server only verifies the session
//! tokens it issues and extracts the `sub` claim as the caller subject.

mod identity;
pub mod jwt;

pub use identity::{Identity, MaybeIdentity};

/// Runtime auth settings, attached to the router as an Extension
#[derive(Clone)]
pub struct AuthSettings {
    pub enabled: bool,
    /// HS256 verification secret; present whenever auth is enabled
    pub secret: Option<Vec<u8>>,
}

impl AuthSettings {
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            secret: None,
        }
    }

    pub fn with_secret(secret: Vec<u8>) -> Self {
        Self {
            enabled: true,
            secret: Some(secret),
        }
    }
}
