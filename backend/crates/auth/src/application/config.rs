//! Application Configuration
//!
//! Configuration for the Auth application layer. The signing secret is
//! process-wide state initialized once at startup, never a literal in
//! logic.

use std::time::Duration;

use platform::token::TokenSigner;

/// Re-export cookie types from platform
pub use platform::cookie::{CookieConfig, SameSite};

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Session cookie (name, flags); the cookie carries the signed token
    pub cookie: CookieConfig,
    /// Session secret key for HMAC signing (32 bytes)
    pub session_secret: [u8; 32],
    /// Optional token lifetime; `None` means tokens never expire
    pub token_ttl: Option<Duration>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            cookie: CookieConfig::default(),
            session_secret: [0u8; 32],
            token_ttl: None,
        }
    }
}

impl AuthConfig {
    /// Create config with a random session secret (for development)
    pub fn with_random_secret() -> Self {
        use rand::RngCore;
        let mut secret = [0u8; 32];
        rand::rng().fill_bytes(&mut secret);
        Self {
            session_secret: secret,
            ..Default::default()
        }
    }

    /// Create config for development (insecure cookie)
    pub fn development() -> Self {
        let mut config = Self::with_random_secret();
        config.cookie.secure = false;
        config
    }

    /// Build the token signer for this configuration
    pub fn signer(&self) -> TokenSigner {
        let signer = TokenSigner::new(self.session_secret);
        match self.token_ttl {
            Some(ttl) => signer.with_ttl(ttl),
            None => signer,
        }
    }
}
