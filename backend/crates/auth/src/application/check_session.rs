//! Check Session Use Case
//!
//! Verifies a session token and yields its claims. Sessions are
//! stateless: validity is purely a function of the signature (plus
//! expiry when a TTL is configured), so there is no repository here.

use std::sync::Arc;

use platform::token::Claims;

use crate::application::config::AuthConfig;
use crate::error::{AuthError, AuthResult};

/// Check session use case
pub struct CheckSessionUseCase {
    config: Arc<AuthConfig>,
}

impl CheckSessionUseCase {
    pub fn new(config: Arc<AuthConfig>) -> Self {
        Self { config }
    }

    /// Verify the token and return its claims
    pub fn execute(&self, token: &str) -> AuthResult<Claims> {
        self.config
            .signer()
            .verify(token)
            .map_err(|_| AuthError::SessionInvalid)
    }

    /// Just check if the token is valid (returns bool)
    pub fn is_valid(&self, token: &str) -> bool {
        self.execute(token).is_ok()
    }
}
