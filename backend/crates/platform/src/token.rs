//! Signed Session Tokens
//!
//! Stateless, self-contained session tokens: a base64url JSON claims
//! payload signed with HMAC-SHA256 under a server-held secret, in the
//! form `<payload>.<signature>`. A token is trusted if and only if its
//! signature verifies; there is no server-side session state and no
//! revocation list. Expiry is optional and disabled unless a TTL is
//! configured.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::Utc;
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use std::time::Duration;
use thiserror::Error;

/// Token verification errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// Token structure is not `<payload>.<signature>` or not decodable
    #[error("Malformed token")]
    Malformed,

    /// Signature does not match the payload
    #[error("Invalid token signature")]
    BadSignature,

    /// Token carried an expiry that has passed
    #[error("Token expired")]
    Expired,
}

/// Claims carried by a session token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Identity of the signed-in user
    pub email: String,
    /// Expiry in epoch milliseconds; absent when no TTL is configured
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at_ms: Option<i64>,
}

/// Issues and verifies signed session tokens
#[derive(Clone)]
pub struct TokenSigner {
    secret: [u8; 32],
    ttl: Option<Duration>,
}

impl TokenSigner {
    /// Create a signer with no expiry (signature-only trust)
    pub fn new(secret: [u8; 32]) -> Self {
        Self { secret, ttl: None }
    }

    /// Enable token expiry
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = Some(ttl);
        self
    }

    /// Issue a signed token carrying the given email
    pub fn issue(&self, email: &str) -> String {
        let claims = Claims {
            email: email.to_string(),
            expires_at_ms: self
                .ttl
                .map(|ttl| Utc::now().timestamp_millis() + ttl.as_millis() as i64),
        };

        // Claims serialization cannot fail for this shape
        let json = serde_json::to_vec(&claims).expect("Claims are always serializable");
        let payload = URL_SAFE_NO_PAD.encode(&json);

        let mut mac = Hmac::<Sha256>::new_from_slice(&self.secret)
            .expect("HMAC can take key of any size");
        mac.update(payload.as_bytes());
        let signature = mac.finalize().into_bytes();

        format!("{}.{}", payload, URL_SAFE_NO_PAD.encode(signature))
    }

    /// Verify a token and extract its claims
    ///
    /// Fails on malformed structure, bad signature, or (when the token
    /// carries one) a passed expiry.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let (payload, signature_b64) = token.split_once('.').ok_or(TokenError::Malformed)?;

        if payload.is_empty() || signature_b64.contains('.') {
            return Err(TokenError::Malformed);
        }

        let signature = URL_SAFE_NO_PAD
            .decode(signature_b64)
            .map_err(|_| TokenError::Malformed)?;

        let mut mac = Hmac::<Sha256>::new_from_slice(&self.secret)
            .expect("HMAC can take key of any size");
        mac.update(payload.as_bytes());
        mac.verify_slice(&signature)
            .map_err(|_| TokenError::BadSignature)?;

        let json = URL_SAFE_NO_PAD
            .decode(payload)
            .map_err(|_| TokenError::Malformed)?;
        let claims: Claims = serde_json::from_slice(&json).map_err(|_| TokenError::Malformed)?;

        if let Some(expires_at_ms) = claims.expires_at_ms {
            if Utc::now().timestamp_millis() >= expires_at_ms {
                return Err(TokenError::Expired);
            }
        }

        Ok(claims)
    }
}

impl std::fmt::Debug for TokenSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenSigner")
            .field("secret", &"[SECRET]")
            .field("ttl", &self.ttl)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signer() -> TokenSigner {
        TokenSigner::new([7u8; 32])
    }

    #[test]
    fn test_issue_verify_roundtrip() {
        let token = signer().issue("user@example.com");
        let claims = signer().verify(&token).unwrap();
        assert_eq!(claims.email, "user@example.com");
        assert!(claims.expires_at_ms.is_none());
    }

    #[test]
    fn test_tampered_payload_rejected() {
        let token = signer().issue("user@example.com");
        let (payload, sig) = token.split_once('.').unwrap();

        let other = URL_SAFE_NO_PAD.encode(br#"{"email":"admin@example.com"}"#);
        let forged = format!("{}.{}", other, sig);
        assert_eq!(signer().verify(&forged), Err(TokenError::BadSignature));

        // Untouched payload with the original signature still verifies
        let original = format!("{}.{}", payload, sig);
        assert!(signer().verify(&original).is_ok());
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = signer().issue("user@example.com");
        let other = TokenSigner::new([8u8; 32]);
        assert_eq!(other.verify(&token), Err(TokenError::BadSignature));
    }

    #[test]
    fn test_malformed_tokens_rejected() {
        assert_eq!(signer().verify(""), Err(TokenError::Malformed));
        assert_eq!(signer().verify("no-dot-here"), Err(TokenError::Malformed));
        assert_eq!(signer().verify(".sig-only"), Err(TokenError::Malformed));
        assert_eq!(
            signer().verify("a.b.c"),
            Err(TokenError::Malformed),
            "extra separator must not pass"
        );
        assert_eq!(
            signer().verify("payload.!!not-base64!!"),
            Err(TokenError::Malformed)
        );
    }

    #[test]
    fn test_expired_token_rejected() {
        let signer = TokenSigner::new([7u8; 32]).with_ttl(Duration::from_millis(1));
        let token = signer.issue("user@example.com");
        std::thread::sleep(Duration::from_millis(5));
        assert_eq!(signer.verify(&token), Err(TokenError::Expired));
    }

    #[test]
    fn test_ttl_token_carries_expiry() {
        let signer = TokenSigner::new([7u8; 32]).with_ttl(Duration::from_secs(3600));
        let token = signer.issue("user@example.com");
        let claims = signer.verify(&token).unwrap();
        assert!(claims.expires_at_ms.is_some());
    }
}
