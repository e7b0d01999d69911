//! User Entity
//!
//! Credential record: an email identity and its password hash.

use chrono::{DateTime, Utc};

use crate::domain::value_object::{email::Email, user_password::UserPassword};

/// User entity
///
/// Created once at signup; this service never updates or deletes it.
/// At most one record exists per email value.
#[derive(Debug, Clone)]
pub struct User {
    /// Unique identifier, stored exactly as supplied at signup
    pub email: Email,
    /// Argon2id hash of the password (PHC string); plaintext is never kept
    pub password_hash: UserPassword,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user
    pub fn new(email: Email, password_hash: UserPassword) -> Self {
        Self {
            email,
            password_hash,
            created_at: Utc::now(),
        }
    }
}
