//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::user::User;
use crate::domain::value_object::email::Email;
use crate::error::AuthResult;

/// User repository trait
///
/// `create` must surface a unique-violation on the email key as
/// `AuthError::UserAlreadyExists` so a lost check-then-insert race
/// reports the same outcome as the up-front existence check.
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Create a new user
    async fn create(&self, user: &User) -> AuthResult<()>;

    /// Find user by email
    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>>;

    /// Check if a user exists for this email
    async fn exists_by_email(&self, email: &Email) -> AuthResult<bool>;
}
