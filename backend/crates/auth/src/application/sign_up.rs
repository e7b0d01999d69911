//! Sign Up Use Case
//!
//! Creates a new user account. Step order is fixed: confirmation match,
//! then availability, then hashing, then the insert. The insert is the
//! only mutation, so any earlier failure leaves no partial record.

use std::sync::Arc;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    email::Email,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AuthError, AuthResult};

/// Sign up input
pub struct SignUpInput {
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
}

/// Sign up use case
pub struct SignUpUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> SignUpUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    pub async fn execute(&self, input: SignUpInput) -> AuthResult<()> {
        if input.password != input.password_confirmation {
            return Err(AuthError::PasswordMismatch);
        }

        let email = Email::new(input.email)
            .map_err(|e| AuthError::Validation(e.message().to_string()))?;

        // Check-then-insert; the unique key on email backstops the race
        if self.user_repo.exists_by_email(&email).await? {
            return Err(AuthError::UserAlreadyExists);
        }

        let raw_password = RawPassword::new(input.password)
            .map_err(|e| AuthError::Validation(e.message().to_string()))?;
        let password_hash = UserPassword::from_raw(&raw_password)
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        let user = User::new(email, password_hash);
        self.user_repo.create(&user).await?;

        tracing::info!(email = %user.email, "User signed up");

        Ok(())
    }
}
