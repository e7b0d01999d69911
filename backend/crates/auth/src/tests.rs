//! Unit tests for the auth crate
//!
//! Use cases run against an in-memory repository fake; nothing here
//! touches PostgreSQL.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::application::{
    CheckSessionUseCase, SignInInput, SignInUseCase, SignUpInput, SignUpUseCase,
    config::AuthConfig,
};
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{email::Email, user_password::RawPassword};
use crate::error::{AuthError, AuthResult};

/// In-memory user store keyed by the exact email string
#[derive(Clone, Default)]
struct InMemoryUsers {
    users: Arc<Mutex<HashMap<String, User>>>,
}

impl InMemoryUsers {
    fn count(&self) -> usize {
        self.users.lock().unwrap().len()
    }

    fn get(&self, email: &str) -> Option<User> {
        self.users.lock().unwrap().get(email).cloned()
    }
}

impl UserRepository for InMemoryUsers {
    async fn create(&self, user: &User) -> AuthResult<()> {
        let mut users = self.users.lock().unwrap();
        if users.contains_key(user.email.as_str()) {
            return Err(AuthError::UserAlreadyExists);
        }
        users.insert(user.email.as_str().to_string(), user.clone());
        Ok(())
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>> {
        Ok(self.users.lock().unwrap().get(email.as_str()).cloned())
    }

    async fn exists_by_email(&self, email: &Email) -> AuthResult<bool> {
        Ok(self.users.lock().unwrap().contains_key(email.as_str()))
    }
}

fn sign_up_input(email: &str, password: &str, confirmation: &str) -> SignUpInput {
    SignUpInput {
        email: email.to_string(),
        password: password.to_string(),
        password_confirmation: confirmation.to_string(),
    }
}

fn sign_in_input(email: &str, password: &str) -> SignInInput {
    SignInInput {
        email: email.to_string(),
        password: password.to_string(),
    }
}

#[tokio::test]
async fn signup_creates_user_with_verifiable_hash() {
    let repo = Arc::new(InMemoryUsers::default());
    let use_case = SignUpUseCase::new(repo.clone());

    use_case
        .execute(sign_up_input("a@x.com", "pw1", "pw1"))
        .await
        .unwrap();

    let user = repo.get("a@x.com").expect("user persisted");
    let raw = RawPassword::new("pw1".to_string()).unwrap();
    assert!(user.password_hash.verify(&raw));
    assert_ne!(user.password_hash.as_phc_string(), "pw1");
}

#[tokio::test]
async fn signup_mismatched_passwords_creates_nothing() {
    let repo = Arc::new(InMemoryUsers::default());
    let use_case = SignUpUseCase::new(repo.clone());

    let err = use_case
        .execute(sign_up_input("a@x.com", "pw1", "pw2"))
        .await
        .unwrap_err();

    assert!(matches!(err, AuthError::PasswordMismatch));
    assert_eq!(err.to_string(), "Passwords don't match!");
    assert_eq!(repo.count(), 0);
}

#[tokio::test]
async fn signup_duplicate_email_keeps_original_record() {
    let repo = Arc::new(InMemoryUsers::default());
    let use_case = SignUpUseCase::new(repo.clone());

    use_case
        .execute(sign_up_input("a@x.com", "pw1", "pw1"))
        .await
        .unwrap();

    let err = use_case
        .execute(sign_up_input("a@x.com", "pw2", "pw2"))
        .await
        .unwrap_err();

    assert!(matches!(err, AuthError::UserAlreadyExists));
    assert_eq!(err.to_string(), "User already exists");

    // Exactly one record, still verifying against the original password
    assert_eq!(repo.count(), 1);
    let user = repo.get("a@x.com").unwrap();
    let original = RawPassword::new("pw1".to_string()).unwrap();
    let replacement = RawPassword::new("pw2".to_string()).unwrap();
    assert!(user.password_hash.verify(&original));
    assert!(!user.password_hash.verify(&replacement));
}

#[tokio::test]
async fn signup_empty_email_rejected() {
    let repo = Arc::new(InMemoryUsers::default());
    let use_case = SignUpUseCase::new(repo.clone());

    let err = use_case
        .execute(sign_up_input("", "pw1", "pw1"))
        .await
        .unwrap_err();

    assert!(matches!(err, AuthError::Validation(_)));
    assert_eq!(repo.count(), 0);
}

#[tokio::test]
async fn login_issues_token_carrying_the_email() {
    let repo = Arc::new(InMemoryUsers::default());
    let config = Arc::new(AuthConfig::with_random_secret());

    SignUpUseCase::new(repo.clone())
        .execute(sign_up_input("a@x.com", "pw1", "pw1"))
        .await
        .unwrap();

    let output = SignInUseCase::new(repo.clone(), config.clone())
        .execute(sign_in_input("a@x.com", "pw1"))
        .await
        .unwrap();

    let claims = CheckSessionUseCase::new(config).execute(&output.token).unwrap();
    assert_eq!(claims.email, "a@x.com");
}

#[tokio::test]
async fn login_failure_messages_are_indistinguishable() {
    let repo = Arc::new(InMemoryUsers::default());
    let config = Arc::new(AuthConfig::with_random_secret());

    SignUpUseCase::new(repo.clone())
        .execute(sign_up_input("a@x.com", "pw1", "pw1"))
        .await
        .unwrap();

    let use_case = SignInUseCase::new(repo.clone(), config);

    let wrong_password = use_case
        .execute(sign_in_input("a@x.com", "wrongpw"))
        .await
        .unwrap_err();
    let unknown_user = use_case
        .execute(sign_in_input("nobody@x.com", "pw1"))
        .await
        .unwrap_err();

    assert_eq!(wrong_password.to_string(), "Invalid email or password");
    assert_eq!(unknown_user.to_string(), wrong_password.to_string());
    assert_eq!(
        wrong_password.status_code(),
        unknown_user.status_code(),
        "status must not leak which check failed"
    );
}

#[tokio::test]
async fn login_email_is_case_sensitive() {
    let repo = Arc::new(InMemoryUsers::default());
    let config = Arc::new(AuthConfig::with_random_secret());

    SignUpUseCase::new(repo.clone())
        .execute(sign_up_input("A@x.com", "pw1", "pw1"))
        .await
        .unwrap();

    // Identifiers are compared exactly as supplied
    let err = SignInUseCase::new(repo.clone(), config)
        .execute(sign_in_input("a@x.com", "pw1"))
        .await
        .unwrap_err();
    assert!(matches!(err, AuthError::InvalidCredentials));
}

#[tokio::test]
async fn check_session_rejects_tampering() {
    let config = Arc::new(AuthConfig::with_random_secret());
    let check = CheckSessionUseCase::new(config.clone());

    let token = config.signer().issue("a@x.com");
    assert!(check.is_valid(&token));

    let mut tampered = token.clone();
    tampered.push('A');
    assert!(!check.is_valid(&tampered));
    assert!(!check.is_valid("garbage"));

    // A token signed under a different secret never validates here
    let foreign = AuthConfig::with_random_secret().signer().issue("a@x.com");
    assert!(!check.is_valid(&foreign));
}
