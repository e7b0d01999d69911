//! Form DTOs
//!
//! Field names match the HTML forms (and the persisted wire contract),
//! hence no rename attributes. No `Debug` derives: two of these carry
//! plaintext passwords.

use serde::Deserialize;

/// POST /signup form body
#[derive(Deserialize)]
pub struct SignUpForm {
    pub user_email: String,
    pub user_pwd: String,
    pub confirm_pwd: String,
}

/// POST /login form body
#[derive(Deserialize)]
pub struct LoginForm {
    pub user_email: String,
    pub user_pwd: String,
}
