//! HTTP Handlers

use axum::extract::{Form, State};
use axum::http::{StatusCode, header};
use axum::response::{Html, IntoResponse, Response};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::{SignInInput, SignInUseCase, SignUpInput, SignUpUseCase};
use crate::domain::repository::UserRepository;
use crate::error::AuthResult;
use crate::presentation::dto::{LoginForm, SignUpForm};

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
    /// Home page variant rendered after a successful login; page content
    /// is owned by the boundary (the api binary), not by this crate
    pub signed_in_home: &'static str,
}

// ============================================================================
// Sign Up
// ============================================================================

/// POST /signup
///
/// 302 to `/` on success; validation failures come back as plain text
/// via `AuthError`'s response conversion.
pub async fn sign_up<R>(
    State(state): State<AuthAppState<R>>,
    Form(form): Form<SignUpForm>,
) -> AuthResult<Response>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = SignUpUseCase::new(state.repo.clone());

    let input = SignUpInput {
        email: form.user_email,
        password: form.user_pwd,
        password_confirmation: form.confirm_pwd,
    };

    use_case.execute(input).await?;

    Ok(found("/"))
}

// ============================================================================
// Sign In
// ============================================================================

/// POST /login
///
/// Sets the `auth_token` cookie and renders the signed-in home view.
pub async fn sign_in<R>(
    State(state): State<AuthAppState<R>>,
    Form(form): Form<LoginForm>,
) -> AuthResult<Response>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = SignInUseCase::new(state.repo.clone(), state.config.clone());

    let input = SignInInput {
        email: form.user_email,
        password: form.user_pwd,
    };

    let output = use_case.execute(input).await?;

    let cookie = state.config.cookie.build_set_cookie(&output.token);

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Html(state.signed_in_home),
    )
        .into_response())
}

// ============================================================================
// Sign Out
// ============================================================================

/// GET /logout
///
/// Clears the cookie unconditionally and redirects to the login page.
/// Tokens are stateless, so there is nothing to invalidate server-side.
pub async fn sign_out<R>(State(state): State<AuthAppState<R>>) -> Response
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let cookie = state.config.cookie.build_delete_cookie();

    ([(header::SET_COOKIE, cookie)], found("/login")).into_response()
}

// ============================================================================
// Helper Functions
// ============================================================================

/// 302 Found redirect (axum's `Redirect::to` is a 303)
fn found(location: &str) -> Response {
    (
        StatusCode::FOUND,
        [(header::LOCATION, location.to_string())],
    )
        .into_response()
}
