//! Static Pages
//!
//! Embedded page serving; the templates are plain HTML shipped with
//! the binary. The home route picks its variant by verifying the
//! session cookie - unauthenticated is the default.

use auth::AuthConfig;
use auth::application::CheckSessionUseCase;
use axum::Router;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::Html;
use axum::routing::get;
use platform::cookie::extract_cookie;
use std::sync::Arc;

const HOME: &str = include_str!("../templates/home.html");
pub const HOME_SIGNED_IN: &str = include_str!("../templates/home_signed_in.html");
const SIGNUP: &str = include_str!("../templates/signup.html");
const LOGIN: &str = include_str!("../templates/login.html");
const ADMIN: &str = include_str!("../templates/admin.html");

#[derive(Clone)]
struct PageState {
    config: Arc<AuthConfig>,
}

/// Router for the page GETs
pub fn pages_router(config: AuthConfig) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/signup", get(signup_page))
        .route("/login", get(login_page))
        .route("/admin", get(admin_page))
        .with_state(PageState {
            config: Arc::new(config),
        })
}

/// GET /
async fn home(State(state): State<PageState>, headers: HeaderMap) -> Html<&'static str> {
    let check = CheckSessionUseCase::new(state.config.clone());

    let authenticated = extract_cookie(&headers, &state.config.cookie.name)
        .map(|token| check.is_valid(&token))
        .unwrap_or(false);

    if authenticated {
        Html(HOME_SIGNED_IN)
    } else {
        Html(HOME)
    }
}

/// GET /signup
async fn signup_page() -> Html<&'static str> {
    Html(SIGNUP)
}

/// GET /login
async fn login_page() -> Html<&'static str> {
    Html(LOGIN)
}

/// GET /admin
async fn admin_page() -> Html<&'static str> {
    Html(ADMIN)
}
