//! Complaints Router

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use std::sync::Arc;

use crate::application::config::ComplaintConfig;
use crate::domain::repository::ComplaintRepository;
use crate::infra::postgres::PgComplaintRepository;
use crate::infra::upload::DiskUploadStore;
use crate::presentation::handlers::{self, ComplaintAppState};

/// Create the Complaints router with PostgreSQL repository
pub fn complaints_router(
    repo: PgComplaintRepository,
    uploads: DiskUploadStore,
    config: &ComplaintConfig,
) -> Router {
    complaints_router_generic(repo, uploads, config)
}

/// Create a generic Complaints router for any repository implementation
pub fn complaints_router_generic<R>(
    repo: R,
    uploads: DiskUploadStore,
    config: &ComplaintConfig,
) -> Router
where
    R: ComplaintRepository + Clone + Send + Sync + 'static,
{
    let state = ComplaintAppState {
        repo: Arc::new(repo),
        uploads: Arc::new(uploads),
    };

    Router::new()
        .route("/", post(handlers::submit_complaint::<R>))
        .route("/admin/complaints", get(handlers::list_complaints::<R>))
        .layer(DefaultBodyLimit::max(config.max_upload_bytes))
        .with_state(state)
}
