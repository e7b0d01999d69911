//! HTTP Handlers

use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

use crate::application::{
    ListComplaintsUseCase, SubmitComplaintInput, SubmitComplaintUseCase, UploadedFile,
};
use crate::domain::repository::ComplaintRepository;
use crate::error::ComplaintError;
use crate::infra::upload::DiskUploadStore;
use crate::presentation::dto::ComplaintRecord;

/// Shared state for complaint handlers
#[derive(Clone)]
pub struct ComplaintAppState<R>
where
    R: ComplaintRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub uploads: Arc<DiskUploadStore>,
}

// ============================================================================
// Submit
// ============================================================================

/// POST /
///
/// Multipart form: `user_email`, `user_name`, `user_location`,
/// `user_message` text parts plus one `uploaded_file` file part.
/// 302 to `/` on success; 400 when the file part is absent.
pub async fn submit_complaint<R>(
    State(state): State<ComplaintAppState<R>>,
    mut multipart: Multipart,
) -> Result<Response, ComplaintError>
where
    R: ComplaintRepository + Clone + Send + Sync + 'static,
{
    let mut email = String::new();
    let mut name = String::new();
    let mut location = String::new();
    let mut message = String::new();
    let mut file: Option<UploadedFile> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| ComplaintError::Malformed)?
    {
        // Own the part name up front: reading a field consumes it
        let Some(part) = field.name().map(str::to_string) else {
            continue;
        };

        match part.as_str() {
            "user_email" => {
                email = field.text().await.map_err(|_| ComplaintError::Malformed)?;
            }
            "user_name" => {
                name = field.text().await.map_err(|_| ComplaintError::Malformed)?;
            }
            "user_location" => {
                location = field.text().await.map_err(|_| ComplaintError::Malformed)?;
            }
            "user_message" => {
                message = field.text().await.map_err(|_| ComplaintError::Malformed)?;
            }
            "uploaded_file" => {
                // Browsers send an empty file part when nothing was
                // selected; treat that the same as no part at all
                let original_name = field
                    .file_name()
                    .filter(|n| !n.is_empty())
                    .map(str::to_string);

                let Some(original_name) = original_name else {
                    continue;
                };

                let bytes = field.bytes().await.map_err(|_| ComplaintError::Malformed)?;
                file = Some(UploadedFile {
                    original_name,
                    bytes: bytes.to_vec(),
                });
            }
            _ => {}
        }
    }

    let use_case = SubmitComplaintUseCase::new(state.repo.clone(), state.uploads.clone());

    use_case
        .execute(SubmitComplaintInput {
            email,
            name,
            location,
            message,
            file,
        })
        .await?;

    Ok(found("/"))
}

// ============================================================================
// Admin listing
// ============================================================================

/// GET /admin/complaints
pub async fn list_complaints<R>(
    State(state): State<ComplaintAppState<R>>,
) -> Result<Json<Vec<ComplaintRecord>>, Response>
where
    R: ComplaintRepository + Clone + Send + Sync + 'static,
{
    let use_case = ListComplaintsUseCase::new(state.repo.clone());

    match use_case.execute().await {
        Ok(complaints) => Ok(Json(
            complaints.into_iter().map(ComplaintRecord::from).collect(),
        )),
        Err(e) => {
            tracing::error!(error = %e, "Failed to fetch complaints");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error fetching complaints",
            )
                .into_response())
        }
    }
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
