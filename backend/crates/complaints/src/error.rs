//! Complaint Error Types

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

use crate::infra::upload::UploadError;

/// Complaint-specific result type alias
pub type ComplaintResult<T> = Result<T, ComplaintError>;

/// Complaint-specific error variants
#[derive(Debug, Error)]
pub enum ComplaintError {
    /// Submission had no `uploaded_file` part
    #[error("No file uploaded")]
    MissingFile,

    /// Multipart body could not be read
    #[error("Malformed multipart request")]
    Malformed,

    /// Writing the uploaded file failed
    #[error("Upload error: {0}")]
    Upload(#[from] UploadError),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl ComplaintError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ComplaintError::MissingFile | ComplaintError::Malformed => StatusCode::BAD_REQUEST,
            ComplaintError::Upload(_) | ComplaintError::Database(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ComplaintError::MissingFile | ComplaintError::Malformed => ErrorKind::BadRequest,
            ComplaintError::Upload(_) | ComplaintError::Database(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Convert to AppError
    ///
    /// Dependency failures collapse to one generic message; details
    /// stay in the logs.
    pub fn to_app_error(&self) -> AppError {
        match self {
            ComplaintError::Upload(_) | ComplaintError::Database(_) => {
                AppError::internal("Error saving complaint")
            }
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            ComplaintError::Database(e) => {
                tracing::error!(error = %e, "Complaint database error");
            }
            ComplaintError::Upload(e) => {
                tracing::error!(error = %e, "Complaint upload error");
            }
            _ => {
                tracing::debug!(error = %self, "Complaint error");
            }
        }
    }
}

impl IntoResponse for ComplaintError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}
