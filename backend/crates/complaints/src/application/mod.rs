//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod list_complaints;
pub mod submit_complaint;

// Re-exports
pub use config::ComplaintConfig;
pub use list_complaints::ListComplaintsUseCase;
pub use submit_complaint::{SubmitComplaintInput, SubmitComplaintUseCase, UploadedFile};
