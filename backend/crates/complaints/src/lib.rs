//! Complaints Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Complaint entity, repository trait
//! - `application/` - Submission and listing use cases
//! - `infra/` - Database implementation, disk upload store
//! - `presentation/` - Multipart handler, DTOs, router
//!
//! ## Submission Model
//! - One multipart request carries the form fields plus exactly one
//!   file part (`uploaded_file`); a missing file is a checked client
//!   error, never a fault
//! - Stored file names embed a timestamp and a random component so
//!   concurrent submissions of the same original name never collide
//! - Upload and record insert are not transactional: an insert failure
//!   after a successful write leaves the file orphaned (logged)

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use application::config::ComplaintConfig;
pub use error::{ComplaintError, ComplaintResult};
pub use infra::postgres::PgComplaintRepository;
pub use infra::upload::DiskUploadStore;
pub use presentation::router::complaints_router;
