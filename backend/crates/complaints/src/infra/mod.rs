//! Infrastructure Layer
//!
//! Database implementation and the disk upload store.

pub mod postgres;
pub mod upload;

pub use postgres::PgComplaintRepository;
pub use upload::DiskUploadStore;
