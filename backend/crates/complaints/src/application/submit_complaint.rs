//! Submit Complaint Use Case
//!
//! Materializes the uploaded file first, then persists the complaint
//! record referencing the stored path. The two steps are not
//! transactional: an insert failure after a successful write leaves
//! the file orphaned on disk, which is logged and reported once.

use std::sync::Arc;

use crate::domain::entity::complaint::Complaint;
use crate::domain::repository::ComplaintRepository;
use crate::error::{ComplaintError, ComplaintResult};
use crate::infra::upload::DiskUploadStore;

/// One file taken from the multipart submission
pub struct UploadedFile {
    /// Client-supplied original file name
    pub original_name: String,
    /// File content
    pub bytes: Vec<u8>,
}

/// Submit complaint input
pub struct SubmitComplaintInput {
    pub email: String,
    pub name: String,
    pub location: String,
    pub message: String,
    /// `None` when the request had no `uploaded_file` part
    pub file: Option<UploadedFile>,
}

/// Submit complaint use case
pub struct SubmitComplaintUseCase<R>
where
    R: ComplaintRepository,
{
    repo: Arc<R>,
    uploads: Arc<DiskUploadStore>,
}

impl<R> SubmitComplaintUseCase<R>
where
    R: ComplaintRepository,
{
    pub fn new(repo: Arc<R>, uploads: Arc<DiskUploadStore>) -> Self {
        Self { repo, uploads }
    }

    pub async fn execute(&self, input: SubmitComplaintInput) -> ComplaintResult<()> {
        let file = input.file.ok_or(ComplaintError::MissingFile)?;

        let img_path = self.uploads.store(&file.original_name, &file.bytes).await?;

        let complaint = Complaint::new(
            input.email,
            input.name,
            input.location,
            input.message,
            img_path,
        );

        if let Err(e) = self.repo.create(&complaint).await {
            // The upload is already durable; no compensating delete
            tracing::warn!(
                img_path = %complaint.img_path,
                "Complaint insert failed, uploaded file left orphaned"
            );
            return Err(e);
        }

        tracing::info!(
            complaint_id = %complaint.complaint_id,
            img_path = %complaint.img_path,
            "Complaint stored"
        );

        Ok(())
    }
}
