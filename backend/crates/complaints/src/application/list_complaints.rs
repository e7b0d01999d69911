//! List Complaints Use Case
//!
//! Read-through listing for the admin view; no invariants beyond what
//! storage already guarantees.

use std::sync::Arc;

use crate::domain::entity::complaint::Complaint;
use crate::domain::repository::ComplaintRepository;
use crate::error::ComplaintResult;

/// List complaints use case
pub struct ListComplaintsUseCase<R>
where
    R: ComplaintRepository,
{
    repo: Arc<R>,
}

impl<R> ListComplaintsUseCase<R>
where
    R: ComplaintRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self) -> ComplaintResult<Vec<Complaint>> {
        self.repo.list_all().await
    }
}
