//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::complaint::Complaint;
use crate::error::ComplaintResult;

/// Complaint repository trait
///
/// No uniqueness or foreign-key constraints beyond the entity shape.
#[trait_variant::make(ComplaintRepository: Send)]
pub trait LocalComplaintRepository {
    /// Persist a new complaint
    async fn create(&self, complaint: &Complaint) -> ComplaintResult<()>;

    /// List all complaints
    async fn list_all(&self) -> ComplaintResult<Vec<Complaint>>;
}
