//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entity::complaint::Complaint;

/// One record in the GET /admin/complaints listing
///
/// Field names match the persisted document shape (`img_path` etc.).
#[derive(Debug, Clone, Serialize)]
pub struct ComplaintRecord {
    pub complaint_id: String,
    pub email: String,
    pub name: String,
    pub location: String,
    pub message: String,
    pub img_path: String,
    pub created_at: DateTime<Utc>,
}

impl From<Complaint> for ComplaintRecord {
    fn from(complaint: Complaint) -> Self {
        Self {
            complaint_id: complaint.complaint_id.to_string(),
            email: complaint.email,
            name: complaint.name,
            location: complaint.location,
            message: complaint.message,
            img_path: complaint.img_path,
            created_at: complaint.created_at,
        }
    }
}
