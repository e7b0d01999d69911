//! Complaint Entity

use chrono::{DateTime, Utc};
use kernel::id::ComplaintId;

/// Complaint entity
///
/// Created once per submission and immutable thereafter. The contact
/// fields are free-form; `email` is an unenforced reference to a user's
/// email (no join integrity). `img_path` is server-assigned and unique
/// per submission.
#[derive(Debug, Clone)]
pub struct Complaint {
    /// Internal UUID identifier
    pub complaint_id: ComplaintId,
    /// Contact email as submitted
    pub email: String,
    /// Contact name as submitted
    pub name: String,
    /// Free-form location
    pub location: String,
    /// Free-form complaint text
    pub message: String,
    /// Storage path of the uploaded image
    pub img_path: String,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

impl Complaint {
    /// Create a new complaint referencing an already-stored upload
    pub fn new(
        email: String,
        name: String,
        location: String,
        message: String,
        img_path: String,
    ) -> Self {
        Self {
            complaint_id: ComplaintId::new(),
            email,
            name,
            location,
            message,
            img_path,
            created_at: Utc::now(),
        }
    }
}
