//! Application Configuration

use std::path::PathBuf;

/// Complaint application configuration
#[derive(Debug, Clone)]
pub struct ComplaintConfig {
    /// Directory uploaded files are written to
    pub upload_dir: PathBuf,
    /// Maximum accepted multipart body size
    pub max_upload_bytes: usize,
}

impl Default for ComplaintConfig {
    fn default() -> Self {
        Self {
            upload_dir: PathBuf::from("uploads"),
            max_upload_bytes: 10 * 1024 * 1024,
        }
    }
}
