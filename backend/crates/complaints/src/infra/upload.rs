//! Disk Upload Store
//!
//! Materializes an uploaded file into durable storage under a
//! collision-resistant name: `<epoch_millis>-<random>-<original_name>`,
//! where the random component is a u32 below one billion. Existing
//! files are never overwritten or deleted.

use std::path::{Path, PathBuf};

use chrono::Utc;
use rand::Rng;
use thiserror::Error;

/// Upload store errors
#[derive(Debug, Error)]
pub enum UploadError {
    /// Writing the file to disk failed
    #[error("Failed to write upload: {0}")]
    WriteFailure(#[from] std::io::Error),
}

/// Writes uploaded files under a fixed root directory
#[derive(Debug, Clone)]
pub struct DiskUploadStore {
    root: PathBuf,
}

impl DiskUploadStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Create the upload root if it does not exist yet
    pub async fn ensure_root(&self) -> Result<(), UploadError> {
        tokio::fs::create_dir_all(&self.root).await?;
        Ok(())
    }

    /// Write the file bytes under a fresh unique name
    ///
    /// Returns the storage path (root-relative as configured) for
    /// persistence in the complaint record.
    pub async fn store(&self, original_name: &str, bytes: &[u8]) -> Result<String, UploadError> {
        // The client controls the original name; keep only its final
        // path component so it cannot escape the upload root
        let original = Path::new(original_name)
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("upload");

        let unique_prefix = format!(
            "{}-{}",
            Utc::now().timestamp_millis(),
            rand::rng().random_range(0..1_000_000_000u32)
        );
        let file_name = format!("{}-{}", unique_prefix, original);

        let path = self.root.join(&file_name);
        tokio::fs::write(&path, bytes).await?;

        Ok(path.to_string_lossy().into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store() -> (TempDir, DiskUploadStore) {
        let dir = TempDir::new().unwrap();
        let store = DiskUploadStore::new(dir.path());
        (dir, store)
    }

    #[tokio::test]
    async fn test_store_writes_file_with_original_name_suffix() {
        let (_dir, store) = store();

        let path = store.store("photo.jpg", b"jpeg bytes").await.unwrap();

        assert!(path.ends_with("photo.jpg"));
        let written = tokio::fs::read(&path).await.unwrap();
        assert_eq!(written, b"jpeg bytes");
    }

    #[tokio::test]
    async fn test_same_original_name_gets_distinct_paths() {
        let (_dir, store) = store();

        let first = store.store("photo.jpg", b"one").await.unwrap();
        let second = store.store("photo.jpg", b"two").await.unwrap();

        assert_ne!(first, second);
        assert_eq!(tokio::fs::read(&first).await.unwrap(), b"one");
        assert_eq!(tokio::fs::read(&second).await.unwrap(), b"two");
    }

    #[tokio::test]
    async fn test_path_components_are_stripped() {
        let (dir, store) = store();

        let path = store.store("../../etc/passwd", b"nope").await.unwrap();

        // File lands inside the root, under the final component only
        assert!(Path::new(&path).starts_with(dir.path()));
        assert!(path.ends_with("passwd"));
        assert!(!path.contains(".."));
    }

    #[tokio::test]
    async fn test_ensure_root_creates_directory() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("uploads");
        let store = DiskUploadStore::new(&nested);

        store.ensure_root().await.unwrap();
        assert!(nested.is_dir());

        // Idempotent
        store.ensure_root().await.unwrap();
    }
}
