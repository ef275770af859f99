//! Media uploader seam.
//!
//! Handlers stage multipart files on local disk and hand the path to a
//! [`MediaUploader`], which stores the file and returns its public URL.
//! [`LocalUploader`] keeps files under the storage root; a hosted object
//! store can be plugged in by implementing the trait.

use crate::paths::{ensure_dir, media_dir, media_url};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::debug;
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("Staged file not found: {0}")]
    MissingFile(String),

    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[async_trait]
pub trait MediaUploader: Send + Sync {
    /// Stores the file at `local_path` under `folder` and returns its URL.
    async fn upload(&self, local_path: &Path, folder: &str) -> Result<String, UploadError>;
}

/// Copies uploads into `{root}/{folder}/{uuid}.{ext}`.
#[derive(Debug, Clone)]
pub struct LocalUploader {
    root: PathBuf,
    base_url: String,
}

impl LocalUploader {
    pub fn new(root: impl Into<PathBuf>, base_url: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            base_url: base_url.into(),
        }
    }

    /// Uploader rooted at the configured storage root and media URL.
    pub fn from_config() -> Self {
        Self::new(crate::paths::storage_root(), crate::config::media_base_url())
    }
}

#[async_trait]
impl MediaUploader for LocalUploader {
    async fn upload(&self, local_path: &Path, folder: &str) -> Result<String, UploadError> {
        if !tokio::fs::try_exists(local_path).await? {
            return Err(UploadError::MissingFile(local_path.display().to_string()));
        }

        let dir = ensure_dir(media_dir(&self.root, folder))?;
        let file_name = match local_path.extension().and_then(|e| e.to_str()) {
            Some(ext) if !ext.is_empty() => format!("{}.{}", Uuid::new_v4(), ext),
            _ => Uuid::new_v4().to_string(),
        };

        let dest = dir.join(&file_name);
        tokio::fs::copy(local_path, &dest).await?;
        debug!(dest = %dest.display(), "Stored uploaded media");

        Ok(media_url(&self.base_url, folder, &file_name))
    }
}
