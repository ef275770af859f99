//! Multipart staging shared by the upload endpoints.
//!
//! The `file` part of a form is written to a temporary file under
//! `UPLOAD_TMP_DIR`; every other part is kept as text. Handlers pass the staged
//! path to the uploader and call [`StagedFile::discard`] once the service returns.

use crate::response::ApiError;
use axum::extract::Multipart;
use std::collections::HashMap;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::warn;
use util::paths::{ensure_dir, upload_tmp_dir};

/// Name of the multipart part that carries the uploaded file.
pub const FILE_FIELD: &str = "file";

#[derive(Debug)]
pub struct StagedFile {
    file: NamedTempFile,
}

impl StagedFile {
    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Deletes the staged file, logging instead of failing the request.
    pub fn discard(self) {
        let path = self.file.path().to_path_buf();
        if let Err(e) = self.file.close() {
            warn!(path = %path.display(), error = %e, "Failed to remove staged upload");
        }
    }
}

#[derive(Debug, Default)]
pub struct UploadForm {
    pub fields: HashMap<String, String>,
    pub file: Option<StagedFile>,
}

impl UploadForm {
    pub fn text(&self, name: &str) -> Option<String> {
        self.fields.get(name).cloned()
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file.as_ref().map(StagedFile::path)
    }

    pub fn discard_file(self) {
        if let Some(file) = self.file {
            file.discard();
        }
    }
}

pub async fn read_upload_form(mut multipart: Multipart) -> Result<UploadForm, ApiError> {
    let mut form = UploadForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(e.body_text()))?
    {
        let name = field.name().unwrap_or_default().to_owned();

        if name == FILE_FIELD {
            let ext = staged_extension(field.file_name(), field.content_type());
            let bytes = field
                .bytes()
                .await
                .map_err(|e| ApiError::bad_request(e.body_text()))?;
            // An empty file part means no file was chosen.
            if bytes.is_empty() {
                continue;
            }
            if let Some(previous) = form.file.replace(stage(&bytes, ext.as_deref())?) {
                previous.discard();
            }
        } else {
            let value = field
                .text()
                .await
                .map_err(|e| ApiError::bad_request(e.body_text()))?;
            form.fields.insert(name, value);
        }
    }

    Ok(form)
}

fn stage(bytes: &[u8], ext: Option<&str>) -> Result<StagedFile, ApiError> {
    let dir = ensure_dir(upload_tmp_dir())
        .map_err(|e| ApiError::internal(format!("Failed to prepare upload directory: {e}")))?;
    let suffix = ext.map(|e| format!(".{e}")).unwrap_or_default();

    let mut file = tempfile::Builder::new()
        .prefix("upload-")
        .suffix(&suffix)
        .tempfile_in(dir)
        .map_err(|e| ApiError::internal(format!("Failed to stage upload: {e}")))?;
    file.write_all(bytes)
        .map_err(|e| ApiError::internal(format!("Failed to stage upload: {e}")))?;

    Ok(StagedFile { file })
}

/// Extension from the client file name, else from the part's content type.
fn staged_extension(file_name: Option<&str>, content_type: Option<&str>) -> Option<String> {
    file_name
        .and_then(|n| Path::new(n).extension())
        .and_then(|e| e.to_str())
        .filter(|e| e.chars().all(|c| c.is_ascii_alphanumeric()))
        .map(str::to_ascii_lowercase)
        .or_else(|| {
            content_type
                .and_then(mime_guess::get_mime_extensions_str)
                .and_then(|exts| exts.first())
                .map(|e| e.to_string())
        })
}
