use crate::config;
use std::{
    fs, io,
    path::{Path, PathBuf},
};

/// Create a directory (and all parents) if it doesn't exist, and return the path.
pub fn ensure_dir<P: AsRef<Path>>(path: P) -> io::Result<PathBuf> {
    let p = path.as_ref();
    fs::create_dir_all(p)?;
    Ok(p.to_path_buf())
}

/// Relative paths resolve against `current_dir()`.
fn absolute(raw: String) -> PathBuf {
    let p = PathBuf::from(raw);
    if p.is_absolute() {
        p
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(p)
    }
}

/// Media storage root (absolute), from `config::storage_root()`.
pub fn storage_root() -> PathBuf {
    absolute(config::storage_root())
}

/// Folder for one media category: {STORAGE_ROOT}/{folder}
pub fn media_dir(root: &Path, folder: &str) -> PathBuf {
    root.join(folder.trim_matches('/'))
}

/// Staging directory for multipart uploads (absolute), from `config::upload_tmp_dir()`.
pub fn upload_tmp_dir() -> PathBuf {
    absolute(config::upload_tmp_dir())
}

/// Public URL of a stored media file: {base}/{folder}/{file_name}
pub fn media_url(base_url: &str, folder: &str, file_name: &str) -> String {
    format!(
        "{}/{}/{}",
        base_url.trim_end_matches('/'),
        folder.trim_matches('/'),
        file_name
    )
}
