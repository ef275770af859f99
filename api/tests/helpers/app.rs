use api::routes::routes;
use async_trait::async_trait;
use axum::Router;
use db::test_utils::setup_test_db;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tempfile::TempDir;
use util::{
    config::AppConfig,
    state::AppState,
    test_helpers::setup_test_storage_root,
    uploader::{LocalUploader, MediaUploader, UploadError},
};

/// Router over a fresh in-memory database, with uploads staged and stored
/// under a temporary directory that lives as long as the returned `TempDir`.
pub async fn make_test_app() -> (Router, AppState, TempDir) {
    let tmp = setup_test_storage_root();
    let uploader = LocalUploader::new(tmp.path().join("media"), "/media");
    make_test_app_with_uploader(Arc::new(uploader), tmp).await
}

pub async fn make_test_app_with_uploader(
    uploader: Arc<dyn MediaUploader>,
    tmp: TempDir,
) -> (Router, AppState, TempDir) {
    AppConfig::set_storage_root(tmp.path().join("media").to_string_lossy());
    AppConfig::set_upload_tmp_dir(tmp.path().join("uploads").to_string_lossy());

    let db = setup_test_db().await;
    let app_state = AppState::new(db, uploader);
    let app = Router::new().nest("/api", routes(app_state.clone()));
    (app, app_state, tmp)
}

/// Uploader that remembers every staged path it was handed and whether the
/// file existed at that moment.
#[derive(Default)]
pub struct RecordingUploader {
    seen: Mutex<Vec<(PathBuf, bool)>>,
}

impl RecordingUploader {
    pub fn seen(&self) -> Vec<(PathBuf, bool)> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl MediaUploader for RecordingUploader {
    async fn upload(&self, local_path: &Path, folder: &str) -> Result<String, UploadError> {
        let existed = local_path.exists();
        self.seen
            .lock()
            .unwrap()
            .push((local_path.to_path_buf(), existed));
        let name = local_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(format!("https://cdn.test/{folder}/{name}"))
    }
}
