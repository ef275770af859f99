use crate::config::AppConfig;
use std::env;
use tempfile::TempDir;

pub const TEST_JWT_SECRET: &str = "test-secret-key";

/// Makes sure the global config can load and signs tokens with a fixed secret.
pub fn init_test_config() {
    if env::var("JWT_SECRET").is_err() {
        unsafe {
            env::set_var("JWT_SECRET", TEST_JWT_SECRET);
        }
    }
    AppConfig::set_jwt_secret(TEST_JWT_SECRET);
}

/// Creates a unique temporary directory for uploaded media.
/// The directory is removed when the returned `TempDir` is dropped.
///
/// Keep the returned `TempDir` in scope for as long as you need the files.
pub fn setup_test_storage_root() -> TempDir {
    init_test_config();
    TempDir::new().expect("failed to create tempdir")
}
