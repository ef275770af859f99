//! Application state container shared across Axum route handlers and services.
//!
//! Holds the database connection and the media uploader. It is cheap to clone
//! and is passed into route handlers via Axum's `State<T>` extractor.

use crate::uploader::MediaUploader;
use sea_orm::DatabaseConnection;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    db: DatabaseConnection,
    uploader: Arc<dyn MediaUploader>,
}

impl AppState {
    pub fn new(db: DatabaseConnection, uploader: Arc<dyn MediaUploader>) -> Self {
        Self { db, uploader }
    }

    /// Returns a shared reference to the internal `DatabaseConnection`.
    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    pub fn uploader(&self) -> &dyn MediaUploader {
        self.uploader.as_ref()
    }
}

impl AppState {
    /// Returns a cloned copy of the database connection.
    ///
    /// Useful for spawning tasks that require ownership.
    pub fn db_clone(&self) -> DatabaseConnection {
        self.db.clone()
    }
}
