use sea_orm::DbErr;
use util::filters::FilterError;
use util::uploader::UploadError;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("{0}")]
    NotFound(String),

    /// The caller is neither owner nor admin.
    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("Upload failed: {0}")]
    Upload(#[from] UploadError),

    #[error("{0}")]
    Query(#[from] FilterError),

    #[error("{0}")]
    Internal(String),

    #[error(transparent)]
    Database(#[from] DbErr),
}

impl ServiceError {
    pub fn course_not_found(id: i64) -> Self {
        ServiceError::NotFound(format!("No course with the id of {id}"))
    }

    pub fn user_not_found(id: i64) -> Self {
        ServiceError::NotFound(format!("No user with the id of {id}"))
    }

    pub fn forbidden() -> Self {
        ServiceError::Forbidden("you cannot carry out this action".into())
    }
}
