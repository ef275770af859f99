//! Domain operations behind the HTTP handlers.
//!
//! Services take a database connection and, where ownership matters, the
//! calling [`Actor`]. They return [`ServiceError`] for every expected failure
//! so the api crate can map it to a status code in one place.

pub mod actor;
pub mod content_service;
pub mod course_service;
pub mod enrollment_service;
pub mod error;
pub mod review_service;
pub mod stats_service;

pub use actor::Actor;
pub use error::ServiceError;
