//! Routes for `/api/courses/{course_id}/reviews`.

use crate::auth::guards::allow_authenticated;
use axum::{
    middleware::from_fn,
    routing::{delete, get, post, put},
    Router,
};
use delete::delete_review;
use get::{get_review, list_reviews};
use post::create_review;
use put::update_review;
use util::state::AppState;

pub mod common;
pub mod delete;
pub mod get;
pub mod post;
pub mod put;

/// Builds the review routes nested under a course.
///
/// - `GET    /`            → list reviews
/// - `POST   /`            → add a review (authenticated)
/// - `GET    /{review_id}` → one review
/// - `PUT    /{review_id}` → edit (author or admin)
/// - `DELETE /{review_id}` → remove (author or admin)
pub fn reviews_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_reviews))
        .route("/", post(create_review).route_layer(from_fn(allow_authenticated)))
        .route("/{review_id}", get(get_review))
        .route("/{review_id}", put(update_review).route_layer(from_fn(allow_authenticated)))
        .route("/{review_id}", delete(delete_review).route_layer(from_fn(allow_authenticated)))
}
