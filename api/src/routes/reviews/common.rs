use serde::Deserialize;
use services::review_service::{CreateReview, UpdateReview};
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateReviewRequest {
    #[serde(default)]
    #[validate(length(
        min = 1,
        max = 100,
        message = "Please add a title of at most 100 characters"
    ))]
    pub title: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Please add some text"))]
    pub text: String,

    #[validate(
        required(message = "Please add a rating"),
        range(min = 1, max = 10, message = "Rating must be between 1 and 10")
    )]
    pub rating: Option<i32>,
}

impl From<CreateReviewRequest> for CreateReview {
    fn from(req: CreateReviewRequest) -> Self {
        Self {
            title: req.title,
            text: req.text,
            rating: req.rating.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateReviewRequest {
    #[validate(length(
        min = 1,
        max = 100,
        message = "Please add a title of at most 100 characters"
    ))]
    pub title: Option<String>,

    #[validate(length(min = 1, message = "Review text cannot be empty"))]
    pub text: Option<String>,

    #[validate(range(min = 1, max = 10, message = "Rating must be between 1 and 10"))]
    pub rating: Option<i32>,
}

impl From<UpdateReviewRequest> for UpdateReview {
    fn from(req: UpdateReviewRequest) -> Self {
        Self {
            title: req.title,
            text: req.text,
            rating: req.rating,
        }
    }
}
