use crate::course_service::CourseService;
use crate::{Actor, ServiceError};
use db::models::review;
use sea_orm::DatabaseConnection;
use tracing::info;

#[derive(Debug, Clone)]
pub struct CreateReview {
    pub title: String,
    pub text: String,
    pub rating: i32,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateReview {
    pub title: Option<String>,
    pub text: Option<String>,
    pub rating: Option<i32>,
}

pub struct ReviewService;

impl ReviewService {
    pub async fn list(
        db: &DatabaseConnection,
        course_id: i64,
    ) -> Result<Vec<review::Model>, ServiceError> {
        CourseService::find(db, course_id).await?;
        Ok(review::Model::for_course(db, course_id).await?)
    }

    pub async fn get(
        db: &DatabaseConnection,
        course_id: i64,
        id: i64,
    ) -> Result<review::Model, ServiceError> {
        review::Model::find_in_course(db, course_id, id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("No review with the id of {id}")))
    }

    pub async fn create(
        db: &DatabaseConnection,
        actor: &Actor,
        course_id: i64,
        input: CreateReview,
    ) -> Result<review::Model, ServiceError> {
        CourseService::find(db, course_id).await?;

        if review::Model::find_by_author(db, course_id, actor.id)
            .await?
            .is_some()
        {
            return Err(ServiceError::Conflict(
                "you have already reviewed this course".into(),
            ));
        }

        let created = review::Model::create(
            db,
            course_id,
            actor.id,
            &input.title,
            &input.text,
            input.rating,
        )
        .await?;
        info!(course_id, review_id = created.id, user_id = actor.id, "Review created");
        Ok(created)
    }

    pub async fn update(
        db: &DatabaseConnection,
        actor: &Actor,
        course_id: i64,
        id: i64,
        input: UpdateReview,
    ) -> Result<review::Model, ServiceError> {
        let existing = Self::get(db, course_id, id).await?;
        if !actor.can_manage(existing.user_id) {
            return Err(ServiceError::forbidden());
        }

        Ok(review::Model::update(
            db,
            id,
            input.title.as_deref(),
            input.text.as_deref(),
            input.rating,
        )
        .await?)
    }

    pub async fn delete(
        db: &DatabaseConnection,
        actor: &Actor,
        course_id: i64,
        id: i64,
    ) -> Result<(), ServiceError> {
        let existing = Self::get(db, course_id, id).await?;
        if !actor.can_manage(existing.user_id) {
            return Err(ServiceError::forbidden());
        }

        review::Model::delete(db, id).await?;
        info!(course_id, review_id = id, actor = actor.id, "Review deleted");
        Ok(())
    }
}
