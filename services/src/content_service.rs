use crate::course_service::{CourseDocument, CourseService};
use crate::{Actor, ServiceError};
use db::models::course_content;
use sea_orm::DatabaseConnection;
use std::path::Path;
use tracing::info;
use util::uploader::MediaUploader;

pub const COURSE_CONTENT_FOLDER: &str = "coursecontent";

#[derive(Debug, Clone, Default)]
pub struct ContentInput {
    pub title: Option<String>,
    pub youtube: Option<String>,
}

pub struct ContentService;

impl ContentService {
    /// Appends a content item. A staged `file` is uploaded first and its URL
    /// becomes the item's content.
    pub async fn add(
        db: &DatabaseConnection,
        uploader: &dyn MediaUploader,
        actor: &Actor,
        course_id: i64,
        input: ContentInput,
        file: Option<&Path>,
    ) -> Result<CourseDocument, ServiceError> {
        let course = CourseService::find_managed(db, actor, course_id).await?;
        let title = input
            .title
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| ServiceError::BadRequest("Please add a title".into()))?;

        let url = match file {
            Some(path) => Some(uploader.upload(path, COURSE_CONTENT_FOLDER).await?),
            None => None,
        };

        let item = course_content::Model::create(
            db,
            course.id,
            &title,
            input.youtube.as_deref(),
            url.as_deref(),
        )
        .await?;
        info!(course_id, content_id = item.id, "Course content added");

        Ok(CourseDocument::load(db, course).await?)
    }

    /// Replaces an item's title and link; a staged `file` replaces its content URL.
    pub async fn update(
        db: &DatabaseConnection,
        uploader: &dyn MediaUploader,
        actor: &Actor,
        course_id: i64,
        content_id: i64,
        input: ContentInput,
        file: Option<&Path>,
    ) -> Result<CourseDocument, ServiceError> {
        let course = CourseService::find_managed(db, actor, course_id).await?;
        let item = Self::find_item(db, course_id, content_id).await?;

        let url = match file {
            Some(path) => Some(uploader.upload(path, COURSE_CONTENT_FOLDER).await?),
            None => None,
        };

        course_content::Model::update(
            db,
            item.id,
            input.title.as_deref().filter(|t| !t.trim().is_empty()),
            input.youtube.as_deref(),
            url.as_deref(),
        )
        .await?;

        Ok(CourseDocument::load(db, course).await?)
    }

    pub async fn remove(
        db: &DatabaseConnection,
        actor: &Actor,
        course_id: i64,
        content_id: i64,
    ) -> Result<CourseDocument, ServiceError> {
        let course = CourseService::find_managed(db, actor, course_id).await?;
        let item = Self::find_item(db, course_id, content_id).await?;

        course_content::Model::delete(db, item.id).await?;
        info!(course_id, content_id, "Course content removed");

        Ok(CourseDocument::load(db, course).await?)
    }

    async fn find_item(
        db: &DatabaseConnection,
        course_id: i64,
        content_id: i64,
    ) -> Result<course_content::Model, ServiceError> {
        course_content::Model::find_in_course(db, course_id, content_id)
            .await?
            .ok_or_else(|| ServiceError::NotFound("No content found".into()))
    }
}
