use crate::{Actor, ServiceError};
use db::models::{
    course::{self, CourseChanges},
    course_content,
    user,
};
use db::repository::CourseRepository;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};
use serde::Serialize;
use serde_json::Value as JsonValue;
use std::collections::HashMap;
use std::path::Path;
use tracing::info;
use util::filters::{FilterError, ListQuery, Pagination};
use util::uploader::MediaUploader;

pub const COURSE_IMAGE_FOLDER: &str = "courseimage";

pub const PUBLISHER_DEFAULT_PAGE: i64 = 1;
pub const PUBLISHER_DEFAULT_LIMIT: i64 = 10;

/// A course with its ordered content items, as returned to clients.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseDocument {
    #[serde(flatten)]
    pub course: course::Model,
    pub course_content: Vec<course_content::Model>,
}

impl CourseDocument {
    pub async fn load(db: &DatabaseConnection, course: course::Model) -> Result<Self, DbErr> {
        let course_content = course_content::Model::for_course(db, course.id).await?;
        Ok(Self {
            course,
            course_content,
        })
    }

    /// Loads content for many courses with a single query, preserving course order.
    pub async fn load_many(
        db: &DatabaseConnection,
        courses: Vec<course::Model>,
    ) -> Result<Vec<Self>, DbErr> {
        let ids: Vec<i64> = courses.iter().map(|c| c.id).collect();
        let mut by_course: HashMap<i64, Vec<course_content::Model>> = HashMap::new();
        if !ids.is_empty() {
            let items = course_content::Entity::find()
                .filter(course_content::Column::CourseId.is_in(ids))
                .order_by_asc(course_content::Column::Id)
                .all(db)
                .await?;
            for item in items {
                by_course.entry(item.course_id).or_default().push(item);
            }
        }

        Ok(courses
            .into_iter()
            .map(|course| {
                let course_content = by_course.remove(&course.id).unwrap_or_default();
                Self {
                    course,
                    course_content,
                }
            })
            .collect())
    }
}

/// One page of the general course listing.
#[derive(Debug, Clone)]
pub struct CourseListing {
    pub pagination: Pagination,
    /// Projected documents; only the fields named by `select` (plus `id`) when given.
    pub data: Vec<JsonValue>,
}

impl CourseListing {
    /// Number of documents in this page.
    pub fn count(&self) -> usize {
        self.data.len()
    }
}

#[derive(Debug, Clone)]
pub struct CreateCourse {
    pub title: String,
    pub description: String,
    pub price: f64,
    /// Defaults to the publisher's full name.
    pub publisher_name: Option<String>,
}

pub struct CourseService;

impl CourseService {
    /// General listing. Pagination is computed against the unfiltered row count.
    pub async fn list(
        db: &DatabaseConnection,
        query: &ListQuery,
    ) -> Result<CourseListing, ServiceError> {
        query.window()?;
        let total = CourseRepository::count_all(db).await?;
        let courses = CourseRepository::find_window(db, query).await?;
        let documents = CourseDocument::load_many(db, courses).await?;

        let mut data = Vec::with_capacity(documents.len());
        for doc in documents {
            let mut value = serde_json::to_value(doc)
                .map_err(|e| ServiceError::Internal(e.to_string()))?;
            if let (Some(projection), Some(map)) = (&query.select, value.as_object_mut()) {
                projection.apply(map);
            }
            data.push(value);
        }

        Ok(CourseListing {
            pagination: query.pagination(total),
            data,
        })
    }

    /// A publisher's courses in creation order. An empty page is not found.
    pub async fn list_by_publisher(
        db: &DatabaseConnection,
        publisher_id: i64,
        page: i64,
        limit: i64,
    ) -> Result<Vec<CourseDocument>, ServiceError> {
        let offset = (page - 1).checked_mul(limit);
        if page < 1 || limit < 0 || offset.is_none() {
            return Err(FilterError::InvalidWindow { page, limit }.into());
        }

        let courses =
            course::Model::find_by_publisher(db, publisher_id, page as u64, limit as u64).await?;
        if courses.is_empty() {
            return Err(ServiceError::NotFound(
                "No course created by this publisher".into(),
            ));
        }

        Ok(CourseDocument::load_many(db, courses).await?)
    }

    pub async fn find(db: &DatabaseConnection, id: i64) -> Result<course::Model, ServiceError> {
        course::Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::course_not_found(id))
    }

    /// Course detail together with its publisher's user record.
    pub async fn get(
        db: &DatabaseConnection,
        id: i64,
    ) -> Result<(CourseDocument, Option<user::Model>), ServiceError> {
        let course = Self::find(db, id).await?;
        let publisher = user::Entity::find_by_id(course.publisher).one(db).await?;
        Ok((CourseDocument::load(db, course).await?, publisher))
    }

    /// Loads a course the actor is allowed to mutate: 404 when missing, 400 otherwise.
    pub async fn find_managed(
        db: &DatabaseConnection,
        actor: &Actor,
        id: i64,
    ) -> Result<course::Model, ServiceError> {
        let course = Self::find(db, id).await?;
        if !actor.can_manage(course.publisher) {
            return Err(ServiceError::forbidden());
        }
        Ok(course)
    }

    pub async fn create(
        db: &DatabaseConnection,
        actor: &Actor,
        input: CreateCourse,
    ) -> Result<CourseDocument, ServiceError> {
        let publisher = user::Entity::find_by_id(actor.id)
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::user_not_found(actor.id))?;

        let publisher_name = input
            .publisher_name
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| publisher.full_name());

        let course = course::Model::create(
            db,
            publisher.id,
            &publisher_name,
            &input.title,
            &input.description,
            input.price,
        )
        .await?;
        info!(course_id = course.id, publisher = publisher.id, "Course created");

        Ok(CourseDocument {
            course,
            course_content: Vec::new(),
        })
    }

    pub async fn update(
        db: &DatabaseConnection,
        actor: &Actor,
        id: i64,
        changes: CourseChanges,
    ) -> Result<CourseDocument, ServiceError> {
        Self::find_managed(db, actor, id).await?;
        let course = course::Model::update(db, id, changes).await?;
        Ok(CourseDocument::load(db, course).await?)
    }

    pub async fn delete(db: &DatabaseConnection, actor: &Actor, id: i64) -> Result<(), ServiceError> {
        Self::find_managed(db, actor, id).await?;
        course::Model::delete(db, id).await?;
        info!(course_id = id, actor = actor.id, "Course deleted");
        Ok(())
    }

    /// Stores a new cover image. The caller owns `file` and removes it afterwards.
    pub async fn upload_image(
        db: &DatabaseConnection,
        uploader: &dyn MediaUploader,
        actor: &Actor,
        id: i64,
        file: Option<&Path>,
    ) -> Result<CourseDocument, ServiceError> {
        Self::find_managed(db, actor, id).await?;
        let file = file.ok_or_else(|| ServiceError::BadRequest("Please upload a file".into()))?;

        let url = uploader.upload(file, COURSE_IMAGE_FOLDER).await?;
        let course = course::Model::set_image(db, id, &url).await?;
        Ok(CourseDocument::load(db, course).await?)
    }
}
