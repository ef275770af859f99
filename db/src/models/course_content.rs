use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{QueryOrder, Set};
use serde::Serialize;

/// One lesson inside a course. `content` holds the uploaded file URL, if any.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[serde(rename_all = "camelCase")]
#[sea_orm(table_name = "course_contents")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[serde(skip_serializing)]
    pub course_id: i64,
    pub title: String,
    pub youtube: Option<String>,
    pub content: Option<String>,
    #[serde(skip_serializing)]
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::course::Entity",
        from = "Column::CourseId",
        to = "super::course::Column::Id",
        on_delete = "Cascade"
    )]
    Course,
}

impl Related<super::course::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn create(
        db: &DbConn,
        course_id: i64,
        title: &str,
        youtube: Option<&str>,
        content: Option<&str>,
    ) -> Result<Model, DbErr> {
        ActiveModel {
            course_id: Set(course_id),
            title: Set(title.to_owned()),
            youtube: Set(youtube.map(str::to_owned)),
            content: Set(content.map(str::to_owned)),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(db)
        .await
    }

    /// Content items of a course in insertion order.
    pub async fn for_course(db: &DbConn, course_id: i64) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .filter(Column::CourseId.eq(course_id))
            .order_by_asc(Column::Id)
            .all(db)
            .await
    }

    /// Looks up an item by id, only if it belongs to `course_id`.
    pub async fn find_in_course(
        db: &DbConn,
        course_id: i64,
        id: i64,
    ) -> Result<Option<Model>, DbErr> {
        Entity::find_by_id(id)
            .filter(Column::CourseId.eq(course_id))
            .one(db)
            .await
    }

    /// Replaces title and youtube link; `content` is replaced only when given.
    pub async fn update(
        db: &DbConn,
        id: i64,
        title: Option<&str>,
        youtube: Option<&str>,
        content: Option<&str>,
    ) -> Result<Model, DbErr> {
        let mut item = ActiveModel {
            id: Set(id),
            youtube: Set(youtube.map(str::to_owned)),
            ..Default::default()
        };
        if let Some(title) = title {
            item.title = Set(title.to_owned());
        }
        if let Some(content) = content {
            item.content = Set(Some(content.to_owned()));
        }

        item.update(db).await
    }

    pub async fn delete(db: &DbConn, id: i64) -> Result<(), DbErr> {
        Entity::delete_by_id(id).exec(db).await?;
        Ok(())
    }
}
