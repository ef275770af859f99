use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::sea_query::Expr;
use sea_orm::{QueryOrder, QuerySelect, Set};
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[serde(rename_all = "camelCase")]
#[sea_orm(table_name = "courses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Owning user.
    pub publisher: i64,
    /// Display name captured at creation; not kept in sync with the user row.
    pub publisher_name: String,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub price: f64,
    pub course_image: Option<String>,
    pub number_of_students: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::Publisher",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    Publisher,

    #[sea_orm(has_many = "super::course_content::Entity")]
    Contents,

    #[sea_orm(has_many = "super::course_enrollment::Entity")]
    Enrollments,

    #[sea_orm(has_many = "super::review::Entity")]
    Reviews,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Publisher.def()
    }
}

impl Related<super::course_content::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Contents.def()
    }
}

impl Related<super::course_enrollment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Enrollments.def()
    }
}

impl Related<super::review::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reviews.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Partial update of the editable course fields. `None` leaves a field as is.
#[derive(Debug, Clone, Default)]
pub struct CourseChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub publisher_name: Option<String>,
}

impl Model {
    pub async fn create(
        db: &DbConn,
        publisher: i64,
        publisher_name: &str,
        title: &str,
        description: &str,
        price: f64,
    ) -> Result<Model, DbErr> {
        let now = Utc::now();
        let course = ActiveModel {
            publisher: Set(publisher),
            publisher_name: Set(publisher_name.to_owned()),
            title: Set(title.to_owned()),
            description: Set(description.to_owned()),
            price: Set(price),
            course_image: Set(None),
            number_of_students: Set(0),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        course.insert(db).await
    }

    pub async fn update(db: &DbConn, id: i64, changes: CourseChanges) -> Result<Model, DbErr> {
        let mut course = ActiveModel {
            id: Set(id),
            updated_at: Set(Utc::now()),
            ..Default::default()
        };

        if let Some(title) = changes.title {
            course.title = Set(title);
        }
        if let Some(description) = changes.description {
            course.description = Set(description);
        }
        if let Some(price) = changes.price {
            course.price = Set(price);
        }
        if let Some(publisher_name) = changes.publisher_name {
            course.publisher_name = Set(publisher_name);
        }

        course.update(db).await
    }

    pub async fn set_image(db: &DbConn, id: i64, url: &str) -> Result<Model, DbErr> {
        ActiveModel {
            id: Set(id),
            course_image: Set(Some(url.to_owned())),
            updated_at: Set(Utc::now()),
            ..Default::default()
        }
        .update(db)
        .await
    }

    pub async fn delete(db: &DbConn, id: i64) -> Result<(), DbErr> {
        Entity::delete_by_id(id).exec(db).await?;
        Ok(())
    }

    /// `number_of_students += 1` as a single UPDATE.
    pub async fn increment_students(db: &DbConn, id: i64) -> Result<(), DbErr> {
        Entity::update_many()
            .col_expr(
                Column::NumberOfStudents,
                Expr::col(Column::NumberOfStudents).add(1),
            )
            .filter(Column::Id.eq(id))
            .exec(db)
            .await?;
        Ok(())
    }

    /// Sum of `number_of_students` over all courses; `None` when there are no courses.
    pub async fn sum_students(db: &DbConn) -> Result<Option<i64>, DbErr> {
        let total: Option<Option<i64>> = Entity::find()
            .select_only()
            .column_as(Column::NumberOfStudents.sum(), "total")
            .into_tuple()
            .one(db)
            .await?;
        Ok(total.flatten())
    }

    /// One page of a publisher's courses in creation order.
    pub async fn find_by_publisher(
        db: &DbConn,
        publisher: i64,
        page: u64,
        limit: u64,
    ) -> Result<Vec<Model>, DbErr> {
        let offset = page
            .saturating_sub(1)
            .checked_mul(limit)
            .filter(|offset| *offset <= i64::MAX as u64)
            .ok_or_else(|| DbErr::Custom(format!("Invalid page window (page {page}, limit {limit})")))?;

        Entity::find()
            .filter(Column::Publisher.eq(publisher))
            .order_by_asc(Column::CreatedAt)
            .order_by_asc(Column::Id)
            .offset(offset)
            .limit(limit)
            .all(db)
            .await
    }
}
