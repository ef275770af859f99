use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::sea_query::Expr;
use sea_orm::{QuerySelect, Set};
use serde::Serialize;

/// Denormalized student counter. Rows with a `course_id` track one course;
/// rows without one are whole-catalogue snapshots.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[serde(rename_all = "camelCase")]
#[sea_orm(table_name = "course_stats")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub course_id: Option<i64>,
    pub total_students: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::course::Entity",
        from = "Column::CourseId",
        to = "super::course::Column::Id",
        on_delete = "SetNull"
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
        course_id: Option<i64>,
        total_students: i64,
    ) -> Result<Model, DbErr> {
        ActiveModel {
            course_id: Set(course_id),
            total_students: Set(total_students),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(db)
        .await
    }

    /// Bumps `total_students` on the first stats row of `course_id`.
    /// Returns whether such a row existed; nothing is created otherwise.
    pub async fn increment_for_course(db: &DbConn, course_id: i64) -> Result<bool, DbErr> {
        let Some(row) = Entity::find()
            .filter(Column::CourseId.eq(course_id))
            .one(db)
            .await?
        else {
            return Ok(false);
        };

        Entity::update_many()
            .col_expr(Column::TotalStudents, Expr::col(Column::TotalStudents).add(1))
            .filter(Column::Id.eq(row.id))
            .exec(db)
            .await?;
        Ok(true)
    }

    /// Sum of `total_students` over every stats row; `None` when the table is empty.
    pub async fn sum_total_students(db: &DbConn) -> Result<Option<i64>, DbErr> {
        let total: Option<Option<i64>> = Entity::find()
            .select_only()
            .column_as(Column::TotalStudents.sum(), "total")
            .into_tuple()
            .one(db)
            .await?;
        Ok(total.flatten())
    }
}
