use crate::filter_utils::{FilterUtils, SortUtils};
use crate::models::course;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QuerySelect, Select,
};
use std::marker::PhantomData;
use std::str::FromStr;
use util::filters::{FilterParam, ListQuery, SortField};

/// Query-string driven reads over one entity. `C` resolves client field names
/// to columns.
pub struct Repository<E, C>
where
    E: EntityTrait,
    E::Model: Sync + Send + 'static,
    C: ColumnTrait + FromStr + 'static,
    C::Err: std::fmt::Display,
{
    _phantom: PhantomData<(E, C)>,
}

pub type CourseRepository = Repository<course::Entity, course::Column>;

impl<E, C> Repository<E, C>
where
    E: EntityTrait,
    E::Model: Sync + Send + 'static,
    C: ColumnTrait + FromStr + 'static,
    C::Err: std::fmt::Display,
{
    fn resolve_column(column_name: &str) -> Result<C, DbErr> {
        C::from_str(column_name)
            .map_err(|e| DbErr::Custom(format!("Invalid column name '{}': {}", column_name, e)))
    }

    pub fn apply_filter(query: Select<E>, filter_params: &[FilterParam]) -> Result<Select<E>, DbErr> {
        let condition = FilterUtils::apply_all_filters(filter_params, Self::resolve_column)?;
        Ok(query.filter(condition))
    }

    pub fn apply_sorting(query: Select<E>, sort: &[SortField]) -> Select<E> {
        SortUtils::apply_sorting(query, sort, Self::resolve_column)
    }

    /// Row count of the whole table, ignoring any filter.
    pub async fn count_all(db: &DatabaseConnection) -> Result<u64, DbErr> {
        E::find().count(db).await
    }

    /// Filtered, sorted rows inside the query's page window.
    pub async fn find_window(
        db: &DatabaseConnection,
        list: &ListQuery,
    ) -> Result<Vec<E::Model>, DbErr> {
        let (offset, limit) = list.window().map_err(|e| DbErr::Custom(e.to_string()))?;

        let query = Self::apply_filter(E::find(), &list.filters)?;
        let query = Self::apply_sorting(query, &list.sort);

        query.offset(offset).limit(limit).all(db).await
    }
}
