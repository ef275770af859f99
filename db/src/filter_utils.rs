use sea_orm::{ColumnTrait, Condition, DbErr, EntityTrait, QueryOrder, Select, Value};
use tracing::debug;
use util::filters::{CompareOp, FilterParam, SortField};

pub struct FilterUtils;

impl FilterUtils {
    pub fn apply_filter<C>(
        condition: Condition,
        column: C,
        filter_param: &FilterParam,
    ) -> Result<Condition, DbErr>
    where
        C: ColumnTrait,
    {
        let single = || -> Result<Value, DbErr> {
            filter_param
                .single()
                .map(|v| v.clone().into())
                .map_err(|e| DbErr::Custom(e.to_string()))
        };

        let expr = match filter_param.operator {
            CompareOp::Eq => column.eq(single()?),
            CompareOp::Gt => column.gt(single()?),
            CompareOp::Gte => column.gte(single()?),
            CompareOp::Lt => column.lt(single()?),
            CompareOp::Lte => column.lte(single()?),
            CompareOp::In => {
                column.is_in(filter_param.values.iter().cloned().map(Value::from))
            }
        };
        Ok(condition.add(expr))
    }

    /// AND of every filter. The resolver maps a column name to the entity column
    /// and fails the whole query for names the entity does not have.
    pub fn apply_all_filters<C>(
        filter_params: &[FilterParam],
        column_resolver: impl Fn(&str) -> Result<C, DbErr>,
    ) -> Result<Condition, DbErr>
    where
        C: ColumnTrait,
    {
        let mut condition = Condition::all();

        for filter_param in filter_params {
            let column = column_resolver(&filter_param.column)?;
            condition = Self::apply_filter(condition, column, filter_param)?;
        }

        Ok(condition)
    }
}

pub struct SortUtils;

impl SortUtils {
    /// Applies sort keys in order. Keys the resolver rejects are skipped.
    pub fn apply_sorting<E, C>(
        mut query: Select<E>,
        sort: &[SortField],
        column_resolver: impl Fn(&str) -> Result<C, DbErr>,
    ) -> Select<E>
    where
        E: EntityTrait,
        C: ColumnTrait,
    {
        for field in sort {
            match column_resolver(&field.column) {
                Ok(column) if field.descending => query = query.order_by_desc(column),
                Ok(column) => query = query.order_by_asc(column),
                Err(e) => debug!(column = %field.column, error = %e, "Ignoring sort key"),
            }
        }
        query
    }
}
