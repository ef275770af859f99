//! Query-string filter model shared by the list endpoints.
//!
//! A raw query string such as
//! `?price[gte]=10&category=web&select=title,price&sort=-price&page=2`
//! is split into *directives* (`select`, `sort`, `page`, `limit`) and *filters*
//! (everything else). Filter keys of the form `field[op]` carry a comparison
//! qualifier from a fixed allow-list; every other key is an equality filter on
//! the field with that exact name.
//!
//! Nothing here touches the database. `db::filter_utils` turns a [`ListQuery`]
//! into a sea-orm condition and ordering.

use serde::Serialize;
use serde_json::{Map, Value as JsonValue};
use std::collections::BTreeMap;
use std::fmt;

/// Query keys that are directives rather than field filters.
pub const RESERVED_KEYS: [&str; 4] = ["select", "sort", "page", "limit"];

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_LIMIT: i64 = 100;

/// Field that is always present in a projected document.
const IDENTITY_FIELD: &str = "id";

#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    Int(i64),
    Float(f64),
    Bool(bool),
    String(String),
}

impl FilterValue {
    /// Types a raw query-string value by its shape.
    pub fn parse(raw: &str) -> Self {
        if let Ok(v) = raw.parse::<i64>() {
            return FilterValue::Int(v);
        }
        let numeric_chars = raw
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E'));
        if numeric_chars {
            if let Ok(v) = raw.parse::<f64>() {
                if v.is_finite() {
                    return FilterValue::Float(v);
                }
            }
        }
        match raw {
            "true" => FilterValue::Bool(true),
            "false" => FilterValue::Bool(false),
            _ => FilterValue::String(raw.to_string()),
        }
    }
}

impl From<FilterValue> for sea_orm::Value {
    fn from(value: FilterValue) -> Self {
        match value {
            FilterValue::Int(v) => v.into(),
            FilterValue::Float(v) => v.into(),
            FilterValue::Bool(v) => v.into(),
            FilterValue::String(v) => v.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    Eq,
    Gt,
    Gte,
    Lt,
    Lte,
    In,
}

impl CompareOp {
    /// Resolves the qualifier inside `field[...]`. Only the allow-listed
    /// comparison keys are accepted.
    pub fn from_qualifier(qualifier: &str) -> Option<Self> {
        match qualifier {
            "gt" => Some(CompareOp::Gt),
            "gte" => Some(CompareOp::Gte),
            "lt" => Some(CompareOp::Lt),
            "lte" => Some(CompareOp::Lte),
            "in" => Some(CompareOp::In),
            _ => None,
        }
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CompareOp::Eq => "eq",
            CompareOp::Gt => "gt",
            CompareOp::Gte => "gte",
            CompareOp::Lt => "lt",
            CompareOp::Lte => "lte",
            CompareOp::In => "in",
        };
        write!(f, "{s}")
    }
}

/// One field filter. `column` is already normalized to the snake_case column name.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterParam {
    pub column: String,
    pub operator: CompareOp,
    pub values: Vec<FilterValue>,
}

impl FilterParam {
    pub fn eq(column: &str, value: FilterValue) -> Self {
        Self {
            column: column_name(column),
            operator: CompareOp::Eq,
            values: vec![value],
        }
    }

    /// The single operand of a scalar comparison.
    pub fn single(&self) -> Result<&FilterValue, FilterError> {
        match self.values.as_slice() {
            [value] => Ok(value),
            _ => Err(FilterError::ExpectedSingleValue {
                field: self.column.clone(),
                operator: self.operator,
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FilterError {
    #[error("Unsupported comparison operator '{operator}' on field '{field}'")]
    UnsupportedOperator { field: String, operator: String },

    #[error("Operator '{operator}' on field '{field}' expects exactly one value")]
    ExpectedSingleValue { field: String, operator: CompareOp },

    #[error("Invalid pagination window (page {page}, limit {limit})")]
    InvalidWindow { page: i64, limit: i64 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortField {
    pub column: String,
    pub descending: bool,
}

impl SortField {
    /// Parses a comma separated sort spec; `-field` sorts descending.
    pub fn parse_list(raw: &str) -> Vec<SortField> {
        raw.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| match s.strip_prefix('-') {
                Some(rest) => SortField {
                    column: column_name(rest),
                    descending: true,
                },
                None => SortField {
                    column: column_name(s.trim_start_matches('+')),
                    descending: false,
                },
            })
            .collect()
    }
}

/// Field projection from `select=a,b` (inclusion) or `select=-a` (exclusion).
/// Names are kept exactly as the client wrote them since they address
/// serialized JSON keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Projection {
    pub include: Vec<String>,
    pub exclude: Vec<String>,
}

impl Projection {
    pub fn parse(raw: &str) -> Self {
        let mut projection = Projection::default();
        for field in raw.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            match field.strip_prefix('-') {
                Some(rest) => projection.exclude.push(rest.to_string()),
                None => projection.include.push(field.to_string()),
            }
        }
        projection
    }

    /// Applies the projection to one serialized document in place.
    pub fn apply(&self, doc: &mut Map<String, JsonValue>) {
        if !self.include.is_empty() {
            doc.retain(|key, _| {
                key == IDENTITY_FIELD || self.include.iter().any(|f| f == key)
            });
        }
        for field in &self.exclude {
            if field != IDENTITY_FIELD {
                doc.remove(field);
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageLink {
    pub page: i64,
    pub limit: i64,
}

/// Neighbouring-page descriptor. Serializes to `{}` when there is neither.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Pagination {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<PageLink>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous: Option<PageLink>,
}

impl Pagination {
    pub fn new(page: i64, limit: i64, total: u64) -> Self {
        let total = i64::try_from(total).unwrap_or(i64::MAX);
        let start_index = page.checked_sub(1).and_then(|p| p.checked_mul(limit));
        let end_index = page.checked_mul(limit);

        let next = end_index
            .filter(|end| *end < total)
            .and(page.checked_add(1))
            .map(|page| PageLink { page, limit });
        let previous = start_index
            .filter(|start| *start > 0)
            .map(|_| PageLink {
                page: page - 1,
                limit,
            });

        Self { next, previous }
    }
}

/// Parsed form of a list request's query string.
#[derive(Debug, Clone, PartialEq)]
pub struct ListQuery {
    pub filters: Vec<FilterParam>,
    pub select: Option<Projection>,
    pub sort: Vec<SortField>,
    pub page: i64,
    pub limit: i64,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            filters: Vec::new(),
            select: None,
            sort: default_sort(),
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl ListQuery {
    /// Builds a query from raw `(key, value)` pairs in request order.
    /// Repeated keys accumulate into a list.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self, FilterError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut grouped: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for (key, value) in pairs {
            grouped.entry(key.into()).or_default().push(value.into());
        }

        let select = grouped.remove("select").map(|v| Projection::parse(&v.join(",")));
        let sort = grouped
            .remove("sort")
            .map(|v| SortField::parse_list(&v.join(",")))
            .filter(|fields| !fields.is_empty())
            .unwrap_or_else(default_sort);
        let page = grouped
            .remove("page")
            .and_then(|v| v.first().and_then(|s| parse_int_prefix(s)))
            .filter(|p| *p != 0)
            .unwrap_or(DEFAULT_PAGE);
        let limit = grouped
            .remove("limit")
            .and_then(|v| v.first().and_then(|s| parse_int_prefix(s)))
            .filter(|l| *l != 0)
            .unwrap_or(DEFAULT_LIMIT);

        let mut filters = Vec::with_capacity(grouped.len());
        for (key, values) in grouped {
            filters.push(parse_filter(&key, values)?);
        }

        Ok(Self {
            filters,
            select,
            sort,
            page,
            limit,
        })
    }

    /// `None` when `(page - 1) * limit` does not fit in an `i64`.
    pub fn start_index(&self) -> Option<i64> {
        self.page.checked_sub(1)?.checked_mul(self.limit)
    }

    pub fn end_index(&self) -> Option<i64> {
        self.page.checked_mul(self.limit)
    }

    /// `(offset, limit)` for the store, rejecting windows it cannot express.
    pub fn window(&self) -> Result<(u64, u64), FilterError> {
        match self.start_index() {
            Some(start) if start >= 0 && self.limit >= 0 => Ok((start as u64, self.limit as u64)),
            _ => Err(FilterError::InvalidWindow {
                page: self.page,
                limit: self.limit,
            }),
        }
    }

    pub fn pagination(&self, total: u64) -> Pagination {
        Pagination::new(self.page, self.limit, total)
    }
}

fn default_sort() -> Vec<SortField> {
    vec![SortField {
        column: "created_at".into(),
        descending: true,
    }]
}

fn parse_filter(key: &str, values: Vec<String>) -> Result<FilterParam, FilterError> {
    let (field, operator) = match split_qualifier(key) {
        Some((field, qualifier)) => {
            let op = CompareOp::from_qualifier(qualifier).ok_or_else(|| {
                FilterError::UnsupportedOperator {
                    field: field.to_string(),
                    operator: qualifier.to_string(),
                }
            })?;
            (field, op)
        }
        None => (key, CompareOp::Eq),
    };

    let (operator, values) = match operator {
        CompareOp::In => {
            let values = values
                .iter()
                .flat_map(|v| v.split(','))
                .filter(|v| !v.is_empty())
                .map(FilterValue::parse)
                .collect();
            (CompareOp::In, values)
        }
        // A repeated plain key (`?tag=a&tag=b`) matches any of the values.
        CompareOp::Eq if values.len() > 1 => (
            CompareOp::In,
            values.iter().map(|v| FilterValue::parse(v)).collect(),
        ),
        op => (op, values.iter().map(|v| FilterValue::parse(v)).collect()),
    };

    Ok(FilterParam {
        column: column_name(field),
        operator,
        values,
    })
}

/// `price[gte]` -> `Some(("price", "gte"))`; plain keys -> `None`.
fn split_qualifier(key: &str) -> Option<(&str, &str)> {
    let inner = key.strip_suffix(']')?;
    let open = inner.find('[')?;
    if open == 0 {
        return None;
    }
    Some((&inner[..open], &inner[open + 1..]))
}

/// Base-10 integer prefix of `raw` (`"12abc"` -> 12); `None` when there are no digits.
pub fn parse_int_prefix(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let value: i64 = digits[..end].parse().ok()?;
    Some(if negative { -value } else { value })
}

/// Maps a client field name onto its column name: `numberOfStudents` ->
/// `number_of_students`, `_id` -> `id`. snake_case input passes through.
pub fn column_name(field: &str) -> String {
    if field == "_id" {
        return IDENTITY_FIELD.to_string();
    }
    let mut out = String::with_capacity(field.len() + 4);
    for (i, c) in field.chars().enumerate() {
        if c.is_ascii_uppercase() {
            if i > 0 {
                out.push('_');
            }
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}
