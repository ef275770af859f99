//! JSON envelopes for every outgoing response.
//!
//! Success bodies look like
//! ```json
//! { "success": true, "Total": 2, "pagination": {}, "msg": "...", "data": [...] }
//! ```
//! where `Total`, `pagination` and `msg` appear only when set. Some endpoints
//! add sibling keys next to `data` (`publisher` on course detail, `user` on
//! enrollment). Failures are `{ "success": false, "error": "..." }`, see [`ApiError`].

mod error;

pub use error::ApiError;

use serde::Serialize;
use serde_json::{Map, Value};
use util::filters::Pagination;

#[derive(Debug, Serialize)]
pub struct ApiResponse<T>
where
    T: Serialize,
{
    pub success: bool,
    #[serde(rename = "Total", skip_serializing_if = "Option::is_none")]
    pub total: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub msg: Option<String>,
    pub data: T,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl<T> ApiResponse<T>
where
    T: Serialize,
{
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            total: None,
            pagination: None,
            msg: None,
            data,
            extra: Map::new(),
        }
    }

    pub fn with_msg(mut self, msg: impl Into<String>) -> Self {
        self.msg = Some(msg.into());
        self
    }

    pub fn with_total(mut self, total: usize) -> Self {
        self.total = Some(total);
        self
    }

    pub fn with_pagination(mut self, pagination: Pagination) -> Self {
        self.pagination = Some(pagination);
        self
    }

    /// Adds a top-level sibling of `data`. Values that fail to serialize become `null`.
    pub fn with_extra(mut self, key: &str, value: impl Serialize) -> Self {
        let value = serde_json::to_value(value).unwrap_or(Value::Null);
        self.extra.insert(key.to_owned(), value);
        self
    }
}

/// Placeholder payload for `data: {}`.
#[derive(Debug, Serialize, Default)]
pub struct Empty {}
