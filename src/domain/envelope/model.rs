use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;

use super::ApiError;

/// Paging information attached to a successful response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageDetails {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub prev: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub next: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub total_size: i64,
}

impl PageDetails {
    /// True when every field is zero-valued
    pub fn is_empty(&self) -> bool {
        self.prev.is_empty() && self.next.is_empty() && self.total_size == 0
    }
}

/// Top level container written for every response.
///
/// Only built transiently by the write path. The payload is encoded up front
/// so that a `null` payload can be dropped like an absent one; `page` and
/// `error` are dropped when absent or entirely zero-valued.
#[derive(Debug, Serialize)]
pub struct Envelope<'a> {
    #[serde(skip_serializing_if = "is_null_data")]
    pub data: Option<Box<RawValue>>,
    #[serde(skip_serializing_if = "is_empty_page")]
    pub page: Option<&'a PageDetails>,
    #[serde(skip_serializing_if = "is_empty_error")]
    pub error: Option<&'a ApiError>,
}

impl<'a> Envelope<'a> {
    pub fn success<T: Serialize>(
        data: &T,
        page: Option<&'a PageDetails>,
    ) -> serde_json::Result<Self> {
        Ok(Self {
            data: Some(serde_json::value::to_raw_value(data)?),
            page,
            error: None,
        })
    }

    pub fn failure(error: &'a ApiError) -> Self {
        Self {
            data: None,
            page: None,
            error: Some(error),
        }
    }
}

/// Envelope as read back, with `data` kept as an uninterpreted fragment
#[derive(Debug, Deserialize)]
pub struct RawEnvelope {
    #[serde(default)]
    pub data: Option<Box<RawValue>>,
    #[serde(default)]
    pub page: Option<PageDetails>,
    #[serde(default)]
    pub error: Option<ApiError>,
}

impl RawEnvelope {
    /// The `data` fragment, or `null` when absent
    pub fn data_json(&self) -> &str {
        self.data.as_deref().map(RawValue::get).unwrap_or("null")
    }
}

fn is_zero(n: &i64) -> bool {
    *n == 0
}

fn is_null_data(data: &Option<Box<RawValue>>) -> bool {
    data.as_deref().map_or(true, |raw| raw.get() == "null")
}

fn is_empty_page(page: &Option<&PageDetails>) -> bool {
    page.map_or(true, PageDetails::is_empty)
}

fn is_empty_error(error: &Option<&ApiError>) -> bool {
    error.map_or(true, ApiError::is_empty)
}
