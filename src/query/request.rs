use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Half-open time range `[start, end)`
///
/// Inclusive start, exclusive end, so adjacent ranges never double-count
/// boundary events.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeRange {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// A reversed range can never be a valid half-open interval
    pub fn is_reversed(&self) -> bool {
        self.end < self.start
    }

    /// Membership under half-open semantics: `start <= t < end`
    pub fn contains(&self, t: DateTime<Utc>) -> bool {
        t >= self.start && t < self.end
    }
}

/// Filter supplied with a query request
///
/// The value is untrusted caller input. Scalars become equality predicates,
/// arrays become set-membership predicates; empty or null values are dropped
/// silently during validation.
#[derive(Debug, Deserialize, Clone)]
pub struct QueryFilter {
    pub field: String,
    pub value: serde_json::Value,
}

impl QueryFilter {
    pub fn new(field: impl Into<String>, value: serde_json::Value) -> Self {
        Self {
            field: field.into(),
            value,
        }
    }
}

/// Request body for template queries
///
/// `limit` and `order_by` are optional override hints, honored only for
/// templates marked customizable.
#[derive(Debug, Deserialize)]
pub struct QueryRequest {
    pub template: String,
    #[serde(rename = "timeRange")]
    pub range: TimeRange,
    #[serde(default)]
    pub filters: Vec<QueryFilter>,
    pub limit: Option<u32>,
    #[serde(rename = "orderBy")]
    pub order_by: Option<String>,
}

impl QueryRequest {
    pub fn new(template: impl Into<String>, range: TimeRange) -> Self {
        Self {
            template: template.into(),
            range,
            filters: Vec::new(),
            limit: None,
            order_by: None,
        }
    }
}
