//! Types for assembled query components

use chrono::{DateTime, Utc};
use crate::template::Template;

/// A single predicate in the assembled WHERE clause
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// Opaque fragment carried verbatim from template configuration
    Raw(String),
    /// Half-open time bound: `field >= start AND field < end`
    TimeRange {
        field: String,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
    /// Equality against a single parameter-bound value
    Eq { field: String, value: String },
    /// Set membership against parameter-bound values
    In { field: String, values: Vec<String> },
}

/// The result of assembling a request against a template
///
/// Constructed per request, immutable once returned, discarded after the
/// query executes. Field list, grouping and table are read through the
/// borrowed template; ordering and limit carry the override-resolved values.
#[derive(Debug)]
pub struct ResolvedQuery<'a> {
    pub template: &'a Template,
    /// base predicates ∪ time range ∪ validated runtime filters, in that order
    pub predicates: Vec<Predicate>,
    pub order_by: Option<String>,
    pub limit: Option<u32>,
}

impl<'a> ResolvedQuery<'a> {
    pub fn table(&self) -> &str {
        &self.template.table
    }

    pub fn fields(&self) -> &[String] {
        &self.template.fields
    }

    /// Grouping keys; empty means a single ungrouped aggregate row
    pub fn group_by(&self) -> &[String] {
        &self.template.group_by
    }
}
