//! A single query-template definition
//!
//! A Template is declarative data: opaque SQL fragments, a filter allow-list
//! and output shaping hints. The engine arranges these pieces into a query but
//! never interprets the fragments themselves.

use serde::Deserialize;
use std::collections::BTreeMap;

/// A named query template
///
/// Field expressions and base predicates are carried verbatim into the
/// assembled query. Runtime filter values are never spliced into them - they
/// are bound as parameters by the emitter.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Template {
    /// Unique template name, the lookup key in the registry
    pub name: String,
    /// Target table (e.g., "analytics.events")
    pub table: String,
    /// Output field expressions, in SELECT order
    pub fields: Vec<String>,
    /// Base predicates, always applied, in declared order
    #[serde(rename = "where", default)]
    pub base_predicates: Vec<String>,
    /// Grouping keys; empty means a single ungrouped aggregate row
    #[serde(rename = "groupBy", default)]
    pub group_by: Vec<String>,
    /// Ordering expression (e.g., "avg_load_time DESC")
    #[serde(rename = "orderBy")]
    pub order_by: Option<String>,
    /// Result-size cap; None means unbounded
    pub limit: Option<u32>,
    /// Column constrained by the request's time range
    #[serde(rename = "timeField")]
    pub time_field: String,
    /// Filter names a caller may supply in addition to the base predicates
    #[serde(rename = "allowedFilters", default)]
    pub allowed_filters: Vec<String>,
    /// Whether requests may override limit and ordering
    #[serde(default)]
    pub customizable: bool,
    /// Whether requests may supply filter keys outside `allowed_filters`
    #[serde(rename = "allowCustomFilters", default)]
    pub allow_custom_filters: bool,
    /// Post-processing plugin toggles, checked against the configured
    /// plugin set at registration time
    #[serde(default)]
    pub plugins: BTreeMap<String, bool>,
}

impl Template {
    /// Check whether a runtime filter key is permitted on this template
    pub fn allows_filter(&self, field: &str) -> bool {
        self.allow_custom_filters || self.allowed_filters.iter().any(|f| f == field)
    }

    /// Plugin names this template enables
    pub fn enabled_plugins(&self) -> impl Iterator<Item = &str> {
        self.plugins
            .iter()
            .filter(|(_, enabled)| **enabled)
            .map(|(name, _)| name.as_str())
    }

    /// Check whether a specific plugin is enabled
    pub fn plugin_enabled(&self, name: &str) -> bool {
        self.plugins.get(name).copied().unwrap_or(false)
    }
}
