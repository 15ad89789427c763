//! Row post-processing pipeline (verb module)
//!
//! Plugins are named row transforms toggled per template. They run in the
//! order the pipeline registers them, which is fixed: geography normalization
//! before geography deduplication, since dedup keys on normalized values.
//!
//! Every transform must be idempotent - pipelines may be re-run on cached
//! results, so applying a transform twice must equal applying it once.

pub mod geo;

use tracing::debug;
use crate::template::Template;

/// A single result row as returned by the execution collaborator
pub type Row = serde_json::Map<String, serde_json::Value>;

/// A named row transform
pub type RowTransform = fn(Vec<Row>) -> Vec<Row>;

/// Ordered set of named plugins
pub struct PluginPipeline {
    plugins: Vec<(String, RowTransform)>,
}

impl PluginPipeline {
    /// An empty pipeline with no plugins
    pub fn new() -> Self {
        Self { plugins: Vec::new() }
    }

    /// The standard pipeline: geography normalization, then deduplication
    pub fn standard() -> Self {
        let mut pipeline = Self::new();
        pipeline.register(geo::NORMALIZE_GEO, geo::normalize_geo);
        pipeline.register(geo::DEDUP_GEO, geo::dedup_geo);
        pipeline
    }

    /// Register a plugin; application order follows registration order
    pub fn register(&mut self, name: impl Into<String>, transform: RowTransform) {
        self.plugins.push((name.into(), transform));
    }

    /// Names of all registered plugins, in application order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.plugins.iter().map(|(name, _)| name.as_str())
    }

    /// Run the plugins a template enables over a row set
    pub fn apply(&self, template: &Template, rows: Vec<Row>) -> Vec<Row> {
        let mut rows = rows;
        for (name, transform) in &self.plugins {
            if template.plugin_enabled(name) {
                debug!(template = %template.name, plugin = %name, rows = rows.len(), "applying plugin");
                rows = transform(rows);
            }
        }
        rows
    }
}

impl Default for PluginPipeline {
    fn default() -> Self {
        Self::standard()
    }
}
