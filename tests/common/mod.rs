//! Shared test utilities for integration tests

#![allow(dead_code)]

use chrono::{DateTime, Utc};
use simplequery::{parser, PluginPipeline, QueryEngine, Row, TemplateCatalog, TimeRange};

/// Load a catalog fixture from the test_data directory
pub fn load_fixture(name: &str) -> TemplateCatalog {
    let path = format!("test_data/{}", name);
    parser::parse_file(&path)
        .unwrap_or_else(|e| panic!("Failed to load test data {}: {}", name, e))
}

/// An engine loaded with the performance catalog and standard plugins
pub fn engine() -> QueryEngine {
    let mut engine = QueryEngine::new(PluginPipeline::standard());
    engine
        .load(load_fixture("performance.yaml"))
        .expect("performance catalog should load");
    engine
}

pub fn ts(s: &str) -> DateTime<Utc> {
    s.parse()
        .unwrap_or_else(|e| panic!("Bad timestamp {}: {}", s, e))
}

pub fn range(start: &str, end: &str) -> TimeRange {
    TimeRange::new(ts(start), ts(end))
}

pub fn row(pairs: &[(&str, serde_json::Value)]) -> Row {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}
