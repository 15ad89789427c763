//! Integration tests for parameterized SQL emission

mod common;

use common::{engine, range, ts};
use serde_json::json;
use simplequery::{emit_sql, BindValue, QueryFilter, QueryRequest};

#[test]
fn test_emitted_sql_shape() {
    let engine = engine();
    let mut request = QueryRequest::new(
        "slow_pages",
        range("2024-01-01T00:00:00Z", "2024-01-02T00:00:00Z"),
    );
    request
        .filters
        .push(QueryFilter::new("device_type", json!("mobile")));
    request
        .filters
        .push(QueryFilter::new("browser_name", json!(["chrome", "firefox"])));

    let resolved = engine.resolve(&request).unwrap();
    let query = emit_sql(&resolved);

    assert!(query.sql.starts_with("SELECT "));
    assert!(query.sql.contains("FROM analytics.events"));
    assert!(query.sql.contains("(event_name = 'screen_view')"));
    assert!(query.sql.contains("(time >= ? AND time < ?)"));
    assert!(query.sql.contains("device_type = ?"));
    assert!(query.sql.contains("browser_name IN (?, ?)"));
    assert!(query.sql.contains("GROUP BY path(path)"));
    assert!(query.sql.contains("ORDER BY avg_load_time DESC"));
    assert!(query.sql.contains("LIMIT 100"));

    assert_eq!(
        query.binds,
        vec![
            BindValue::Timestamp(ts("2024-01-01T00:00:00Z")),
            BindValue::Timestamp(ts("2024-01-02T00:00:00Z")),
            BindValue::Text("mobile".to_string()),
            BindValue::Text("chrome".to_string()),
            BindValue::Text("firefox".to_string()),
        ]
    );
    assert_eq!(query.placeholder_count(), query.binds.len());
}

#[test]
fn test_filter_values_never_appear_in_sql_text() {
    let engine = engine();
    let mut request = QueryRequest::new(
        "slow_pages",
        range("2024-01-01T00:00:00Z", "2024-01-02T00:00:00Z"),
    );
    request
        .filters
        .push(QueryFilter::new("path", json!("'; DROP TABLE events; --")));

    let resolved = engine.resolve(&request).unwrap();
    let query = emit_sql(&resolved);

    assert!(!query.sql.contains("DROP TABLE"));
    assert!(query
        .binds
        .contains(&BindValue::Text("'; DROP TABLE events; --".to_string())));
}

#[test]
fn test_ungrouped_unlimited_template_emits_minimal_clauses() {
    let engine = engine();
    let request = QueryRequest::new(
        "performance_metrics",
        range("2024-01-01T00:00:00Z", "2024-01-02T00:00:00Z"),
    );
    let resolved = engine.resolve(&request).unwrap();
    let query = emit_sql(&resolved);

    assert!(!query.sql.contains("GROUP BY"));
    assert!(!query.sql.contains("ORDER BY"));
    assert!(!query.sql.contains("LIMIT"));
    // Only the time range binds
    assert_eq!(query.binds.len(), 2);
}
