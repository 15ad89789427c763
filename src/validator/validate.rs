//! Runtime filter validation
//!
//! Checks caller-supplied filters against a template's allow-list and coerces
//! their JSON values into bindable forms. Validation walks filters in supplied
//! order, so the first offending key is deterministic.

use serde_json::Value;
use crate::query::QueryFilter;
use crate::template::Template;
use super::error::ValidateError;

/// A coerced filter value ready for parameter binding
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterValue {
    /// Single value - becomes an equality predicate
    One(String),
    /// Multiple values - becomes a set-membership predicate
    Many(Vec<String>),
}

/// A filter that passed allow-list and identifier checks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundFilter {
    pub field: String,
    pub value: FilterValue,
}

/// Validate supplied filters against a template
///
/// Returns the permitted filters in supplied order. Filters whose value is
/// empty or absent are dropped silently before any allow-list check, so an
/// empty value under a disallowed key is not an error.
pub fn validate_filters(
    template: &Template,
    filters: &[QueryFilter],
) -> Result<Vec<BoundFilter>, ValidateError> {
    let mut bound = Vec::new();
    for filter in filters {
        let Some(value) = coerce_value(&filter.value) else {
            continue;
        };
        if !template.allows_filter(&filter.field) {
            return Err(ValidateError::InvalidFilter {
                template: template.name.clone(),
                field: filter.field.clone(),
            });
        }
        // Filter fields are emitted as column identifiers, so they get a
        // charset check even when the allow-list is open.
        if !is_safe_identifier(&filter.field) {
            return Err(ValidateError::UnsafeField(filter.field.clone()));
        }
        bound.push(BoundFilter {
            field: filter.field.clone(),
            value,
        });
    }
    Ok(bound)
}

/// Coerce a JSON value into a bindable filter value
///
/// Null, empty strings, empty arrays and objects yield None (dropped).
/// Numbers and booleans bind as their string forms; the store compares them
/// as untrusted strings, never as spliced literals.
fn coerce_value(value: &Value) -> Option<FilterValue> {
    match value {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(FilterValue::One(s.clone())),
        Value::Number(n) => Some(FilterValue::One(n.to_string())),
        Value::Bool(b) => Some(FilterValue::One(b.to_string())),
        Value::Array(items) => {
            let values: Vec<String> = items.iter().filter_map(scalar_string).collect();
            if values.is_empty() {
                None
            } else {
                Some(FilterValue::Many(values))
            }
        }
        Value::Object(_) => None,
    }
}

fn scalar_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn is_safe_identifier(field: &str) -> bool {
    !field.is_empty()
        && field
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.')
}
