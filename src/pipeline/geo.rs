//! Geography plugins
//!
//! Built for templates whose output keys on geography (the `name` column of
//! by-country style templates, plus `country`/`region` fields). Both
//! transforms are idempotent.

use serde_json::Value;
use std::collections::HashSet;
use super::Row;

pub const NORMALIZE_GEO: &str = "normalize_geo";
pub const DEDUP_GEO: &str = "dedup_geo";

/// Legacy or alternate codes mapped to their ISO 3166-1 alpha-2 form
const COUNTRY_ALIASES: &[(&str, &str)] = &[("UK", "GB"), ("EL", "GR")];

/// Fields the geography transforms look at
const GEO_FIELDS: &[&str] = &["name", "country", "region"];

/// Canonicalize geography values in place
///
/// Trims whitespace everywhere; two-letter values are treated as country
/// codes and uppercased, then mapped through the alias table. Longer values
/// pass through trimmed so non-country strings are left alone.
pub fn normalize_geo(rows: Vec<Row>) -> Vec<Row> {
    rows.into_iter()
        .map(|mut row| {
            for field in GEO_FIELDS {
                if let Some(Value::String(value)) = row.get(*field) {
                    let canonical = canonical_geo(value);
                    if canonical != *value {
                        row.insert((*field).to_string(), Value::String(canonical));
                    }
                }
            }
            row
        })
        .collect()
}

/// Drop rows whose geography key repeats an earlier row's
///
/// Runs after normalization, so rows that differed only in code spelling
/// (e.g. "UK" vs "GB") collapse to the first occurrence.
pub fn dedup_geo(rows: Vec<Row>) -> Vec<Row> {
    let mut seen: HashSet<String> = HashSet::new();
    rows.into_iter()
        .filter(|row| match geo_key(row) {
            Some(key) => seen.insert(key),
            None => true,
        })
        .collect()
}

fn canonical_geo(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.len() == 2 && trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
        let code = trimmed.to_ascii_uppercase();
        for (alias, canonical) in COUNTRY_ALIASES {
            if code == *alias {
                return (*canonical).to_string();
            }
        }
        code
    } else {
        trimmed.to_string()
    }
}

fn geo_key(row: &Row) -> Option<String> {
    let mut parts = Vec::new();
    for field in GEO_FIELDS {
        if let Some(Value::String(value)) = row.get(*field) {
            parts.push(format!("{}={}", field, value));
        }
    }
    if parts.is_empty() {
        None
    } else {
        Some(parts.join("\u{1f}"))
    }
}
