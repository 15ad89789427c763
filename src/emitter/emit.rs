//! SQL emitter
//!
//! Transforms a ResolvedQuery into a parameterized SQL string plus an ordered
//! bind list. Runtime values never appear in the SQL text - every filter value
//! and time bound becomes a `?` placeholder with a typed bind.

use chrono::{DateTime, Utc};
use crate::assembler::{Predicate, ResolvedQuery};

/// A value bound to a `?` placeholder, in placeholder order
#[derive(Debug, Clone, PartialEq)]
pub enum BindValue {
    Text(String),
    Timestamp(DateTime<Utc>),
}

/// A parameterized query ready for an execution collaborator
#[derive(Debug, Clone, PartialEq)]
pub struct SqlQuery {
    pub sql: String,
    pub binds: Vec<BindValue>,
}

impl SqlQuery {
    /// Number of `?` placeholders in the SQL text
    pub fn placeholder_count(&self) -> usize {
        self.sql.matches('?').count()
    }
}

/// Emit parameterized SQL from a resolved query
pub fn emit_sql(query: &ResolvedQuery<'_>) -> SqlQuery {
    let mut binds = Vec::new();
    let mut sql = format!(
        "SELECT {}\nFROM {}",
        query.fields().join(", "),
        query.table()
    );

    let clauses: Vec<String> = query
        .predicates
        .iter()
        .map(|p| emit_predicate(p, &mut binds))
        .collect();
    if !clauses.is_empty() {
        sql.push_str("\nWHERE ");
        sql.push_str(&clauses.join("\n  AND "));
    }

    if !query.group_by().is_empty() {
        sql.push_str("\nGROUP BY ");
        sql.push_str(&query.group_by().join(", "));
    }

    if let Some(order) = &query.order_by {
        sql.push_str("\nORDER BY ");
        sql.push_str(order);
    }

    if let Some(limit) = query.limit {
        sql.push_str(&format!("\nLIMIT {}", limit));
    }

    SqlQuery { sql, binds }
}

fn emit_predicate(predicate: &Predicate, binds: &mut Vec<BindValue>) -> String {
    match predicate {
        Predicate::Raw(fragment) => format!("({})", fragment),
        Predicate::TimeRange { field, start, end } => {
            binds.push(BindValue::Timestamp(*start));
            binds.push(BindValue::Timestamp(*end));
            format!("({field} >= ? AND {field} < ?)")
        }
        Predicate::Eq { field, value } => {
            binds.push(BindValue::Text(value.clone()));
            format!("{field} = ?")
        }
        Predicate::In { field, values } => {
            let placeholders: Vec<&str> = values.iter().map(|_| "?").collect();
            binds.extend(values.iter().cloned().map(BindValue::Text));
            format!("{field} IN ({})", placeholders.join(", "))
        }
    }
}
