//! Query assembly
//!
//! Combines a template's declarative pieces with a validated request into a
//! ResolvedQuery. Assembly has no side effects and never mutates the template,
//! so a failed or cancelled request leaves nothing to clean up.

use tracing::debug;
use crate::query::QueryRequest;
use crate::template::Template;
use crate::validator::{BoundFilter, FilterValue};
use super::error::AssembleError;
use super::types::{Predicate, ResolvedQuery};

/// Assemble a query from a template, a request and its validated filters
///
/// Predicate order is fixed: base predicates as declared, then the half-open
/// time bound, then one predicate per validated filter in supplied order.
/// Limit/ordering overrides from the request are honored only when the
/// template is customizable; otherwise they are ignored without error.
pub fn assemble<'a>(
    template: &'a Template,
    request: &QueryRequest,
    filters: &[BoundFilter],
) -> Result<ResolvedQuery<'a>, AssembleError> {
    if request.range.is_reversed() {
        return Err(AssembleError::InvalidTimeRange {
            start: request.range.start,
            end: request.range.end,
        });
    }

    let mut predicates: Vec<Predicate> = template
        .base_predicates
        .iter()
        .cloned()
        .map(Predicate::Raw)
        .collect();

    predicates.push(Predicate::TimeRange {
        field: template.time_field.clone(),
        start: request.range.start,
        end: request.range.end,
    });

    for filter in filters {
        predicates.push(match &filter.value {
            FilterValue::One(value) => Predicate::Eq {
                field: filter.field.clone(),
                value: value.clone(),
            },
            FilterValue::Many(values) => Predicate::In {
                field: filter.field.clone(),
                values: values.clone(),
            },
        });
    }

    let (order_by, limit) = if template.customizable {
        (
            request.order_by.clone().or_else(|| template.order_by.clone()),
            request.limit.or(template.limit),
        )
    } else {
        if request.order_by.is_some() || request.limit.is_some() {
            debug!(template = %template.name, "ignoring override hints on non-customizable template");
        }
        (template.order_by.clone(), template.limit)
    };

    Ok(ResolvedQuery {
        template,
        predicates,
        order_by,
        limit,
    })
}
