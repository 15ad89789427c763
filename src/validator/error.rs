//! Validator error types

use std::fmt;

/// Errors that can occur during filter validation
#[derive(Debug)]
pub enum ValidateError {
    /// Filter key is not in the template's allow-list
    InvalidFilter { template: String, field: String },
    /// Filter key contains characters that cannot form a column identifier
    UnsafeField(String),
}

impl fmt::Display for ValidateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFilter { template, field } => {
                write!(f, "Filter '{}' is not allowed for template '{}'", field, template)
            }
            Self::UnsafeField(field) => {
                write!(f, "Filter field '{}' is not a valid column identifier", field)
            }
        }
    }
}

impl std::error::Error for ValidateError {}
