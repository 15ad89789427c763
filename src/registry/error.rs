//! Registry error types

use std::fmt;

/// Errors that can occur during template registration or lookup
///
/// All variants are configuration/input errors and are not retryable.
#[derive(Debug)]
pub enum RegistryError {
    /// A template with this name is already registered
    DuplicateTemplate(String),
    /// No template with this name is registered
    UnknownTemplate(String),
    /// A template references a plugin flag the pipeline does not provide
    UnknownPlugin { template: String, plugin: String },
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateTemplate(name) => {
                write!(f, "Template '{}' is already registered", name)
            }
            Self::UnknownTemplate(name) => write!(f, "Template '{}' not found", name),
            Self::UnknownPlugin { template, plugin } => {
                write!(f, "Template '{}' references unknown plugin '{}'", template, plugin)
            }
        }
    }
}

impl std::error::Error for RegistryError {}
