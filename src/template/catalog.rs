//! Root catalog definition

use serde::Deserialize;
use std::path::Path;
use super::definition::Template;
use crate::error::ParseError;

/// The root catalog containing template definitions
///
/// This is the deserialized form of a templates YAML document, before the
/// definitions are registered. Registration-time checks (duplicate names,
/// unknown plugin flags) happen in the registry, not here.
#[derive(Debug, Deserialize)]
pub struct TemplateCatalog {
    pub templates: Vec<Template>,
}

impl TemplateCatalog {
    /// Load a catalog from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ParseError> {
        let path_str = path.as_ref().display().to_string();
        let contents = std::fs::read_to_string(&path).map_err(|e| ParseError::Io {
            path: path_str,
            source: e,
        })?;
        serde_yaml::from_str(&contents).map_err(ParseError::from)
    }

    /// Get a template by name
    pub fn get_template(&self, name: &str) -> Option<&Template> {
        self.templates.iter().find(|t| t.name == name)
    }

    /// All template names, in declaration order
    pub fn names(&self) -> Vec<&str> {
        self.templates.iter().map(|t| t.name.as_str()).collect()
    }

    /// All unique table names referenced by the catalog
    pub fn tables(&self) -> Vec<String> {
        let mut tables: Vec<String> = self.templates.iter().map(|t| t.table.clone()).collect();
        tables.sort();
        tables.dedup();
        tables
    }
}
