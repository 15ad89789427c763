//! Template registry
//!
//! The registry is populated once at process start from a parsed catalog and
//! is read-only thereafter. Lookups take `&self`, so any number of requests
//! can resolve concurrently without coordination.

use std::collections::{BTreeSet, HashMap};
use tracing::debug;
use crate::template::{Template, TemplateCatalog};
use super::error::RegistryError;

/// Named template store
#[derive(Debug, Default)]
pub struct TemplateRegistry {
    templates: HashMap<String, Template>,
    /// Plugin names the pipeline provides; flags outside this set are
    /// rejected at registration time so bad configuration is caught early
    known_plugins: BTreeSet<String>,
}

impl TemplateRegistry {
    /// Create an empty registry accepting the given plugin names
    pub fn new<I, S>(known_plugins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            templates: HashMap::new(),
            known_plugins: known_plugins.into_iter().map(Into::into).collect(),
        }
    }

    /// Register a single template
    pub fn register(&mut self, template: Template) -> Result<(), RegistryError> {
        self.check(&template)?;
        debug!(template = %template.name, table = %template.table, "registered template");
        self.templates.insert(template.name.clone(), template);
        Ok(())
    }

    /// Register every template in a catalog
    ///
    /// The whole catalog is checked before anything is inserted: a bad entry
    /// anywhere means no template from the catalog becomes resolvable.
    pub fn load(&mut self, catalog: TemplateCatalog) -> Result<(), RegistryError> {
        let mut batch_names: BTreeSet<String> = BTreeSet::new();
        for template in &catalog.templates {
            self.check(template)?;
            if !batch_names.insert(template.name.clone()) {
                return Err(RegistryError::DuplicateTemplate(template.name.clone()));
            }
        }
        for template in catalog.templates {
            debug!(template = %template.name, table = %template.table, "registered template");
            self.templates.insert(template.name.clone(), template);
        }
        Ok(())
    }

    /// Look up a template by name
    pub fn lookup(&self, name: &str) -> Result<&Template, RegistryError> {
        self.templates
            .get(name)
            .ok_or_else(|| RegistryError::UnknownTemplate(name.to_string()))
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Registered template names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.templates.keys().map(String::as_str).collect();
        names.sort();
        names
    }

    fn check(&self, template: &Template) -> Result<(), RegistryError> {
        if self.templates.contains_key(&template.name) {
            return Err(RegistryError::DuplicateTemplate(template.name.clone()));
        }
        // Every flag key is checked, including ones set to false: a
        // misspelled name that happens to be disabled is still bad config.
        for plugin in template.plugins.keys() {
            if !self.known_plugins.contains(plugin) {
                return Err(RegistryError::UnknownPlugin {
                    template: template.name.clone(),
                    plugin: plugin.clone(),
                });
            }
        }
        Ok(())
    }
}
