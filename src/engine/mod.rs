//! Engine orchestration (verb module)
//!
//! Composes the stages: Validate → Assemble → Execute (external) → Plugins.
//! The engine holds no mutable state after `load`, so `resolve` and `run`
//! take `&self` and any number of requests may proceed concurrently.

mod error;

pub use error::{EngineError, RunError};

use tracing::debug;
use crate::assembler::{assemble, ResolvedQuery};
use crate::emitter::{emit_sql, SqlQuery};
use crate::pipeline::{PluginPipeline, Row};
use crate::query::QueryRequest;
use crate::registry::{RegistryError, TemplateRegistry};
use crate::template::{Template, TemplateCatalog};
use crate::validator::validate_filters;

/// Execution collaborator seam
///
/// Implementations run the emitted SQL against the analytics store. Their
/// failures pass through `run` unchanged; this layer performs no retries and
/// produces no side effects before `execute` is called.
pub trait Executor {
    type Error: std::error::Error + 'static;

    fn execute(&self, query: &SqlQuery) -> Result<Vec<Row>, Self::Error>;
}

/// Template resolution engine
///
/// Built once at startup from a template catalog and a plugin pipeline, then
/// used read-only for the life of the process.
pub struct QueryEngine {
    registry: TemplateRegistry,
    pipeline: PluginPipeline,
}

impl QueryEngine {
    /// Create an engine whose registry accepts the pipeline's plugin names
    pub fn new(pipeline: PluginPipeline) -> Self {
        let registry = TemplateRegistry::new(pipeline.names().map(str::to_string));
        Self { registry, pipeline }
    }

    /// Register a catalog of templates
    ///
    /// Registration-time errors (duplicate names, unknown plugin flags) are
    /// surfaced here, before any request can reference the catalog.
    pub fn load(&mut self, catalog: TemplateCatalog) -> Result<(), RegistryError> {
        self.registry.load(catalog)
    }

    pub fn registry(&self) -> &TemplateRegistry {
        &self.registry
    }

    /// Resolve a request into an executable query
    ///
    /// Validate → Assemble. No query is constructed when the template is
    /// unknown or a filter is rejected.
    pub fn resolve(&self, request: &QueryRequest) -> Result<ResolvedQuery<'_>, EngineError> {
        let template = self.registry.lookup(&request.template)?;
        let filters = validate_filters(template, &request.filters)?;
        let resolved = assemble(template, request, &filters)?;
        debug!(
            template = %template.name,
            predicates = resolved.predicates.len(),
            "resolved query"
        );
        Ok(resolved)
    }

    /// Apply a template's plugins to a row set
    ///
    /// Usable standalone on cached rows; plugins are idempotent so re-running
    /// them is safe.
    pub fn postprocess(&self, template: &Template, rows: Vec<Row>) -> Vec<Row> {
        self.pipeline.apply(template, rows)
    }

    /// Resolve, execute and post-process in one call
    ///
    /// Execution errors are passed through unchanged, never reinterpreted.
    pub fn run<E: Executor>(
        &self,
        executor: &E,
        request: &QueryRequest,
    ) -> Result<Vec<Row>, RunError<E::Error>> {
        let resolved = self.resolve(request).map_err(RunError::Resolve)?;
        let query = emit_sql(&resolved);
        let rows = executor.execute(&query).map_err(RunError::Execute)?;
        Ok(self.pipeline.apply(resolved.template, rows))
    }
}
