//! simplequery - Resolve declarative query templates into parameterized queries
//!
//! This library provides:
//! - Template definition types (Template, TemplateCatalog)
//! - Catalog parsing from YAML
//! - A read-only template registry (populated once at startup)
//! - Runtime filter validation against per-template allow-lists
//! - Query assembly (base predicates + time range + validated filters)
//! - Parameterized SQL emission
//! - Idempotent row post-processing plugins
//!
//! # Architecture
//!
//! **Noun modules** (data structures):
//! - `template/` - template definitions (Template, TemplateCatalog)
//! - `query/` - request types (QueryRequest, QueryFilter, TimeRange)
//!
//! **Verb modules** (transformations):
//! - `parser/` - YAML → TemplateCatalog
//! - `registry/` - TemplateCatalog → registered, lookup-able templates
//! - `validator/` - Template + runtime filters → validated filters
//! - `assembler/` - Template + QueryRequest + validated filters → ResolvedQuery
//! - `emitter/` - ResolvedQuery → parameterized SQL + bind values
//! - `pipeline/` - row set → post-processed row set
//!
//! The `engine` module composes the stages: Validate → Assemble →
//! Execute (external, via the `Executor` trait) → Plugins → rows.
//!
//! # Example
//!
//! ```ignore
//! use simplequery::{parser, PluginPipeline, QueryEngine, QueryRequest, TimeRange};
//!
//! let catalog = parser::parse_file("templates.yaml")?;
//! let mut engine = QueryEngine::new(PluginPipeline::standard());
//! engine.load(catalog)?;
//!
//! let request = QueryRequest::new("slow_pages", TimeRange::new(start, end));
//! let resolved = engine.resolve(&request)?;
//! let sql = simplequery::emit_sql(&resolved);
//! ```

pub mod template;
pub mod query;
pub mod parser;
pub mod registry;
pub mod validator;
pub mod assembler;
pub mod emitter;
pub mod pipeline;
pub mod engine;
pub mod error;

// Re-export commonly used types
pub use template::{Template, TemplateCatalog};
pub use query::{QueryFilter, QueryRequest, TimeRange};
pub use registry::{RegistryError, TemplateRegistry};
pub use validator::{validate_filters, BoundFilter, FilterValue, ValidateError};
pub use assembler::{assemble, AssembleError, Predicate, ResolvedQuery};
pub use emitter::{emit_sql, BindValue, SqlQuery};
pub use pipeline::{PluginPipeline, Row};
pub use engine::{EngineError, Executor, QueryEngine, RunError};
pub use error::ParseError;
