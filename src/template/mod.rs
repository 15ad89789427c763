//! Template definition types (noun module)

mod catalog;
mod definition;

pub use catalog::TemplateCatalog;
pub use definition::Template;
