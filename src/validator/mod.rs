mod error;
mod validate;

pub use error::ValidateError;
pub use validate::{validate_filters, BoundFilter, FilterValue};
