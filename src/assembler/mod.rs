mod assemble;
mod error;
mod types;

pub use assemble::assemble;
pub use error::AssembleError;
pub use types::{Predicate, ResolvedQuery};
