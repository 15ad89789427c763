//! Query request types (noun module)

mod request;

pub use request::{QueryFilter, QueryRequest, TimeRange};
