mod emit;

pub use emit::{emit_sql, BindValue, SqlQuery};
