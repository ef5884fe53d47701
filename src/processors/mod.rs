pub mod column_coercer;

pub use column_coercer::ColumnCoercer;
