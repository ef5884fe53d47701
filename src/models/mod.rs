pub mod field;
pub mod row;

pub use field::{Field, TypedRow};
pub use row::{Dataset, Row};
