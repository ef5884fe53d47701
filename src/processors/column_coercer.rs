use crate::models::{Dataset, Field, Row, TypedRow};
use crate::utils::constants::{FLOAT_COLUMNS, INTEGER_COLUMNS};
use tracing::debug;

/// Converts selected columns of a row to JSON numbers.
///
/// A value that does not parse (OpenFlights writes `\N` for unknown) is kept
/// as text, so coercion never fails a run.
pub struct ColumnCoercer {
    integer_columns: Vec<usize>,
    float_columns: Vec<usize>,
}

impl ColumnCoercer {
    pub fn new() -> Self {
        Self {
            integer_columns: INTEGER_COLUMNS.to_vec(),
            float_columns: FLOAT_COLUMNS.to_vec(),
        }
    }

    pub fn coerce_row(&self, row: &Row) -> TypedRow {
        row.fields
            .iter()
            .enumerate()
            .map(|(index, value)| self.coerce_field(index, value))
            .collect::<Vec<_>>()
            .into()
    }

    pub fn coerce_dataset(&self, dataset: &Dataset) -> Vec<TypedRow> {
        let rows: Vec<TypedRow> = dataset.iter().map(|row| self.coerce_row(row)).collect();
        debug!(rows = rows.len(), "Coerced numeric columns");
        rows
    }

    fn coerce_field(&self, index: usize, value: &str) -> Field {
        if self.integer_columns.contains(&index) {
            if let Ok(n) = value.trim().parse::<i64>() {
                return Field::Integer(n);
            }
        } else if self.float_columns.contains(&index) {
            // NaN and infinities have no JSON form
            if let Ok(x) = value.trim().parse::<f64>() {
                if x.is_finite() {
                    return Field::Float(x);
                }
            }
        }
        Field::Text(value.to_string())
    }
}

impl Default for ColumnCoercer {
    fn default() -> Self {
        Self::new()
    }
}
