use serde::Serialize;

/// A single value of a coerced row. Serializes as a bare JSON number or string.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Field {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl Field {
    pub fn is_numeric(&self) -> bool {
        matches!(self, Field::Integer(_) | Field::Float(_))
    }
}

impl From<&str> for Field {
    fn from(value: &str) -> Self {
        Field::Text(value.to_string())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TypedRow {
    pub fields: Vec<Field>,
}

impl TypedRow {
    pub fn new(fields: Vec<Field>) -> Self {
        Self { fields }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl From<Vec<Field>> for TypedRow {
    fn from(fields: Vec<Field>) -> Self {
        TypedRow::new(fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_serialization() {
        let row = TypedRow::new(vec![
            Field::Integer(1),
            Field::from("Goroka"),
            Field::Float(-6.081689),
            Field::Float(10.0),
        ]);

        let json = serde_json::to_string(&row).unwrap();
        assert_eq!(json, r#"[1,"Goroka",-6.081689,10.0]"#);
    }

    #[test]
    fn test_is_numeric() {
        assert!(Field::Integer(5282).is_numeric());
        assert!(Field::Float(145.391881).is_numeric());
        assert!(!Field::from("U").is_numeric());
    }
}
