//! Attribute table attached to a collection of geometries.
//!
//! [`Metadata`] stores named fields ([`Column`]s). Every field holds values of a single type, and all fields have the
//! same length, so the table can be read either by field or by record.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors of [`Metadata`] construction and combination.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MetadataError {
    /// Fields have different lengths.
    #[error("field `{key}` has {found} values, expected {expected}")]
    FieldLength {
        /// Name of the offending field.
        key: String,
        /// Length of the first field.
        expected: usize,
        /// Length of the offending field.
        found: usize,
    },
    /// The same field name was given twice.
    #[error("duplicate field `{0}`")]
    DuplicateKey(String),
    /// Two tables do not have the same set of field names.
    #[error("field names of the tables do not match")]
    KeyMismatch,
    /// A field has different value types in two tables.
    #[error("field `{key}` holds {left} values in one table and {right} values in the other")]
    TypeMismatch {
        /// Name of the offending field.
        key: String,
        /// Value type of the field in the first table.
        left: &'static str,
        /// Value type of the field in the second table.
        right: &'static str,
    },
}

/// Values of one field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Column {
    /// Integer values.
    Int(Vec<i64>),
    /// Floating point values.
    Float(Vec<f64>),
    /// String values.
    Text(Vec<String>),
    /// Boolean values.
    Bool(Vec<bool>),
}

/// Single value of a field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum Value {
    Int(i64),
    Float(f64),
    Text(String),
    Bool(bool),
}

impl Column {
    /// Number of values in the column.
    pub fn len(&self) -> usize {
        match self {
            Column::Int(v) => v.len(),
            Column::Float(v) => v.len(),
            Column::Text(v) => v.len(),
            Column::Bool(v) => v.len(),
        }
    }

    /// Returns true if the column has no values.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Name of the value type.
    pub fn type_name(&self) -> &'static str {
        match self {
            Column::Int(_) => "int",
            Column::Float(_) => "float",
            Column::Text(_) => "text",
            Column::Bool(_) => "bool",
        }
    }

    /// Value at `index`.
    pub fn get(&self, index: usize) -> Option<Value> {
        match self {
            Column::Int(v) => v.get(index).map(|v| Value::Int(*v)),
            Column::Float(v) => v.get(index).map(|v| Value::Float(*v)),
            Column::Text(v) => v.get(index).map(|v| Value::Text(v.clone())),
            Column::Bool(v) => v.get(index).map(|v| Value::Bool(*v)),
        }
    }

    // Caller guarantees `index < self.len()`.
    fn remove(&mut self, index: usize) -> Value {
        match self {
            Column::Int(v) => Value::Int(v.remove(index)),
            Column::Float(v) => Value::Float(v.remove(index)),
            Column::Text(v) => Value::Text(v.remove(index)),
            Column::Bool(v) => Value::Bool(v.remove(index)),
        }
    }

    fn same_type(&self, other: &Column) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }

    // Caller guarantees both columns have the same type.
    fn append(&mut self, other: &Column) {
        match (self, other) {
            (Column::Int(a), Column::Int(b)) => a.extend_from_slice(b),
            (Column::Float(a), Column::Float(b)) => a.extend_from_slice(b),
            (Column::Text(a), Column::Text(b)) => a.extend_from_slice(b),
            (Column::Bool(a), Column::Bool(b)) => a.extend_from_slice(b),
            _ => {}
        }
    }
}

/// Named fields of equal length. Fields keep the order in which they were given.
///
/// ```
/// use karta_types::metadata::{Column, Metadata, Value};
///
/// let metadata = Metadata::new([
///     ("name", Column::Text(vec!["a".into(), "b".into()])),
///     ("depth", Column::Float(vec![1.5, 2.0])),
/// ])
/// .unwrap();
///
/// assert_eq!(metadata.len(), 2);
/// assert_eq!(metadata.record(1), Some(vec![Value::Text("b".into()), Value::Float(2.0)]));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "Vec<(String, Column)>",
    into = "Vec<(String, Column)>"
)]
pub struct Metadata {
    fields: Vec<(String, Column)>,
}

impl Metadata {
    /// Creates a table from named fields. All fields must have the same length and distinct names.
    pub fn new<K, I>(fields: I) -> Result<Self, MetadataError>
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Column)>,
    {
        let mut result: Vec<(String, Column)> = Vec::new();
        for (key, column) in fields {
            let key = key.into();
            if result.iter().any(|(existing, _)| *existing == key) {
                return Err(MetadataError::DuplicateKey(key));
            }

            if let Some((_, first)) = result.first() {
                if first.len() != column.len() {
                    return Err(MetadataError::FieldLength {
                        key,
                        expected: first.len(),
                        found: column.len(),
                    });
                }
            }

            result.push((key, column));
        }

        Ok(Self { fields: result })
    }

    /// Creates a table with one field named `values`.
    pub fn single(column: Column) -> Self {
        Self {
            fields: vec![("values".to_string(), column)],
        }
    }

    /// Creates a table without fields.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.fields.first().map_or(0, |(_, column)| column.len())
    }

    /// Returns true if the table has no records.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Field names in order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(key, _)| key.as_str())
    }

    /// Returns true if the table has a field named `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.field(key).is_some()
    }

    /// All values of the field `name`.
    pub fn field(&self, name: &str) -> Option<&Column> {
        self.fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, column)| column)
    }

    /// Values of all fields at position `index`, in field order.
    pub fn record(&self, index: usize) -> Option<Vec<Value>> {
        if index >= self.len() {
            return None;
        }

        self.fields
            .iter()
            .map(|(_, column)| column.get(index))
            .collect()
    }

    /// Removes the record at `index` from every field and returns it.
    pub fn remove(&mut self, index: usize) -> Option<Vec<Value>> {
        if index >= self.len() {
            return None;
        }

        Some(
            self.fields
                .iter_mut()
                .map(|(_, column)| column.remove(index))
                .collect(),
        )
    }

    /// Returns a new table with the records of `other` appended to the records of `self`.
    pub fn concat(&self, other: &Metadata) -> Result<Metadata, MetadataError> {
        let mut result = self.clone();
        result.extend(other)?;
        Ok(result)
    }

    /// Appends the records of `other`. Both tables must have the same field names and types. On error `self` is left
    /// unchanged.
    pub fn extend(&mut self, other: &Metadata) -> Result<(), MetadataError> {
        if self.fields.len() != other.fields.len() {
            return Err(MetadataError::KeyMismatch);
        }

        for (key, column) in &self.fields {
            let Some(other_column) = other.field(key) else {
                return Err(MetadataError::KeyMismatch);
            };

            if !column.same_type(other_column) {
                return Err(MetadataError::TypeMismatch {
                    key: key.clone(),
                    left: column.type_name(),
                    right: other_column.type_name(),
                });
            }
        }

        for (key, column) in &mut self.fields {
            if let Some(other_column) = other.field(key) {
                column.append(other_column);
            }
        }

        Ok(())
    }
}

impl TryFrom<Vec<(String, Column)>> for Metadata {
    type Error = MetadataError;

    fn try_from(value: Vec<(String, Column)>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Metadata> for Vec<(String, Column)> {
    fn from(value: Metadata) -> Self {
        value.fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn stations() -> Metadata {
        Metadata::new([
            ("id", Column::Int(vec![1, 2, 3])),
            ("depth", Column::Float(vec![0.5, 1.0, 1.5])),
            ("dry", Column::Bool(vec![true, false, false])),
        ])
        .unwrap()
    }

    #[test]
    fn new_checks_lengths_and_keys() {
        assert_matches!(
            Metadata::new([
                ("id", Column::Int(vec![1, 2])),
                ("depth", Column::Float(vec![0.5])),
            ]),
            Err(MetadataError::FieldLength {
                expected: 2,
                found: 1,
                ..
            })
        );
        assert_matches!(
            Metadata::new([("id", Column::Int(vec![1])), ("id", Column::Int(vec![2]))]),
            Err(MetadataError::DuplicateKey(key)) if key == "id"
        );
    }

    #[test]
    fn access() {
        let metadata = stations();
        assert_eq!(metadata.len(), 3);
        assert!(!metadata.is_empty());
        assert_eq!(metadata.keys().collect::<Vec<_>>(), ["id", "depth", "dry"]);
        assert!(metadata.contains_key("depth"));
        assert!(!metadata.contains_key("name"));
        assert_eq!(metadata.field("id"), Some(&Column::Int(vec![1, 2, 3])));
        assert_eq!(
            metadata.record(0),
            Some(vec![Value::Int(1), Value::Float(0.5), Value::Bool(true)])
        );
        assert_eq!(metadata.record(3), None);
    }

    #[test]
    fn single_and_empty() {
        let single = Metadata::single(Column::Text(vec!["a".into(), "b".into()]));
        assert_eq!(single.keys().collect::<Vec<_>>(), ["values"]);
        assert_eq!(single.len(), 2);

        let empty = Metadata::empty();
        assert_eq!(empty.len(), 0);
        assert!(empty.is_empty());
        assert_eq!(empty.record(0), None);
    }

    #[test]
    fn remove() {
        let mut metadata = stations();
        assert_eq!(
            metadata.remove(1),
            Some(vec![Value::Int(2), Value::Float(1.0), Value::Bool(false)])
        );
        assert_eq!(metadata.len(), 2);
        assert_eq!(metadata.field("id"), Some(&Column::Int(vec![1, 3])));
        assert_eq!(metadata.remove(2), None);
    }

    #[test]
    fn concat() {
        let reordered = Metadata::new([
            ("dry", Column::Bool(vec![true])),
            ("id", Column::Int(vec![4])),
            ("depth", Column::Float(vec![2.0])),
        ])
        .unwrap();

        let combined = stations().concat(&reordered).unwrap();
        assert_eq!(combined.len(), 4);
        assert_eq!(combined.field("id"), Some(&Column::Int(vec![1, 2, 3, 4])));
        assert_eq!(
            combined.record(3),
            Some(vec![Value::Int(4), Value::Float(2.0), Value::Bool(true)])
        );
    }

    #[test]
    fn concat_checks_keys_and_types() {
        let other_keys = Metadata::new([
            ("id", Column::Int(vec![4])),
            ("name", Column::Float(vec![2.0])),
            ("dry", Column::Bool(vec![true])),
        ])
        .unwrap();
        assert_matches!(
            stations().concat(&other_keys),
            Err(MetadataError::KeyMismatch)
        );
        assert_matches!(
            stations().concat(&Metadata::empty()),
            Err(MetadataError::KeyMismatch)
        );

        let other_types = Metadata::new([
            ("id", Column::Float(vec![4.0])),
            ("depth", Column::Float(vec![2.0])),
            ("dry", Column::Bool(vec![true])),
        ])
        .unwrap();
        let mut metadata = stations();
        assert_matches!(
            metadata.extend(&other_types),
            Err(MetadataError::TypeMismatch {
                left: "int",
                right: "float",
                ..
            })
        );
        assert_eq!(metadata, stations());
    }

    #[test]
    fn serde_validates_lengths() {
        let json = serde_json::to_string(&stations()).unwrap();
        let restored: Metadata = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, stations());

        let uneven = r#"[["a",{"Int":[1,2]}],["b",{"Int":[1]}]]"#;
        assert!(serde_json::from_str::<Metadata>(uneven).is_err());
    }
}
