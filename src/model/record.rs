//! Decoded records and the capabilities they expose

use indexmap::IndexMap;

use crate::error::DecodeError;

use super::value::Value;

/// One decoded row: an ordered mapping from column name to value.
///
/// Field order follows the schema that produced the record. Equality is
/// field-by-field, so records assembled from column arrays compare equal to
/// records decoded row-by-row.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record {
    fields: IndexMap<String, Value>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_fields(fields: IndexMap<String, Value>) -> Self {
        Self { fields }
    }

    /// Look up a field by column name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Set a field, keeping insertion order for new names.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(name.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Column names in field order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Values in field order.
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.fields.values()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl FromIterator<(String, Value)> for Record {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

/// Read access to a field by name.
///
/// The explicit stand-in for attribute lookup: anything that can resolve a
/// column name to a value can be projected by the table printer — a
/// [`Record`], a lazily assembled column view, or a caller's domain struct.
pub trait FieldAccess {
    /// Resolve a named field, `None` if absent.
    fn field(&self, name: &str) -> Option<Value>;
}

impl FieldAccess for Record {
    fn field(&self, name: &str) -> Option<Value> {
        self.get(name).cloned()
    }
}

impl<T: FieldAccess + ?Sized> FieldAccess for &T {
    fn field(&self, name: &str) -> Option<Value> {
        (**self).field(name)
    }
}

/// Construction from one raw delimited row.
///
/// Implemented by any record representation that wants to be an ingestion
/// target; the decoder depends only on this capability, never on a concrete
/// type.
pub trait FromRow: Sized {
    /// Build one instance from the raw fields of a data row.
    fn from_row(row: &[&str]) -> Result<Self, DecodeError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pairs: &[(&str, Value)]) -> Record {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn preserves_field_order() {
        let r = record(&[
            ("name", Value::Str("GOOG".into())),
            ("shares", Value::Int(100)),
            ("price", Value::Float(490.1)),
        ]);
        let names: Vec<&str> = r.names().collect();
        assert_eq!(names, ["name", "shares", "price"]);
    }

    #[test]
    fn equality_is_field_by_field() {
        let a = record(&[("x", Value::Int(1)), ("y", Value::Int(2))]);
        let b = record(&[("x", Value::Int(1)), ("y", Value::Int(2))]);
        let c = record(&[("x", Value::Int(1)), ("y", Value::Int(3))]);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn field_access() {
        let r = record(&[("shares", Value::Int(100))]);
        assert_eq!(r.field("shares"), Some(Value::Int(100)));
        assert_eq!(r.field("missing"), None);
    }
}
