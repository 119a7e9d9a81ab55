//! Column schemas: ordered (name, decoder) pairs

use indexmap::IndexMap;

use crate::error::{DecodeError, DuplicateColumn};

use super::record::Record;
use super::value::Decoder;

/// One column: a name paired with its decode-function.
#[derive(Debug, Clone)]
pub struct Column {
    pub name: String,
    pub decoder: Decoder,
}

impl Column {
    pub fn new(name: impl Into<String>, decoder: Decoder) -> Self {
        Self {
            name: name.into(),
            decoder,
        }
    }
}

/// An ordered, uniquely named set of columns.
///
/// The order defines both decode order and default render order. A schema is
/// immutable once ingestion starts; readers take it by reference.
#[derive(Debug, Clone)]
pub struct Schema {
    columns: Vec<Column>,
}

impl Schema {
    pub fn new(columns: Vec<Column>) -> Result<Self, DuplicateColumn> {
        for (i, col) in columns.iter().enumerate() {
            if columns[..i].iter().any(|c| c.name == col.name) {
                return Err(DuplicateColumn {
                    name: col.name.clone(),
                });
            }
        }
        Ok(Self { columns })
    }

    /// Zip header names with decoders, one column per decoder. Extra header
    /// names are ignored; arity is the caller's concern.
    pub fn from_header<I, S>(names: I, decoders: &[Decoder]) -> Result<Self, DuplicateColumn>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let columns = names
            .into_iter()
            .zip(decoders.iter())
            .map(|(name, decoder)| Column::new(name, decoder.clone()))
            .collect();
        Self::new(columns)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Column names in schema order.
    pub fn names(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.name.clone()).collect()
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    /// Decode one raw row into a mapping-style [`Record`], applying each
    /// column's decoder in schema order.
    ///
    /// Raw fields beyond the schema are ignored; a missing field is a
    /// [`DecodeError`] on the column that has nothing to decode.
    pub fn decode_row(&self, raw: &[&str]) -> Result<Record, DecodeError> {
        let mut fields = IndexMap::with_capacity(self.columns.len());
        for (i, col) in self.columns.iter().enumerate() {
            let raw_field = raw
                .get(i)
                .ok_or_else(|| DecodeError::new(&col.name, "", "missing field"))?;
            let value = col
                .decoder
                .decode(raw_field)
                .map_err(|reason| DecodeError::new(&col.name, *raw_field, reason))?;
            fields.insert(col.name.clone(), value);
        }
        Ok(Record::from_fields(fields))
    }
}
