//! Record stores: row-oriented and column-oriented layouts behind one contract

use std::ops::Range;

use crate::error::StoreError;

use super::record::Record;
use super::schema::Schema;
use super::value::Value;

/// Uniform random-access contract over an ordered collection of records.
///
/// The backing layout — one aggregate per record, or one array per column —
/// is an internal choice; consumers see the same behavior either way.
pub trait RecordStore {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The record at `index`, out-of-range access is an error.
    fn get(&self, index: usize) -> Result<Record, StoreError>;

    /// The records in `range`, in order.
    fn slice(&self, range: Range<usize>) -> Result<Vec<Record>, StoreError>;

    /// Append one record's fields, keyed by column name. Atomic: on error no
    /// part of the store has changed.
    fn append(&mut self, record: &Record) -> Result<(), StoreError>;

    /// Field-by-field, index-by-index equality, regardless of layout.
    fn eq_records(&self, other: &dyn RecordStore) -> bool {
        self.len() == other.len()
            && (0..self.len()).all(|i| match (self.get(i), other.get(i)) {
                (Ok(a), Ok(b)) => a == b,
                _ => false,
            })
    }
}

/// Row layout: one [`Record`] per input row.
///
/// The column set is fixed by [`RowStore::with_columns`] or adopted from the
/// first appended record; afterwards [`RecordStore::append`] rejects records
/// with missing or unknown fields, exactly as the column layout does.
#[derive(Debug, Clone, Default)]
pub struct RowStore {
    records: Vec<Record>,
    names: Option<Vec<String>>,
}

impl RowStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty store with a fixed column set.
    pub fn with_columns<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            records: Vec::new(),
            names: Some(names.into_iter().map(Into::into).collect()),
        }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }
}

impl RecordStore for RowStore {
    fn len(&self) -> usize {
        self.records.len()
    }

    fn get(&self, index: usize) -> Result<Record, StoreError> {
        self.records.get(index).cloned().ok_or(StoreError::OutOfRange {
            index,
            len: self.records.len(),
        })
    }

    fn slice(&self, range: Range<usize>) -> Result<Vec<Record>, StoreError> {
        self.records
            .get(range.clone())
            .map(<[Record]>::to_vec)
            .ok_or(StoreError::OutOfRange {
                index: range.end,
                len: self.records.len(),
            })
    }

    fn append(&mut self, record: &Record) -> Result<(), StoreError> {
        match &self.names {
            Some(names) => check_fields(record, names)?,
            None => self.names = Some(record.names().map(str::to_string).collect()),
        }
        self.records.push(record.clone());
        Ok(())
    }
}

impl FromIterator<Record> for RowStore {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let records: Vec<Record> = iter.into_iter().collect();
        let names = records
            .first()
            .map(|r| r.names().map(str::to_string).collect());
        Self { records, names }
    }
}

/// Name-keyed field check shared by both layouts: every store column must be
/// present, nothing beyond them.
fn check_fields(record: &Record, names: &[String]) -> Result<(), StoreError> {
    for name in names {
        if record.get(name).is_none() {
            return Err(StoreError::MissingField {
                column: name.clone(),
            });
        }
    }
    if let Some(extra) = record.names().find(|n| !names.iter().any(|m| m == n)) {
        return Err(StoreError::UnknownField {
            column: extra.to_string(),
        });
    }
    Ok(())
}

impl<'a> IntoIterator for &'a RowStore {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Column layout: one value array per schema column.
///
/// Records are assembled on demand from the arrays. Invariant: every column
/// array has the same length at all times; [`RecordStore::append`] either
/// extends all of them or none.
#[derive(Debug, Clone, Default)]
pub struct ColumnStore {
    names: Vec<String>,
    columns: Vec<Vec<Value>>,
}

impl ColumnStore {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        let columns = vec![Vec::new(); names.len()];
        Self { names, columns }
    }

    pub fn from_schema(schema: &Schema) -> Self {
        Self::new(schema.names())
    }

    /// Column names in schema order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// The raw value array for one column.
    pub fn column(&self, name: &str) -> Option<&[Value]> {
        let idx = self.names.iter().position(|n| n == name)?;
        Some(&self.columns[idx])
    }

    /// Lazy view over `range`; records are assembled as the view is read.
    pub fn view(&self, range: Range<usize>) -> Result<ColumnSlice<'_>, StoreError> {
        let len = RecordStore::len(self);
        if range.end > len || range.start > range.end {
            return Err(StoreError::OutOfRange {
                index: range.end,
                len,
            });
        }
        Ok(ColumnSlice { store: self, range })
    }

    /// Lazy view over the whole store.
    pub fn iter(&self) -> ColumnSlice<'_> {
        ColumnSlice {
            store: self,
            range: 0..RecordStore::len(self),
        }
    }

    fn assemble(&self, index: usize) -> Record {
        self.names
            .iter()
            .zip(&self.columns)
            .map(|(name, column)| (name.clone(), column[index].clone()))
            .collect()
    }
}

impl RecordStore for ColumnStore {
    fn len(&self) -> usize {
        // All column arrays have equal length.
        self.columns.first().map_or(0, Vec::len)
    }

    fn get(&self, index: usize) -> Result<Record, StoreError> {
        let len = self.len();
        if index >= len {
            return Err(StoreError::OutOfRange { index, len });
        }
        Ok(self.assemble(index))
    }

    fn slice(&self, range: Range<usize>) -> Result<Vec<Record>, StoreError> {
        Ok(self.view(range)?.collect())
    }

    fn append(&mut self, record: &Record) -> Result<(), StoreError> {
        // Validate every field up front so a bad append changes nothing.
        let values = self
            .names
            .iter()
            .map(|name| {
                record.get(name).ok_or_else(|| StoreError::MissingField {
                    column: name.clone(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        if let Some(extra) = record.names().find(|n| !self.names.iter().any(|m| m == n)) {
            return Err(StoreError::UnknownField {
                column: extra.to_string(),
            });
        }
        for (column, value) in self.columns.iter_mut().zip(values) {
            column.push(value.clone());
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a ColumnStore {
    type Item = Record;
    type IntoIter = ColumnSlice<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Lazy, restartable view over a range of a [`ColumnStore`].
///
/// Cloning the view (or calling [`ColumnSlice::iter`]) restarts it; the same
/// indices always yield the same records. Nothing is materialized until read.
#[derive(Debug, Clone)]
pub struct ColumnSlice<'a> {
    store: &'a ColumnStore,
    range: Range<usize>,
}

impl ColumnSlice<'_> {
    pub fn len(&self) -> usize {
        self.range.len()
    }

    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }

    /// The record at `offset` within the view.
    pub fn get(&self, offset: usize) -> Option<Record> {
        let index = self.range.start.checked_add(offset)?;
        (index < self.range.end).then(|| self.store.assemble(index))
    }

    /// A fresh pass over the view without consuming it.
    pub fn iter(&self) -> ColumnSlice<'_> {
        self.clone()
    }
}

impl Iterator for ColumnSlice<'_> {
    type Item = Record;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.range.next()?;
        Some(self.store.assemble(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.range.size_hint()
    }
}

impl ExactSizeIterator for ColumnSlice<'_> {}
