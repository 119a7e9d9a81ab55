//! Error types for ingestion, storage, and rendering

use thiserror::Error;

/// A single raw field failed its column's conversion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("column '{column}': cannot decode {raw:?}: {reason}")]
pub struct DecodeError {
    /// Name of the column whose decoder rejected the input.
    pub column: String,
    /// The raw field text as read from the source.
    pub raw: String,
    /// The underlying conversion failure.
    pub reason: String,
}

impl DecodeError {
    pub fn new(
        column: impl Into<String>,
        raw: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            column: column.into(),
            raw: raw.into(),
            reason: reason.into(),
        }
    }
}

/// Two schema columns share the same name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("duplicate column name '{name}'")]
pub struct DuplicateColumn {
    pub name: String,
}

/// Ingestion pipeline failure.
///
/// Line numbers are 1-based and count the header, so the first data row is
/// line 2 — the same numbering an editor shows for the source file.
#[derive(Debug, Error)]
pub enum ReadError {
    /// A data row failed to decode. Strict by design: one bad row aborts the
    /// whole run. Callers wanting skip-and-warn must wrap per row themselves.
    #[error("line {line}: {source}")]
    Decode {
        line: usize,
        #[source]
        source: DecodeError,
    },

    /// The header has fewer fields than the supplied schema or decoder list.
    #[error("header has {found} fields but {expected} columns were supplied")]
    HeaderTooShort { expected: usize, found: usize },

    /// The source has no header line at all.
    #[error("input has no header line")]
    MissingHeader,

    #[error(transparent)]
    Schema(#[from] DuplicateColumn),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Record store access or append failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("index {index} out of range for store of length {len}")]
    OutOfRange { index: usize, len: usize },

    /// An append left out a value for one of the store's columns. The append
    /// is rejected whole; no column array grows.
    #[error("append is missing a value for column '{column}'")]
    MissingField { column: String },

    /// An append carried a value for a column the store does not have.
    #[error("append has a value for unknown column '{column}'")]
    UnknownField { column: String },
}

/// Table rendering failure.
#[derive(Debug, Error)]
pub enum RenderError {
    /// `row` was called before `headings` on a base dialect.
    #[error("row rendered before headings")]
    RowBeforeHeadings,

    /// The per-column format list does not line up with the row.
    #[error("{expected} column formats supplied but row has {found} values")]
    FormatArity { expected: usize, found: usize },

    /// A format specifier does not apply to the value in its column.
    #[error("format {spec:?} cannot render {value}: {reason}")]
    BadFormat {
        spec: String,
        value: String,
        reason: String,
    },

    /// Unrecognized dialect name passed to the formatter factory.
    #[error("unknown table format '{0}'")]
    UnknownFormat(String),

    /// A projected attribute is absent on a record.
    #[error("record has no field '{0}'")]
    MissingField(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
