//! tabrow - typed pipeline for delimited tabular text
//!
//! Ingests delimited rows into typed records with a pluggable decode
//! strategy, stores them behind a uniform sequence contract over either a
//! row-oriented or column-oriented layout, and renders them through
//! composable output formatters.

pub mod config;
pub mod error;
pub mod format;
pub mod model;
pub mod printer;
pub mod reader;

pub use config::ReadOptions;
pub use error::{DecodeError, ReadError, RenderError, StoreError};
pub use format::{create_formatter, FormatKind, TableFormatter};
pub use model::{ColumnStore, Decoder, Record, RecordStore, RowStore, Schema, Value};
pub use printer::print_table;
