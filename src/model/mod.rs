//! Data model: values, schemas, records, and record stores

mod record;
mod schema;
mod store;
mod value;

pub use record::{FieldAccess, FromRow, Record};
pub use schema::{Column, Schema};
pub use store::{ColumnSlice, ColumnStore, RecordStore, RowStore};
pub use value::{Decoder, Value};
