//! Ingestion pipeline: delimited text into record stores
//!
//! Three interchangeable decode strategies, all driven by the same header
//! handling and line accounting:
//!
//! - [`read_records`]: mapping-style records in a row-oriented store
//! - [`read_columns`]: the same records behind a column-oriented store
//! - [`read_instances`]: caller-supplied types via the [`FromRow`] capability
//!
//! Ingestion is strict: the first row that fails to decode aborts the run
//! with its 1-based source line. Callers wanting lenient behavior decode row
//! ranges themselves and handle errors per row.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use csv::ReaderBuilder;

use crate::config::ReadOptions;
use crate::error::ReadError;
use crate::model::{ColumnStore, Decoder, FromRow, Record, RecordStore, RowStore, Schema};

fn make_reader<R: Read>(rdr: R, opts: &ReadOptions) -> csv::Reader<R> {
    ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .delimiter(opts.delimiter)
        .from_reader(rdr)
}

fn read_header<R: Read>(reader: &mut csv::Reader<R>) -> Result<Vec<String>, ReadError> {
    let headers = reader.headers()?;
    if headers.is_empty() {
        return Err(ReadError::MissingHeader);
    }
    Ok(headers.iter().map(str::to_string).collect())
}

fn check_arity(header: &[String], expected: usize) -> Result<(), ReadError> {
    if header.len() < expected {
        return Err(ReadError::HeaderTooShort {
            expected,
            found: header.len(),
        });
    }
    Ok(())
}

/// The 1-based source line a record starts on (header = line 1). Falls back
/// to row-count accounting when the reader carries no position, which keeps
/// the number right even when blank lines were skipped or a quoted field
/// spanned lines.
fn source_line(record: &csv::StringRecord, row_index: usize) -> usize {
    record
        .position()
        .map(|p| p.line() as usize)
        .unwrap_or(row_index + 2)
}

/// Decode every data row in order, handing each record to `sink`.
fn decode_rows<R, F>(
    reader: &mut csv::Reader<R>,
    schema: &Schema,
    mut sink: F,
) -> Result<(), ReadError>
where
    R: Read,
    F: FnMut(Record) -> Result<(), ReadError>,
{
    for (i, result) in reader.records().enumerate() {
        let raw_record = result?;
        let raw: Vec<&str> = raw_record.iter().collect();
        let record = schema.decode_row(&raw).map_err(|source| ReadError::Decode {
            line: source_line(&raw_record, i),
            source,
        })?;
        sink(record)?;
    }
    Ok(())
}

/// Read delimited text into a row-oriented store, taking column names from
/// the header and pairing them with `decoders` in order.
pub fn read_records<R: Read>(
    rdr: R,
    decoders: &[Decoder],
    opts: &ReadOptions,
) -> Result<RowStore, ReadError> {
    let mut reader = make_reader(rdr, opts);
    let header = read_header(&mut reader)?;
    check_arity(&header, decoders.len())?;
    let schema = Schema::from_header(header, decoders)?;
    read_records_into(&mut reader, &schema)
}

/// Like [`read_records`], but with caller-supplied column names. The file
/// header is consumed for arity checking only; the schema's names win.
pub fn read_records_with_schema<R: Read>(
    rdr: R,
    schema: &Schema,
    opts: &ReadOptions,
) -> Result<RowStore, ReadError> {
    let mut reader = make_reader(rdr, opts);
    let header = read_header(&mut reader)?;
    check_arity(&header, schema.len())?;
    read_records_into(&mut reader, schema)
}

fn read_records_into<R: Read>(
    reader: &mut csv::Reader<R>,
    schema: &Schema,
) -> Result<RowStore, ReadError> {
    let mut store = RowStore::new();
    decode_rows(reader, schema, |record| {
        store.append(&record)?;
        Ok(())
    })?;
    Ok(store)
}

/// Read delimited text into a column-oriented store, taking column names
/// from the header and pairing them with `decoders` in order.
pub fn read_columns<R: Read>(
    rdr: R,
    decoders: &[Decoder],
    opts: &ReadOptions,
) -> Result<ColumnStore, ReadError> {
    let mut reader = make_reader(rdr, opts);
    let header = read_header(&mut reader)?;
    check_arity(&header, decoders.len())?;
    let schema = Schema::from_header(header, decoders)?;
    read_columns_into(&mut reader, &schema)
}

/// Like [`read_columns`], but with caller-supplied column names.
pub fn read_columns_with_schema<R: Read>(
    rdr: R,
    schema: &Schema,
    opts: &ReadOptions,
) -> Result<ColumnStore, ReadError> {
    let mut reader = make_reader(rdr, opts);
    let header = read_header(&mut reader)?;
    check_arity(&header, schema.len())?;
    read_columns_into(&mut reader, schema)
}

fn read_columns_into<R: Read>(
    reader: &mut csv::Reader<R>,
    schema: &Schema,
) -> Result<ColumnStore, ReadError> {
    let mut store = ColumnStore::from_schema(schema);
    decode_rows(reader, schema, |record| {
        store.append(&record)?;
        Ok(())
    })?;
    Ok(store)
}

/// Read delimited text into instances of a caller-supplied type.
///
/// The header is skipped (the target type owns its own decoding), but decode
/// failures still report source line numbers.
pub fn read_instances<T: FromRow, R: Read>(
    rdr: R,
    opts: &ReadOptions,
) -> Result<Vec<T>, ReadError> {
    let mut reader = make_reader(rdr, opts);
    read_header(&mut reader)?;
    let mut out = Vec::new();
    for (i, result) in reader.records().enumerate() {
        let raw_record = result?;
        let raw: Vec<&str> = raw_record.iter().collect();
        let item = T::from_row(&raw).map_err(|source| ReadError::Decode {
            line: source_line(&raw_record, i),
            source,
        })?;
        out.push(item);
    }
    Ok(out)
}

/// [`read_records`] over a file. The handle is scoped to the call and closed
/// on every exit path.
pub fn read_records_from_path(
    path: impl AsRef<Path>,
    decoders: &[Decoder],
    opts: &ReadOptions,
) -> Result<RowStore, ReadError> {
    let file = File::open(path)?;
    read_records(BufReader::new(file), decoders, opts)
}

/// [`read_columns`] over a file.
pub fn read_columns_from_path(
    path: impl AsRef<Path>,
    decoders: &[Decoder],
    opts: &ReadOptions,
) -> Result<ColumnStore, ReadError> {
    let file = File::open(path)?;
    read_columns(BufReader::new(file), decoders, opts)
}

/// [`read_instances`] over a file.
pub fn read_instances_from_path<T: FromRow>(
    path: impl AsRef<Path>,
    opts: &ReadOptions,
) -> Result<Vec<T>, ReadError> {
    let file = File::open(path)?;
    read_instances(BufReader::new(file), opts)
}

/// Peek at a file's header line without ingesting any rows.
pub fn sniff_header(path: impl AsRef<Path>, opts: &ReadOptions) -> Result<Vec<String>, ReadError> {
    let file = File::open(path)?;
    let mut reader = make_reader(BufReader::new(file), opts);
    read_header(&mut reader)
}
