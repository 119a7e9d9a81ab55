//! Table printing: records + formatter -> rendered table

use std::io::Write;

use crate::error::RenderError;
use crate::format::TableFormatter;
use crate::model::{FieldAccess, Value};

/// Render one full table: a single headings call with `attrs`, then one row
/// per record in iteration order, projecting each attribute by name.
///
/// Works over anything whose items expose [`FieldAccess`] — a row store, a
/// lazy column view, or a caller's own types. A record missing a requested
/// attribute fails with [`RenderError::MissingField`].
pub fn print_table<I>(
    records: I,
    attrs: &[&str],
    formatter: &mut dyn TableFormatter,
    out: &mut dyn Write,
) -> Result<(), RenderError>
where
    I: IntoIterator,
    I::Item: FieldAccess,
{
    let headers: Vec<String> = attrs.iter().map(|a| a.to_string()).collect();
    formatter.headings(out, &headers)?;
    for record in records {
        let values: Vec<Value> = attrs
            .iter()
            .map(|attr| {
                record
                    .field(attr)
                    .ok_or_else(|| RenderError::MissingField(attr.to_string()))
            })
            .collect::<Result<_, _>>()?;
        formatter.row(out, &values)?;
    }
    Ok(())
}
