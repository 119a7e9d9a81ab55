//! Comma-delimited dialect

use std::io::Write;

use crate::error::RenderError;
use crate::model::Value;

use super::TableFormatter;

/// Comma-joined plain string conversions, no padding, no separator line.
#[derive(Debug, Default)]
pub struct CsvFormatter {
    wrote_headings: bool,
}

impl CsvFormatter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TableFormatter for CsvFormatter {
    fn headings(&mut self, out: &mut dyn Write, headers: &[String]) -> Result<(), RenderError> {
        writeln!(out, "{}", headers.join(","))?;
        self.wrote_headings = true;
        Ok(())
    }

    fn row(&mut self, out: &mut dyn Write, values: &[Value]) -> Result<(), RenderError> {
        if !self.wrote_headings {
            return Err(RenderError::RowBeforeHeadings);
        }
        let line: Vec<String> = values.iter().map(Value::to_string).collect();
        writeln!(out, "{}", line.join(","))?;
        Ok(())
    }
}
