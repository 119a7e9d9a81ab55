//! Plain fixed-width text dialect

use std::io::Write;

use crate::error::RenderError;
use crate::model::Value;

use super::TableFormatter;

const COLUMN_WIDTH: usize = 10;

/// Right-justified 10-character columns joined by single spaces, with a
/// dashed rule after the headings. The width and rule length are contract
/// values, not styling.
#[derive(Debug, Default)]
pub struct TextFormatter {
    wrote_headings: bool,
}

impl TextFormatter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TableFormatter for TextFormatter {
    fn headings(&mut self, out: &mut dyn Write, headers: &[String]) -> Result<(), RenderError> {
        let line: Vec<String> = headers
            .iter()
            .map(|h| format!("{h:>width$}", width = COLUMN_WIDTH))
            .collect();
        writeln!(out, "{}", line.join(" "))?;
        let dashes = format!("{} ", "-".repeat(COLUMN_WIDTH));
        writeln!(out, "{}", dashes.repeat(headers.len()))?;
        self.wrote_headings = true;
        Ok(())
    }

    fn row(&mut self, out: &mut dyn Write, values: &[Value]) -> Result<(), RenderError> {
        if !self.wrote_headings {
            return Err(RenderError::RowBeforeHeadings);
        }
        let line: Vec<String> = values
            .iter()
            .map(|v| format!("{:>width$}", v.to_string(), width = COLUMN_WIDTH))
            .collect();
        writeln!(out, "{}", line.join(" "))?;
        Ok(())
    }
}
