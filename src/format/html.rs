//! HTML table-row dialect

use std::io::Write;

use crate::error::RenderError;
use crate::model::Value;

use super::TableFormatter;

const ROW_OPEN_TAG: &str = "<tr>";
const ROW_CLOSE_TAG: &str = "</tr>";

/// Headings as `<th>` cells and data as `<td>` cells, each line wrapped in a
/// row tag with all tokens space-joined.
#[derive(Debug, Default)]
pub struct HtmlFormatter {
    wrote_headings: bool,
}

impl HtmlFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    fn write_row_line(
        out: &mut dyn Write,
        cells: impl Iterator<Item = String>,
    ) -> Result<(), RenderError> {
        let mut parts = vec![ROW_OPEN_TAG.to_string()];
        parts.extend(cells);
        parts.push(ROW_CLOSE_TAG.to_string());
        writeln!(out, "{}", parts.join(" "))?;
        Ok(())
    }
}

impl TableFormatter for HtmlFormatter {
    fn headings(&mut self, out: &mut dyn Write, headers: &[String]) -> Result<(), RenderError> {
        Self::write_row_line(out, headers.iter().map(|h| format!("<th>{}</th>", h)))?;
        self.wrote_headings = true;
        Ok(())
    }

    fn row(&mut self, out: &mut dyn Write, values: &[Value]) -> Result<(), RenderError> {
        if !self.wrote_headings {
            return Err(RenderError::RowBeforeHeadings);
        }
        Self::write_row_line(out, values.iter().map(|v| format!("<td>{}</td>", v)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_wrapped_cells() {
        let mut formatter = HtmlFormatter::new();
        let mut out = Vec::new();
        let headers: Vec<String> = ["name", "shares", "price"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        formatter.headings(&mut out, &headers).unwrap();
        formatter
            .row(
                &mut out,
                &[
                    Value::Str("GOOG".to_string()),
                    Value::Int(100),
                    Value::Float(490.10),
                ],
            )
            .unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "<tr> <th>name</th> <th>shares</th> <th>price</th> </tr>\n\
             <tr> <td>GOOG</td> <td>100</td> <td>490.1</td> </tr>\n"
        );
    }
}
