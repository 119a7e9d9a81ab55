//! Output formatting: dialects, decorators, and the formatter factory
//!
//! A [`TableFormatter`] serializes one table as a headings call followed by
//! row calls. Three base dialects cover plain text, comma-delimited, and
//! HTML output; cross-cutting behaviors (per-column value formatting, header
//! casing) are decorators that wrap any formatter and delegate the rest.

mod csv;
mod decorate;
mod html;
mod text;

use std::io::Write;
use std::str::FromStr;

use crate::error::RenderError;
use crate::model::Value;

pub use self::csv::CsvFormatter;
pub use decorate::{ColumnFormat, UpperHeaders};
pub use html::HtmlFormatter;
pub use text::TextFormatter;

/// Strategy for serializing one table to a text sink.
///
/// Exactly one `headings` call, then one `row` call per record. Base
/// dialects fail fast with [`RenderError::RowBeforeHeadings`] when the order
/// is violated.
pub trait TableFormatter {
    fn headings(&mut self, out: &mut dyn Write, headers: &[String]) -> Result<(), RenderError>;

    fn row(&mut self, out: &mut dyn Write, values: &[Value]) -> Result<(), RenderError>;
}

/// The base output dialects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormatKind {
    #[default]
    Text,
    Csv,
    Html,
}

impl FromStr for FormatKind {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(FormatKind::Text),
            "csv" => Ok(FormatKind::Csv),
            "html" => Ok(FormatKind::Html),
            _ => Err(RenderError::UnknownFormat(s.to_string())),
        }
    }
}

/// Build a base dialect and layer the standard decorators on top.
///
/// `column_formats` wraps the dialect in a [`ColumnFormat`]; `upper_headers`
/// wraps in [`UpperHeaders`]. The two act on disjoint aspects (data cells
/// vs. headings), so their relative order does not show in the output.
pub fn create_formatter(
    kind: FormatKind,
    column_formats: Option<Vec<String>>,
    upper_headers: bool,
) -> Box<dyn TableFormatter> {
    let mut formatter: Box<dyn TableFormatter> = match kind {
        FormatKind::Text => Box::new(TextFormatter::new()),
        FormatKind::Csv => Box::new(CsvFormatter::new()),
        FormatKind::Html => Box::new(HtmlFormatter::new()),
    };
    if let Some(formats) = column_formats {
        formatter = Box::new(ColumnFormat::new(formats, formatter));
    }
    if upper_headers {
        formatter = Box::new(UpperHeaders::new(formatter));
    }
    formatter
}

/// [`create_formatter`] with the dialect selected by name.
pub fn create_formatter_by_name(
    name: &str,
    column_formats: Option<Vec<String>>,
    upper_headers: bool,
) -> Result<Box<dyn TableFormatter>, RenderError> {
    Ok(create_formatter(name.parse()?, column_formats, upper_headers))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Value;

    fn goog_row() -> Vec<Value> {
        vec![
            Value::Str("GOOG".to_string()),
            Value::Int(100),
            Value::Float(490.10),
        ]
    }

    fn headers() -> Vec<String> {
        ["name", "shares", "price"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    fn render(formatter: &mut dyn TableFormatter) -> String {
        let mut out = Vec::new();
        formatter.headings(&mut out, &headers()).unwrap();
        formatter.row(&mut out, &goog_row()).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn unknown_format_name() {
        let err = "xml".parse::<FormatKind>().unwrap_err();
        assert!(matches!(err, RenderError::UnknownFormat(name) if name == "xml"));
    }

    #[test]
    fn factory_selects_dialect_by_name() {
        let mut csv = create_formatter_by_name("csv", None, false).unwrap();
        assert_eq!(render(csv.as_mut()), "name,shares,price\nGOOG,100,490.1\n");
    }

    #[test]
    fn column_formats_fix_the_price_rendering() {
        let formats = vec!["%s".to_string(), "%d".to_string(), "%0.2f".to_string()];
        let mut formatter = create_formatter(FormatKind::Csv, Some(formats), false);
        assert_eq!(
            render(formatter.as_mut()),
            "name,shares,price\nGOOG,100,490.10\n"
        );
    }

    #[test]
    fn upper_headers_leave_rows_untouched() {
        let mut formatter = create_formatter(FormatKind::Csv, None, true);
        assert_eq!(
            render(formatter.as_mut()),
            "NAME,SHARES,PRICE\nGOOG,100,490.1\n"
        );
    }

    #[test]
    fn decorators_stack_in_either_order() {
        let formats = vec!["%s".to_string(), "%d".to_string(), "%0.2f".to_string()];
        let mut a = create_formatter(FormatKind::Text, Some(formats.clone()), true);
        let mut b: Box<dyn TableFormatter> = Box::new(ColumnFormat::new(
            formats,
            Box::new(UpperHeaders::new(Box::new(TextFormatter::new()))),
        ));
        assert_eq!(render(a.as_mut()), render(b.as_mut()));
    }

    #[test]
    fn row_before_headings_fails_fast() {
        let mut formatter = create_formatter(FormatKind::Text, None, false);
        let mut out = Vec::new();
        let err = formatter.row(&mut out, &goog_row()).unwrap_err();
        assert!(matches!(err, RenderError::RowBeforeHeadings));
        assert!(out.is_empty());
    }
}
