//! Formatter decorators
//!
//! Each decorator holds a boxed inner formatter and delegates whatever it
//! does not change, so any stack of decorators over any dialect composes
//! without new concrete types.

use std::io::Write;

use crate::error::RenderError;
use crate::model::Value;

use super::TableFormatter;

/// Applies a printf-style specifier to each column's value before handing
/// the row to the wrapped formatter. Headings pass through untouched.
///
/// The format list must line up with the row one-to-one; a mismatch is a
/// [`RenderError::FormatArity`].
pub struct ColumnFormat {
    formats: Vec<String>,
    inner: Box<dyn TableFormatter>,
}

impl ColumnFormat {
    pub fn new(formats: Vec<String>, inner: Box<dyn TableFormatter>) -> Self {
        Self { formats, inner }
    }
}

impl TableFormatter for ColumnFormat {
    fn headings(&mut self, out: &mut dyn Write, headers: &[String]) -> Result<(), RenderError> {
        self.inner.headings(out, headers)
    }

    fn row(&mut self, out: &mut dyn Write, values: &[Value]) -> Result<(), RenderError> {
        if self.formats.len() != values.len() {
            return Err(RenderError::FormatArity {
                expected: self.formats.len(),
                found: values.len(),
            });
        }
        let formatted = self
            .formats
            .iter()
            .zip(values)
            .map(|(spec, value)| percent_format(spec, value).map(Value::Str))
            .collect::<Result<Vec<_>, _>>()?;
        self.inner.row(out, &formatted)
    }
}

/// Upper-cases every heading before delegating; rows pass through untouched.
pub struct UpperHeaders {
    inner: Box<dyn TableFormatter>,
}

impl UpperHeaders {
    pub fn new(inner: Box<dyn TableFormatter>) -> Self {
        Self { inner }
    }
}

impl TableFormatter for UpperHeaders {
    fn headings(&mut self, out: &mut dyn Write, headers: &[String]) -> Result<(), RenderError> {
        let upper: Vec<String> = headers.iter().map(|h| h.to_uppercase()).collect();
        self.inner.headings(out, &upper)
    }

    fn row(&mut self, out: &mut dyn Write, values: &[Value]) -> Result<(), RenderError> {
        self.inner.row(out, values)
    }
}

#[derive(Debug, Default)]
struct Directive {
    left_align: bool,
    zero_pad: bool,
    plus_sign: bool,
    width: Option<usize>,
    precision: Option<usize>,
    conversion: char,
}

/// Render one value through a printf-style specifier.
///
/// Supports literal text, `%%`, and exactly one directive of the form
/// `%[flags][width][.precision]{s,d,f,x}` with flags `-`, `+`, and `0`.
pub(crate) fn percent_format(spec: &str, value: &Value) -> Result<String, RenderError> {
    let bad = |reason: &str| RenderError::BadFormat {
        spec: spec.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    };

    let mut out = String::new();
    let mut chars = spec.chars().peekable();
    let mut applied = false;
    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        if chars.peek() == Some(&'%') {
            chars.next();
            out.push('%');
            continue;
        }
        if applied {
            return Err(bad("more than one conversion directive"));
        }

        let mut directive = Directive::default();
        while let Some(&flag) = chars.peek() {
            match flag {
                '-' => directive.left_align = true,
                '+' => directive.plus_sign = true,
                '0' => directive.zero_pad = true,
                _ => break,
            }
            chars.next();
        }
        while let Some(d) = chars.peek().and_then(|c| c.to_digit(10)) {
            let width = directive
                .width
                .unwrap_or(0)
                .checked_mul(10)
                .and_then(|w| w.checked_add(d as usize))
                .ok_or_else(|| bad("width too large"))?;
            directive.width = Some(width);
            chars.next();
        }
        if chars.peek() == Some(&'.') {
            chars.next();
            let mut precision = 0usize;
            while let Some(d) = chars.peek().and_then(|c| c.to_digit(10)) {
                precision = precision
                    .checked_mul(10)
                    .and_then(|p| p.checked_add(d as usize))
                    .ok_or_else(|| bad("precision too large"))?;
                chars.next();
            }
            directive.precision = Some(precision);
        }
        directive.conversion = chars.next().ok_or_else(|| bad("truncated directive"))?;

        out.push_str(&apply_directive(&directive, value).map_err(|reason| bad(&reason))?);
        applied = true;
    }
    if !applied {
        return Err(bad("no conversion directive"));
    }
    Ok(out)
}

fn apply_directive(directive: &Directive, value: &Value) -> Result<String, String> {
    let rendered = match directive.conversion {
        's' => value.to_string(),
        'd' => {
            let i = match value {
                Value::Int(i) => *i,
                // %d truncates toward zero, as printf does
                Value::Float(x) => *x as i64,
                Value::Str(_) => return Err("%d requires a number".to_string()),
            };
            with_sign(i.to_string(), i >= 0, directive.plus_sign)
        }
        'f' => {
            let x = match value {
                Value::Float(x) => *x,
                Value::Int(i) => *i as f64,
                Value::Str(_) => return Err("%f requires a number".to_string()),
            };
            let precision = directive.precision.unwrap_or(6);
            with_sign(format!("{:.*}", precision, x), x >= 0.0, directive.plus_sign)
        }
        'x' => match value {
            Value::Int(i) => format!("{:x}", i),
            _ => return Err("%x requires an integer".to_string()),
        },
        other => return Err(format!("unsupported conversion '{}'", other)),
    };
    Ok(pad(rendered, directive))
}

fn with_sign(rendered: String, non_negative: bool, plus_sign: bool) -> String {
    if plus_sign && non_negative {
        format!("+{}", rendered)
    } else {
        rendered
    }
}

fn pad(s: String, directive: &Directive) -> String {
    let Some(width) = directive.width else {
        return s;
    };
    if s.len() >= width {
        return s;
    }
    if directive.left_align {
        format!("{:<width$}", s)
    } else if directive.zero_pad && directive.conversion != 's' {
        // Zeros go between the sign and the digits.
        match s.split_at(if s.starts_with(['-', '+']) { 1 } else { 0 }) {
            ("", digits) => format!("{:0>width$}", digits),
            (sign, digits) => format!("{}{:0>rest$}", sign, digits, rest = width - 1),
        }
    } else {
        format!("{:>width$}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fmt(spec: &str, value: Value) -> String {
        percent_format(spec, &value).unwrap()
    }

    #[test]
    fn string_and_numeric_directives() {
        assert_eq!(fmt("%s", Value::Str("GOOG".into())), "GOOG");
        assert_eq!(fmt("%d", Value::Int(100)), "100");
        assert_eq!(fmt("%0.2f", Value::Float(490.1)), "490.10");
        assert_eq!(fmt("%.1f", Value::Int(3)), "3.0");
        assert_eq!(fmt("%x", Value::Int(255)), "ff");
    }

    #[test]
    fn width_and_flags() {
        assert_eq!(fmt("%10s", Value::Str("GOOG".into())), "      GOOG");
        assert_eq!(fmt("%-6d", Value::Int(42)), "42    ");
        assert_eq!(fmt("%05d", Value::Int(-42)), "-0042");
        assert_eq!(fmt("%+d", Value::Int(42)), "+42");
        assert_eq!(fmt("%8.2f", Value::Float(3.14159)), "    3.14");
    }

    #[test]
    fn literal_text_and_escaped_percent() {
        assert_eq!(fmt("$%0.2f", Value::Float(1.5)), "$1.50");
        assert_eq!(fmt("%d%%", Value::Int(85)), "85%");
    }

    #[test]
    fn default_float_precision_is_six() {
        assert_eq!(fmt("%f", Value::Float(0.5)), "0.500000");
    }

    #[test]
    fn type_mismatch_is_an_error() {
        let err = percent_format("%d", &Value::Str("GOOG".into())).unwrap_err();
        assert!(matches!(err, RenderError::BadFormat { .. }));
    }

    #[test]
    fn oversized_width_is_rejected_not_overflowed() {
        let spec = "%99999999999999999999999d";
        let err = percent_format(spec, &Value::Int(1)).unwrap_err();
        assert!(matches!(err, RenderError::BadFormat { .. }));
        let spec = "%.99999999999999999999999f";
        assert!(percent_format(spec, &Value::Float(1.0)).is_err());
    }

    #[test]
    fn spec_without_directive_is_an_error() {
        assert!(percent_format("plain", &Value::Int(1)).is_err());
        assert!(percent_format("%d %d", &Value::Int(1)).is_err());
        assert!(percent_format("%", &Value::Int(1)).is_err());
    }
}
