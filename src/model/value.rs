//! Cell values and decode-functions

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// A typed cell value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Str(String),
    Int(i64),
    Float(f64),
}

impl Value {
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Str(_) => "str",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => write!(f, "{}", s),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{}", x),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

type DecodeFn = dyn Fn(&str) -> Result<Value, String> + Send + Sync;

/// A named single-argument conversion from raw field text to a [`Value`].
///
/// The three baseline decoders cover text, integer, and floating-point
/// columns; [`Decoder::custom`] admits any total-or-failing conversion.
#[derive(Clone)]
pub struct Decoder {
    name: String,
    func: Arc<DecodeFn>,
}

impl Decoder {
    /// Keep the raw text as-is.
    pub fn text() -> Self {
        Self {
            name: "str".to_string(),
            func: Arc::new(|raw| Ok(Value::Str(raw.to_string()))),
        }
    }

    /// Parse as a signed integer.
    pub fn integer() -> Self {
        Self {
            name: "int".to_string(),
            func: Arc::new(|raw| {
                raw.parse::<i64>()
                    .map(Value::Int)
                    .map_err(|e| e.to_string())
            }),
        }
    }

    /// Parse as a floating-point number.
    pub fn float() -> Self {
        Self {
            name: "float".to_string(),
            func: Arc::new(|raw| {
                raw.parse::<f64>()
                    .map(Value::Float)
                    .map_err(|e| e.to_string())
            }),
        }
    }

    /// Wrap an arbitrary conversion function.
    pub fn custom<F>(name: impl Into<String>, func: F) -> Self
    where
        F: Fn(&str) -> Result<Value, String> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            func: Arc::new(func),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Apply the conversion. The `Err` carries only the underlying failure;
    /// callers attach column and raw-text context.
    pub fn decode(&self, raw: &str) -> Result<Value, String> {
        (self.func)(raw)
    }
}

impl fmt::Debug for Decoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Decoder").field("name", &self.name).finish()
    }
}

impl FromStr for Decoder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "str" | "text" => Ok(Decoder::text()),
            "int" | "integer" => Ok(Decoder::integer()),
            "float" => Ok(Decoder::float()),
            _ => Err(format!("Unknown column type: {}", s)),
        }
    }
}
