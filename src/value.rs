//! Value model for print calls.
//!
//! This module provides:
//! - `PrintValue`: Tagged representation of a single printable value
//! - `Shape`: The closed classification a renderer dispatches on
//! - `RenderHints`: Uninterpreted key/value knobs passed through to surfaces

use serde_json::Value;

use crate::error::PrintError;
use crate::table::Table;

/// A single value passed to a print call.
///
/// Arbitrary serde-serializable data enters as `Json`; 2-D labeled data as
/// `Table`; anything that only survives string conversion as `Opaque`.
#[derive(Debug, Clone, PartialEq)]
pub enum PrintValue {
    /// A JSON-shaped value (scalar, sequence, or mapping)
    Json(Value),
    /// A 2-D labeled table
    Table(Table),
    /// String-conversion fallback for unclassifiable values
    Opaque(String),
}

/// The classification a renderer dispatches on, in precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// 2-D labeled data, one dedicated table-channel call
    Tabular,
    /// Key/value mapping, structured channel
    Mapping,
    /// Ordered non-string sequence, structured channel
    Sequence,
    /// String, number, boolean, or null; space-joined with sibling scalars
    Scalar,
    /// Fallback string conversion, rendered as text
    Opaque,
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Shape::Tabular => write!(f, "tabular"),
            Shape::Mapping => write!(f, "mapping"),
            Shape::Sequence => write!(f, "sequence"),
            Shape::Scalar => write!(f, "scalar"),
            Shape::Opaque => write!(f, "opaque"),
        }
    }
}

impl PrintValue {
    /// Convert any serde-serializable value.
    ///
    /// Fails with `PrintError::Formatting` when the value cannot be
    /// represented as JSON (for example a map with non-string keys).
    pub fn of<T: serde::Serialize>(value: &T) -> Result<Self, PrintError> {
        serde_json::to_value(value)
            .map(PrintValue::Json)
            .map_err(|e| PrintError::formatting(std::any::type_name::<T>(), e))
    }

    /// String-conversion fallback. Never fails for a well-formed
    /// `Display` value.
    pub fn opaque(value: impl std::fmt::Display) -> Self {
        PrintValue::Opaque(value.to_string())
    }

    /// Classify this value for dispatch.
    pub fn shape(&self) -> Shape {
        match self {
            PrintValue::Table(_) => Shape::Tabular,
            PrintValue::Json(Value::Object(_)) => Shape::Mapping,
            PrintValue::Json(Value::Array(_)) => Shape::Sequence,
            PrintValue::Json(_) => Shape::Scalar,
            PrintValue::Opaque(_) => Shape::Opaque,
        }
    }

    /// Text form of a scalar or opaque value. `None` for everything else.
    ///
    /// Strings render verbatim (unquoted), numbers and booleans via their
    /// JSON display, null as `null`.
    pub fn scalar_text(&self) -> Option<String> {
        match self {
            PrintValue::Json(Value::String(s)) => Some(s.clone()),
            PrintValue::Json(Value::Null) => Some("null".to_string()),
            PrintValue::Json(v @ (Value::Bool(_) | Value::Number(_))) => Some(v.to_string()),
            PrintValue::Opaque(s) => Some(s.clone()),
            PrintValue::Json(Value::Array(_) | Value::Object(_)) | PrintValue::Table(_) => None,
        }
    }

    /// Borrow the inner table, if this value is tabular.
    pub fn as_table(&self) -> Option<&Table> {
        match self {
            PrintValue::Table(t) => Some(t),
            _ => None,
        }
    }

    /// Borrow the inner JSON value, if any.
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            PrintValue::Json(v) => Some(v),
            _ => None,
        }
    }
}

impl From<Value> for PrintValue {
    fn from(v: Value) -> Self {
        PrintValue::Json(v)
    }
}

impl From<Table> for PrintValue {
    fn from(t: Table) -> Self {
        PrintValue::Table(t)
    }
}

impl From<&str> for PrintValue {
    fn from(s: &str) -> Self {
        PrintValue::Json(Value::String(s.to_string()))
    }
}

impl From<String> for PrintValue {
    fn from(s: String) -> Self {
        PrintValue::Json(Value::String(s))
    }
}

impl From<bool> for PrintValue {
    fn from(b: bool) -> Self {
        PrintValue::Json(Value::Bool(b))
    }
}

impl From<()> for PrintValue {
    fn from((): ()) -> Self {
        PrintValue::Json(Value::Null)
    }
}

macro_rules! impl_from_number {
    ($($ty:ty),+) => {
        $(
            impl From<$ty> for PrintValue {
                fn from(n: $ty) -> Self {
                    PrintValue::Json(Value::from(n))
                }
            }
        )+
    };
}

impl_from_number!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);

/// Uninterpreted formatting knobs carried alongside a print call.
///
/// The router and renderer never look inside; hints are handed to the
/// selected surface verbatim so target-specific options (column width,
/// separators, ...) can pass through.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderHints {
    entries: serde_json::Map<String, Value>,
}

impl RenderHints {
    /// Create an empty hint set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a hint (builder pattern).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    /// Look up a hint by key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Check whether any hints are present.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of hints.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterate hints in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.entries.iter()
    }
}
