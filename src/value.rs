//! Driver values, named arguments, and value conversion.

use serde::Serialize;

use crate::error::Result;

/// A value crossing the driver boundary.
///
/// This is the closed vocabulary a driver is expected to understand: the
/// usual SQL scalars plus `Null`. Values serialize untagged, so an argument
/// list logs as a plain JSON array (`["testid", 42, null]`).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Bytes(Vec<u8>),
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v.into())
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_owned())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Value::Bytes(v)
    }
}

impl<T> From<Option<T>> for Value
where
    T: Into<Value>,
{
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

/// An argument for the context-aware execution paths.
///
/// Carries an optional parameter name, the 1-based ordinal position, and the
/// value itself. Statements that only understand positional parameters ignore
/// the name.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedValue {
    pub name: Option<String>,
    pub ordinal: usize,
    pub value: Value,
}

impl NamedValue {
    /// A positional (unnamed) argument at the given 1-based ordinal.
    pub fn positional(ordinal: usize, value: impl Into<Value>) -> Self {
        Self {
            name: None,
            ordinal,
            value: value.into(),
        }
    }

    /// A named argument at the given 1-based ordinal.
    pub fn named(name: impl Into<String>, ordinal: usize, value: impl Into<Value>) -> Self {
        Self {
            name: Some(name.into()),
            ordinal,
            value: value.into(),
        }
    }
}

/// Converts a value into the form a driver wants to see for one column.
///
/// Statements that need per-column coercion expose a converter through the
/// [`ColumnConverter`](crate::ColumnConverter) capability; everything else
/// gets [`DefaultConverter`].
pub trait ValueConverter: Send {
    fn convert(&self, value: Value) -> Result<Value>;
}

/// The baseline converter: returns the value unchanged.
///
/// [`Value`] is already the driver vocabulary, so no coercion is required.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultConverter;

impl ValueConverter for DefaultConverter {
    fn convert(&self, value: Value) -> Result<Value> {
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversions_cover_common_types() {
        assert_eq!(Value::from(7i64), Value::Int(7));
        assert_eq!(Value::from("id"), Value::Text("id".into()));
        assert_eq!(Value::from(None::<i64>), Value::Null);
        assert_eq!(Value::from(Some(true)), Value::Bool(true));
    }

    #[test]
    fn values_serialize_untagged() {
        let args = vec![Value::Text("testid".into()), Value::Int(1), Value::Null];
        let json = serde_json::to_value(&args).unwrap();
        assert_eq!(json, serde_json::json!(["testid", 1, null]));
    }

    #[test]
    fn default_converter_is_identity() {
        let converter = DefaultConverter;
        assert_eq!(converter.convert(Value::Int(1)).unwrap(), Value::Int(1));
        let text = Value::Text("unchanged".into());
        assert_eq!(converter.convert(text.clone()).unwrap(), text);
    }
}
