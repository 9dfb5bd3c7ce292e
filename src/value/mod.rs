// ABOUTME: Runtime-typed values flowing through template functions and filters
// ABOUTME: Defines the Value sum type, its numeric widths, and conversions from Rust primitives

pub mod builders;
pub mod coerce;
pub mod error;
pub mod json;

use std::collections::HashMap;

pub use builders::{append_values, make_mapping, make_sequence, set_mapping};
pub use coerce::{to_display_string, to_int};
pub use error::{Result, ValueError};

/// Ordered, index-addressable collection of values.
pub type Sequence = Vec<Value>;

/// String-keyed collection of values. Iteration order is unspecified.
pub type Mapping = HashMap<String, Value>;

/// A dynamically-typed datum.
///
/// Equality is structural and shape-sensitive: `Integer(I32(2))` is not equal to
/// `Integer(I64(2))`, and neither equals `String("2")`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Absent,
    Bool(bool),
    Integer(Integer),
    Float(Float),
    String(String),
    Sequence(Sequence),
    Mapping(Mapping),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Integer {
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Float {
    F32(f32),
    F64(f64),
}

impl Integer {
    /// Width-normalized value.
    pub fn get(self) -> i64 {
        match self {
            Integer::I8(v) => i64::from(v),
            Integer::I16(v) => i64::from(v),
            Integer::I32(v) => i64::from(v),
            Integer::I64(v) => v,
        }
    }
}

impl Float {
    pub fn get(self) -> f64 {
        match self {
            Float::F32(v) => f64::from(v),
            Float::F64(v) => v,
        }
    }
}

impl Value {
    /// Short name of the value's shape, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Absent => "absent",
            Value::Bool(_) => "bool",
            Value::Integer(Integer::I8(_)) => "int8",
            Value::Integer(Integer::I16(_)) => "int16",
            Value::Integer(Integer::I32(_)) => "int32",
            Value::Integer(Integer::I64(_)) => "int64",
            Value::Float(Float::F32(_)) => "float32",
            Value::Float(Float::F64(_)) => "float64",
            Value::String(_) => "string",
            Value::Sequence(_) => "sequence",
            Value::Mapping(_) => "mapping",
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Value::Absent)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&Sequence> {
        match self {
            Value::Sequence(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Value::Mapping(m) => Some(m),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i8> for Value {
    fn from(v: i8) -> Self {
        Value::Integer(Integer::I8(v))
    }
}

impl From<i16> for Value {
    fn from(v: i16) -> Self {
        Value::Integer(Integer::I16(v))
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Integer(Integer::I32(v))
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Integer(Integer::I64(v))
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(Float::F32(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(Float::F64(v))
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<Sequence> for Value {
    fn from(v: Sequence) -> Self {
        Value::Sequence(v)
    }
}

impl From<Mapping> for Value {
    fn from(v: Mapping) -> Self {
        Value::Mapping(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Absent, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_is_shape_sensitive() {
        assert_eq!(Value::from(2i64), Value::from(2i64));
        assert_ne!(Value::from(2i32), Value::from(2i64));
        assert_ne!(Value::from("2"), Value::from(2i64));
        assert_ne!(Value::from(2.0f64), Value::from(2i64));
    }

    #[test]
    fn test_integer_width_normalization() {
        assert_eq!(Integer::I8(-3).get(), -3);
        assert_eq!(Integer::I16(300).get(), 300);
        assert_eq!(Integer::I32(-70_000).get(), -70_000);
        assert_eq!(Integer::I64(i64::MAX).get(), i64::MAX);
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(Value::Absent.kind(), "absent");
        assert_eq!(Value::from(1i8).kind(), "int8");
        assert_eq!(Value::from(1.5f32).kind(), "float32");
        assert_eq!(Value::from(Mapping::new()).kind(), "mapping");
        assert_eq!(Value::from(None::<i64>), Value::Absent);
    }
}
