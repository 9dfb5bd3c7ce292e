// ABOUTME: Error types for value coercion, filter evaluation and collection building
// ABOUTME: Every failure here is unrecoverable and aborts the render that raised it

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValueError {
    #[error("Type mismatch: expected {expected}, got {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    #[error("Cannot convert {found} to int: {reason}")]
    TypeConversion { found: &'static str, reason: String },

    #[error("Index {index} out of range for sequence of length {len}")]
    Index { index: i64, len: usize },

    #[error("Map keys must be strings, got {found} at argument {position}")]
    KeyType {
        position: usize,
        found: &'static str,
    },

    #[error("Invalid number of arguments: expected key/value pairs, got {count} values")]
    Arity { count: usize },

    #[error("Unsupported type: {found}, expected a sequence or a mapping")]
    UnsupportedType { found: &'static str },
}

pub type Result<T> = std::result::Result<T, ValueError>;
