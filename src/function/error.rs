// ABOUTME: Error types raised by catalog functions
// ABOUTME: Wraps value errors and adds argument decoding, math, regexp, base64 and I/O failures

use thiserror::Error;

use crate::value::ValueError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FunctionError {
    #[error(transparent)]
    Value(#[from] ValueError),

    #[error("{function}: missing argument {position}")]
    MissingArgument {
        function: &'static str,
        position: usize,
    },

    #[error("{function}: unexpected argument {position}")]
    UnexpectedArgument {
        function: &'static str,
        position: usize,
    },

    #[error("{function}: argument {position} must be a {expected}, got {found}")]
    InvalidArgument {
        function: &'static str,
        position: usize,
        expected: &'static str,
        found: &'static str,
    },

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Invalid regular expression: {0}")]
    Pattern(String),

    #[error("Base64 decode error: {0}")]
    Decode(String),

    #[error("Failed to read {path}: {message}")]
    Io { path: String, message: String },

    #[error("Failed to encode filter: {0}")]
    Encode(String),
}

pub type Result<T> = std::result::Result<T, FunctionError>;
