// ABOUTME: Error types for writing rendered output
// ABOUTME: Distinguishes destination failures from plain stdout I/O errors

use thiserror::Error;

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write {path}: {message}")]
    Write { path: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, OutputError>;
