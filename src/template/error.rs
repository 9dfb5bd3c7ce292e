// ABOUTME: Error types for template loading and rendering
// ABOUTME: Covers handlebars failures, template syntax and data document problems

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("Template render error: {0}")]
    Render(#[from] handlebars::RenderError),

    #[error("Template syntax error: {0}")]
    Syntax(String),

    #[error("Invalid data from {origin}: {message}")]
    Data { origin: String, message: String },

    #[error("Data from {origin} must be a JSON object, got {found}")]
    InvalidData { origin: String, found: &'static str },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TemplateError>;
