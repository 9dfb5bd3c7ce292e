// ABOUTME: Template engine module binding handlebars to the function library
// ABOUTME: Provides the render environment, catalog helpers and template rendering

pub mod context;
pub mod engine;
pub mod error;
pub mod helpers;

pub use context::Environment;
pub use engine::{read_template, EngineOptions, TemplateEngine};
pub use error::{Result, TemplateError};
pub use helpers::CatalogHelper;
