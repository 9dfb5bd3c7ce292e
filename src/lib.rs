// ABOUTME: Main library module for the stencil template renderer
// ABOUTME: Exports the value model, filters, function library, template engine and CLI

pub mod cli;
pub mod filter;
pub mod function;
pub mod output;
pub mod template;
pub mod value;

// Re-export commonly used types
pub use cli::{App, Args, Config};
pub use filter::Filter;
pub use function::{Arg, Function, FunctionSet, Library, LibraryBuilder};
pub use template::{Environment, EngineOptions, TemplateEngine};
pub use value::Value;

// Error handling
pub type Result<T> = anyhow::Result<T>;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
