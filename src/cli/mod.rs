// ABOUTME: CLI module for stencil
// ABOUTME: Exports command line interface components and main application logic

pub mod app;
pub mod args;
pub mod commands;
pub mod config;
pub mod help;

pub use app::App;
pub use args::Args;
pub use config::{Config, LoggingConfig};
