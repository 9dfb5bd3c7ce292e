// ABOUTME: Handlebars-backed template engine wired to the function library
// ABOUTME: Provides template rendering, syntax validation and template source loading

use handlebars::Handlebars;
use serde::Deserialize;
use serde_json::Value as JsonValue;
use std::path::Path;
use tokio::io::AsyncReadExt;
use tracing::debug;

use super::context::Environment;
use super::error::{Result, TemplateError};
use super::helpers;
use crate::function::Library;

/// Rendering switches, read from the `template` section of the config file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct EngineOptions {
    /// Fail on references to missing data instead of rendering nothing.
    pub strict_mode: bool,
    /// HTML-escape `{{...}}` output. Off by default since output is arbitrary text.
    pub escape_html: bool,
}

#[derive(Clone)]
pub struct TemplateEngine {
    handlebars: Handlebars<'static>,
}

impl TemplateEngine {
    /// Create an engine exposing every function of `library` as a helper
    pub fn new(library: &Library, options: &EngineOptions) -> Result<Self> {
        let mut handlebars = Handlebars::new();

        handlebars.set_strict_mode(options.strict_mode);
        handlebars.set_dev_mode(false);
        if !options.escape_html {
            handlebars.register_escape_fn(handlebars::no_escape);
        }

        let registered = helpers::register_library(&mut handlebars, library);
        debug!(
            "template engine ready with {} helper(s), strict_mode={}",
            registered, options.strict_mode
        );

        Ok(Self { handlebars })
    }

    /// Render a template string against the environment
    pub fn render(&self, template: &str, environment: &Environment) -> Result<String> {
        let context = environment.to_json()?;
        self.render_with_json(template, &context)
    }

    /// Render a template string with a raw JSON context
    pub fn render_with_json(&self, template: &str, context: &JsonValue) -> Result<String> {
        self.handlebars
            .render_template(template, context)
            .map_err(TemplateError::Render)
    }

    /// Validate template syntax without rendering
    pub fn validate_template(&self, template: &str) -> Result<()> {
        handlebars::Template::compile(template)
            .map(|_| ())
            .map_err(|e| TemplateError::Syntax(e.to_string()))
    }
}

/// Read a template from `path`, or from stdin when `path` is `None` or `-`.
pub async fn read_template(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => {
            debug!("reading template from {}", path.display());
            Ok(tokio::fs::read_to_string(path).await?)
        }
        _ => {
            debug!("reading template from stdin");
            let mut text = String::new();
            tokio::io::stdin().read_to_string(&mut text).await?;
            Ok(text)
        }
    }
}
