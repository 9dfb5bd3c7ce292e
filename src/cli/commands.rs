// ABOUTME: Command implementations for the stencil CLI
// ABOUTME: Handles template rendering and the --functions listing

use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::{debug, info};

use super::args::Args;
use super::config::Config;
use super::help;
use crate::function::Library;
use crate::output::{write_output, Destination};
use crate::template::{read_template, Environment, TemplateEngine};

/// Render the selected template with `library` and write it to the destination
pub async fn render(args: &Args, config: &Config, library: &Library) -> Result<()> {
    let options = config.engine_options(args.strict);
    let engine = TemplateEngine::new(library, &options)?;

    let environment = build_environment(&args.data_paths(), args.data_inline.as_deref()).await?;

    let template = match &args.template {
        Some(inline) => inline.clone(),
        None => read_template(args.input.as_deref())
            .await
            .context("Failed to read template")?,
    };
    engine.validate_template(&template)?;

    let rendered = engine.render(&template, &environment)?;
    debug!("rendered {} bytes", rendered.len());

    // Nothing is written unless rendering succeeded.
    write_output(&rendered, &Destination::parse(&args.output)).await?;
    Ok(())
}

/// Build the render environment: data files in order, then the inline JSON
pub async fn build_environment(
    data_paths: &[PathBuf],
    data_inline: Option<&str>,
) -> Result<Environment> {
    let mut environment = Environment::new();

    for path in data_paths {
        environment.load_data_file(path).await?;
    }
    if let Some(inline) = data_inline {
        environment.merge_data_json(inline, "inline data")?;
    }

    info!(
        "environment ready: {} data key(s), {} env var(s)",
        environment.data.len(),
        environment.env.len()
    );
    Ok(environment)
}

/// Print every function available to templates, grouped by category
pub fn list_functions(library: &Library) -> Result<()> {
    print!("{}", help::function_listing(library));
    Ok(())
}
