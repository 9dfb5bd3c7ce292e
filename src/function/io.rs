// ABOUTME: File input function for templates
// ABOUTME: read_file inlines the contents of a file into the rendered output

use std::fs;

use tracing::debug;

use super::{Arg, Args, FunctionError, FunctionSet, Result};
use crate::value::Value;

const CATEGORY: &str = "I/O";

pub fn function_sets() -> Vec<FunctionSet> {
    vec![FunctionSet::new(
        CATEGORY,
        "read_file <filename string>",
        &["Reads the given filename and returns its content as a string. Fails the render if the file cannot be read"],
    )
    .with_function("read_file", read_file)]
}

fn read_file(mut args: Args) -> Result<Arg> {
    let path = args.string()?;
    args.finish()?;
    let content = fs::read_to_string(&path).map_err(|e| FunctionError::Io {
        path: path.clone(),
        message: e.to_string(),
    })?;
    debug!("read_file loaded {} ({} bytes)", path, content.len());
    Ok(Arg::Value(Value::String(content)))
}
