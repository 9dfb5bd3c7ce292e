// ABOUTME: Common utilities and helpers for integration tests
// ABOUTME: Provides temporary fixture directories, value builders and the stencil binary

#![allow(dead_code)]

use serde_json::Value as JsonValue;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use std::io::Write;
use tempfile::TempDir;

use stencil::function::Library;
use stencil::template::{EngineOptions, TemplateEngine};
use stencil::value::{Mapping, Value};

pub struct TestEnvironment {
    temp_dir: TempDir,
}

impl TestEnvironment {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn file(&self, name: &str) -> PathBuf {
        self.temp_dir.path().join(name)
    }

    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.file(name);
        std::fs::write(&path, content).expect("Failed to write fixture");
        path
    }

    pub fn write_json(&self, name: &str, json: &JsonValue) -> PathBuf {
        self.write_file(name, &json.to_string())
    }
}

/// A mapping built from string keys and values.
pub fn record(pairs: &[(&str, Value)]) -> Value {
    let mapping: Mapping = pairs
        .iter()
        .map(|(key, value)| (key.to_string(), value.clone()))
        .collect();
    Value::Mapping(mapping)
}

pub fn engine() -> TemplateEngine {
    TemplateEngine::new(&Library::standard(), &EngineOptions::default())
        .expect("Failed to create template engine")
}

pub fn stencil() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_stencil"));
    command.env_remove("RUST_LOG");
    command.env_remove("STENCIL_STRICT");
    command
}

/// Run the binary in `dir` with `stdin` piped to it.
pub fn run_with_stdin(dir: &Path, args: &[&str], stdin: &str) -> Output {
    let mut child = stencil()
        .current_dir(dir)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to start stencil");
    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(stdin.as_bytes())
        .expect("Failed to write stdin");
    child.wait_with_output().expect("Failed to wait for stencil")
}

pub fn run(dir: &Path, args: &[&str]) -> Output {
    stencil()
        .current_dir(dir)
        .args(args)
        .stdin(Stdio::null())
        .output()
        .expect("Failed to run stencil")
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
