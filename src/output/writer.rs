// ABOUTME: Output writers for rendered templates (stdout, files)
// ABOUTME: Writes content verbatim, without adding a trailing newline

use async_trait::async_trait;
use std::path::PathBuf;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info};

use super::error::{OutputError, Result};

/// Where rendered output goes. `-` means stdout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Stdout,
    File(PathBuf),
}

impl Destination {
    pub fn parse(value: &str) -> Self {
        if value == "-" || value.is_empty() {
            Destination::Stdout
        } else {
            Destination::File(PathBuf::from(value))
        }
    }
}

#[async_trait]
pub trait OutputWriter: Send + Sync {
    async fn write(&self, content: &str) -> Result<()>;
}

pub struct StdoutWriter;

impl Default for StdoutWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl StdoutWriter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl OutputWriter for StdoutWriter {
    async fn write(&self, content: &str) -> Result<()> {
        let mut stdout = tokio::io::stdout();
        stdout.write_all(content.as_bytes()).await?;
        stdout.flush().await?;

        debug!("Output written to stdout ({} bytes)", content.len());
        Ok(())
    }
}

pub struct FileWriter {
    path: PathBuf,
}

impl FileWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl OutputWriter for FileWriter {
    async fn write(&self, content: &str) -> Result<()> {
        // Parent directories are not created.
        fs::write(&self.path, content)
            .await
            .map_err(|e| OutputError::Write {
                path: self.path.display().to_string(),
                message: e.to_string(),
            })?;

        info!(
            "Output written to file: {} ({} bytes)",
            self.path.display(),
            content.len()
        );
        Ok(())
    }
}
