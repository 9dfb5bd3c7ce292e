// ABOUTME: Render environment exposed to templates as `data` and `env`
// ABOUTME: Merges JSON data files and inline JSON, and snapshots process environment variables

use serde::Serialize;
use serde_json::{Map, Value as JsonValue};
use std::collections::BTreeMap;
use std::env;
use std::path::Path;
use tracing::debug;

use super::error::{Result, TemplateError};

/// Everything a template can reach: `{{data.*}}` and `{{env.*}}`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Environment {
    pub data: Map<String, JsonValue>,
    pub env: BTreeMap<String, String>,
}

impl Environment {
    /// Empty data, process environment captured.
    pub fn new() -> Self {
        Self {
            data: Map::new(),
            env: collect_env(env::vars()),
        }
    }

    /// Merge a JSON document into `data`. Top-level keys overwrite earlier ones.
    pub fn merge_data_json(&mut self, text: &str, origin: &str) -> Result<()> {
        let parsed: JsonValue =
            serde_json::from_str(text).map_err(|e| TemplateError::Data {
                origin: origin.to_string(),
                message: e.to_string(),
            })?;

        match parsed {
            JsonValue::Object(obj) => {
                debug!("merging {} top-level data key(s) from {}", obj.len(), origin);
                self.data.extend(obj);
                Ok(())
            }
            other => Err(TemplateError::InvalidData {
                origin: origin.to_string(),
                found: json_kind(&other),
            }),
        }
    }

    pub async fn load_data_file(&mut self, path: &Path) -> Result<()> {
        let origin = path.display().to_string();
        let text = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| TemplateError::Data {
                origin: origin.clone(),
                message: e.to_string(),
            })?;
        self.merge_data_json(&text, &origin)
    }

    pub fn to_json(&self) -> Result<JsonValue> {
        Ok(serde_json::to_value(self)?)
    }
}

/// Keep variables with a word-character name and a non-empty value.
pub fn collect_env(vars: impl IntoIterator<Item = (String, String)>) -> BTreeMap<String, String> {
    vars.into_iter()
        .filter(|(name, value)| {
            !name.is_empty()
                && !value.is_empty()
                && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
        })
        .collect()
}

fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "bool",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}
