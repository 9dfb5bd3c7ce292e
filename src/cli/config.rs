// ABOUTME: Configuration management for stencil
// ABOUTME: Handles loading configuration from YAML files and STENCIL_* environment overrides

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use std::path::PathBuf;

use crate::template::EngineOptions;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub template: EngineOptions,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from file path or default locations
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        let config_path = match path {
            Some(p) if !p.exists() => {
                return Err(anyhow!("Configuration file not found: {}", p.display()))
            }
            Some(p) => Some(p),
            None => Self::find_config_file(),
        };

        let mut config = match config_path {
            Some(config_path) => {
                let contents = std::fs::read_to_string(&config_path)?;
                serde_yaml::from_str(&contents).with_context(|| {
                    format!("Invalid configuration file {}", config_path.display())
                })?
            }
            None => Config::default(),
        };

        config.merge_env(|name| std::env::var(name).ok())?;
        Ok(config)
    }

    /// Find configuration file in standard locations
    fn find_config_file() -> Option<PathBuf> {
        let mut possible_paths = vec![
            PathBuf::from("stencil.yaml"),
            PathBuf::from("stencil.yml"),
            PathBuf::from(".stencil.yaml"),
            PathBuf::from(".stencil.yml"),
        ];
        if let Some(home_dir) = dirs::home_dir() {
            possible_paths.push(home_dir.join(".stencil").join("config.yaml"));
        }

        possible_paths.into_iter().find(|path| path.exists())
    }

    /// Merge STENCIL_* environment variables into configuration
    fn merge_env(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(level) = lookup("STENCIL_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("STENCIL_LOG_FORMAT") {
            self.logging.format = format;
        }
        if let Some(strict) = lookup("STENCIL_STRICT") {
            self.template.strict_mode = match strict.as_str() {
                "true" | "1" => true,
                "false" | "0" => false,
                other => return Err(anyhow!("Invalid STENCIL_STRICT value '{}'", other)),
            };
        }
        Ok(())
    }

    /// Engine options with the --strict flag applied on top of the file.
    pub fn engine_options(&self, strict: bool) -> EngineOptions {
        EngineOptions {
            strict_mode: self.template.strict_mode || strict,
            ..self.template.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.logging.format, "pretty");
        assert_eq!(config.template, EngineOptions::default());
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("stencil.yaml");
        fs::write(
            &config_path,
            "template:\n  escape_html: true\nlogging:\n  level: debug\n",
        )
        .unwrap();

        let config = Config::load(Some(config_path)).unwrap();
        assert!(config.template.escape_html);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_missing_explicit_file() {
        let temp_dir = tempdir().unwrap();
        assert!(Config::load(Some(temp_dir.path().join("nope.yaml"))).is_err());
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = [
            ("STENCIL_LOG_LEVEL", "trace"),
            ("STENCIL_LOG_FORMAT", "compact"),
            ("STENCIL_STRICT", "1"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config
            .merge_env(|name| vars.get(name).map(|v| v.to_string()))
            .unwrap();
        assert_eq!(config.logging.level, "trace");
        assert_eq!(config.logging.format, "compact");
        assert!(config.template.strict_mode);

        let mut config = Config::default();
        assert!(config
            .merge_env(|name| (name == "STENCIL_STRICT").then(|| "yes".to_string()))
            .is_err());
    }

    #[test]
    fn test_strict_flag() {
        let config = Config::default();
        assert!(!config.engine_options(false).strict_mode);
        assert!(config.engine_options(true).strict_mode);
    }
}
