use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use toml::Value;

/// Settings read from a `relfinder.toml` file. Command line flags take precedence.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// A number or a string. Anything that isn't a non-negative integer falls back to the default.
    #[serde(default)]
    pub max_depth: Option<Value>,
    /// View templates which are never offered as relation targets
    #[serde(default)]
    pub excluded_templates: Vec<String>,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let config_str = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    fn parse(config_str: &str) -> Result<Self> {
        Ok(toml::from_str(config_str)?)
    }

    /// The max depth as it was written, for lenient parsing by the finder
    pub fn raw_max_depth(&self) -> Option<String> {
        match self.max_depth.as_ref()? {
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}
