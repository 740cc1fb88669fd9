//! Optional JSON defaults for the command line

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Defaults read from `--config`; command-line flags win over these
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub locale: Option<String>,
    pub decimals: Option<u32>,
    pub number_type: Option<String>,
    pub output_separator: Option<char>,
}

impl Config {
    /// Load the config file, or defaults when no path is given
    pub fn load(path: Option<&Path>) -> Result<Config> {
        let Some(path) = path else {
            return Ok(Config::default());
        };
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config '{}'", path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("Invalid config '{}'", path.display()))?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }
}
