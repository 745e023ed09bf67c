use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level converter configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct EthioConfig {
    /// Display settings.
    #[serde(default)]
    pub display: DisplayToml,

    /// Share text settings.
    #[serde(default)]
    pub share: ShareToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DisplayToml {
    #[serde(default = "default_language")]
    pub language: String,
}

impl Default for DisplayToml {
    fn default() -> Self {
        Self {
            language: default_language(),
        }
    }
}

fn default_language() -> String {
    "english".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ShareToml {
    #[serde(default = "default_prefix")]
    pub prefix: String,
}

impl Default for ShareToml {
    fn default() -> Self {
        Self {
            prefix: default_prefix(),
        }
    }
}

fn default_prefix() -> String {
    "Ethiopian date: ".to_string()
}

/// Loads configuration from an optional TOML file path.
///
/// No path means built-in defaults.
pub fn load(path: Option<&Path>) -> Result<EthioConfig> {
    let Some(path) = path else {
        return Ok(EthioConfig::default());
    };
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    toml::from_str(&toml_str).context("failed to parse TOML config")
}
