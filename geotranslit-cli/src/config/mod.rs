//! Configuration module

use anyhow::{Context, Result};
use geotranslit_core::Orthography;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use crate::error::CliError;
use crate::input::FileReader;
use crate::output::OutputFormat;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Destination-table label per orthography code
    #[serde(default)]
    pub destinations: HashMap<String, String>,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: String,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            pretty_json: true,
        }
    }
}

impl CliConfig {
    /// Load and check a TOML configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let content = FileReader::read_text(path)?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse configuration: {}", path.display()))?;
        config.default_format()?;
        Ok(config)
    }

    /// Configured destination label for `orthography`
    pub fn destination_for(&self, orthography: Orthography) -> Option<&str> {
        self.destinations
            .get(orthography.code())
            .map(String::as_str)
    }

    /// Output format named by `[output] default_format`
    pub fn default_format(&self) -> Result<OutputFormat, CliError> {
        OutputFormat::from_name(&self.output.default_format).ok_or_else(|| {
            CliError::ConfigError(format!(
                "unknown output format '{}'",
                self.output.default_format
            ))
        })
    }
}
