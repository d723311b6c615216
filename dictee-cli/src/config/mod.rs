//! Configuration module

use crate::error::CliError;
use crate::output::OutputFormat;
use anyhow::{Context, Result};
use dictee_api::{Config, ConfigBuilder};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// CLI configuration structure
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Comparison configuration
    #[serde(default)]
    pub comparison: ComparisonConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Named starting points for the comparison settings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    /// Default thresholds
    #[default]
    Balanced,
    /// Only near-identical spellings count as mistakes
    Strict,
    /// Looser spelling and a wider lookahead
    Lenient,
}

impl Preset {
    /// Every preset, in listing order
    pub const ALL: [Preset; 3] = [Preset::Balanced, Preset::Strict, Preset::Lenient];

    fn builder(self) -> ConfigBuilder {
        match self {
            Preset::Balanced => Config::builder(),
            Preset::Strict => Config::builder().strict(),
            Preset::Lenient => Config::builder().lenient(),
        }
    }

    /// Lowercase name as used in config files
    pub fn as_str(self) -> &'static str {
        match self {
            Preset::Balanced => "balanced",
            Preset::Strict => "strict",
            Preset::Lenient => "lenient",
        }
    }
}

/// Comparison-related configuration
///
/// Explicit values override the preset.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ComparisonConfig {
    /// Preset the remaining fields start from
    #[serde(default)]
    pub preset: Preset,

    /// Similarity at or above which a word counts as a mistake
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mistake_threshold: Option<f64>,

    /// Reference words per realignment window
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub window_size: Option<usize>,

    /// Reference words searched ahead when realigning
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_search: Option<usize>,
}

/// Output-related configuration
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: OutputFormat,

    /// Include metadata in output
    pub include_metadata: bool,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: OutputFormat::Text,
            include_metadata: false,
            pretty_json: true,
        }
    }
}

/// Command-line overrides applied on top of the file configuration
#[derive(Debug, Clone, Copy, Default)]
pub struct Overrides {
    /// Replaces the configured preset
    pub preset: Option<Preset>,
    /// Replaces the configured threshold
    pub mistake_threshold: Option<f64>,
    /// Replaces the configured window size
    pub window_size: Option<usize>,
    /// Replaces the configured lookahead
    pub max_search: Option<usize>,
}

impl CliConfig {
    /// Parse a configuration from TOML text
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| CliError::ConfigError(e.message().to_string()).into())
    }

    /// Load a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(CliError::FileNotFound(path.display().to_string()).into());
        }
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config = Self::from_toml(&text)
            .with_context(|| format!("Failed to load config: {}", path.display()))?;

        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load the given file, or fall back to defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Resolve the comparison settings, with `overrides` taking precedence
    ///
    /// A preset given as an override replaces the whole `[comparison]`
    /// section, so only the other overrides are applied on top of it.
    pub fn comparison_config(&self, overrides: &Overrides) -> Result<Config> {
        let file_values = ComparisonConfig::default();
        let comparison = match overrides.preset {
            Some(_) => &file_values,
            None => &self.comparison,
        };
        let preset = overrides.preset.unwrap_or(comparison.preset);

        let mut builder = preset.builder();
        if let Some(threshold) = overrides.mistake_threshold.or(comparison.mistake_threshold) {
            builder = builder.mistake_threshold(threshold);
        }
        if let Some(size) = overrides.window_size.or(comparison.window_size) {
            builder = builder.window_size(size);
        }
        if let Some(tokens) = overrides.max_search.or(comparison.max_search) {
            builder = builder.max_search(tokens);
        }

        builder
            .build()
            .map_err(|e| CliError::ConfigError(e.to_string()).into())
    }
}
