//! Configuration module

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use haikurs_core::{Config, OverrideSource};
use serde::{Deserialize, Serialize};

use crate::error::CliError;
use crate::output::OutputFormat;

/// CLI configuration structure
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Resource locations and counting knobs
    #[serde(default)]
    pub resources: ResourcesConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Moderation configuration
    #[serde(default)]
    pub moderation: ModerationConfig,
}

/// Where lexicons and overrides come from
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResourcesConfig {
    /// Directory holding the four lexicon lists (embedded when unset)
    pub lexicons: Option<PathBuf>,

    /// Override CSV (embedded when unset)
    pub overrides: Option<PathBuf>,

    /// Count without any override table
    pub disable_overrides: bool,

    /// Replacement set of zero-syllable tokens
    pub special_tokens: Option<Vec<String>>,

    /// Decomposition depth cap
    pub max_depth: Option<usize>,
}

/// Output-related configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Format used when `-f` is not given
    pub default_format: OutputFormat,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: OutputFormat::Text,
            pretty_json: true,
        }
    }
}

/// Moderation-related configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ModerationConfig {
    /// Run candidates through the lexicon and awkwardness gates
    pub enabled: bool,

    /// Report rejected candidates on stderr
    pub explain: bool,
}

impl Default for ModerationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            explain: false,
        }
    }
}

impl CliConfig {
    /// Parse a TOML configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content).map_err(|e| {
            let reason = format!("{}: {e}", path.display());
            CliError::ConfigError(reason).into()
        })
    }

    /// Load from `path`, or defaults when no file was given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                log::info!("Loading configuration from {}", path.display());
                Self::from_file(path)
            }
            None => Ok(Self::default()),
        }
    }

    /// Build the library configuration these settings describe
    pub fn core_config(&self) -> Result<Config> {
        let resources = &self.resources;
        let mut builder = Config::builder();

        if let Some(dir) = &resources.lexicons {
            builder = builder.lexicon_dir(dir);
        }
        if resources.disable_overrides {
            builder = builder.overrides(OverrideSource::Disabled);
        } else if let Some(path) = &resources.overrides {
            builder = builder.overrides_file(path);
        }
        if let Some(tokens) = &resources.special_tokens {
            builder = builder.special_tokens(tokens);
        }
        if let Some(depth) = resources.max_depth {
            builder = builder.max_depth(depth);
        }

        builder
            .build()
            .map_err(|e| CliError::ConfigError(e.to_string()).into())
    }
}
