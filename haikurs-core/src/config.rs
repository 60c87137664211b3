//! Pipeline configuration

use std::path::PathBuf;

use crate::error::ConfigError;
use crate::moderation::LexiconSource;
use crate::text::SpecialTokens;

/// Default configuration constants
pub mod defaults {
    /// Maximum recursion depth of compound decomposition
    pub const MAX_DEPTH: usize = 16;
}

/// Where the syllable override table comes from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OverrideSource {
    /// The curated table compiled into the crate
    #[default]
    Embedded,
    /// A `term,count` CSV file
    File(PathBuf),
    /// No overrides
    Disabled,
}

/// Pipeline configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub(crate) special_tokens: SpecialTokens,
    pub(crate) max_depth: usize,
    pub(crate) lexicons: LexiconSource,
    pub(crate) overrides: OverrideSource,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            special_tokens: SpecialTokens::default(),
            max_depth: defaults::MAX_DEPTH,
            lexicons: LexiconSource::Embedded,
            overrides: OverrideSource::Embedded,
        }
    }
}

impl Config {
    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    pub fn special_tokens(&self) -> &SpecialTokens {
        &self.special_tokens
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn lexicons(&self) -> &LexiconSource {
        &self.lexicons
    }

    pub fn overrides(&self) -> &OverrideSource {
        &self.overrides
    }

    /// Validate the configuration
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.max_depth == 0 {
            return Err(ConfigError::ZeroDepth);
        }

        if let Some(token) = self
            .special_tokens
            .iter()
            .find(|t| t.is_empty() || t.chars().any(char::is_whitespace))
        {
            return Err(ConfigError::InvalidSpecialToken(token.to_string()));
        }

        Ok(())
    }
}

/// Fluent builder for configuration
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    special_tokens: Option<Vec<String>>,
    max_depth: Option<usize>,
    lexicons: Option<LexiconSource>,
    overrides: Option<OverrideSource>,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the standalone punctuation tokens
    pub fn special_tokens<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.special_tokens = Some(tokens.into_iter().map(Into::into).collect());
        self
    }

    /// Set the compound recursion limit
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Load lexicons from a directory instead of the embedded lists
    pub fn lexicon_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.lexicons = Some(LexiconSource::Directory(dir.into()));
        self
    }

    pub fn lexicons(mut self, source: LexiconSource) -> Self {
        self.lexicons = Some(source);
        self
    }

    /// Load overrides from a CSV file instead of the embedded table
    pub fn overrides_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.overrides = Some(OverrideSource::File(path.into()));
        self
    }

    pub fn overrides(mut self, source: OverrideSource) -> Self {
        self.overrides = Some(source);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config, ConfigError> {
        let mut config = Config::default();

        if let Some(tokens) = self.special_tokens {
            config.special_tokens = SpecialTokens::new(tokens);
        }

        if let Some(depth) = self.max_depth {
            config.max_depth = depth;
        }

        if let Some(lexicons) = self.lexicons {
            config.lexicons = lexicons;
        }

        if let Some(overrides) = self.overrides {
            config.overrides = overrides;
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::DEFAULT_SPECIAL_TOKENS;

    #[test]
    fn test_defaults() {
        let config = Config::builder().build().unwrap();
        assert_eq!(config.max_depth(), defaults::MAX_DEPTH);
        assert_eq!(
            config.special_tokens().iter().collect::<Vec<_>>(),
            DEFAULT_SPECIAL_TOKENS.to_vec()
        );
        assert_eq!(config.lexicons(), &LexiconSource::Embedded);
        assert_eq!(config.overrides(), &OverrideSource::Embedded);
    }

    #[test]
    fn test_builder_overrides_fields() {
        let config = Config::builder()
            .max_depth(4)
            .special_tokens(["-", "~"])
            .lexicon_dir("/etc/haikurs")
            .overrides(OverrideSource::Disabled)
            .build()
            .unwrap();

        assert_eq!(config.max_depth(), 4);
        assert!(config.special_tokens().contains("~"));
        assert!(!config.special_tokens().contains("\u{2014}"));
        assert_eq!(
            config.lexicons(),
            &LexiconSource::Directory(PathBuf::from("/etc/haikurs"))
        );
        assert_eq!(config.overrides(), &OverrideSource::Disabled);
    }

    #[test]
    fn test_zero_depth_rejected() {
        assert_eq!(
            Config::builder().max_depth(0).build().unwrap_err(),
            ConfigError::ZeroDepth
        );
    }

    #[test]
    fn test_invalid_special_tokens_rejected() {
        assert_eq!(
            Config::builder().special_tokens([""]).build().unwrap_err(),
            ConfigError::InvalidSpecialToken(String::new())
        );
        assert!(Config::builder().special_tokens(["- -"]).build().is_err());
    }
}
