//! Segmenter configuration schema
//!
//! This module defines the TOML schema of `data/segmenter.toml`.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Root segmenter configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SegmenterConfig {
    pub metadata: Metadata,
    pub terminators: Terminators,
    pub enclosures: Enclosures,
    #[serde(default)]
    pub abbreviations: Abbreviations,
    #[serde(default)]
    pub sentence_starters: SentenceStarters,
}

/// Language metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    pub code: String,
    pub name: String,
}

/// Sentence-ending characters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Terminators {
    pub chars: Vec<char>,
}

/// Quotes and brackets around sentences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enclosures {
    /// May open a sentence after a boundary
    pub opening: Vec<char>,
    /// Absorbed into the sentence after its terminator
    pub closing: Vec<char>,
}

/// Abbreviations by category, written without their final period
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Abbreviations {
    #[serde(flatten)]
    pub categories: HashMap<String, Vec<String>>,
}

/// Words that start a new sentence even after an abbreviation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SentenceStarters {
    #[serde(flatten)]
    pub categories: HashMap<String, Vec<String>>,
}

impl SegmenterConfig {
    /// Validate configuration
    pub(crate) fn validate(&self) -> Result<(), String> {
        if self.terminators.chars.is_empty() {
            return Err("No terminator characters defined".to_string());
        }

        if let Some(ch) = self
            .terminators
            .chars
            .iter()
            .find(|ch| ch.is_alphanumeric() || ch.is_whitespace())
        {
            return Err(format!("Invalid terminator character: {ch:?}"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_config() {
        let config: SegmenterConfig = toml::from_str(
            r#"
            [metadata]
            code = "en"
            name = "English"

            [terminators]
            chars = ["."]

            [enclosures]
            opening = ["("]
            closing = [")"]
            "#,
        )
        .unwrap();

        assert_eq!(config.terminators.chars, vec!['.']);
        assert!(config.abbreviations.categories.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_terminators() {
        let config: SegmenterConfig = toml::from_str(
            r#"
            [metadata]
            code = "en"
            name = "English"

            [terminators]
            chars = []

            [enclosures]
            opening = []
            closing = []
            "#,
        )
        .unwrap();

        assert!(config.validate().is_err());
    }
}
