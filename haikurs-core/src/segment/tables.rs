//! Lookup tables for abbreviation and sentence-starter checks

use std::collections::{HashMap, HashSet};

/// Abbreviations that do not end a sentence at their period
///
/// Matching is case-sensitive: `Dr` is a title, `dr` is not.
#[derive(Debug, Clone, Default)]
pub struct AbbreviationTable {
    abbreviations: HashSet<String>,
}

impl AbbreviationTable {
    /// Build from configuration categories
    pub fn from_categories(categories: HashMap<String, Vec<String>>) -> Self {
        let abbreviations = categories
            .into_values()
            .flatten()
            .map(|abbr| abbr.trim_end_matches('.').to_string())
            .filter(|abbr| !abbr.is_empty())
            .collect();

        Self { abbreviations }
    }

    /// Whether `word` (without its final period) is a known abbreviation
    pub fn contains(&self, word: &str) -> bool {
        self.abbreviations.contains(word)
    }

    /// Whether `word` is a single capital initial such as the `J` of `J. Smith`
    pub fn is_initial(word: &str) -> bool {
        let mut chars = word.chars();
        matches!((chars.next(), chars.next()), (Some(ch), None) if ch.is_uppercase())
    }

    pub fn len(&self) -> usize {
        self.abbreviations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.abbreviations.is_empty()
    }
}

/// Sentence starters lookup table
#[derive(Debug, Clone, Default)]
pub struct SentenceStarterTable {
    /// Set of sentence starters for O(1) lookup
    starters: HashSet<String>,
    /// Maximum word length to consider
    max_length: usize,
}

impl SentenceStarterTable {
    /// Create from categorized word lists
    pub fn from_categories(categories: HashMap<String, Vec<String>>) -> Self {
        let starters: HashSet<String> = categories.into_values().flatten().collect();
        let max_length = starters.iter().map(String::len).max().unwrap_or(0);

        Self {
            starters,
            max_length,
        }
    }

    /// Check if a word is a sentence starter
    pub fn is_sentence_starter(&self, word: &str) -> bool {
        word.len() <= self.max_length && self.starters.contains(word)
    }

    /// Get the next word after a position in text
    /// Returns None if no valid word found
    pub fn get_next_word(text: &str, after_pos: usize) -> Option<&str> {
        let trimmed = text.get(after_pos..)?.trim_start();

        let word_end = trimmed
            .char_indices()
            .find(|(_, ch)| !ch.is_alphabetic())
            .map_or(trimmed.len(), |(i, _)| i);

        (word_end > 0).then(|| &trimmed[..word_end])
    }

    /// Check if we have any sentence starters configured
    pub fn is_empty(&self) -> bool {
        self.starters.is_empty()
    }
}
