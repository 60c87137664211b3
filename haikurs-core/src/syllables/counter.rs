//! Rule-ordered syllable counting
//!
//! Resolution order, first match wins:
//!
//! 1. special punctuation token (`-`, `—`, ...) → 0
//! 2. brand suffix `Disney+` → count(`Disney`) + 1
//! 3. override table, then the base dictionary's exceptions
//! 4. possessive `scene's` → count(`scene`)
//! 5. year `1954`, `1950s` → spoken year words
//! 6. numeral `1,435` → spoken cardinal words
//! 7. score `16-10` → both sides plus the implied "to"
//! 8. compound `self-aware`, `and/or` → sum of both sides, 0 if either side is 0
//! 9. base phonetic counter
//!
//! Rules 2 and 4-8 recurse; depth is capped by [`SyllableCounter::max_depth`].

use std::sync::Arc;

use super::numbers::{cardinal_words, parse_numeral, year_words};
use super::overrides::SyllableOverrideTable;
use super::phonetic::PhoneticCounter;
use crate::config::defaults;
use crate::error::SyllableError;
use crate::text::{canonical_form, strip_plus_suffix, SpecialTokens};

/// Term to syllable-count resolver
#[derive(Clone)]
pub struct SyllableCounter {
    base: Arc<dyn PhoneticCounter>,
    overrides: Arc<SyllableOverrideTable>,
    special_tokens: SpecialTokens,
    max_depth: usize,
}

impl std::fmt::Debug for SyllableCounter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SyllableCounter")
            .field("overrides", &self.overrides.len())
            .field("special_tokens", &self.special_tokens)
            .field("max_depth", &self.max_depth)
            .finish_non_exhaustive()
    }
}

impl SyllableCounter {
    /// Counter with default special tokens and recursion depth
    pub fn new(base: Arc<dyn PhoneticCounter>, overrides: Arc<SyllableOverrideTable>) -> Self {
        Self {
            base,
            overrides,
            special_tokens: SpecialTokens::default(),
            max_depth: defaults::MAX_DEPTH,
        }
    }

    /// Replace the special punctuation tokens
    pub fn with_special_tokens(mut self, tokens: SpecialTokens) -> Self {
        self.special_tokens = tokens;
        self
    }

    /// Replace the recursion depth cap
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Configured recursion depth cap
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Configured standalone punctuation tokens
    pub fn special_tokens(&self) -> &SpecialTokens {
        &self.special_tokens
    }

    /// Whether `term` is a standalone punctuation token
    pub fn is_special_token(&self, term: &str) -> bool {
        self.special_tokens.contains(term)
    }

    /// The override table consulted by this counter
    pub fn overrides(&self) -> &SyllableOverrideTable {
        &self.overrides
    }

    /// Syllables in `term`
    pub fn count(&self, term: &str) -> Result<u32, SyllableError> {
        self.resolve(term, 0, &self.overrides)
    }

    /// Override entries whose count equals what the counter computes without them
    pub fn redundant_overrides(&self) -> Vec<(&str, u32)> {
        let empty = SyllableOverrideTable::empty();
        self.overrides
            .entries()
            .into_iter()
            .filter(|&(term, count)| self.resolve(term, 0, &empty) == Ok(count))
            .collect()
    }

    fn resolve(
        &self,
        term: &str,
        depth: usize,
        overrides: &SyllableOverrideTable,
    ) -> Result<u32, SyllableError> {
        if depth > self.max_depth {
            return Err(SyllableError::DepthExceeded {
                term: term.to_string(),
                limit: self.max_depth,
            });
        }

        if self.special_tokens.contains(term) {
            return Ok(0);
        }

        if let Some(base) = strip_plus_suffix(term) {
            return Ok(self.resolve(base, depth + 1, overrides)? + 1);
        }

        let canonical = canonical_form(term);
        if canonical.is_empty() {
            return Ok(0);
        }

        if let Some(count) = overrides
            .get(&canonical)
            .or_else(|| self.base.exception(&canonical))
        {
            return Ok(count);
        }

        if let Some(stem) = canonical.strip_suffix("'s").filter(|s| !s.is_empty()) {
            return self.resolve(stem, depth + 1, overrides);
        }

        if let Some(year) = parse_year(&canonical) {
            return self.sum_words(&year_words(year), depth, overrides);
        }

        if let Some(value) = parse_numeral(&canonical) {
            let words = cardinal_words(value).ok_or_else(|| SyllableError::unavailable(term))?;
            return self.sum_words(&words, depth, overrides);
        }

        if let Some((left, right)) = split_score(&canonical) {
            let s1 = self.resolve(left, depth + 1, overrides)?;
            let s2 = self.resolve(right, depth + 1, overrides)?;
            return Ok(s1 + s2 + 1);
        }

        if let Some((left, right)) = split_compound(&canonical) {
            let s1 = self.resolve(left, depth + 1, overrides)?;
            let s2 = self.resolve(right, depth + 1, overrides)?;
            // An unknown half suppresses the whole compound
            if s1 == 0 || s2 == 0 {
                return Ok(0);
            }
            return Ok(s1 + s2);
        }

        self.base
            .count(&canonical)
            .ok_or_else(|| SyllableError::unavailable(term))
    }

    fn sum_words(
        &self,
        words: &[&str],
        depth: usize,
        overrides: &SyllableOverrideTable,
    ) -> Result<u32, SyllableError> {
        let mut total = 0;
        for word in words {
            total += self.resolve(word, depth + 1, overrides)?;
        }
        Ok(total)
    }
}

/// `1954` or `1950s`
fn parse_year(canonical: &str) -> Option<u16> {
    let digits = canonical.strip_suffix('s').unwrap_or(canonical);
    if digits.len() == 4 && digits.bytes().all(|b| b.is_ascii_digit()) {
        digits.parse().ok()
    } else {
        None
    }
}

/// `16-10`
fn split_score(canonical: &str) -> Option<(&str, &str)> {
    let (left, right) = canonical.split_once('-')?;
    let is_number = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    (is_number(left) && is_number(right)).then_some((left, right))
}

/// Split a hyphen- or slash-joined compound
///
/// The left part never contains a hyphen: split at the first hyphen when
/// there is one, otherwise at the last slash.
fn split_compound(canonical: &str) -> Option<(&str, &str)> {
    let idx = match canonical.find('-') {
        Some(idx) => idx,
        None => canonical.rfind('/')?,
    };
    let (left, right) = (&canonical[..idx], &canonical[idx + 1..]);
    (!left.is_empty() && !right.is_empty()).then_some((left, right))
}
