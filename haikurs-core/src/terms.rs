//! Sentence to term sequence

use crate::error::SyllableError;
use crate::syllables::SyllableCounter;
use crate::text::{canonical_form, SENTENCE_TRIM_CHARS};

/// A whitespace-delimited token of a sentence and its syllable count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Term<'s> {
    /// The token exactly as it appears in the sentence
    pub surface: &'s str,
    /// Resolved syllable count
    pub syllables: u32,
}

impl<'s> Term<'s> {
    pub fn new(surface: &'s str, syllables: u32) -> Self {
        Self { surface, syllables }
    }

    /// Lookup form of the surface text
    pub fn canonical(&self) -> String {
        canonical_form(self.surface)
    }
}

/// Splits sentences into counted terms
#[derive(Debug, Clone, Copy)]
pub struct TermExtractor<'c> {
    counter: &'c SyllableCounter,
}

impl<'c> TermExtractor<'c> {
    pub fn new(counter: &'c SyllableCounter) -> Self {
        Self { counter }
    }

    /// Ordered terms of `sentence`
    ///
    /// Enclosing quotes, brackets and whitespace are trimmed from the whole
    /// sentence first, so `"(Hello world.)"` yields `Hello` and `world.`.
    /// The first term that cannot be counted fails the whole sentence.
    pub fn extract<'s>(&self, sentence: &'s str) -> Result<Vec<Term<'s>>, SyllableError> {
        split_terms(sentence)
            .map(|surface| {
                let syllables = self.counter.count(surface)?;
                Ok(Term::new(surface, syllables))
            })
            .collect()
    }

    /// Like [`extract`](Self::extract), but keeps going past uncountable terms
    pub fn annotate<'s>(&self, sentence: &'s str) -> Vec<(&'s str, Result<u32, SyllableError>)> {
        split_terms(sentence)
            .map(|surface| (surface, self.counter.count(surface)))
            .collect()
    }
}

fn split_terms(sentence: &str) -> impl Iterator<Item = &str> {
    sentence
        .trim_matches(SENTENCE_TRIM_CHARS)
        .split_whitespace()
}
