//! Haiku detection over article text

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

use crate::error::SyllableError;
use crate::seeker::{LineMismatch, LineSeeker};
use crate::segment::SentenceSegmenter;
use crate::syllables::SyllableCounter;
use crate::terms::TermExtractor;

/// Stable digest of a sentence, used to deduplicate haiku across articles
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fingerprint(String);

impl Fingerprint {
    /// Lowercase hex SHA-256 of the sentence's UTF-8 bytes
    pub fn of(sentence: &str) -> Self {
        Self(hex::encode(Sha256::digest(sentence.as_bytes())))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A sentence that scans as 5-7-5
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Haiku {
    pub line0: String,
    pub line1: String,
    pub line2: String,
    /// The sentence exactly as the segmenter produced it
    pub source_sentence: String,
    pub fingerprint: Fingerprint,
}

impl Haiku {
    pub fn lines(&self) -> [&str; 3] {
        [&self.line0, &self.line1, &self.line2]
    }
}

/// Why a sentence was not a haiku
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("syllables: {0}")]
    Syllables(#[from] SyllableError),

    #[error("lines: {0}")]
    Lines(#[from] LineMismatch),
}

/// Finds haiku in article bodies
#[derive(Clone)]
pub struct HaikuDetector {
    counter: SyllableCounter,
    segmenter: Arc<dyn SentenceSegmenter>,
}

impl fmt::Debug for HaikuDetector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HaikuDetector")
            .field("counter", &self.counter)
            .finish_non_exhaustive()
    }
}

impl HaikuDetector {
    pub fn new(counter: SyllableCounter, segmenter: Arc<dyn SentenceSegmenter>) -> Self {
        Self { counter, segmenter }
    }

    pub fn counter(&self) -> &SyllableCounter {
        &self.counter
    }

    pub fn segmenter(&self) -> &dyn SentenceSegmenter {
        self.segmenter.as_ref()
    }

    /// Term extractor backed by this detector's counter
    pub fn extractor(&self) -> TermExtractor<'_> {
        TermExtractor::new(&self.counter)
    }

    /// Haiku found in `body`, in sentence order
    ///
    /// An empty or absent body yields nothing. Sentences that fail to scan
    /// are skipped.
    pub fn find_haikus<'d, 't>(&'d self, body: impl Into<Option<&'t str>>) -> Haikus<'d, 't> {
        let sentences = body
            .into()
            .map(|text| self.segmenter.segment(text))
            .unwrap_or_default();

        Haikus {
            detector: self,
            sentences: sentences.into_iter(),
        }
    }

    /// Decide a single sentence
    pub fn find_haiku(&self, sentence: &str) -> Result<Haiku, Rejection> {
        let terms = self.extractor().extract(sentence)?;
        let [line0, line1, line2] =
            LineSeeker::new(&terms, self.counter.special_tokens()).seek_haiku()?;

        Ok(Haiku {
            line0,
            line1,
            line2,
            source_sentence: sentence.to_string(),
            fingerprint: Fingerprint::of(sentence),
        })
    }

    /// Haiku of many articles, processed concurrently
    ///
    /// Results keep the order of `bodies`.
    #[cfg(feature = "parallel")]
    pub fn find_haikus_in_articles(&self, bodies: &[&str]) -> Vec<Vec<Haiku>> {
        use rayon::prelude::*;

        bodies
            .par_iter()
            .map(|body| self.find_haikus(*body).collect())
            .collect()
    }
}

/// Lazy iterator over the haiku of one article
pub struct Haikus<'d, 't> {
    detector: &'d HaikuDetector,
    sentences: std::vec::IntoIter<&'t str>,
}

impl Iterator for Haikus<'_, '_> {
    type Item = Haiku;

    fn next(&mut self) -> Option<Haiku> {
        for sentence in self.sentences.by_ref() {
            match self.detector.find_haiku(sentence) {
                Ok(haiku) => return Some(haiku),
                Err(Rejection::Syllables(err)) => {
                    log::debug!("skipping sentence: {err}");
                }
                Err(Rejection::Lines(mismatch)) => {
                    log::trace!("not a haiku ({mismatch}): {sentence}");
                }
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.sentences.len()))
    }
}
