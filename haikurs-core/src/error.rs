//! Layered error types
//!
//! Construction failures (`ResourceError`, `ConfigError`) are fatal and
//! surface through [`Error`]. Per-sentence failures (`SyllableError`,
//! [`LineMismatch`](crate::seeker::LineMismatch)) are recovered locally by the
//! detector and never escape a `find_haikus` call.

use std::path::PathBuf;
use thiserror::Error;

/// Failure to resolve a syllable count for a term
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyllableError {
    /// No counting rule could resolve the term
    #[error("no syllable count available for term '{term}'")]
    Unavailable {
        /// The term as it was passed to the counter
        term: String,
    },

    /// Compound decomposition recursed deeper than the configured limit
    #[error("syllable recursion exceeded depth {limit} on term '{term}'")]
    DepthExceeded {
        /// The term being decomposed when the limit was hit
        term: String,
        /// The configured maximum depth
        limit: usize,
    },
}

impl SyllableError {
    pub(crate) fn unavailable(term: impl Into<String>) -> Self {
        SyllableError::Unavailable { term: term.into() }
    }
}

/// Lexicon, override, or segmenter resource could not be loaded
#[derive(Debug, Error)]
pub enum ResourceError {
    /// A required resource file is missing or unreadable
    #[error("failed to read resource {path}: {source}")]
    Io {
        /// Path of the resource
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// A line of a resource could not be parsed
    #[error("malformed entry in {resource} at line {line}: {reason}")]
    Malformed {
        /// Resource name (file name for directory sources)
        resource: String,
        /// 1-based line number
        line: usize,
        /// What was wrong with the entry
        reason: String,
    },

    /// A lexicon produced a pattern that does not compile
    #[error("invalid pattern in {resource}: {source}")]
    Pattern {
        /// Resource name
        resource: String,
        /// Regex compilation failure
        #[source]
        source: regex::Error,
    },

    /// Segmenter configuration could not be parsed
    #[error("failed to parse segmenter config: {0}")]
    Segmenter(#[from] toml::de::Error),
}

/// Invalid detector configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Recursion depth must allow at least one level
    #[error("max_depth must be greater than 0")]
    ZeroDepth,

    /// A special punctuation token was empty or contained whitespace
    #[error("invalid special punctuation token: {0:?}")]
    InvalidSpecialToken(String),
}

/// Crate-level error returned by constructors
#[derive(Debug, Error)]
pub enum Error {
    /// Resource loading error
    #[error("resource error: {0}")]
    Resource(#[from] ResourceError),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Result type for construction-time operations
pub type Result<T> = std::result::Result<T, Error>;
