//! Accidental haiku detection
//!
//! Finds sentences in article text that happen to scan as 5-7-5 haiku and
//! decides whether each one is fit to publish.
//!
//! # Architecture
//!
//! - [`SyllableCounter`]: rule-ordered counting of numerals, years, scores,
//!   compounds and possessives over a [`PhoneticCounter`]
//! - [`TermExtractor`]: sentence to counted terms
//! - [`LineSeeker`]: greedy 5-7-5 line assembly
//! - [`HaikuDetector`]: segmentation, extraction and seeking per sentence
//! - [`ContentModerator`]: sensitive-lexicon and awkwardness gates
//!
//! [`HaikuPipeline`] wires all of them from a [`Config`].
//!
//! # Example
//!
//! ```rust
//! use haikurs_core::HaikuPipeline;
//!
//! let pipeline = HaikuPipeline::new().unwrap();
//! let body = "The rain kept falling. \
//!             An old silent pond sees a frog jump into it with a splash of sound.";
//!
//! let haiku: Vec<_> = pipeline.find_haikus(body).collect();
//! assert_eq!(haiku.len(), 1);
//! assert_eq!(haiku[0].line0, "An old silent pond");
//! assert_eq!(haiku[0].line1, "sees a frog jump into it");
//! ```

pub mod config;
pub mod detector;
pub mod error;
pub mod moderation;
pub mod pipeline;
pub mod seeker;
pub mod segment;
pub mod syllables;
pub mod terms;
pub mod text;

pub use config::{Config, ConfigBuilder, OverrideSource};
pub use detector::{Fingerprint, Haiku, HaikuDetector, Haikus, Rejection};
pub use error::{ConfigError, Error, ResourceError, Result, SyllableError};
pub use moderation::{
    ArticleMeta, AwkwardRule, ContentModerator, LexiconSource, RejectReason, SensitiveLexicon,
    Sensitivity, Verdict,
};
pub use pipeline::{ArticleReport, HaikuPipeline};
pub use seeker::{LineMismatch, LineSeeker, HAIKU_PATTERN};
pub use segment::{RuleSegmenter, SentenceSegmenter};
pub use syllables::{HeuristicCounter, PhoneticCounter, SyllableCounter, SyllableOverrideTable};
pub use terms::{Term, TermExtractor};
pub use text::{canonical_form, SpecialTokens};
