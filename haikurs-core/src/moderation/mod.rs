//! Publication gates
//!
//! The lexicon gate screens articles and sentences against curated lists;
//! the awkwardness gate rejects fragments that read poorly out of context.
//! Both belong to the calling pipeline: the detector never moderates.

mod awkward;
mod lexicon;
mod moderator;

pub use awkward::{AwkwardRule, AwkwardRules};
pub use lexicon::{
    LexiconSource, SensitiveLexicon, AWKWARD_ABBREVIATIONS_FILE, SENSITIVE_SECTIONS_FILE,
    SENSITIVE_TAGS_FILE, SENSITIVE_TERMS_FILE,
};
pub use moderator::{ArticleMeta, ContentModerator, RejectReason, Sensitivity, Verdict};
