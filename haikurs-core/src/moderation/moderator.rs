use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::awkward::{AwkwardRule, AwkwardRules};
use super::lexicon::SensitiveLexicon;
use crate::detector::Haiku;
use crate::error::ResourceError;

/// Article metadata consulted by the lexicon gate
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleMeta {
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub section: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
}

/// Why a whole article is off limits
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case", tag = "kind", content = "value")]
pub enum Sensitivity {
    Tag(String),
    Section(String),
    Title,
}

impl fmt::Display for Sensitivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sensitivity::Tag(tag) => write!(f, "sensitive tag '{tag}'"),
            Sensitivity::Section(section) => write!(f, "sensitive section '{section}'"),
            Sensitivity::Title => f.write_str("sensitive term in title"),
        }
    }
}

/// Why a candidate haiku was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case", tag = "kind", content = "rule")]
pub enum RejectReason {
    SensitiveTerm,
    Awkward(AwkwardRule),
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::SensitiveTerm => f.write_str("sensitive term"),
            RejectReason::Awkward(rule) => write!(f, "awkward: {rule}"),
        }
    }
}

/// Moderation outcome for one candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Accept,
    Reject(RejectReason),
}

impl Verdict {
    pub fn is_accept(&self) -> bool {
        matches!(self, Verdict::Accept)
    }
}

/// Lexicon and awkwardness gates
///
/// Built once from a [`SensitiveLexicon`]; every check is a pure function of
/// its input.
#[derive(Debug, Clone)]
pub struct ContentModerator {
    lexicon: Arc<SensitiveLexicon>,
    rules: AwkwardRules,
}

impl ContentModerator {
    pub fn new(lexicon: Arc<SensitiveLexicon>) -> Result<Self, ResourceError> {
        Ok(Self {
            lexicon,
            rules: AwkwardRules::new()?,
        })
    }

    pub fn lexicon(&self) -> &SensitiveLexicon {
        &self.lexicon
    }

    pub fn is_sensitive_tag(&self, tag: &str) -> bool {
        self.lexicon.is_sensitive_tag(tag)
    }

    pub fn is_sensitive_section(&self, section: &str) -> bool {
        self.lexicon.is_sensitive_section(section)
    }

    pub fn contains_sensitive_term(&self, text: &str) -> bool {
        self.lexicon.contains_sensitive_term(text)
    }

    /// First reason the article must be skipped: tags, then section, then title
    pub fn screen_article(&self, article: &ArticleMeta) -> Option<Sensitivity> {
        if let Some(tag) = article.tags.iter().find(|t| self.is_sensitive_tag(t)) {
            return Some(Sensitivity::Tag(tag.clone()));
        }
        if let Some(section) = article
            .section
            .as_deref()
            .filter(|s| self.is_sensitive_section(s))
        {
            return Some(Sensitivity::Section(section.to_string()));
        }
        if article
            .title
            .as_deref()
            .is_some_and(|title| self.contains_sensitive_term(title))
        {
            return Some(Sensitivity::Title);
        }
        None
    }

    /// First awkwardness rule `text` breaks
    pub fn awkward_rule(&self, text: &str) -> Option<AwkwardRule> {
        self.rules.first_match(text, &self.lexicon)
    }

    pub fn is_awkward(&self, text: &str) -> bool {
        self.awkward_rule(text).is_some()
    }

    /// Gate a candidate on its source sentence
    pub fn review(&self, haiku: &Haiku) -> Verdict {
        let sentence = haiku.source_sentence.as_str();
        if self.contains_sensitive_term(sentence) {
            return Verdict::Reject(RejectReason::SensitiveTerm);
        }
        match self.awkward_rule(sentence) {
            Some(rule) => Verdict::Reject(RejectReason::Awkward(rule)),
            None => Verdict::Accept,
        }
    }
}
