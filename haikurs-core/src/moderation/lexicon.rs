//! Curated moderation word lists
//!
//! Four plain-text resources, one entry per line, `#` comments allowed:
//!
//! | file | entries |
//! |---|---|
//! | `sensitive_tags.txt` | exact article tags |
//! | `sensitive_terms.txt` | regex fragments, matched case-insensitively on word boundaries |
//! | `sensitive_sections.txt` | exact section names |
//! | `awkward_abbreviations.txt` | literal abbreviations such as `Dr.` |

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::ResourceError;

pub const SENSITIVE_TAGS_FILE: &str = "sensitive_tags.txt";
pub const SENSITIVE_TERMS_FILE: &str = "sensitive_terms.txt";
pub const SENSITIVE_SECTIONS_FILE: &str = "sensitive_sections.txt";
pub const AWKWARD_ABBREVIATIONS_FILE: &str = "awkward_abbreviations.txt";

const EMBEDDED_TAGS: &str = include_str!("../../data/sensitive_tags.txt");
const EMBEDDED_TERMS: &str = include_str!("../../data/sensitive_terms.txt");
const EMBEDDED_SECTIONS: &str = include_str!("../../data/sensitive_sections.txt");
const EMBEDDED_ABBREVIATIONS: &str = include_str!("../../data/awkward_abbreviations.txt");

/// Where lexicon files come from
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "type", content = "path")]
pub enum LexiconSource {
    /// Lists compiled into the crate
    #[default]
    Embedded,
    /// A directory holding all four files
    Directory(PathBuf),
}

/// Immutable moderation lexicon
#[derive(Debug, Clone)]
pub struct SensitiveLexicon {
    tags: HashSet<String>,
    sections: HashSet<String>,
    term_count: usize,
    abbreviation_count: usize,
    term_pattern: Option<Regex>,
    abbreviation_pattern: Option<Regex>,
}

impl SensitiveLexicon {
    /// Lexicon from the embedded lists
    pub fn embedded() -> Result<Self, ResourceError> {
        Self::from_lists(
            parse_list(EMBEDDED_TAGS),
            parse_list(EMBEDDED_TERMS),
            parse_list(EMBEDDED_SECTIONS),
            parse_list(EMBEDDED_ABBREVIATIONS),
        )
    }

    /// Lexicon from a directory of the four list files
    ///
    /// Every file must exist; there is no partial lexicon.
    pub fn from_dir(dir: &Path) -> Result<Self, ResourceError> {
        let read = |name: &str| -> Result<Vec<String>, ResourceError> {
            let path = dir.join(name);
            let content = fs::read_to_string(&path)
                .map_err(|source| ResourceError::Io { path, source })?;
            Ok(parse_list(&content))
        };

        Self::from_lists(
            read(SENSITIVE_TAGS_FILE)?,
            read(SENSITIVE_TERMS_FILE)?,
            read(SENSITIVE_SECTIONS_FILE)?,
            read(AWKWARD_ABBREVIATIONS_FILE)?,
        )
    }

    /// Lexicon from the configured source
    pub fn load(source: &LexiconSource) -> Result<Self, ResourceError> {
        match source {
            LexiconSource::Embedded => Self::embedded(),
            LexiconSource::Directory(dir) => Self::from_dir(dir),
        }
    }

    /// Lexicon from in-memory lists
    pub fn from_lists(
        tags: Vec<String>,
        terms: Vec<String>,
        sections: Vec<String>,
        abbreviations: Vec<String>,
    ) -> Result<Self, ResourceError> {
        let term_pattern = compile_alternation(
            SENSITIVE_TERMS_FILE,
            terms.iter().map(String::as_str),
            r"(?i)\b(?:",
            r")\b",
        )?;
        let escaped: Vec<String> = abbreviations.iter().map(|a| regex::escape(a)).collect();
        let abbreviation_pattern = compile_alternation(
            AWKWARD_ABBREVIATIONS_FILE,
            escaped.iter().map(String::as_str),
            r"\b(?:",
            r")",
        )?;

        log::info!(
            "lexicon: {} tags, {} terms, {} sections, {} abbreviations loaded",
            tags.len(),
            terms.len(),
            sections.len(),
            abbreviations.len()
        );

        Ok(Self {
            tags: tags.into_iter().collect(),
            sections: sections.into_iter().collect(),
            term_count: terms.len(),
            abbreviation_count: abbreviations.len(),
            term_pattern,
            abbreviation_pattern,
        })
    }

    pub fn is_sensitive_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    pub fn is_sensitive_section(&self, section: &str) -> bool {
        self.sections.contains(section)
    }

    /// Case-insensitive whole-word match against the sensitive terms
    pub fn contains_sensitive_term(&self, text: &str) -> bool {
        self.term_pattern
            .as_ref()
            .is_some_and(|re| re.is_match(text))
    }

    /// Whether `text` contains a curated awkward abbreviation
    pub fn contains_awkward_abbreviation(&self, text: &str) -> bool {
        self.abbreviation_pattern
            .as_ref()
            .is_some_and(|re| re.is_match(text))
    }

    /// Entry counts: tags, terms, sections, abbreviations
    pub fn counts(&self) -> (usize, usize, usize, usize) {
        (
            self.tags.len(),
            self.term_count,
            self.sections.len(),
            self.abbreviation_count,
        )
    }
}

/// Non-empty, non-comment lines, trimmed
fn parse_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(String::from)
        .collect()
}

/// One alternation over `fragments`, or `None` for an empty list
fn compile_alternation<'a>(
    resource: &str,
    fragments: impl Iterator<Item = &'a str>,
    prefix: &str,
    suffix: &str,
) -> Result<Option<Regex>, ResourceError> {
    let alternation = fragments
        .map(|fragment| format!("(?:{fragment})"))
        .collect::<Vec<_>>()
        .join("|");
    if alternation.is_empty() {
        return Ok(None);
    }

    Regex::new(&format!("{prefix}{alternation}{suffix}"))
        .map(Some)
        .map_err(|source| ResourceError::Pattern {
            resource: resource.to_string(),
            source,
        })
}
