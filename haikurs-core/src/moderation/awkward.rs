//! Structural awkwardness checks
//!
//! Each [`AwkwardRule`] flags text that reads poorly out of context:
//! datelines, dangling attributions, broken quoting and the like. The rules
//! are independent; [`AwkwardRules::first_match`] reports the first in
//! declaration order.

use std::fmt;

use regex::Regex;
use serde::Serialize;

use super::lexicon::SensitiveLexicon;
use crate::error::ResourceError;

const DOUBLE_QUOTES: &[char] = &['"', '\u{201C}', '\u{201D}'];
const TRAILING_PUNCT: &[char] = &['.', ',', ';', ':', '!', '?'];

/// Byline and credit phrases, matched in any case
const ATTRIBUTION_PHRASES: &[&str] = &[
    "^By ",
    "photograph by",
    "illustration by",
    "contributed reporting",
    "the New York Times",
    r"\bThe Times\b",
];

/// A reason text is too awkward to publish out of context
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AwkwardRule {
    /// `Dr.`, `I.B.M.`, `Arthur D. Lastname`
    Abbreviation,
    /// `CAIRO`, `AT&T`
    ConsecutiveCapitals,
    /// `86th`
    Ordinal,
    /// `match.com`
    Domain,
    /// Starts mid-thought: dash, bracket, apostrophe, comma, lowercase
    BadStart,
    /// Unbalanced or misplaced double quotes
    MismatchedQuotes,
    /// Unbalanced or crossed parentheses and brackets
    UnbalancedBrackets,
    /// `he said`, `she said`
    ReportedSpeech,
    /// Ends mid-thought: dash, comma, possessive, conjunction
    BadEnd,
    /// `$ @ % # &`, tab or newline
    ForbiddenCharacter,
    /// Bylines and photo credits
    Attribution,
}

impl AwkwardRule {
    pub const ALL: [AwkwardRule; 11] = [
        AwkwardRule::Abbreviation,
        AwkwardRule::ConsecutiveCapitals,
        AwkwardRule::Ordinal,
        AwkwardRule::Domain,
        AwkwardRule::BadStart,
        AwkwardRule::MismatchedQuotes,
        AwkwardRule::UnbalancedBrackets,
        AwkwardRule::ReportedSpeech,
        AwkwardRule::BadEnd,
        AwkwardRule::ForbiddenCharacter,
        AwkwardRule::Attribution,
    ];

    pub fn description(self) -> &'static str {
        match self {
            AwkwardRule::Abbreviation => "abbreviation",
            AwkwardRule::ConsecutiveCapitals => "consecutive capital letters",
            AwkwardRule::Ordinal => "ordinal number",
            AwkwardRule::Domain => "web domain",
            AwkwardRule::BadStart => "starts mid-sentence",
            AwkwardRule::MismatchedQuotes => "mismatched quotes",
            AwkwardRule::UnbalancedBrackets => "unbalanced brackets",
            AwkwardRule::ReportedSpeech => "reported speech",
            AwkwardRule::BadEnd => "ends mid-sentence",
            AwkwardRule::ForbiddenCharacter => "forbidden character",
            AwkwardRule::Attribution => "attribution",
        }
    }
}

impl fmt::Display for AwkwardRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Compiled patterns for the awkwardness battery
#[derive(Debug, Clone)]
pub struct AwkwardRules {
    multi_period: Regex,
    initial: Regex,
    capitals: Regex,
    ordinal: Regex,
    domain: Regex,
    bad_start: Regex,
    glued_quote: Regex,
    reported_speech: Regex,
    bad_end: Regex,
    forbidden: Regex,
    attribution: Regex,
}

impl AwkwardRules {
    pub fn new() -> Result<Self, ResourceError> {
        let compile = |pattern: &str| {
            Regex::new(pattern).map_err(|source| ResourceError::Pattern {
                resource: "awkwardness rules".to_string(),
                source,
            })
        };

        Ok(Self {
            multi_period: compile(r"[A-Z]\.[A-Z]\.")?,
            initial: compile(r"\b[A-Z]\.\s")?,
            capitals: compile(r"[A-Z]{2,}")?,
            ordinal: compile(r"[0-9]+(?:nd|st|th)")?,
            domain: compile(r"[A-Za-z0-9]+\.(?:com|org|net|ly|io)\b")?,
            bad_start: compile(r"^[-\u{2013}\u{2014}(\u{2018}\u{2019}',;a-z]")?,
            glued_quote: compile(r#"\w["\u{201C}\u{201D}]\w|\u{201C}\s|\s\u{201D}"#)?,
            reported_speech: compile(r"(?i)\b(?:he|she) said\b")?,
            bad_end: compile(r"(?:[-\u{2013}\u{2014};:,]|['\u{2019}]s|\b(?:and|or|but))$")?,
            forbidden: compile(r"[$@%#&\n\t]")?,
            attribution: compile(&format!("(?i:{})", ATTRIBUTION_PHRASES.join("|")))?,
        })
    }

    /// First rule `text` breaks, in declaration order
    pub fn first_match(&self, text: &str, lexicon: &SensitiveLexicon) -> Option<AwkwardRule> {
        AwkwardRule::ALL
            .into_iter()
            .find(|&rule| self.check(rule, text, lexicon))
    }

    /// Whether `text` breaks `rule`
    pub fn check(&self, rule: AwkwardRule, text: &str, lexicon: &SensitiveLexicon) -> bool {
        match rule {
            AwkwardRule::Abbreviation => {
                lexicon.contains_awkward_abbreviation(text)
                    || self.multi_period.is_match(text)
                    || self.initial.is_match(text)
            }
            AwkwardRule::ConsecutiveCapitals => self.capitals.is_match(text),
            AwkwardRule::Ordinal => self.ordinal.is_match(text),
            AwkwardRule::Domain => self.domain.is_match(text),
            AwkwardRule::BadStart => self.bad_start.is_match(text),
            AwkwardRule::MismatchedQuotes => self.has_mismatched_quotes(text),
            AwkwardRule::UnbalancedBrackets => has_unbalanced_brackets(text),
            AwkwardRule::ReportedSpeech => self.reported_speech.is_match(text),
            AwkwardRule::BadEnd => self.bad_end.is_match(text.trim_end()),
            AwkwardRule::ForbiddenCharacter => self.forbidden.is_match(text),
            AwkwardRule::Attribution => self.attribution.is_match(text),
        }
    }

    fn has_mismatched_quotes(&self, text: &str) -> bool {
        let count = text.chars().filter(|c| DOUBLE_QUOTES.contains(c)).count();
        if count == 0 {
            return false;
        }

        let starts = text.starts_with(DOUBLE_QUOTES);
        let ends = text
            .trim_end()
            .trim_end_matches(TRAILING_PUNCT)
            .ends_with(DOUBLE_QUOTES);

        starts != ends || count % 2 == 1 || self.glued_quote.is_match(text)
    }
}

/// Parentheses and square brackets must nest
fn has_unbalanced_brackets(text: &str) -> bool {
    let mut open = Vec::new();
    for ch in text.chars() {
        match ch {
            '(' | '[' => open.push(ch),
            ')' if open.pop() != Some('(') => return true,
            ']' if open.pop() != Some('[') => return true,
            _ => {}
        }
    }
    !open.is_empty()
}
