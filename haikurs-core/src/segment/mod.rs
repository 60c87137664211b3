//! Sentence segmentation
//!
//! The detector consumes sentences through [`SentenceSegmenter`]. The bundled
//! [`RuleSegmenter`] handles English news prose: terminators followed by a
//! capitalized word, abbreviations and initials, closing quotes after the
//! terminator, and paragraph breaks.

mod config;
mod tables;

pub use config::SegmenterConfig;
pub use tables::{AbbreviationTable, SentenceStarterTable};

use crate::error::ResourceError;

const EMBEDDED_ENGLISH: &str = include_str!("../../data/segmenter.toml");

/// Splits article text into sentences
pub trait SentenceSegmenter: Send + Sync {
    /// Sentences of `text` in order, trimmed, with empty ones omitted
    fn segment<'t>(&self, text: &'t str) -> Vec<&'t str>;
}

/// Configurable rule-based segmenter
#[derive(Debug, Clone)]
pub struct RuleSegmenter {
    code: String,
    terminators: Vec<char>,
    opening: Vec<char>,
    closing: Vec<char>,
    abbreviations: AbbreviationTable,
    starters: SentenceStarterTable,
}

impl RuleSegmenter {
    /// Segmenter with the embedded English rules
    pub fn english() -> Result<Self, ResourceError> {
        Self::from_toml(EMBEDDED_ENGLISH)
    }

    /// Segmenter from a TOML configuration string
    pub fn from_toml(content: &str) -> Result<Self, ResourceError> {
        let config: SegmenterConfig = toml::from_str(content)?;
        Self::from_config(config)
    }

    /// Segmenter from a parsed configuration
    pub fn from_config(config: SegmenterConfig) -> Result<Self, ResourceError> {
        config.validate().map_err(|reason| ResourceError::Malformed {
            resource: "segmenter config".to_string(),
            line: 0,
            reason,
        })?;

        let abbreviations = AbbreviationTable::from_categories(config.abbreviations.categories);
        let starters = SentenceStarterTable::from_categories(config.sentence_starters.categories);
        log::info!(
            "segmenter '{}': {} abbreviations loaded",
            config.metadata.code,
            abbreviations.len()
        );
        if starters.is_empty() && !abbreviations.is_empty() {
            log::warn!(
                "segmenter '{}': no sentence starters, abbreviations never end a sentence",
                config.metadata.code
            );
        }

        Ok(Self {
            code: config.metadata.code,
            terminators: config.terminators.chars,
            opening: config.enclosures.opening,
            closing: config.enclosures.closing,
            abbreviations,
            starters,
        })
    }

    /// Language code from the configuration metadata
    pub fn code(&self) -> &str {
        &self.code
    }

    fn is_terminator(&self, ch: char) -> bool {
        self.terminators.contains(&ch)
    }

    fn is_closing(&self, ch: char) -> bool {
        self.closing.contains(&ch)
    }

    fn is_opening(&self, ch: char) -> bool {
        self.opening.contains(&ch)
    }

    fn may_start_sentence(&self, ch: char) -> bool {
        ch.is_uppercase() || ch.is_ascii_digit() || self.is_opening(ch)
    }

    /// Split one paragraph, pushing trimmed non-empty sentences
    fn segment_paragraph<'t>(&self, paragraph: &'t str, sentences: &mut Vec<&'t str>) {
        let mut push = |span: &'t str| {
            let span = span.trim();
            if !span.is_empty() {
                sentences.push(span);
            }
        };

        let mut start = 0;
        let mut chars = paragraph.char_indices().peekable();
        while let Some((pos, ch)) = chars.next() {
            if !self.is_terminator(ch) {
                continue;
            }

            // "...", "?!" and closing quotes stay with the sentence
            let mut end = pos + ch.len_utf8();
            while let Some(&(next_pos, next)) = chars.peek() {
                if !self.is_terminator(next) && !self.is_closing(next) {
                    break;
                }
                end = next_pos + next.len_utf8();
                chars.next();
            }

            if self.is_boundary(paragraph, pos, ch, end) {
                push(&paragraph[start..end]);
                start = end;
            }
        }
        push(&paragraph[start..]);
    }

    /// Whether the terminator `ch` at `pos`, absorbed through `end`, ends a sentence
    fn is_boundary(&self, paragraph: &str, pos: usize, ch: char, end: usize) -> bool {
        let rest = &paragraph[end..];
        if rest.trim().is_empty() {
            return true;
        }
        if !rest.starts_with(char::is_whitespace) {
            return false;
        }

        let next_is_start = rest
            .trim_start()
            .chars()
            .next()
            .is_some_and(|c| self.may_start_sentence(c));
        if !next_is_start {
            return false;
        }

        if ch == '.' {
            let word = paragraph[..pos]
                .rsplit(|c: char| c.is_whitespace() || self.is_opening(c))
                .next()
                .unwrap_or_default();
            if self.abbreviations.contains(word) || AbbreviationTable::is_initial(word) {
                return SentenceStarterTable::get_next_word(paragraph, end)
                    .is_some_and(|next| self.starters.is_sentence_starter(next));
            }
        }

        true
    }
}

impl SentenceSegmenter for RuleSegmenter {
    fn segment<'t>(&self, text: &'t str) -> Vec<&'t str> {
        let mut sentences = Vec::new();
        for paragraph in text.lines() {
            self.segment_paragraph(paragraph, &mut sentences);
        }
        sentences
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment(text: &str) -> Vec<&str> {
        RuleSegmenter::english().unwrap().segment(text)
    }

    #[test]
    fn test_basic_sentences() {
        assert_eq!(
            segment("An old silent pond. A frog jumps in! Is it there?"),
            vec!["An old silent pond.", "A frog jumps in!", "Is it there?"]
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(segment("").is_empty());
        assert!(segment("  \n\n \t ").is_empty());
    }

    #[test]
    fn test_abbreviation_is_not_boundary() {
        assert_eq!(
            segment("My friend Dr. Watson arrived. He sat down."),
            vec!["My friend Dr. Watson arrived.", "He sat down."]
        );
        assert_eq!(
            segment("She moved to the U.S. last year."),
            vec!["She moved to the U.S. last year."]
        );
    }

    #[test]
    fn test_abbreviation_before_sentence_starter() {
        assert_eq!(
            segment("They founded Acme Inc. The company grew."),
            vec!["They founded Acme Inc.", "The company grew."]
        );
    }

    #[test]
    fn test_initials() {
        assert_eq!(
            segment("The novel by J. Smith sold well."),
            vec!["The novel by J. Smith sold well."]
        );
    }

    #[test]
    fn test_closing_quote_stays_with_sentence() {
        assert_eq!(
            segment("\"Go home.\" She left."),
            vec!["\"Go home.\"", "She left."]
        );
        assert_eq!(
            segment("\u{201C}Really?\u{201D} he asked."),
            vec!["\u{201C}Really?\u{201D} he asked."]
        );
    }

    #[test]
    fn test_lowercase_continuation_and_decimals() {
        assert_eq!(
            segment("Prices rose 3.5 percent. Wait... what happened?"),
            vec!["Prices rose 3.5 percent.", "Wait... what happened?"]
        );
    }

    #[test]
    fn test_newline_is_hard_boundary() {
        let text = "A headline without a period\nThe body starts here.\r\nAnother line";
        assert_eq!(
            segment(text),
            vec![
                "A headline without a period",
                "The body starts here.",
                "Another line",
            ]
        );
    }

    #[test]
    fn test_from_toml_error() {
        assert!(matches!(
            RuleSegmenter::from_toml("not = [valid"),
            Err(ResourceError::Segmenter(_))
        ));
    }

    #[test]
    fn test_without_sentence_starters() {
        let segmenter = RuleSegmenter::from_toml(
            r#"
[metadata]
code = "xx"
name = "Test"

[terminators]
chars = ["."]

[enclosures]
opening = []
closing = []

[abbreviations]
business = ["Inc"]
"#,
        )
        .unwrap();

        assert_eq!(
            segmenter.segment("They founded Acme Inc. The company grew. It lasted."),
            vec!["They founded Acme Inc. The company grew.", "It lasted."]
        );
    }

    #[test]
    fn test_embedded_metadata() {
        assert_eq!(RuleSegmenter::english().unwrap().code(), "en");
    }
}
