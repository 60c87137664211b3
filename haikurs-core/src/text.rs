//! Term normalization shared by the counter, extractor and seeker

use unicode_normalization::UnicodeNormalization;

/// Tokens that stand alone as punctuation and count zero syllables
pub const DEFAULT_SPECIAL_TOKENS: &[&str] = &["-", "--", "\u{2013}", "\u{2014}"];

/// Characters trimmed from both ends of a whole sentence before splitting
pub const SENTENCE_TRIM_CHARS: &[char] = &[
    ' ', '\r', '\n', '\t', '"', '\u{201C}', '\u{201D}', '\'', '\u{2019}', '\\', '(', ')', '[', ']',
    ';',
];

/// Trailing characters ignored when looking for a `+` brand suffix
const TRAILING_SENTENCE_PUNCT: &[char] = &[
    '.', ',', ';', ':', '!', '?', '"', '\'', '\u{201D}', '\u{2019}', ')', ']',
];

/// Canonical lookup form of a term
///
/// NFKD-decomposes the term, maps typographic apostrophes, quotes and dashes
/// to their ASCII counterparts, drops whatever is still non-ASCII (combining
/// marks included), lower-cases, and strips leading and trailing ASCII
/// punctuation. Interior punctuation survives, so `"4-Year-Old,"` becomes
/// `4-year-old` and `"Scene’s"` becomes `scene's`.
pub fn canonical_form(term: &str) -> String {
    let folded: String = term.trim().nfkd().filter_map(fold_char).collect();

    folded
        .trim_matches(|c: char| c.is_ascii_punctuation())
        .to_ascii_lowercase()
}

fn fold_char(ch: char) -> Option<char> {
    match ch {
        '\u{2018}' | '\u{2019}' | '\u{02BC}' | '\u{2032}' => Some('\''),
        '\u{201C}' | '\u{201D}' | '\u{2033}' => Some('"'),
        '\u{2010}'..='\u{2015}' | '\u{2212}' => Some('-'),
        c if c.is_ascii() => Some(c),
        _ => None,
    }
}

/// Strip the brand `+` suffix, if present, ignoring trailing sentence punctuation
///
/// Returns the base term without the `+`: `"Disney+,"` yields `Some("Disney")`.
pub(crate) fn strip_plus_suffix(term: &str) -> Option<&str> {
    let trimmed = term.trim().trim_end_matches(TRAILING_SENTENCE_PUNCT);
    trimmed.strip_suffix('+')
}

/// Set of standalone punctuation tokens that count as zero syllables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecialTokens {
    tokens: Vec<String>,
}

impl SpecialTokens {
    /// Build from an explicit token list
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tokens: tokens.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether `term` (ignoring surrounding whitespace) is a special token
    pub fn contains(&self, term: &str) -> bool {
        let term = term.trim();
        self.tokens.iter().any(|t| t == term)
    }

    /// Iterate over the configured tokens
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }
}

impl Default for SpecialTokens {
    fn default() -> Self {
        Self::new(DEFAULT_SPECIAL_TOKENS.iter().copied())
    }
}
