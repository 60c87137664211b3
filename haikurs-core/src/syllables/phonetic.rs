//! Base phonetic counter
//!
//! The syllable counter delegates words no rule resolves to a
//! [`PhoneticCounter`]. The bundled [`HeuristicCounter`] pairs a small
//! pronunciation dictionary with a vowel-group estimate.

use std::collections::HashMap;

use super::overrides::parse_count_table;
use crate::error::ResourceError;

const EMBEDDED_DICTIONARY: &str = include_str!("../../data/base_dictionary.csv");

/// Dictionary-backed syllable lookup for single canonical words
pub trait PhoneticCounter: Send + Sync {
    /// Syllables in `word`, or `None` when the counter cannot resolve it
    fn count(&self, word: &str) -> Option<u32>;

    /// Curated exception count for `word`, if the dictionary has one
    fn exception(&self, word: &str) -> Option<u32>;
}

/// Pronunciation dictionary plus vowel-group heuristic
#[derive(Debug, Clone)]
pub struct HeuristicCounter {
    dictionary: HashMap<String, u32>,
}

impl HeuristicCounter {
    /// Counter with the embedded base dictionary
    pub fn embedded() -> Result<Self, ResourceError> {
        Self::from_csv("base_dictionary.csv", EMBEDDED_DICTIONARY)
    }

    /// Counter with a dictionary parsed from `term,count` CSV content
    pub fn from_csv(resource: &str, content: &str) -> Result<Self, ResourceError> {
        let dictionary = parse_count_table(resource, content)?;
        log::info!(
            "{resource}: {} base pronunciations loaded",
            dictionary.len()
        );
        Ok(Self { dictionary })
    }

    /// Counter with an explicit dictionary (keys are canonical words)
    pub fn with_dictionary(dictionary: HashMap<String, u32>) -> Self {
        Self { dictionary }
    }

    /// Number of dictionary entries
    pub fn dictionary_len(&self) -> usize {
        self.dictionary.len()
    }
}

impl PhoneticCounter for HeuristicCounter {
    fn count(&self, word: &str) -> Option<u32> {
        self.exception(word).or_else(|| estimate(word))
    }

    fn exception(&self, word: &str) -> Option<u32> {
        self.dictionary.get(word).copied()
    }
}

#[inline]
fn is_vowel(b: u8) -> bool {
    matches!(b, b'a' | b'e' | b'i' | b'o' | b'u' | b'y')
}

/// Vowel-group estimate for a word made of ASCII letters and apostrophes
fn estimate(word: &str) -> Option<u32> {
    let letters: Vec<u8> = word
        .bytes()
        .filter(|&b| b != b'\'')
        .map(|b| b.to_ascii_lowercase())
        .collect();
    if letters.is_empty() || !letters.iter().all(u8::is_ascii_lowercase) {
        return None;
    }

    let len = letters.len();
    let mut count: i32 = 0;

    if is_vowel(letters[0]) {
        count += 1;
    }
    for pair in letters.windows(2) {
        if is_vowel(pair[1]) && !is_vowel(pair[0]) {
            count += 1;
        }
    }
    if letters.ends_with(b"e") {
        count -= 1;
    }
    if letters.ends_with(b"le") && len > 2 && !is_vowel(letters[len - 3]) {
        count += 1;
    }
    if count > 1 && len > 3 && has_silent_suffix(&letters) {
        count -= 1;
    }

    Some(count.max(1) as u32)
}

/// `-ed` and `-es` endings that do not form their own syllable
fn has_silent_suffix(letters: &[u8]) -> bool {
    let len = letters.len();
    let before = letters[len - 3];
    if is_vowel(before) {
        return false;
    }

    match &letters[len - 2..] {
        b"ed" => !matches!(before, b't' | b'd'),
        b"es" => {
            let sibilant = matches!(before, b's' | b'x' | b'z' | b'c' | b'g' | b'h');
            let syllabic_l = before == b'l' && !is_vowel(letters[len - 4]);
            !sibilant && !syllabic_l
        }
        _ => false,
    }
}
