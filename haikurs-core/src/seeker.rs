//! Greedy 5-7-5 line assembly
//!
//! [`LineSeeker`] is a cursor over an immutable term slice. Each
//! [`seek_line`](LineSeeker::seek_line) call consumes terms from where the
//! previous one stopped until the running syllable sum reaches its target.
//! There is no backtracking: a sentence that overshoots on the naive split is
//! rejected even if some other split would scan.

use smallvec::SmallVec;
use thiserror::Error;

use crate::terms::Term;
use crate::text::SpecialTokens;

/// Syllable targets of the three haiku lines
pub const HAIKU_PATTERN: [u32; 3] = [5, 7, 5];

/// Why a term sequence does not scan as a haiku
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineMismatch {
    /// Terms ran out before the line reached its target
    #[error("ran out of terms at {reached} of {target} syllables")]
    TooShort { target: u32, reached: u32 },

    /// A term pushed the line past its target
    #[error("term '{term}' pushes the line to {reached} of {target} syllables")]
    TooLong {
        target: u32,
        reached: u32,
        term: String,
    },

    /// A zero-syllable term that is not standalone punctuation
    #[error("term '{term}' has no syllables")]
    UnmappedTerm { term: String },

    /// Terms were left over after the last line
    #[error("{remaining} terms left after the last line")]
    TrailingTerms { remaining: usize },
}

/// Cursor assembling lines from a term sequence
#[derive(Debug)]
pub struct LineSeeker<'t, 's> {
    terms: &'t [Term<'s>],
    position: usize,
    special_tokens: &'t SpecialTokens,
}

impl<'t, 's> LineSeeker<'t, 's> {
    pub fn new(terms: &'t [Term<'s>], special_tokens: &'t SpecialTokens) -> Self {
        Self {
            terms,
            position: 0,
            special_tokens,
        }
    }

    /// Terms not yet consumed
    pub fn remaining(&self) -> &'t [Term<'s>] {
        &self.terms[self.position..]
    }

    /// Consume terms until their syllables sum to exactly `target`
    ///
    /// Returns the surface forms joined by single spaces. Standalone
    /// punctuation tokens are carried into the line without adding syllables.
    pub fn seek_line(&mut self, target: u32) -> Result<String, LineMismatch> {
        let mut words: SmallVec<[&str; 8]> = SmallVec::new();
        let mut reached = 0;

        while reached < target {
            let Some(term) = self.terms.get(self.position) else {
                return Err(LineMismatch::TooShort { target, reached });
            };
            self.position += 1;

            if term.syllables == 0 && !self.special_tokens.contains(term.surface) {
                return Err(LineMismatch::UnmappedTerm {
                    term: term.surface.to_string(),
                });
            }

            reached += term.syllables;
            if reached > target {
                return Err(LineMismatch::TooLong {
                    target,
                    reached,
                    term: term.surface.to_string(),
                });
            }
            words.push(term.surface);
        }

        Ok(words.join(" "))
    }

    /// Fail if any term is left over
    pub fn finish(&self) -> Result<(), LineMismatch> {
        match self.remaining().len() {
            0 => Ok(()),
            remaining => Err(LineMismatch::TrailingTerms { remaining }),
        }
    }

    /// Assemble all three lines and require the sequence to be fully consumed
    pub fn seek_haiku(mut self) -> Result<[String; 3], LineMismatch> {
        let [first, second, third] = HAIKU_PATTERN;
        let lines = [
            self.seek_line(first)?,
            self.seek_line(second)?,
            self.seek_line(third)?,
        ];
        self.finish()?;
        Ok(lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn terms(pairs: &[(&'static str, u32)]) -> Vec<Term<'static>> {
        pairs.iter().map(|&(s, n)| Term::new(s, n)).collect()
    }

    #[test]
    fn test_exact_haiku() {
        let tokens = SpecialTokens::default();
        let terms = terms(&[
            ("An", 1),
            ("old", 1),
            ("silent", 2),
            ("pond", 1),
            ("A", 1),
            ("frog", 1),
            ("jumps", 1),
            ("into", 2),
            ("the", 1),
            ("pond", 1),
            ("splash!", 1),
            ("Silence", 2),
            ("again.", 2),
        ]);
        let lines = LineSeeker::new(&terms, &tokens).seek_haiku().unwrap();
        assert_eq!(
            lines,
            [
                "An old silent pond".to_string(),
                "A frog jumps into the pond".to_string(),
                "splash! Silence again.".to_string(),
            ]
        );
    }

    #[test]
    fn test_too_short() {
        let tokens = SpecialTokens::default();
        let terms = terms(&[("Hello", 2), ("there", 1)]);
        let mut seeker = LineSeeker::new(&terms, &tokens);
        assert_eq!(
            seeker.seek_line(5),
            Err(LineMismatch::TooShort {
                target: 5,
                reached: 3,
            })
        );
    }

    #[test]
    fn test_too_long() {
        let tokens = SpecialTokens::default();
        let terms = terms(&[("very", 2), ("unassuming", 4)]);
        let mut seeker = LineSeeker::new(&terms, &tokens);
        assert!(matches!(
            seeker.seek_line(5),
            Err(LineMismatch::TooLong { reached: 6, .. })
        ));
    }

    #[test]
    fn test_unmapped_zero_term() {
        let tokens = SpecialTokens::default();
        let terms = terms(&[("one", 1), ("...", 0), ("two", 1)]);
        let mut seeker = LineSeeker::new(&terms, &tokens);
        assert_eq!(
            seeker.seek_line(2),
            Err(LineMismatch::UnmappedTerm {
                term: "...".to_string(),
            })
        );
    }

    #[test]
    fn test_special_tokens_carried_into_line() {
        let tokens = SpecialTokens::default();
        let terms = terms(&[("Wait", 1), ("\u{2014}", 0), ("what", 1)]);
        let mut seeker = LineSeeker::new(&terms, &tokens);
        assert_eq!(seeker.seek_line(2).unwrap(), "Wait \u{2014} what");
    }

    #[test]
    fn test_trailing_terms() {
        let tokens = SpecialTokens::default();
        let mut all = vec![("word", 1); 17];
        all.push(("extra", 2));
        let terms = terms(&all);
        assert_eq!(
            LineSeeker::new(&terms, &tokens).seek_haiku(),
            Err(LineMismatch::TrailingTerms { remaining: 1 })
        );
    }

    #[test]
    fn test_cursor_is_shared_across_lines() {
        let tokens = SpecialTokens::default();
        let terms = terms(&[("a", 1), ("b", 1), ("c", 1)]);
        let mut seeker = LineSeeker::new(&terms, &tokens);
        assert_eq!(seeker.seek_line(1).unwrap(), "a");
        assert_eq!(seeker.seek_line(2).unwrap(), "b c");
        assert!(seeker.remaining().is_empty());
        assert_eq!(seeker.finish(), Ok(()));
    }

    #[test]
    fn test_greedy_no_backtracking() {
        let tokens = SpecialTokens::default();
        // "two" is never skipped in favor of "one"
        let terms = terms(&[("four", 4), ("two", 2), ("one", 1)]);
        let mut seeker = LineSeeker::new(&terms, &tokens);
        let result = seeker.seek_line(5);
        assert!(matches!(result, Err(LineMismatch::TooLong { .. })));
    }
}
