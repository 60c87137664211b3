//! Syllable counting
//!
//! [`SyllableCounter`] applies the ordered counting rules and falls back to a
//! [`PhoneticCounter`] for plain words. Editorial corrections live in a
//! [`SyllableOverrideTable`].

mod counter;
mod numbers;
mod overrides;
mod phonetic;

pub use counter::SyllableCounter;
pub use numbers::{cardinal_words, parse_numeral, year_words};
pub use overrides::SyllableOverrideTable;
pub use phonetic::{HeuristicCounter, PhoneticCounter};
