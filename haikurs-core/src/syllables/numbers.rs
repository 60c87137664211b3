//! Spoken English forms of cardinals and years
//!
//! Cardinals follow the British convention of joining the last group with
//! "and" (`1,435` → one thousand four hundred and thirty five). Years are
//! read in pairs (`1954` → nineteen fifty four) except where the pair
//! reading is unidiomatic, which falls back to the cardinal.

const ONES: [&str; 20] = [
    "zero",
    "one",
    "two",
    "three",
    "four",
    "five",
    "six",
    "seven",
    "eight",
    "nine",
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
];

const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

const SCALES: [&str; 12] = [
    "",
    "thousand",
    "million",
    "billion",
    "trillion",
    "quadrillion",
    "quintillion",
    "sextillion",
    "septillion",
    "octillion",
    "nonillion",
    "decillion",
];

/// Parse a digits-and-commas numeral (`"1,435"`) into its value
///
/// Returns `None` when the text has no digit, contains anything other than
/// digits and commas, or does not fit in a `u128`.
pub fn parse_numeral(text: &str) -> Option<u128> {
    if !text.bytes().any(|b| b.is_ascii_digit()) {
        return None;
    }
    if !text.bytes().all(|b| b.is_ascii_digit() || b == b',') {
        return None;
    }
    text.replace(',', "").parse().ok()
}

/// Spoken words of a cardinal number
///
/// Returns `None` past the largest supported scale word (decillion).
pub fn cardinal_words(n: u128) -> Option<Vec<&'static str>> {
    if n == 0 {
        return Some(vec![ONES[0]]);
    }

    let mut groups = Vec::new();
    let mut rest = n;
    while rest > 0 {
        groups.push((rest % 1000) as usize);
        rest /= 1000;
    }
    if groups.len() > SCALES.len() {
        return None;
    }

    let mut words = Vec::new();
    for (idx, &group) in groups.iter().enumerate().rev() {
        if group == 0 {
            continue;
        }

        let hundreds = group / 100;
        let rem = group % 100;
        if hundreds > 0 {
            words.push(ONES[hundreds]);
            words.push("hundred");
        }
        if rem > 0 {
            // "one thousand and five", "two hundred and six"
            if hundreds > 0 || (idx == 0 && n >= 1000) {
                words.push("and");
            }
            push_below_hundred(&mut words, rem);
        }
        if idx > 0 {
            words.push(SCALES[idx]);
        }
    }

    Some(words)
}

/// Spoken words of a year
pub fn year_words(year: u16) -> Vec<&'static str> {
    let high = (year / 100) as usize;
    let low = (year % 100) as usize;

    // 0042, 2005, 1000: read as a cardinal
    if high == 0 || (high % 10 == 0 && low < 10) || high >= 100 {
        return cardinal_words(u128::from(year)).unwrap_or_default();
    }

    let mut words = Vec::with_capacity(4);
    push_below_hundred(&mut words, high);
    match low {
        0 => words.push("hundred"),
        1..=9 => {
            words.push("oh");
            words.push(ONES[low]);
        }
        _ => push_below_hundred(&mut words, low),
    }
    words
}

fn push_below_hundred(words: &mut Vec<&'static str>, n: usize) {
    debug_assert!(n < 100);
    if n < 20 {
        words.push(ONES[n]);
    } else {
        words.push(TENS[n / 10]);
        if n % 10 > 0 {
            words.push(ONES[n % 10]);
        }
    }
}
