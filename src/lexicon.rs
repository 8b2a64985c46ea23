/// English number vocabulary
///
/// Static word tables mapping each recognized word to its category and
/// weight. Known misspellings are plain aliases of the canonical entry.
use crate::config::constants::{BILLION, HUNDRED, MILLION, THOUSAND, TRILLION};
use crate::token::Category;
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashMap;

const UNITS: &[(&str, i64)] = &[
    ("one", 1),
    ("two", 2),
    ("three", 3),
    ("four", 4),
    ("five", 5),
    ("six", 6),
    ("seven", 7),
    ("eight", 8),
    ("nine", 9),
];

const TEENS: &[(&str, i64)] = &[
    ("ten", 10),
    ("eleven", 11),
    ("twelve", 12),
    ("thirteen", 13),
    ("fourteen", 14),
    ("fifteen", 15),
    ("sixteen", 16),
    ("seventeen", 17),
    ("eighteen", 18),
    ("nineteen", 19),
];

const TENS: &[(&str, i64)] = &[
    ("twenty", 20),
    ("thirty", 30),
    ("forty", 40),
    ("fifty", 50),
    ("sixty", 60),
    ("seventy", 70),
    ("eighty", 80),
    ("ninety", 90),
];

const SCALES: &[(&str, i64)] = &[
    ("thousand", THOUSAND),
    ("million", MILLION),
    ("billion", BILLION),
    ("trillion", TRILLION),
];

/// Common misspellings → canonical word
const ALIASES: &[(&str, &str)] = &[
    ("ninteen", "nineteen"),
    ("nineten", "nineteen"),
    ("eightteen", "eighteen"),
    ("fourty", "forty"),
    ("ninty", "ninety"),
];

/// A lexicon entry: what a word means to the parser
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    pub category: Category,
    pub weight: i64,
}

lazy_static! {
    static ref WORDS: HashMap<&'static str, Entry> = build_words();

    /// Matches: dollar, dollars, dollars. dollar! etc.
    static ref DOLLARS_REGEX: Regex = Regex::new(r"^dollars?\p{P}?$").unwrap();

    /// Matches: cent, cents, cents. etc.
    static ref CENTS_REGEX: Regex = Regex::new(r"^cents?\p{P}?$").unwrap();
}

fn build_words() -> HashMap<&'static str, Entry> {
    let mut words = HashMap::new();

    let tables = [
        (Category::Unit, UNITS),
        (Category::Teen, TEENS),
        (Category::Tens, TENS),
        (Category::Scale, SCALES),
    ];
    for (category, table) in tables {
        for &(word, weight) in table {
            words.insert(word, Entry { category, weight });
        }
    }

    words.insert(
        "zero",
        Entry {
            category: Category::Zero,
            weight: 0,
        },
    );
    words.insert(
        "hundred",
        Entry {
            category: Category::Hundred,
            weight: HUNDRED,
        },
    );
    words.insert(
        "and",
        Entry {
            category: Category::And,
            weight: 0,
        },
    );

    for &(alias, canonical) in ALIASES {
        if let Some(entry) = words.get(canonical).copied() {
            words.insert(alias, entry);
        }
    }

    words
}

/// Look up a lowercased word in the number tables
pub fn lookup(word: &str) -> Option<Entry> {
    WORDS.get(word).copied()
}

pub fn is_dollars_marker(word: &str) -> bool {
    DOLLARS_REGEX.is_match(word)
}

pub fn is_cents_marker(word: &str) -> bool {
    CENTS_REGEX.is_match(word)
}
