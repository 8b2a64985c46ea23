use crate::config::ParseOptions;
use crate::lexicon;
use crate::text_processing::normalize;
use std::fmt;

/// What a word means to the parser
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Zero,
    /// one..nine
    Unit,
    /// ten..nineteen
    Teen,
    /// twenty, thirty, ... ninety
    Tens,
    Hundred,
    /// thousand, million, billion, trillion
    Scale,
    And,
    DollarsMarker,
    CentsMarker,
    Unknown,
    EndOfInput,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub category: Category,
    /// Word as it appeared after normalization
    pub text: String,
    /// Numeric magnitude, 0 where not applicable
    pub weight: i64,
}

/// Sentinel returned when peeking past the last token
pub static END_OF_INPUT: Token = Token {
    category: Category::EndOfInput,
    text: String::new(),
    weight: 0,
};

impl Token {
    pub fn new(category: Category, text: impl Into<String>, weight: i64) -> Self {
        Self {
            category,
            text: text.into(),
            weight,
        }
    }

    /// Classify a single normalized word
    pub fn from_word(word: &str, options: &ParseOptions) -> Self {
        if let Some(entry) = lexicon::lookup(word) {
            return Token::new(entry.category, word, entry.weight);
        }

        if options.currency_markers {
            if lexicon::is_dollars_marker(word) {
                return Token::new(Category::DollarsMarker, word, 0);
            }
            if lexicon::is_cents_marker(word) {
                return Token::new(Category::CentsMarker, word, 0);
            }
        }

        Token::new(Category::Unknown, word, 0)
    }

    pub fn is_end(&self) -> bool {
        self.category == Category::EndOfInput
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_end() {
            write!(f, "end of input")
        } else {
            write!(f, "{}", self.text)
        }
    }
}

/// Normalize `text` and map each word to a typed token. Never fails:
/// unrecognized words become `Category::Unknown` and the parser decides
/// whether they are fatal.
pub fn tokenize(text: &str, options: &ParseOptions) -> Vec<Token> {
    normalize(text)
        .words
        .iter()
        .map(|word| Token::from_word(word, options))
        .collect()
}
