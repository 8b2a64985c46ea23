/// Input normalization for number phrases
///
/// Turns free text into the raw word sequence the tokenizer consumes:
/// typographic characters are folded to ASCII, the text is lowercased,
/// commas are removed and hyphens become word breaks.
use unicode_normalization::UnicodeNormalization;

#[derive(Debug, Clone)]
pub struct NormalizationResult {
    /// Cleaned-up text, words separated by single spaces
    pub normalized: String,
    /// Raw words in order
    pub words: Vec<String>,
}

/// Fold typographic characters onto their ASCII forms
///
/// This function handles:
/// - En/em dashes, non-breaking hyphen, minus sign → ASCII hyphen
/// - Non-breaking spaces → regular spaces
/// - Soft hyphens → removed
/// - Unicode normalization (NFC form)
pub fn fold_typography(text: &str) -> String {
    let mut folded = String::with_capacity(text.len());

    for ch in text.chars() {
        match ch {
            '\u{2010}' | '\u{2011}' | '\u{2013}' | '\u{2014}' | '\u{2212}' => folded.push('-'),
            '\u{00A0}' | '\u{202F}' => folded.push(' '),
            '\u{00AD}' => continue,
            _ => folded.push(ch),
        }
    }

    folded.nfc().collect::<String>()
}

/// Normalize a number phrase and split it into raw words
pub fn normalize(text: &str) -> NormalizationResult {
    let cleaned: String = fold_typography(text)
        .to_lowercase()
        .chars()
        .filter(|&ch| ch != ',')
        .map(|ch| if ch == '-' { ' ' } else { ch })
        .collect();

    let words: Vec<String> = cleaned.split_whitespace().map(str::to_string).collect();

    NormalizationResult {
        normalized: words.join(" "),
        words,
    }
}
