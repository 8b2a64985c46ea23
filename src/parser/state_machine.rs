/// Finite-state parser over number-word tokens
///
/// `prev` holds the current group (units, tens and hundreds not yet scaled),
/// `sum` holds every group already multiplied by its scale word. A scale
/// word folds `prev * scale` into `sum`; a terminator folds `prev` as is.
/// In the currency profile a dollars marker freezes `sum` as the dollar
/// amount and restarts accumulation for the cents group, which is limited
/// to a single sub-hundred group.
use crate::config::constants::CENTS_PER_DOLLAR;
use crate::config::ParseOptions;
use crate::error::{NumerizerError, Result};
use crate::token::{Category, Token, END_OF_INPUT};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Start,
    AfterZero,
    AfterUnit(i64),
    AfterTeen(i64),
    AfterTensPrefix(i64),
    AfterHundred,
    AfterScale,
    AfterAnd,
    AfterDollars,
    AfterCents,
    /// Unknown words before a marker, holding the index of the first one
    SkipUnknown(usize),
    Accept,
}

impl State {
    fn for_quantity(token: &Token) -> Option<State> {
        match token.category {
            Category::Unit => Some(State::AfterUnit(token.weight)),
            Category::Teen => Some(State::AfterTeen(token.weight)),
            Category::Tens => Some(State::AfterTensPrefix(token.weight)),
            _ => None,
        }
    }
}

pub struct Parser<'a> {
    tokens: &'a [Token],
    options: &'a ParseOptions,
    pos: usize,
    last: Option<&'a Token>,
    prev: i64,
    sum: i64,
    last_scale: Option<i64>,
    dollars: Option<i64>,
    cents: Option<i64>,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token], options: &'a ParseOptions) -> Self {
        Self {
            tokens,
            options,
            pos: 0,
            last: None,
            prev: 0,
            sum: 0,
            last_scale: None,
            dollars: None,
            cents: None,
        }
    }

    /// Run the machine to completion
    pub fn parse(mut self) -> Result<i64> {
        if self.tokens.is_empty() {
            return Err(NumerizerError::EmptyInput);
        }

        let mut state = State::Start;
        while state != State::Accept {
            state = self.step(state)?;
        }

        self.finish()
    }

    fn step(&mut self, state: State) -> Result<State> {
        tracing::trace!(
            ?state,
            pos = self.pos,
            prev = self.prev,
            sum = self.sum,
            "numerizer transition"
        );

        match state {
            State::Start => self.start(),
            State::AfterZero => self.after_zero(),
            State::AfterUnit(value) => self.after_quantity(value, true),
            State::AfterTeen(value) => self.after_quantity(value, self.options.allow_teen_hundreds),
            State::AfterTensPrefix(tens) => self.after_tens(tens),
            State::AfterHundred => self.continue_group(true),
            State::AfterScale => self.continue_group(false),
            State::AfterAnd => self.after_and(),
            State::AfterDollars => self.after_dollars(),
            State::AfterCents => self.after_cents(),
            State::SkipUnknown(first) => self.skip_unknown(first),
            State::Accept => Ok(State::Accept),
        }
    }

    fn peek(&self) -> &'a Token {
        self.tokens.get(self.pos).unwrap_or(&END_OF_INPUT)
    }

    fn advance(&mut self) -> &'a Token {
        let token = self.peek();
        if !token.is_end() {
            self.pos += 1;
            self.last = Some(token);
        }
        token
    }

    /// Consume the next token if it opens or continues a group
    fn take_quantity(&mut self) -> Option<State> {
        let state = State::for_quantity(self.peek())?;
        self.advance();
        Some(state)
    }

    fn start(&mut self) -> Result<State> {
        let token = self.peek();
        if token.category == Category::Zero {
            self.advance();
            return Ok(State::AfterZero);
        }

        self.take_quantity()
            .ok_or_else(|| self.unexpected(token))
    }

    /// A unit, teen or compound value has been read and is not yet part of
    /// `prev`
    fn after_quantity(&mut self, value: i64, hundreds_allowed: bool) -> Result<State> {
        let token = self.peek();
        match token.category {
            Category::Hundred if hundreds_allowed && self.prev == 0 && self.dollars.is_none() => {
                self.advance();
                self.prev = self.checked_mul(value, token.weight, token)?;
                Ok(State::AfterHundred)
            }
            Category::Hundred => Err(self.unexpected(token)),
            Category::Scale => {
                self.prev = self.checked_add(self.prev, value, token)?;
                self.apply_scale(token)
            }
            _ => {
                self.prev = self.checked_add(self.prev, value, token)?;
                self.terminate()
            }
        }
    }

    /// "zero" stands alone: only the end of input or a marker may follow
    fn after_zero(&mut self) -> Result<State> {
        let token = self.peek();
        match token.category {
            Category::EndOfInput => Ok(State::Accept),
            Category::DollarsMarker | Category::CentsMarker => self.take_marker(token),
            _ => Err(self.unexpected(token)),
        }
    }

    fn after_tens(&mut self, tens: i64) -> Result<State> {
        let token = self.peek();
        if token.category == Category::Unit {
            self.advance();
            let compound = self.checked_add(tens, token.weight, token)?;
            return self.after_quantity(compound, true);
        }

        // "forty hundred" is not a number
        self.after_quantity(tens, false)
    }

    /// After "hundred" or a scale word: a lower-order quantity, the "and"
    /// ligature, a smaller scale (only after "hundred"), or a terminator
    fn continue_group(&mut self, scale_allowed: bool) -> Result<State> {
        if let Some(state) = self.take_quantity() {
            return Ok(state);
        }

        let token = self.peek();
        match token.category {
            Category::And => {
                self.advance();
                Ok(State::AfterAnd)
            }
            Category::Scale if scale_allowed => self.apply_scale(token),
            _ => self.terminate(),
        }
    }

    fn after_and(&mut self) -> Result<State> {
        if let Some(state) = self.take_quantity() {
            return Ok(state);
        }

        let token = self.peek();
        if token.category == Category::Zero && self.at_cents_start() {
            self.advance();
            return Ok(State::AfterZero);
        }

        Err(self.unexpected(token))
    }

    fn after_dollars(&mut self) -> Result<State> {
        if let Some(state) = self.take_quantity() {
            return Ok(state);
        }

        let token = self.peek();
        match token.category {
            Category::EndOfInput => Ok(State::Accept),
            Category::Zero => {
                self.advance();
                Ok(State::AfterZero)
            }
            Category::And => {
                self.advance();
                Ok(State::AfterAnd)
            }
            _ => Err(self.unexpected(token)),
        }
    }

    fn after_cents(&mut self) -> Result<State> {
        let token = self.peek();
        if token.is_end() {
            Ok(State::Accept)
        } else {
            Err(self.unexpected(token))
        }
    }

    fn skip_unknown(&mut self, first: usize) -> Result<State> {
        while self.peek().category == Category::Unknown {
            self.advance();
        }

        let token = self.peek();
        match token.category {
            Category::DollarsMarker | Category::CentsMarker => self.take_marker(token),
            _ => {
                let word = &self.tokens[first];
                let after = first
                    .checked_sub(1)
                    .map(|i| self.tokens[i].text.clone());
                Err(NumerizerError::UnknownWord {
                    word: word.text.clone(),
                    after,
                })
            }
        }
    }

    /// Multiply the current group by a scale word and fold it into `sum`.
    /// Scale words must strictly descend within one amount and never appear
    /// in the cents group.
    fn apply_scale(&mut self, scale: &'a Token) -> Result<State> {
        if self.prev == 0
            || self.dollars.is_some()
            || self.last_scale.is_some_and(|last| scale.weight >= last)
        {
            return Err(self.unexpected(scale));
        }

        self.advance();
        let scaled = self.checked_mul(self.prev, scale.weight, scale)?;
        self.sum = self.checked_add(self.sum, scaled, scale)?;
        self.prev = 0;
        self.last_scale = Some(scale.weight);
        Ok(State::AfterScale)
    }

    /// The current amount is complete: fold the open group and accept the
    /// end of input, a marker, or (when tolerated) stray words before a marker
    fn terminate(&mut self) -> Result<State> {
        let at = self.last.unwrap_or(&END_OF_INPUT);
        self.sum = self.checked_add(self.sum, self.prev, at)?;
        self.prev = 0;

        let token = self.peek();
        match token.category {
            Category::EndOfInput => Ok(State::Accept),
            Category::DollarsMarker | Category::CentsMarker => self.take_marker(token),
            Category::Unknown if self.options.skip_unknown_before_marker => {
                Ok(State::SkipUnknown(self.pos))
            }
            _ => Err(self.unexpected(token)),
        }
    }

    fn take_marker(&mut self, marker: &'a Token) -> Result<State> {
        match marker.category {
            Category::DollarsMarker if self.dollars.is_none() && self.cents.is_none() => {
                self.advance();
                self.dollars = Some(self.sum);
                self.sum = 0;
                self.prev = 0;
                self.last_scale = None;
                Ok(State::AfterDollars)
            }
            Category::CentsMarker if self.cents.is_none() => {
                self.advance();
                self.cents = Some(self.sum);
                self.sum = 0;
                self.prev = 0;
                Ok(State::AfterCents)
            }
            _ => Err(self.unexpected(marker)),
        }
    }

    fn at_cents_start(&self) -> bool {
        self.dollars.is_some() && self.sum == 0 && self.prev == 0
    }

    /// Any consumed marker means the result is in cents, whatever the
    /// profile. Without markers only the currency profile scales to cents.
    fn finish(&self) -> Result<i64> {
        let at = self.last.unwrap_or(&END_OF_INPUT);
        match (self.dollars, self.cents) {
            (Some(dollars), cents) => {
                let whole = self.checked_mul(dollars, CENTS_PER_DOLLAR, at)?;
                self.checked_add(whole, cents.unwrap_or(self.sum), at)
            }
            (None, Some(cents)) => Ok(cents),
            (None, None) if self.options.is_currency() => {
                self.checked_mul(self.sum, CENTS_PER_DOLLAR, at)
            }
            (None, None) => Ok(self.sum),
        }
    }

    fn checked_add(&self, a: i64, b: i64, at: &Token) -> Result<i64> {
        a.checked_add(b).ok_or_else(|| Self::overflow(at))
    }

    fn checked_mul(&self, a: i64, b: i64, at: &Token) -> Result<i64> {
        a.checked_mul(b).ok_or_else(|| Self::overflow(at))
    }

    fn overflow(at: &Token) -> NumerizerError {
        NumerizerError::Overflow {
            at: at.to_string(),
        }
    }

    fn unexpected(&self, found: &Token) -> NumerizerError {
        let after = self.last.map(|t| t.text.clone());
        match (found.category, after) {
            (Category::EndOfInput, Some(after)) => NumerizerError::UnexpectedEnd { after },
            (Category::EndOfInput, None) => NumerizerError::EmptyInput,
            (Category::Unknown, after) => NumerizerError::UnknownWord {
                word: found.text.clone(),
                after,
            },
            (_, after) => NumerizerError::UnexpectedToken {
                token: found.text.clone(),
                after,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::tokenize;

    fn run(words: &[&str], options: &ParseOptions) -> Result<i64> {
        let tokens = tokenize(&words.join(" "), options);
        Parser::new(&tokens, options).parse()
    }

    fn plain(words: &[&str]) -> Result<i64> {
        run(words, &ParseOptions::plain())
    }

    fn currency(words: &[&str]) -> Result<i64> {
        run(words, &ParseOptions::currency())
    }

    #[test]
    fn test_single_words() {
        assert_eq!(plain(&["zero"]), Ok(0));
        assert_eq!(plain(&["seven"]), Ok(7));
        assert_eq!(plain(&["fourteen"]), Ok(14));
        assert_eq!(plain(&["ninety"]), Ok(90));
    }

    #[test]
    fn test_groups_and_scales() {
        assert_eq!(plain(&["forty", "five"]), Ok(45));
        assert_eq!(plain(&["three", "hundred", "and", "six"]), Ok(306));
        assert_eq!(plain(&["forty", "thousand"]), Ok(40_000));
        assert_eq!(
            plain(&["two", "million", "three", "hundred", "thousand", "and", "one"]),
            Ok(2_300_001)
        );
    }

    #[test]
    fn test_compound_hundreds() {
        assert_eq!(plain(&["forty", "five", "hundred"]), Ok(4500));
        assert_eq!(
            plain(&["forty", "five", "hundred", "thousand"]),
            Ok(4_500_000)
        );
        assert!(plain(&["forty", "hundred"]).is_err());
    }

    #[test]
    fn test_teen_hundreds_follow_options() {
        assert_eq!(
            plain(&["eleven", "hundred"]),
            Err(NumerizerError::UnexpectedToken {
                token: "hundred".to_string(),
                after: Some("eleven".to_string()),
            })
        );

        let mut options = ParseOptions::plain();
        options.allow_teen_hundreds = true;
        assert_eq!(run(&["eleven", "hundred"], &options), Ok(1100));
    }

    #[test]
    fn test_error_positions() {
        assert_eq!(
            plain(&["hundred"]),
            Err(NumerizerError::UnexpectedToken {
                token: "hundred".to_string(),
                after: None,
            })
        );
        assert_eq!(
            plain(&["five", "three"]),
            Err(NumerizerError::UnexpectedToken {
                token: "three".to_string(),
                after: Some("five".to_string()),
            })
        );
        assert_eq!(
            plain(&["two", "hundred", "and"]),
            Err(NumerizerError::UnexpectedEnd {
                after: "and".to_string(),
            })
        );
        assert_eq!(
            plain(&["a"]),
            Err(NumerizerError::UnknownWord {
                word: "a".to_string(),
                after: None,
            })
        );
    }

    #[test]
    fn test_scales_must_descend() {
        assert!(plain(&["one", "thousand", "two", "thousand"]).is_err());
        assert!(plain(&["one", "thousand", "one", "million"]).is_err());
        assert!(plain(&["one", "million", "thousand"]).is_err());
        assert!(plain(&["two", "hundred", "three", "hundred"]).is_err());
    }

    #[test]
    fn test_empty_token_stream() {
        assert_eq!(plain(&[]), Err(NumerizerError::EmptyInput));
    }

    #[test]
    fn test_overflow_is_reported() {
        let options = ParseOptions::plain();
        let tokens = vec![
            Token::new(Category::Unit, "nine", 9),
            Token::new(Category::Scale, "zillion", i64::MAX / 2),
        ];
        assert_eq!(
            Parser::new(&tokens, &options).parse(),
            Err(NumerizerError::Overflow {
                at: "zillion".to_string(),
            })
        );
    }

    #[test]
    fn test_currency_split() {
        assert_eq!(
            currency(&["two", "hundred", "four", "dollars", "and", "eighteen", "cents"]),
            Ok(20418)
        );
        assert_eq!(currency(&["thirty", "cents"]), Ok(30));
        assert_eq!(currency(&["forty", "five"]), Ok(4500));
        assert_eq!(currency(&["five", "dollars", "and", "twenty"]), Ok(520));
        assert_eq!(currency(&["five", "dollars", "and", "zero", "cents"]), Ok(500));
    }

    #[test]
    fn test_currency_marker_order() {
        assert!(currency(&["five", "cents", "three", "dollars"]).is_err());
        assert!(currency(&["five", "dollars", "six", "dollars"]).is_err());
        assert!(currency(&["five", "dollars", "cents"]).is_err());
        assert!(currency(&["dollars"]).is_err());
    }

    #[test]
    fn test_unknown_words_before_marker() {
        assert_eq!(currency(&["five", "us", "dollars"]), Ok(500));
        assert_eq!(
            currency(&["five", "us"]),
            Err(NumerizerError::UnknownWord {
                word: "us".to_string(),
                after: Some("five".to_string()),
            })
        );

        let mut options = ParseOptions::currency();
        options.skip_unknown_before_marker = false;
        assert!(run(&["five", "us", "dollars"], &options).is_err());
    }

    #[test]
    fn test_markers_without_currency_profile() {
        let options = ParseOptions {
            currency_markers: true,
            ..ParseOptions::plain()
        };
        assert_eq!(run(&["five", "dollars"], &options), Ok(500));
        assert_eq!(
            run(&["five", "dollars", "and", "six", "cents"], &options),
            Ok(506)
        );
        assert_eq!(run(&["thirty", "cents"], &options), Ok(30));
        assert_eq!(run(&["forty", "five"], &options), Ok(45));
    }

    #[test]
    fn test_zero_takes_only_end_or_marker() {
        assert_eq!(
            currency(&["zero", "us", "dollars"]),
            Err(NumerizerError::UnknownWord {
                word: "us".to_string(),
                after: Some("zero".to_string()),
            })
        );
        assert_eq!(
            plain(&["zero", "five"]),
            Err(NumerizerError::UnexpectedToken {
                token: "five".to_string(),
                after: Some("zero".to_string()),
            })
        );
        assert_eq!(currency(&["zero", "dollars"]), Ok(0));
        assert_eq!(currency(&["zero", "cents"]), Ok(0));
    }

    #[test]
    fn test_cents_group_stays_below_hundred() {
        assert_eq!(
            currency(&["five", "dollars", "and", "two", "thousand", "cents"]),
            Err(NumerizerError::UnexpectedToken {
                token: "thousand".to_string(),
                after: Some("two".to_string()),
            })
        );
        assert_eq!(
            currency(&["one", "hundred", "dollars", "one", "hundred"]),
            Err(NumerizerError::UnexpectedToken {
                token: "hundred".to_string(),
                after: Some("one".to_string()),
            })
        );
        assert_eq!(
            currency(&["five", "dollars", "ninety", "nine", "cents"]),
            Ok(599)
        );
        assert_eq!(currency(&["one", "hundred", "cents"]), Ok(100));
    }
}
