pub mod state_machine;

pub use state_machine::{Parser, State};

use crate::config::constants::MAX_INPUT_LENGTH;
use crate::config::ParseOptions;
use crate::error::{NumerizerError, Result};
use crate::token::tokenize;

/// Parse an English cardinal phrase ("four thousand, four hundred
/// thirty-two") into its integer value.
pub fn parse(text: &str) -> Result<i64> {
    parse_with(text, &ParseOptions::plain())
}

/// Parse a spoken money amount ("two hundred four dollars and eighteen
/// cents") into a count of cents.
pub fn parse_currency(text: &str) -> Result<i64> {
    parse_with(text, &ParseOptions::currency())
}

/// Normalize, tokenize and run the state machine under explicit options
pub fn parse_with(text: &str, options: &ParseOptions) -> Result<i64> {
    let length = text.chars().count();
    if length > MAX_INPUT_LENGTH {
        return Err(NumerizerError::InputTooLong(length));
    }

    let tokens = tokenize(text, options);

    tracing::debug!(
        profile = %options.profile,
        tokens = tokens.len(),
        "Parsing number phrase"
    );

    Parser::new(&tokens, options).parse()
}
