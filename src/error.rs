use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NumerizerError {
    // Input errors
    EmptyInput,
    InputTooLong(usize),

    // Lexical errors
    UnknownWord {
        word: String,
        after: Option<String>,
    },

    // Grammar errors
    UnexpectedToken {
        token: String,
        after: Option<String>,
    },
    UnexpectedEnd {
        after: String,
    },

    // Arithmetic errors
    Overflow {
        at: String,
    },
}

/// Coarse classification of a parse failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    EmptyInput,
    InputTooLong,
    UnknownWord,
    Grammar,
    Overflow,
}

impl NumerizerError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            NumerizerError::EmptyInput => ErrorKind::EmptyInput,
            NumerizerError::InputTooLong(_) => ErrorKind::InputTooLong,
            NumerizerError::UnknownWord { .. } => ErrorKind::UnknownWord,
            NumerizerError::UnexpectedToken { .. } | NumerizerError::UnexpectedEnd { .. } => {
                ErrorKind::Grammar
            }
            NumerizerError::Overflow { .. } => ErrorKind::Overflow,
        }
    }
}

impl fmt::Display for NumerizerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumerizerError::EmptyInput => write!(f, "empty input"),
            NumerizerError::InputTooLong(len) => {
                write!(f, "input too long: {} characters", len)
            }
            NumerizerError::UnknownWord { word, after: None } => {
                write!(f, "bad number: unexpected start {:?}", word)
            }
            NumerizerError::UnknownWord {
                word,
                after: Some(after),
            } => write!(f, "bad number: {:?} after {:?}", word, after),
            NumerizerError::UnexpectedToken { token, after: None } => {
                write!(f, "unexpected start {:?}", token)
            }
            NumerizerError::UnexpectedToken {
                token,
                after: Some(after),
            } => write!(f, "unexpected {:?} after {:?}", token, after),
            NumerizerError::UnexpectedEnd { after } => {
                write!(f, "unexpected end of input after {:?}", after)
            }
            NumerizerError::Overflow { at } => write!(f, "number too large at {:?}", at),
        }
    }
}

impl std::error::Error for NumerizerError {}

pub type Result<T> = std::result::Result<T, NumerizerError>;
