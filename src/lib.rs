// Library modules for the numerizer binary and integration tests
pub mod cli;
pub mod config;
pub mod error;
pub mod lexicon;
pub mod logging;
pub mod models;
pub mod parser;
pub mod text_processing;
pub mod token;

pub use config::{ParseOptions, Profile};
pub use error::{ErrorKind, NumerizerError, Result};
pub use parser::{parse, parse_currency, parse_with};
pub use token::{tokenize, Category, Token};
