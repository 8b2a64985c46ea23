use crate::config::Profile;
use crate::error::{ErrorKind, NumerizerError};
use serde::Serialize;

/// One parsed line as printed by the CLI in JSON mode
#[derive(Debug, Serialize)]
pub struct ParseOutcome {
    pub input: String,
    pub profile: Profile,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<ErrorKind>,
}

impl ParseOutcome {
    pub fn new(input: &str, profile: Profile, result: &Result<i64, NumerizerError>) -> Self {
        match result {
            Ok(value) => Self {
                input: input.to_string(),
                profile,
                status: "success".to_string(),
                value: Some(*value),
                error: None,
                kind: None,
            },
            Err(err) => Self {
                input: input.to_string(),
                profile,
                status: "error".to_string(),
                value: None,
                error: Some(err.to_string()),
                kind: Some(err.kind()),
            },
        }
    }

    pub fn is_success(&self) -> bool {
        self.value.is_some()
    }
}
