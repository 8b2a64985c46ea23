use serde::Serialize;
use std::env;
use std::fmt;
use std::str::FromStr;

/// Which grammar variant the parser runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    /// Bare number words, result is the integer value
    Plain,
    /// Optional dollars/cents markers, result is a count of cents
    Currency,
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Profile::Plain => write!(f, "plain"),
            Profile::Currency => write!(f, "currency"),
        }
    }
}

impl FromStr for Profile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "plain" | "number" => Ok(Profile::Plain),
            "currency" | "money" => Ok(Profile::Currency),
            other => Err(format!("Unknown profile: {}", other)),
        }
    }
}

/// Switches controlling the grammar edges where the plain and currency
/// engines differ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    pub profile: Profile,

    /// Recognize "dollar(s)" / "cent(s)" as markers (default: currency only)
    pub currency_markers: bool,

    /// Accept a teen before "hundred", e.g. "seventeen hundred" (default: currency only)
    pub allow_teen_hundreds: bool,

    /// Skip unknown words between a quantity and a following dollars/cents
    /// marker (default: currency only)
    pub skip_unknown_before_marker: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self::plain()
    }
}

impl ParseOptions {
    pub fn plain() -> Self {
        Self {
            profile: Profile::Plain,
            currency_markers: false,
            allow_teen_hundreds: false,
            skip_unknown_before_marker: false,
        }
    }

    pub fn currency() -> Self {
        Self {
            profile: Profile::Currency,
            currency_markers: true,
            allow_teen_hundreds: true,
            skip_unknown_before_marker: true,
        }
    }

    pub fn for_profile(profile: Profile) -> Self {
        match profile {
            Profile::Plain => Self::plain(),
            Profile::Currency => Self::currency(),
        }
    }

    pub fn is_currency(&self) -> bool {
        self.profile == Profile::Currency
    }

    /// Load parse options from environment variables
    ///
    /// `NUMERIZER_PROFILE` picks the base profile; `NUMERIZER_TEEN_HUNDREDS`
    /// and `NUMERIZER_SKIP_UNKNOWN` override single switches. Unparsable
    /// values keep the profile default.
    pub fn from_env() -> Self {
        let profile = env::var("NUMERIZER_PROFILE")
            .ok()
            .and_then(|p| p.parse::<Profile>().ok())
            .unwrap_or(Profile::Plain);

        Self::for_profile(profile).with_env_overrides()
    }

    /// Apply the per-switch environment overrides on top of `self`
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(val) = env_flag("NUMERIZER_TEEN_HUNDREDS") {
            self.allow_teen_hundreds = val;
        }

        if let Some(val) = env_flag("NUMERIZER_SKIP_UNKNOWN") {
            self.skip_unknown_before_marker = val;
        }

        self
    }
}

fn env_flag(name: &str) -> Option<bool> {
    match env::var(name).ok()?.to_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}
