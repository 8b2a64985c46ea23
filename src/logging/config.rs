use std::env;

/// Configuration for the logging system
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Filter directive for console output (default: "numerizer=warn")
    pub level: String,

    /// Log format: "json", "pretty", or "compact" (default: "compact")
    pub format: LogFormat,

    /// Include the event target (module path) in output (default: false)
    pub with_target: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
    Compact,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "numerizer=warn".to_string(),
            format: LogFormat::Compact,
            with_target: false,
        }
    }
}

impl LogConfig {
    /// Load logging configuration from environment variables
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(level) = env::var("RUST_LOG") {
            config.level = level;
        }

        if let Ok(format_str) = env::var("NUMERIZER_LOG_FORMAT") {
            config.format = match format_str.to_lowercase().as_str() {
                "json" => LogFormat::Json,
                "pretty" => LogFormat::Pretty,
                _ => LogFormat::Compact,
            };
        }

        if let Ok(val) = env::var("NUMERIZER_LOG_TARGET") {
            config.with_target = val.to_lowercase() == "true";
        }

        config
    }
}
