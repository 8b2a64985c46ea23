pub mod config;

use tracing_subscriber::EnvFilter;

pub use config::{LogConfig, LogFormat};

type InitError = Box<dyn std::error::Error + Send + Sync>;

/// Initialize console logging for the CLI
///
/// Events go to stderr so stdout stays reserved for parse results.
/// Fails if a global subscriber is already installed.
pub fn init_logging(config: &LogConfig) -> Result<(), InitError> {
    let filter = EnvFilter::try_new(&config.level)
        .unwrap_or_else(|_| EnvFilter::new(LogConfig::default().level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(config.with_target);

    match config.format {
        LogFormat::Json => builder.json().try_init()?,
        LogFormat::Pretty => builder.pretty().try_init()?,
        LogFormat::Compact => builder.compact().try_init()?,
    }

    tracing::debug!(format = ?config.format, "Logging initialized");
    Ok(())
}
