//! Environment-driven process configuration (spec.md §6 "Process
//! configuration"). Missing mandatory values fail startup fast rather
//! than falling back to a guessed default.

use thiserror::Error;

#[derive(Debug, Error, Eq, PartialEq)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),
    #[error("environment variable {0} has an invalid value: {1}")]
    Invalid(&'static str, String),
}

/// The façade's runtime configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub signing_secret: String,
    pub signing_algorithm: String,
    pub deck_source_url: String,
    pub leaderboard_url: String,
    pub logic_layer_url: String,
    pub access_token_minutes: u32,
    pub refresh_token_minutes: u32,
}

impl Config {
    /// Reads and validates every recognised option from the process
    /// environment. Fails on the first missing or malformed value.
    pub fn from_env() -> Result<Config, ConfigError> {
        Ok(Config {
            signing_secret: required("SIGNING_SECRET")?,
            signing_algorithm: required("SIGNING_ALGORITHM")?,
            deck_source_url: required("DECK_SOURCE_URL")?,
            leaderboard_url: required("LEADERBOARD_URL")?,
            logic_layer_url: required("LOGIC_LAYER_URL")?,
            access_token_minutes: required_u32("ACCESS_TOKEN_MINUTES")?,
            refresh_token_minutes: required_u32("REFRESH_TOKEN_MINUTES")?,
        })
    }
}

/// Installs a `tracing` subscriber reading its filter from `RUST_LOG`,
/// defaulting to `info`. Best-effort: a second call or an unusual
/// embedding environment is ignored rather than panicking the process.
pub fn init_tracing() {
    let env = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(env).try_init();
}

fn required(name: &'static str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::Missing(name))
}

fn required_u32(name: &'static str) -> Result<u32, ConfigError> {
    let raw = required(name)?;
    let value: u32 = raw
        .parse()
        .map_err(|_| ConfigError::Invalid(name, raw.clone()))?;
    if value == 0 {
        return Err(ConfigError::Invalid(name, raw));
    }
    Ok(value)
}
