use std::path::PathBuf;

use thiserror::Error;
use tracing::Level;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key}={value:?} is not a valid seed, expected an unsigned 64-bit integer")]
    InvalidSeed { key: &'static str, value: String },
    #[error("{key}={value:?} is not a log level, expected one of trace, debug, info, warn, error")]
    InvalidLogLevel { key: &'static str, value: String },
}

/// Runtime settings, read from `MAZEROUTE_*` environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Fixed seed for maze generation. `None` draws a fresh seed from the OS.
    pub seed: Option<u64>,
    /// Directory the rolling log files are written to
    pub log_dir: PathBuf,
    pub log_level: Level,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            log_dir: PathBuf::from("logs"),
            log_level: Level::INFO,
        }
    }
}

impl Config {
    pub const SEED_VAR: &'static str = "MAZEROUTE_SEED";
    pub const LOG_DIR_VAR: &'static str = "MAZEROUTE_LOG_DIR";
    pub const LOG_LEVEL_VAR: &'static str = "MAZEROUTE_LOG_LEVEL";

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup. Missing or blank keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Config::default();

        if let Some(value) = get(Self::SEED_VAR) {
            config.seed = Some(value.trim().parse().map_err(|_| ConfigError::InvalidSeed {
                key: Self::SEED_VAR,
                value,
            })?);
        }
        if let Some(value) = get(Self::LOG_DIR_VAR) {
            config.log_dir = PathBuf::from(value);
        }
        if let Some(value) = get(Self::LOG_LEVEL_VAR) {
            config.log_level =
                value
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidLogLevel {
                        key: Self::LOG_LEVEL_VAR,
                        value,
                    })?;
        }
        Ok(config)
    }
}
