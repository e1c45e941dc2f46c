//! Runtime configuration.
//!
//! Read from `MEDIBOT_*` environment variables, optionally seeded from a
//! `.env` file. Every field has a default, so an empty environment is valid.

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::time::Duration;
use validator::Validate;

use crate::error::AppError;

pub const ENV_FALLBACK_NAME: &str = "MEDIBOT_FALLBACK_NAME";
pub const ENV_SWEEP_INTERVAL_SECS: &str = "MEDIBOT_SWEEP_INTERVAL_SECS";
pub const ENV_CHANNEL_CAPACITY: &str = "MEDIBOT_CHANNEL_CAPACITY";
pub const ENV_REPLY_TIMEOUT_SECS: &str = "MEDIBOT_REPLY_TIMEOUT_SECS";
pub const ENV_LOG_FORMAT: &str = "MEDIBOT_LOG_FORMAT";

const DAY_SECS: u64 = 24 * 60 * 60;

/// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable `fmt` output.
    #[default]
    Pretty,
    /// Bunyan-style JSON lines.
    Json,
}

impl FromStr for LogFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" | "bunyan" => Ok(LogFormat::Json),
            other => Err(AppError::Config(format!("Unknown log format: {}", other))),
        }
    }
}

/// Bot settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct BotConfig {
    /// Name used in greetings when the transport has no display name.
    #[validate(length(min = 1))]
    pub fallback_name: String,
    /// Interval between bulk session sweeps.
    #[validate(range(min = 1))]
    pub sweep_interval_secs: u64,
    /// Bounded mailbox size of the supervisor actor.
    #[validate(range(min = 1, max = 4096))]
    pub channel_capacity: usize,
    /// How long a caller waits for the supervisor to answer.
    #[validate(range(min = 1, max = 600))]
    pub reply_timeout_secs: u64,
    pub log_format: LogFormat,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            fallback_name: "there".to_string(),
            sweep_interval_secs: DAY_SECS,
            channel_capacity: 32,
            reply_timeout_secs: 30,
            log_format: LogFormat::Pretty,
        }
    }
}

impl BotConfig {
    /// Loads `.env` (if present) and then reads the process environment.
    pub fn load() -> Result<Self, AppError> {
        // A missing .env file is fine.
        let _ = dotenv::dotenv();
        Self::from_env()
    }

    /// Builds the config from the process environment and validates it.
    pub fn from_env() -> Result<Self, AppError> {
        let defaults = Self::default();

        let config = Self {
            fallback_name: env::var(ENV_FALLBACK_NAME).unwrap_or(defaults.fallback_name),
            sweep_interval_secs: parse_var(ENV_SWEEP_INTERVAL_SECS)?
                .unwrap_or(defaults.sweep_interval_secs),
            channel_capacity: parse_var(ENV_CHANNEL_CAPACITY)?
                .unwrap_or(defaults.channel_capacity),
            reply_timeout_secs: parse_var(ENV_REPLY_TIMEOUT_SECS)?
                .unwrap_or(defaults.reply_timeout_secs),
            log_format: match env::var(ENV_LOG_FORMAT) {
                Ok(value) => value.parse()?,
                Err(_) => defaults.log_format,
            },
        };

        config.validate()?;
        Ok(config)
    }

    pub fn sweep_interval(&self) -> Duration {
        Duration::from_secs(self.sweep_interval_secs)
    }

    pub fn reply_timeout(&self) -> Duration {
        Duration::from_secs(self.reply_timeout_secs)
    }
}

fn parse_var<T>(name: &str) -> Result<Option<T>, AppError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| AppError::Config(format!("{} is invalid ({}): {}", name, raw, e))),
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_VARS: [&str; 5] = [
        ENV_FALLBACK_NAME,
        ENV_SWEEP_INTERVAL_SECS,
        ENV_CHANNEL_CAPACITY,
        ENV_REPLY_TIMEOUT_SECS,
        ENV_LOG_FORMAT,
    ];

    #[test]
    fn test_defaults_from_empty_env() {
        temp_env::with_vars_unset(ALL_VARS, || {
            let config = BotConfig::from_env().expect("defaults should be valid");
            assert_eq!(config, BotConfig::default());
            assert_eq!(config.sweep_interval(), Duration::from_secs(86_400));
        });
    }

    #[test]
    fn test_overrides() {
        temp_env::with_vars(
            [
                (ENV_FALLBACK_NAME, Some("friend")),
                (ENV_SWEEP_INTERVAL_SECS, Some("60")),
                (ENV_CHANNEL_CAPACITY, None),
                (ENV_REPLY_TIMEOUT_SECS, Some("5")),
                (ENV_LOG_FORMAT, Some("JSON")),
            ],
            || {
                let config = BotConfig::from_env().expect("overrides should be valid");
                assert_eq!(config.fallback_name, "friend");
                assert_eq!(config.sweep_interval_secs, 60);
                assert_eq!(config.channel_capacity, 32);
                assert_eq!(config.reply_timeout_secs, 5);
                assert_eq!(config.log_format, LogFormat::Json);
            },
        );
    }

    #[test]
    fn test_unparseable_value_is_config_error() {
        temp_env::with_vars(
            [
                (ENV_SWEEP_INTERVAL_SECS, Some("daily")),
                (ENV_FALLBACK_NAME, None),
                (ENV_CHANNEL_CAPACITY, None),
                (ENV_REPLY_TIMEOUT_SECS, None),
                (ENV_LOG_FORMAT, None),
            ],
            || {
                let err = BotConfig::from_env().unwrap_err();
                assert!(matches!(err, AppError::Config(_)), "got {:?}", err);
            },
        );
    }

    #[test]
    fn test_out_of_range_is_validation_error() {
        temp_env::with_vars(
            [
                (ENV_SWEEP_INTERVAL_SECS, Some("0")),
                (ENV_FALLBACK_NAME, None),
                (ENV_CHANNEL_CAPACITY, None),
                (ENV_REPLY_TIMEOUT_SECS, None),
                (ENV_LOG_FORMAT, None),
            ],
            || {
                let err = BotConfig::from_env().unwrap_err();
                assert!(matches!(err, AppError::Validation(_)), "got {:?}", err);
            },
        );
    }

    #[test]
    fn test_unknown_log_format() {
        assert!("xml".parse::<LogFormat>().is_err());
        assert_eq!("Bunyan".parse::<LogFormat>().unwrap(), LogFormat::Json);
    }
}
