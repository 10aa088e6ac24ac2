//! Process Configuration
//!
//! Settings are read once at startup from the environment (optionally seeded from a
//! `.env` file). A missing API key is a fatal startup error, never a per-request one.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

pub const ENV_API_KEY: &str = "HUGGINGFACE_API_KEY";
pub const ENV_SENTIMENT_URL: &str = "SENTIMENT_API_URL";
pub const ENV_SENTIMENT_TIMEOUT: &str = "SENTIMENT_TIMEOUT_SECS";
pub const ENV_DATABASE_PATH: &str = "DATABASE_PATH";
pub const ENV_BIND_ADDR: &str = "BIND_ADDR";

pub const DEFAULT_DATABASE_PATH: &str = "text_analyzer.db";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8000";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{0} is not set")]
    MissingApiKey(&'static str),

    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub api_key: String,
    /// Overrides the default inference endpoint when set.
    pub sentiment_url: Option<String>,
    pub sentiment_timeout: Option<Duration>,
    pub database_path: PathBuf,
    pub bind_addr: SocketAddr,
}

impl Settings {
    /// Loads `.env` (if present) and reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds settings from an arbitrary variable source. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let api_key = get(ENV_API_KEY).ok_or(ConfigError::MissingApiKey(ENV_API_KEY))?;

        let sentiment_timeout = match get(ENV_SENTIMENT_TIMEOUT) {
            Some(raw) => Some(parse_timeout(&raw)?),
            None => None,
        };

        let bind_raw = get(ENV_BIND_ADDR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = parse_bind_addr(ENV_BIND_ADDR, &bind_raw)?;

        Ok(Self {
            api_key,
            sentiment_url: get(ENV_SENTIMENT_URL),
            sentiment_timeout,
            database_path: get(ENV_DATABASE_PATH)
                .unwrap_or_else(|| DEFAULT_DATABASE_PATH.to_string())
                .into(),
            bind_addr,
        })
    }

    /// Applies `--bind <addr:port>` and `--db <path>` overrides. Unknown arguments are ignored.
    pub fn apply_args(mut self, args: &[String]) -> Result<Self, ConfigError> {
        let mut i = 1;
        while i < args.len() {
            match (args[i].as_str(), args.get(i + 1)) {
                ("--bind", Some(value)) => {
                    self.bind_addr = parse_bind_addr("--bind", value)?;
                    i += 2;
                }
                ("--db", Some(value)) => {
                    self.database_path = PathBuf::from(value);
                    i += 2;
                }
                _ => {
                    i += 1;
                }
            }
        }
        Ok(self)
    }
}

fn parse_timeout(raw: &str) -> Result<Duration, ConfigError> {
    raw.parse::<u64>()
        .ok()
        .filter(|secs| *secs > 0)
        .map(Duration::from_secs)
        .ok_or_else(|| ConfigError::InvalidValue {
            name: ENV_SENTIMENT_TIMEOUT,
            value: raw.to_string(),
        })
}

fn parse_bind_addr(name: &'static str, raw: &str) -> Result<SocketAddr, ConfigError> {
    raw.parse().map_err(|_| ConfigError::InvalidValue {
        name,
        value: raw.to_string(),
    })
}
