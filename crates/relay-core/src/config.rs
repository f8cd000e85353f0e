use connectors::source::BasicAuth;
use std::{path::PathBuf, time::Duration};
use thiserror::Error;

const API_URL: &str = "API_URL";
const WEBHOOK_URL: &str = "WEBHOOK_URL";
const WEBHOOK_URL_FALLBACK: &str = "DISCORD_WEBHOOK";
const API_USERNAME: &str = "API_USERNAME";
const API_PASSWORD: &str = "API_PASSWORD";
const POLL_INTERVAL_SECS: &str = "POLL_INTERVAL_SECS";
const CURSOR_PATH: &str = "CURSOR_PATH";
const POST_HISTORY: &str = "POST_HISTORY_ON_FIRST_RUN";
const RUN_ONCE: &str = "RUN_ONCE";

const DEFAULT_POLL_INTERVAL_SECS: u64 = 10;
const DEFAULT_CURSOR_PATH: &str = "cursor.json";
const REQUEST_TIMEOUT_SECS: u64 = 15;

/// Startup configuration failures. The only error class that is allowed
/// to be fatal, and only before the loop starts.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable {0}")]
    MissingVar(&'static str),

    #[error("Invalid value {value:?} for {var}: expected {expected}")]
    InvalidValue {
        var: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// Explicit configuration value passed into the driver at construction.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub api_url: String,
    pub webhook_url: String,
    pub basic_auth: Option<BasicAuth>,
    pub poll_interval: Duration,
    pub request_timeout: Duration,
    pub cursor_path: PathBuf,
    pub post_history_on_first_run: bool,
    pub run_once: bool,
}

impl RelayConfig {
    /// Reads the whole configuration surface from process environment
    /// variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) but with an injectable lookup,
    /// so tests never touch process-global state.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_url = lookup(API_URL).ok_or(ConfigError::MissingVar(API_URL))?;
        let webhook_url = lookup(WEBHOOK_URL)
            .or_else(|| lookup(WEBHOOK_URL_FALLBACK))
            .ok_or(ConfigError::MissingVar(WEBHOOK_URL))?;

        // Basic auth is all-or-nothing; a lone username or password is
        // treated as absent.
        let basic_auth = match (lookup(API_USERNAME), lookup(API_PASSWORD)) {
            (Some(username), Some(password)) => Some(BasicAuth { username, password }),
            _ => None,
        };

        let poll_interval = match lookup(POLL_INTERVAL_SECS) {
            Some(raw) => Duration::from_secs(parse_secs(POLL_INTERVAL_SECS, &raw)?),
            None => Duration::from_secs(DEFAULT_POLL_INTERVAL_SECS),
        };

        let cursor_path = lookup(CURSOR_PATH)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CURSOR_PATH));

        let post_history_on_first_run = match lookup(POST_HISTORY) {
            Some(raw) => parse_bool(POST_HISTORY, &raw)?,
            None => false,
        };

        let run_once = match lookup(RUN_ONCE) {
            Some(raw) => parse_bool(RUN_ONCE, &raw)?,
            None => false,
        };

        Ok(Self {
            api_url,
            webhook_url,
            basic_auth,
            poll_interval,
            request_timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
            cursor_path,
            post_history_on_first_run,
            run_once,
        })
    }
}

fn parse_secs(var: &'static str, raw: &str) -> Result<u64, ConfigError> {
    raw.trim()
        .parse()
        .map_err(|_| ConfigError::InvalidValue {
            var,
            value: raw.to_string(),
            expected: "a whole number of seconds",
        })
}

fn parse_bool(var: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            var,
            value: raw.to_string(),
            expected: "a boolean (true/false)",
        }),
    }
}
