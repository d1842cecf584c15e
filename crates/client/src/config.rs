use std::time::Duration;

use crate::poll::PollConfig;

/// Client configuration loaded from environment variables.
///
/// All fields have defaults suitable for a local development server.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API root that request paths are appended to.
    pub api_url: String,
    /// Bearer token sent on every request, if set.
    pub api_token: Option<String>,
    /// Per-request timeout.
    pub request_timeout: Duration,
    /// Backoff used when re-polling an execution.
    pub poll: PollConfig,
}

/// A configuration value could not be parsed.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{key} must be a positive integer, got {value:?}")]
    InvalidNumber { key: &'static str, value: String },
}

const DEFAULT_API_URL: &str = "http://localhost:5000/api";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

impl ClientConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var                          | Default                     |
    /// |----------------------------------|-----------------------------|
    /// | `WFQUEUE_API_URL`                | `http://localhost:5000/api` |
    /// | `WFQUEUE_API_TOKEN`              | unset                       |
    /// | `WFQUEUE_REQUEST_TIMEOUT_SECS`   | `30`                        |
    /// | `WFQUEUE_POLL_INTERVAL_SECS`     | `1`                         |
    /// | `WFQUEUE_POLL_MAX_INTERVAL_SECS` | `30`                        |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_url = lookup("WFQUEUE_API_URL").unwrap_or_else(|| DEFAULT_API_URL.into());

        let api_token = lookup("WFQUEUE_API_TOKEN").filter(|t| !t.trim().is_empty());

        let request_timeout_secs = parse_secs(
            &lookup,
            "WFQUEUE_REQUEST_TIMEOUT_SECS",
            DEFAULT_REQUEST_TIMEOUT_SECS,
        )?;

        let defaults = PollConfig::default();
        let initial_delay = parse_secs(
            &lookup,
            "WFQUEUE_POLL_INTERVAL_SECS",
            defaults.initial_delay.as_secs(),
        )?;
        let max_delay = parse_secs(
            &lookup,
            "WFQUEUE_POLL_MAX_INTERVAL_SECS",
            defaults.max_delay.as_secs(),
        )?;

        Ok(Self {
            api_url,
            api_token,
            request_timeout: Duration::from_secs(request_timeout_secs),
            poll: PollConfig {
                initial_delay: Duration::from_secs(initial_delay),
                max_delay: Duration::from_secs(max_delay.max(initial_delay)),
                ..defaults
            },
        })
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.into(),
            api_token: None,
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            poll: PollConfig::default(),
        }
    }
}

fn parse_secs<F>(lookup: &F, key: &'static str, default: u64) -> Result<u64, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => match raw.trim().parse::<u64>() {
            Ok(secs) if secs > 0 => Ok(secs),
            _ => Err(ConfigError::InvalidNumber { key, value: raw }),
        },
    }
}
