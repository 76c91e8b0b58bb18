use std::{env, time::Duration};

pub const DEFAULT_API_URL: &str = "https://api.helius.xyz/v0/transactions";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
/// Log filter used when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Configuration loaded from environment variables
#[derive(Clone)]
pub struct Config {
    pub api_key: String,
    pub api_url: String,
    /// `None` disables the request deadline
    pub request_timeout: Option<Duration>,
}

#[derive(Debug)]
pub enum ConfigError {
    MissingVariable(String),
    InvalidValue(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::MissingVariable(var) => write!(f, "Missing environment variable: {}", var),
            ConfigError::InvalidValue(msg) => write!(f, "Invalid configuration value: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

// Keep the key out of debug logs.
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("api_url", &self.api_url)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

impl Config {
    /// Load configuration from environment variables (and `.env`, if present)
    ///
    /// Environment variables:
    /// - `HELIUS_API_KEY` (required)
    /// - `HELIUS_API_URL` (default: https://api.helius.xyz/v0/transactions)
    /// - `REQUEST_TIMEOUT_SECS` (default: 10, `0` disables the deadline)
    ///
    /// `RUST_LOG` is read by the logger itself, see [`init_logger`]. Call that
    /// first so warnings raised while loading are not lost.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same rules as [`Config::from_env`] over an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("HELIUS_API_KEY")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .ok_or_else(|| ConfigError::MissingVariable("HELIUS_API_KEY".to_string()))?;

        let api_url = lookup("HELIUS_API_URL")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        if !api_url.starts_with("http://") && !api_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue(
                "HELIUS_API_URL must start with http:// or https://".to_string(),
            ));
        }

        let timeout_secs = match lookup("REQUEST_TIMEOUT_SECS") {
            Some(raw) => raw.trim().parse::<u64>().unwrap_or_else(|_| {
                log::warn!(
                    "Invalid REQUEST_TIMEOUT_SECS '{}', defaulting to {}",
                    raw,
                    DEFAULT_TIMEOUT_SECS
                );
                DEFAULT_TIMEOUT_SECS
            }),
            None => DEFAULT_TIMEOUT_SECS,
        };
        let request_timeout = (timeout_secs > 0).then(|| Duration::from_secs(timeout_secs));

        Ok(Self {
            api_key,
            api_url,
            request_timeout,
        })
    }
}

/// Load `.env` and start `env_logger` on stderr, filtered by `RUST_LOG`
pub fn init_logger() {
    dotenv::dotenv().ok();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(DEFAULT_LOG_FILTER))
        .target(env_logger::Target::Stderr)
        .init();
}
