//! Configuration module

use std::env;

/// Default upstream history feed (most recent session first)
pub const DEFAULT_HISTORY_API_URL: &str = "https://kkja.onrender.com/api/taixiumd5";

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,

    /// Upstream history endpoint
    pub history_api_url: String,

    /// Upstream request timeout in seconds
    pub upstream_timeout_secs: u64,

    /// Environment (development, production)
    pub environment: String,

    /// Emit JSON log lines instead of human-readable ones
    pub json_logs: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 3000,
            history_api_url: DEFAULT_HISTORY_API_URL.to_string(),
            upstream_timeout_secs: 30,
            environment: "development".to_string(),
            json_logs: false,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),

            history_api_url: lookup("HISTORY_API_URL")
                .filter(|u| !u.trim().is_empty())
                .unwrap_or(defaults.history_api_url),

            upstream_timeout_secs: lookup("UPSTREAM_TIMEOUT_SECS")
                .and_then(|t| t.parse().ok())
                .filter(|t| *t > 0)
                .unwrap_or(defaults.upstream_timeout_secs),

            environment: lookup("ENVIRONMENT")
                .unwrap_or(defaults.environment),

            json_logs: lookup("LOG_FORMAT")
                .map(|f| f.eq_ignore_ascii_case("json"))
                .unwrap_or(defaults.json_logs),
        }
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}
