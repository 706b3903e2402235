//! Client configuration.

use std::env;
use std::time::Duration;

use crate::error::Error;

/// Where the walks live.
pub const DEFAULT_WALKS_URL: &str = "http://sillywalks.gov.uk/walks";

/// Walks must be strictly sillier than this to be listed.
pub const DEFAULT_SILLINESS_THRESHOLD: i64 = 5;

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the walks client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalksConfig {
    /// URL the walk list is fetched from
    pub walks_url: String,
    /// Cutoff for `list_walks`
    pub silliness_threshold: i64,
    /// HTTP request timeout
    pub timeout: Duration,
    /// User-Agent header sent by the HTTP transport
    pub user_agent: String,
}

impl Default for WalksConfig {
    fn default() -> Self {
        Self {
            walks_url: DEFAULT_WALKS_URL.to_string(),
            silliness_threshold: DEFAULT_SILLINESS_THRESHOLD,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: concat!("sillywalks/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl WalksConfig {
    /// Load configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// * `SILLYWALKS_URL` - Walk list URL (optional, default: <http://sillywalks.gov.uk/walks>)
    /// * `SILLYWALKS_THRESHOLD` - Silliness cutoff (optional, default: 5)
    /// * `SILLYWALKS_TIMEOUT_SECS` - Request timeout (optional, default: 30)
    ///
    /// # Errors
    ///
    /// Returns `Error::Configuration` if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// Unset keys fall back to the defaults.
    ///
    /// # Errors
    ///
    /// Returns `Error::Configuration` if a value cannot be parsed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let walks_url = lookup("SILLYWALKS_URL").unwrap_or(defaults.walks_url);

        let silliness_threshold = match lookup("SILLYWALKS_THRESHOLD") {
            Some(raw) => raw.trim().parse().map_err(|_| {
                Error::Configuration(format!("Invalid SILLYWALKS_THRESHOLD: {raw}"))
            })?,
            None => defaults.silliness_threshold,
        };

        let timeout = match lookup("SILLYWALKS_TIMEOUT_SECS") {
            Some(raw) => Duration::from_secs(raw.trim().parse().map_err(|_| {
                Error::Configuration(format!("Invalid SILLYWALKS_TIMEOUT_SECS: {raw}"))
            })?),
            None => defaults.timeout,
        };

        tracing::debug!(%walks_url, silliness_threshold, ?timeout, "Loaded walks configuration");

        Ok(Self {
            walks_url,
            silliness_threshold,
            timeout,
            user_agent: defaults.user_agent,
        })
    }

    /// Override the walk list URL.
    #[must_use]
    pub fn with_walks_url(mut self, url: &str) -> Self {
        self.walks_url = url.to_string();
        self
    }

    /// Override the silliness threshold.
    #[must_use]
    pub fn with_silliness_threshold(mut self, threshold: i64) -> Self {
        self.silliness_threshold = threshold;
        self
    }

    /// Override the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
