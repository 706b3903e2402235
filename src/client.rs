//! Main client.
//!
//! Wires a transport and configuration into the resource clients.

use std::sync::Arc;

use crate::clients::WalksClient;
use crate::config::WalksConfig;
use crate::error::Error;
use crate::transport::{HttpTransport, Transport};

/// Main client for the silly walks registry.
///
/// # Example
///
/// ```rust,ignore
/// use sillywalks::{SillyWalksClient, WalksConfig};
///
/// // Create client with explicit configuration
/// let client = SillyWalksClient::new(WalksConfig::default())?;
///
/// // Or create from environment variables
/// let client = SillyWalksClient::from_env()?;
///
/// for walk in client.walks().list_walks()? {
///     println!("{walk}");
/// }
/// ```
pub struct SillyWalksClient {
    config: WalksConfig,
    walks: WalksClient,
}

impl SillyWalksClient {
    /// Create a client backed by an `HttpTransport`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP transport cannot be created.
    pub fn new(config: WalksConfig) -> Result<Self, Error> {
        let transport = HttpTransport::new(config.timeout, &config.user_agent)?;
        Ok(Self::with_transport(Arc::new(transport), config))
    }

    /// Create a client from environment variables.
    ///
    /// See [`WalksConfig::from_env`] for the variables read.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is invalid or the transport cannot be created.
    pub fn from_env() -> Result<Self, Error> {
        Self::new(WalksConfig::from_env()?)
    }

    /// Create a client over any transport.
    pub fn with_transport(transport: Arc<dyn Transport>, config: WalksConfig) -> Self {
        let walks = WalksClient::with_settings(
            transport,
            &config.walks_url,
            config.silliness_threshold,
        );
        Self { config, walks }
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &WalksConfig {
        &self.config
    }

    /// Get the walks client.
    #[must_use]
    pub fn walks(&self) -> &WalksClient {
        &self.walks
    }
}
