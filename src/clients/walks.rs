//! Walks resource client.

use std::sync::Arc;

use crate::config::{DEFAULT_SILLINESS_THRESHOLD, DEFAULT_WALKS_URL};
use crate::error::Error;
use crate::transport::Transport;
use crate::types::WalkRecord;

/// Client for the walk list.
///
/// Holds no state besides its transport and settings, so repeated calls over
/// the same payload always return the same walks.
pub struct WalksClient {
    transport: Arc<dyn Transport>,
    url: String,
    threshold: i64,
}

impl WalksClient {
    /// Create a walks client with the default URL and threshold.
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self::with_settings(transport, DEFAULT_WALKS_URL, DEFAULT_SILLINESS_THRESHOLD)
    }

    /// Create a walks client with an explicit URL and threshold.
    pub fn with_settings(transport: Arc<dyn Transport>, url: &str, threshold: i64) -> Self {
        Self {
            transport,
            url: url.to_string(),
            threshold,
        }
    }

    /// Get the URL walks are fetched from.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Get the silliness threshold.
    #[must_use]
    pub fn threshold(&self) -> i64 {
        self.threshold
    }

    /// List the walks sillier than the threshold.
    ///
    /// Makes exactly one `get` on the transport. Walks come back in the order
    /// the server listed them.
    ///
    /// # Errors
    ///
    /// Returns `Error::Transport` if the fetch fails and `Error::Parse` if the
    /// payload is not a JSON array of walks.
    pub fn list_walks(&self) -> Result<Vec<WalkRecord>, Error> {
        let payload = self.transport.get(&self.url)?;
        let walks = parse_walks(&payload)?;
        Ok(filter_silly(walks, self.threshold))
    }
}

/// Parse a JSON array of walks.
///
/// # Errors
///
/// Returns `Error::Parse` on malformed JSON, a non-array document, or an
/// element without an integer `silliness`.
pub fn parse_walks(payload: &str) -> Result<Vec<WalkRecord>, Error> {
    serde_json::from_str(payload).map_err(Error::from)
}

/// Keep the walks strictly sillier than `threshold`, preserving order.
#[must_use]
pub fn filter_silly(walks: Vec<WalkRecord>, threshold: i64) -> Vec<WalkRecord> {
    walks
        .into_iter()
        .filter(|walk| walk.is_sillier_than(threshold))
        .collect()
}
