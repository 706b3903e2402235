//! Error types for the silly walks client.

use thiserror::Error;

/// Main error type for the crate.
#[derive(Error, Debug)]
pub enum Error {
    /// The fetch could not be completed. Carried through untouched from the transport.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The fetched payload was not a JSON array of walk records
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl Error {
    /// Check if this error came from the transport.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// Check if this error came from parsing the payload.
    #[must_use]
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse(_))
    }
}

/// Failures raised by a [`Transport`](crate::transport::Transport) while fetching.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// Connection refused, DNS failure, timeout and the like.
    #[error("Connection error: {0}")]
    Connection(String),

    /// The server answered with a non-2xx status.
    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },

    /// The response body could not be read.
    #[error("Body error: {0}")]
    Body(String),
}

impl TransportError {
    /// Get the HTTP status for status errors.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
