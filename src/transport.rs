//! Fetch transport.
//!
//! [`Transport`] is the seam between the walks client and the network. The
//! production implementation is [`HttpTransport`]; tests substitute
//! [`MockTransport`](crate::testing::MockTransport) or any other implementation.

use std::sync::Arc;
use std::time::Duration;

use reqwest::blocking::Client;

use crate::error::{Error, TransportError};

/// A capability that fetches a URL and returns the body as text.
pub trait Transport: Send + Sync {
    /// Fetch `url`.
    ///
    /// # Errors
    ///
    /// Returns a `TransportError` if the fetch cannot be completed.
    fn get(&self, url: &str) -> Result<String, TransportError>;
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    fn get(&self, url: &str) -> Result<String, TransportError> {
        (**self).get(url)
    }
}

impl<T: Transport + ?Sized> Transport for &T {
    fn get(&self, url: &str) -> Result<String, TransportError> {
        (**self).get(url)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn get(&self, url: &str) -> Result<String, TransportError> {
        (**self).get(url)
    }
}

/// Blocking HTTP transport.
///
/// Issues one GET per call. There is no retry; any failure is returned to the
/// caller as a [`TransportError`].
pub struct HttpTransport {
    client: Client,
    timeout: Duration,
}

impl HttpTransport {
    /// Create a new HTTP transport.
    ///
    /// # Arguments
    ///
    /// * `timeout` - Request timeout
    /// * `user_agent` - Value of the User-Agent header
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self, Error> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| Error::Configuration(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self { client, timeout })
    }

    /// Get the request timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &str) -> Result<String, TransportError> {
        tracing::debug!(url, "GET");

        let response = self.client.get(url).send().map_err(|e| {
            tracing::warn!(url, error = %e, "Request failed");
            TransportError::Connection(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(url, status = status.as_u16(), "Unexpected status");
            return Err(TransportError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response
            .text()
            .map_err(|e| TransportError::Body(e.to_string()))?;

        tracing::debug!(url, bytes = body.len(), "Fetched");
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(&'static str);

    impl Transport for Fixed {
        fn get(&self, _url: &str) -> Result<String, TransportError> {
            Ok(self.0.to_string())
        }
    }

    #[test]
    fn test_transport_creation() {
        let transport = HttpTransport::new(Duration::from_secs(5), "sillywalks-test")
            .expect("transport creation should succeed");

        assert_eq!(transport.timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_connection_refused_is_connection_error() {
        let transport = HttpTransport::new(Duration::from_secs(5), "sillywalks-test")
            .expect("transport creation should succeed");

        // Port 1 is never listening in a test environment.
        let result = transport.get("http://127.0.0.1:1/walks");

        assert!(matches!(result, Err(TransportError::Connection(_))));
    }

    fn fetch<T: Transport>(transport: T) -> String {
        transport.get("http://sillywalks.gov.uk/walks").unwrap()
    }

    #[test]
    fn test_smart_pointers_delegate() {
        let shared: Arc<dyn Transport> = Arc::new(Fixed("[]"));
        let boxed: Box<dyn Transport> = Box::new(Fixed("[1]"));
        let plain = Fixed("[2]");

        assert_eq!(fetch(shared), "[]");
        assert_eq!(fetch(boxed), "[1]");
        assert_eq!(fetch(&plain), "[2]");
    }
}
