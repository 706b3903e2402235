//! Mock transport for testing.
//!
//! Provides a `MockTransport` that records every fetch and answers with a
//! configured payload or fault, without touching the network.

use std::sync::Mutex;

use chrono::{DateTime, Utc};

use crate::error::TransportError;
use crate::transport::Transport;

/// Payload returned by an unconfigured `MockTransport`.
pub const DEFAULT_MOCK_PAYLOAD: &str = "[]";

/// Record of a method call.
#[derive(Debug, Clone)]
pub struct MockCall {
    /// Method name (e.g., "get")
    pub method: String,
    /// Arguments passed to the method
    pub args: Vec<String>,
    /// Timestamp of the call
    pub timestamp: DateTime<Utc>,
}

impl MockCall {
    /// Create a new mock call record.
    pub fn new(method: &str, args: Vec<String>) -> Self {
        Self {
            method: method.to_string(),
            args,
            timestamp: Utc::now(),
        }
    }
}

/// Configured answer for `get()` calls.
#[derive(Debug, Clone, Default)]
pub struct MockResponse {
    /// Payload to return; `DEFAULT_MOCK_PAYLOAD` when unset
    pub data: Option<String>,
    /// Fault to return instead of data
    pub error: Option<TransportError>,
    /// Number of times this response has been used
    pub call_count: u32,
}

impl MockResponse {
    /// Create a new mock response with a payload.
    pub fn with_data(data: impl Into<String>) -> Self {
        Self {
            data: Some(data.into()),
            ..Self::default()
        }
    }

    /// Create a new mock response with a transport fault.
    pub fn with_error(error: TransportError) -> Self {
        Self {
            error: Some(error),
            ..Self::default()
        }
    }

    /// Get the result, returning either the configured payload or error.
    fn get_result(&mut self) -> Result<String, TransportError> {
        self.call_count += 1;
        if let Some(error) = &self.error {
            return Err(error.clone());
        }
        Ok(self
            .data
            .clone()
            .unwrap_or_else(|| DEFAULT_MOCK_PAYLOAD.to_string()))
    }
}

/// Internal state for the mock transport.
#[derive(Default)]
struct MockTransportState {
    calls: Vec<MockCall>,
    get_response: MockResponse,
}

impl MockTransportState {
    fn record_call(&mut self, method: &str, args: Vec<String>) {
        self.calls.push(MockCall::new(method, args));
    }
}

/// Mock transport for testing.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
///
/// use sillywalks::testing::{MockResponse, MockTransport};
/// use sillywalks::{Transport, WalksClient};
///
/// let mock = Arc::new(MockTransport::new());
/// mock.configure_get(MockResponse::with_data(
///     r#"[{"name": "very silly", "silliness": 9}]"#.to_string(),
/// ));
///
/// let walks = WalksClient::new(Arc::clone(&mock) as Arc<dyn Transport>);
/// assert_eq!(walks.list_walks().unwrap().len(), 1);
///
/// // Verify calls were made
/// assert!(mock.was_called("get"));
/// assert_eq!(mock.call_count("get"), 1);
/// ```
#[derive(Default)]
pub struct MockTransport {
    state: Mutex<MockTransportState>,
}

impl MockTransport {
    /// Create a new mock transport that answers `[]`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the response for get() calls.
    pub fn configure_get(&self, response: MockResponse) {
        self.state.lock().unwrap_or_else(|e| e.into_inner()).get_response = response;
    }

    /// Number of times the configured get() response has been served.
    #[must_use]
    pub fn get_response_uses(&self) -> u32 {
        self.state
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get_response
            .call_count
    }

    /// Check if a method was called.
    ///
    /// # Arguments
    ///
    /// * `method` - Method name (e.g., "get")
    #[must_use]
    pub fn was_called(&self, method: &str) -> bool {
        self.state
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .calls
            .iter()
            .any(|call| call.method == method)
    }

    /// Get the number of times a method was called.
    #[must_use]
    pub fn call_count(&self, method: &str) -> usize {
        self.state
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .calls
            .iter()
            .filter(|call| call.method == method)
            .count()
    }

    /// Get recorded calls, optionally filtered by method.
    #[must_use]
    pub fn get_calls(&self, method: Option<&str>) -> Vec<MockCall> {
        let state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        match method {
            Some(m) => state.calls.iter().filter(|call| call.method == m).cloned().collect(),
            None => state.calls.clone(),
        }
    }

    /// Reset recorded calls and the response use count.
    ///
    /// The configured response itself is kept.
    pub fn reset(&self) {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.calls.clear();
        state.get_response.call_count = 0;
    }
}

impl Transport for MockTransport {
    fn get(&self, url: &str) -> Result<String, TransportError> {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.record_call("get", vec![url.to_string()]);
        state.get_response.get_result()
    }
}
