//! Testing utilities.
//!
//! Provides a mock transport for testing code that lists walks without
//! going over the network.

mod mock;

pub use mock::{MockCall, MockResponse, MockTransport, DEFAULT_MOCK_PAYLOAD};
