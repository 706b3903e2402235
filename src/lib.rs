//! Silly walks client for Rust
//!
//! Fetches the walk list from the Ministry's registry and keeps only the
//! walks that are sillier than a threshold (5 by default).
//!
//! The network is reached through the [`Transport`] trait, so any fetcher
//! can be injected. [`testing::MockTransport`] is provided for tests.
//!
//! # Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use sillywalks::testing::{MockResponse, MockTransport};
//! use sillywalks::{SillyWalksClient, WalksConfig};
//!
//! let mock = Arc::new(MockTransport::new());
//! mock.configure_get(MockResponse::with_data(
//!     r#"[{"name": "unsilly", "silliness": 0}, {"name": "very silly", "silliness": 9}]"#
//!         .to_string(),
//! ));
//!
//! let client = SillyWalksClient::with_transport(mock, WalksConfig::default());
//! let walks = client.walks().list_walks().unwrap();
//! assert_eq!(walks.len(), 1);
//! assert!(walks[0].to_string().contains("very silly"));
//! ```

pub mod client;
pub mod clients;
pub mod config;
pub mod error;
pub mod testing;
pub mod transport;
pub mod types;

// Re-exports
pub use client::SillyWalksClient;
pub use clients::{filter_silly, parse_walks, WalksClient};
pub use config::{WalksConfig, DEFAULT_SILLINESS_THRESHOLD, DEFAULT_WALKS_URL};
pub use error::{Error, TransportError};
pub use transport::{HttpTransport, Transport};
pub use types::WalkRecord;
