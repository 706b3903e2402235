//! Resource clients.

pub mod walks;

// Re-exports
pub use walks::{filter_silly, parse_walks, WalksClient};
