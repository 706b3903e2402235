//! Data model types.

pub mod walks;

// Re-exports
pub use walks::WalkRecord;
