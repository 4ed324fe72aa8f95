//! Filter implementations for the candidate pipeline.

pub mod already_seen;

// Re-export for convenience
pub use already_seen::AlreadySeenFilter;
