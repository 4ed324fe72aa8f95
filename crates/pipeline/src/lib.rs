//! Aggregation of neighbor ratings into movie suggestions.
//!
//! This crate provides:
//! - Filter trait and implementations for candidate filtering
//! - FilterPipeline for composing filters
//! - SuggestionAggregator for turning ranked neighbors into suggestions
//!
//! ## Architecture
//! Candidates are processed in stages:
//! 1. Every item rated by a neighbor is collected (deduplicated)
//! 2. Filters remove unwanted candidates (already seen)
//! 3. The survivors are shuffled and the first `count` returned
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::SuggestionAggregator;
//!
//! let aggregator = SuggestionAggregator::new().with_count(15);
//! let suggestions = aggregator.aggregate(&corpus, &neighbors, &target, &mut rand::rng())?;
//! ```

pub mod error;
pub mod traits;
pub mod filters;
pub mod filter_pipeline;
pub mod aggregator;

// Re-export main types
pub use error::{Result, SuggestionError};
pub use traits::Filter;
pub use filter_pipeline::FilterPipeline;
pub use aggregator::{DEFAULT_SUGGESTIONS, SuggestionAggregator, aggregate};
