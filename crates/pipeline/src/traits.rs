//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! extensible filters to be applied to candidate item lists.

use anyhow::Result;
use data_loader::{ItemName, RatingProfile};

/// Core trait for filtering candidate items.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - `Send + Sync` allows filters to be shared freely
/// - Filters take ownership of the Vec<ItemName> and return a filtered Vec
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a list of candidate items.
    ///
    /// # Arguments
    /// * `candidates` - The candidates to filter (takes ownership)
    /// * `target` - The profile suggestions are being made for
    ///
    /// # Returns
    /// * `Ok(Vec<ItemName>)` - The remaining candidates, order preserved
    /// * `Err` - If filtering fails
    fn apply(&self, candidates: Vec<ItemName>, target: &RatingProfile) -> Result<Vec<ItemName>>;
}
