//! Filter to remove items the target has already rated.
//!
//! This is the first filter in the pipeline, as there's no point in
//! suggesting a movie the user has already seen.

use crate::traits::Filter;
use anyhow::Result;
use data_loader::{ItemName, RatingProfile};

/// Removes candidates that appear in the target profile.
pub struct AlreadySeenFilter;

impl Filter for AlreadySeenFilter {
    fn name(&self) -> &str {
        "AlreadySeenFilter"
    }

    fn apply(&self, candidates: Vec<ItemName>, target: &RatingProfile) -> Result<Vec<ItemName>> {
        let filtered: Vec<ItemName> = candidates
            .into_iter()
            .filter(|item| !target.contains(item))
            .collect();
        Ok(filtered)
    }
}
