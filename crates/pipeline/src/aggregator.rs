//! Suggestion Aggregator - turns neighbors into suggested items
//!
//! ## Algorithm
//! 1. Union every item rated by any neighbor (deduplicated)
//! 2. Run the filter pipeline (by default: drop items the target has rated)
//! 3. Shuffle the survivors with the injected random source
//! 4. Return the first `count`
//!
//! Asking for more suggestions than there are candidates is an error, not a
//! shorter list.

use crate::error::{Result, SuggestionError};
use crate::filter_pipeline::FilterPipeline;
use crate::filters::AlreadySeenFilter;
use data_loader::{ItemName, RatingCorpus, RatingProfile};
use neighbors::NeighborScore;
use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::BTreeSet;
use tracing::{debug, instrument};

/// Number of suggestions returned when none is configured
pub const DEFAULT_SUGGESTIONS: usize = 15;

/// Builds the suggestion list from a ranked set of neighbors
pub struct SuggestionAggregator {
    /// Exact number of suggestions returned
    count: usize,
    filters: FilterPipeline,
}

impl SuggestionAggregator {
    /// Create an aggregator returning [`DEFAULT_SUGGESTIONS`] items with the
    /// already-seen filter installed
    pub fn new() -> Self {
        Self {
            count: DEFAULT_SUGGESTIONS,
            filters: FilterPipeline::new().add_filter(AlreadySeenFilter),
        }
    }

    /// Configure how many suggestions to return (default: 15)
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Distinct, filtered candidate items in name order, before shuffling
    pub fn candidates(
        &self,
        corpus: &RatingCorpus,
        neighbors: &[NeighborScore],
        target: &RatingProfile,
    ) -> Result<Vec<ItemName>> {
        let mut union: BTreeSet<&ItemName> = BTreeSet::new();
        for neighbor in neighbors {
            let profile = corpus
                .get(neighbor.rater_id)
                .ok_or(SuggestionError::UnknownNeighbor(neighbor.rater_id))?;
            union.extend(profile.items());
        }

        let candidates: Vec<ItemName> = union.into_iter().cloned().collect();
        let filtered = self.filters.apply(candidates, target)?;
        Ok(filtered)
    }

    /// Produce exactly `count` distinct suggestions, none of them in `target`
    #[instrument(skip_all, fields(neighbors = neighbors.len(), count = self.count))]
    pub fn aggregate<R: Rng + ?Sized>(
        &self,
        corpus: &RatingCorpus,
        neighbors: &[NeighborScore],
        target: &RatingProfile,
        rng: &mut R,
    ) -> Result<Vec<ItemName>> {
        let mut candidates = self.candidates(corpus, neighbors, target)?;
        debug!("{} candidate items after filtering", candidates.len());

        if candidates.len() < self.count {
            return Err(SuggestionError::Insufficient {
                available: candidates.len(),
                requested: self.count,
            });
        }

        candidates.shuffle(rng);
        candidates.truncate(self.count);
        Ok(candidates)
    }
}

impl Default for SuggestionAggregator {
    fn default() -> Self {
        Self::new()
    }
}

/// Aggregate `count` suggestions from `neighbors` with the default filters
pub fn aggregate<R: Rng + ?Sized>(
    corpus: &RatingCorpus,
    neighbors: &[NeighborScore],
    target: &RatingProfile,
    count: usize,
    rng: &mut R,
) -> Result<Vec<ItemName>> {
    SuggestionAggregator::new()
        .with_count(count)
        .aggregate(corpus, neighbors, target, rng)
}
