//! # Recommendation Orchestrator
//!
//! Coordinates one recommendation pass:
//! 1. Rank the corpus against the target profile (top K neighbors)
//! 2. Aggregate the neighbors' items into suggestions
//! 3. Return both, so callers can explain where suggestions came from
//!
//! The corpus is only read here. Removing a seed rater has to happen before
//! `recommend` is called.

use std::time::Instant;

use anyhow::{Context, Result};
use rand::Rng;
use tracing::{info, warn};

use data_loader::{ItemName, RatingCorpus, RatingProfile};
use neighbors::{DEFAULT_NEIGHBORS, NeighborRanker, NeighborScore};
use pipeline::{DEFAULT_SUGGESTIONS, SuggestionAggregator};

/// Session parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecommenderConfig {
    /// Number of neighbors kept by the ranker
    pub neighbors: usize,
    /// Number of suggestions returned
    pub suggestions: usize,
}

impl RecommenderConfig {
    pub fn with_neighbors(mut self, neighbors: usize) -> Self {
        self.neighbors = neighbors;
        self
    }

    pub fn with_suggestions(mut self, suggestions: usize) -> Self {
        self.suggestions = suggestions;
        self
    }
}

impl Default for RecommenderConfig {
    fn default() -> Self {
        Self {
            neighbors: DEFAULT_NEIGHBORS,
            suggestions: DEFAULT_SUGGESTIONS,
        }
    }
}

/// Result of one recommendation pass
#[derive(Debug, Clone)]
pub struct Recommendations {
    /// Neighbors the suggestions were drawn from, most similar first
    pub neighbors: Vec<NeighborScore>,
    /// Suggested items, in shuffled order
    pub suggestions: Vec<ItemName>,
}

/// Runs ranking and aggregation with one configuration
pub struct RecommendationOrchestrator {
    ranker: NeighborRanker,
    aggregator: SuggestionAggregator,
}

impl RecommendationOrchestrator {
    pub fn new(config: RecommenderConfig) -> Self {
        Self {
            ranker: NeighborRanker::new().with_k(config.neighbors),
            aggregator: SuggestionAggregator::new().with_count(config.suggestions),
        }
    }

    /// Main entry point: rank, then aggregate.
    ///
    /// Fails with a [`pipeline::SuggestionError`] (reachable through
    /// `downcast_ref`) when the neighbors don't offer enough unseen items.
    pub fn recommend<R: Rng + ?Sized>(
        &self,
        corpus: &RatingCorpus,
        target: &RatingProfile,
        rng: &mut R,
    ) -> Result<Recommendations> {
        let start_time = Instant::now();

        if target.is_empty() {
            warn!("Target profile is empty; every rater will score 0");
        }

        let neighbors = self.ranker.rank(corpus, target);
        info!(
            "Ranked {} raters, kept {} neighbors (best similarity: {:.3})",
            corpus.len(),
            neighbors.len(),
            neighbors.first().map_or(0.0, |n| n.similarity)
        );

        let suggestions = self
            .aggregator
            .aggregate(corpus, &neighbors, target, rng)
            .context("Failed to aggregate suggestions")?;
        info!("Selected {} suggestions", suggestions.len());

        info!(
            "Total time to compute recommendations: {:.2?}",
            start_time.elapsed()
        );
        Ok(Recommendations {
            neighbors,
            suggestions,
        })
    }
}

impl Default for RecommendationOrchestrator {
    fn default() -> Self {
        Self::new(RecommenderConfig::default())
    }
}
