//! Neighbor Ranker - top-K nearest raters
//!
//! Scores every rater in the corpus against the target profile and keeps
//! the K most similar.
//!
//! ## Ordering
//! Scores are sorted ascending with a stable sort and the whole list is then
//! reversed. Raters with equal similarity therefore come out in the reverse
//! of corpus order (descending rater id). The result is identical on every
//! run for the same corpus and target.

use crate::similarity::similarity;
use crate::types::NeighborScore;
use data_loader::{RatingCorpus, RatingProfile};
use std::cmp::Ordering;
use tracing::{debug, instrument};

/// Number of neighbors kept when none is configured
pub const DEFAULT_NEIGHBORS: usize = 25;

/// Selects the K raters most similar to a target profile
#[derive(Debug, Clone)]
pub struct NeighborRanker {
    /// Maximum number of neighbors returned
    k: usize,
}

impl NeighborRanker {
    /// Create a ranker keeping [`DEFAULT_NEIGHBORS`] neighbors
    pub fn new() -> Self {
        Self {
            k: DEFAULT_NEIGHBORS,
        }
    }

    /// Configure how many neighbors to keep (default: 25)
    pub fn with_k(mut self, k: usize) -> Self {
        self.k = k;
        self
    }

    pub fn k(&self) -> usize {
        self.k
    }

    /// Rank every corpus rater against `target`.
    ///
    /// Returns `min(k, corpus.len())` entries, most similar first.
    #[instrument(skip_all, fields(corpus = corpus.len(), k = self.k))]
    pub fn rank(&self, corpus: &RatingCorpus, target: &RatingProfile) -> Vec<NeighborScore> {
        let mut scores: Vec<NeighborScore> = corpus
            .iter()
            .map(|(rater_id, profile)| NeighborScore::new(rater_id, similarity(profile, target)))
            .collect();

        // Stable ascending sort, then reverse: ties end up in reverse corpus order
        scores.sort_by(|a, b| {
            a.similarity
                .partial_cmp(&b.similarity)
                .unwrap_or(Ordering::Equal)
        });
        scores.reverse();
        scores.truncate(self.k);

        debug!(
            "Ranked {} raters, kept {} (best similarity: {:?})",
            corpus.len(),
            scores.len(),
            scores.first().map(|s| s.similarity)
        );
        scores
    }
}

impl Default for NeighborRanker {
    fn default() -> Self {
        Self::new()
    }
}

/// Rank `corpus` against `target` and keep the top `k`
pub fn rank(corpus: &RatingCorpus, target: &RatingProfile, k: usize) -> Vec<NeighborScore> {
    NeighborRanker::new().with_k(k).rank(corpus, target)
}
