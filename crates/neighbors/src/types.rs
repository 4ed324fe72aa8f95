//! Shared types produced by the neighbors crate.

use data_loader::{RaterId, RatingProfile};

/// A corpus rater together with its similarity to the target profile
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NeighborScore {
    pub rater_id: RaterId,
    /// Similarity in `[0, 1]`
    pub similarity: f64,
}

impl NeighborScore {
    pub fn new(rater_id: RaterId, similarity: f64) -> Self {
        Self {
            rater_id,
            similarity,
        }
    }
}

/// The profile recommendations are computed for.
///
/// `rater_id` is set when the profile was drawn out of the corpus and
/// `None` when it was entered by hand.
#[derive(Debug, Clone)]
pub struct TargetProfile {
    pub rater_id: Option<RaterId>,
    pub profile: RatingProfile,
}

impl TargetProfile {
    /// Wrap a profile that did not come from the corpus
    pub fn from_profile(profile: RatingProfile) -> Self {
        Self {
            rater_id: None,
            profile,
        }
    }
}
