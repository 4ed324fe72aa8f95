//! Drawing the target profile out of the corpus
//!
//! When no ratings are entered by hand, an existing rater serves as the
//! target. That rater is removed from the corpus first so it can't match
//! itself with a perfect score.

use crate::error::{NeighborError, Result};
use crate::types::TargetProfile;
use data_loader::{RaterId, RatingCorpus};
use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::info;

/// Pick a uniformly random rater, remove it from the corpus and return it
pub fn draw_random_target<R: Rng + ?Sized>(
    corpus: &mut RatingCorpus,
    rng: &mut R,
) -> Result<TargetProfile> {
    let rater_ids: Vec<RaterId> = corpus.rater_ids().collect();
    let rater_id = *rater_ids.choose(rng).ok_or(NeighborError::EmptyCorpus)?;
    take_target(corpus, rater_id)
}

/// Remove a specific rater from the corpus and return it as the target
pub fn take_target(corpus: &mut RatingCorpus, rater_id: RaterId) -> Result<TargetProfile> {
    let profile = corpus
        .remove(rater_id)
        .ok_or(NeighborError::UnknownRater(rater_id))?;

    info!(
        "Using rater {} as target ({} ratings, {} raters left)",
        rater_id,
        profile.len(),
        corpus.len()
    );

    Ok(TargetProfile {
        rater_id: Some(rater_id),
        profile,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn create_test_corpus() -> RatingCorpus {
        let mut corpus = RatingCorpus::new();
        for rater_id in 1..=20 {
            corpus.insert_score(rater_id, "toy story", 0.5).unwrap();
            corpus
                .insert_score(rater_id, format!("movie {rater_id}"), 1.0)
                .unwrap();
        }
        corpus
    }

    #[test]
    fn test_draw_removes_rater() {
        let mut corpus = create_test_corpus();
        let mut rng = StdRng::seed_from_u64(7);

        let target = draw_random_target(&mut corpus, &mut rng).unwrap();
        let rater_id = target.rater_id.unwrap();

        assert_eq!(corpus.len(), 19);
        assert!(!corpus.contains(rater_id));
        assert_eq!(target.profile.len(), 2);
        assert!(target.profile.contains(&format!("movie {rater_id}")));
    }

    #[test]
    fn test_draw_is_reproducible_with_seed() {
        let mut first = create_test_corpus();
        let mut second = create_test_corpus();

        let a = draw_random_target(&mut first, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = draw_random_target(&mut second, &mut StdRng::seed_from_u64(42)).unwrap();

        assert_eq!(a.rater_id, b.rater_id);
    }

    #[test]
    fn test_draw_from_empty_corpus() {
        let mut corpus = RatingCorpus::new();
        let mut rng = StdRng::seed_from_u64(1);
        let err = draw_random_target(&mut corpus, &mut rng).unwrap_err();
        assert_eq!(err, NeighborError::EmptyCorpus);
    }

    #[test]
    fn test_take_named_target() {
        let mut corpus = create_test_corpus();

        let target = take_target(&mut corpus, 5).unwrap();
        assert_eq!(target.rater_id, Some(5));
        assert!(!corpus.contains(5));

        assert_eq!(
            take_target(&mut corpus, 5).unwrap_err(),
            NeighborError::UnknownRater(5)
        );
    }
}
