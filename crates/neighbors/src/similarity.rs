//! Similarity between two sparse rating profiles
//!
//! Profiles only overlap partially, so the score is computed over the items
//! both have rated:
//!
//! 1. No shared items: 0, the pair is incomparable
//! 2. One shared item: `1 - |a - b|`, since the angle between two
//!    one-dimensional vectors is always 0° or 180° and says nothing
//! 3. `a` strictly contained in `b`: 0, `b` has rated everything `a` has
//!    and more. Only this direction is checked; `b ⊂ a` falls through
//! 4. Otherwise: `cos` of the angle between the shared-score vectors
//!
//! All scores are non-negative, so the angle lies in `[0°, 90°]` and every
//! branch lands in `[0, 1]`.

use data_loader::RatingProfile;

/// Compute the similarity of `a` (a corpus profile) to `b` (the target)
pub fn similarity(a: &RatingProfile, b: &RatingProfile) -> f64 {
    // Shared scores, in item-name order for both vectors
    let (va, vb): (Vec<f64>, Vec<f64>) = a
        .iter()
        .filter_map(|(item, score_a)| b.get(item).map(|score_b| (score_a, score_b)))
        .unzip();

    match va.len() {
        0 => return 0.0,
        1 => return 1.0 - (va[0] - vb[0]).abs(),
        _ => {}
    }

    let a_strictly_within_b = va.len() == a.len() && b.len() > a.len();
    if a_strictly_within_b {
        return 0.0;
    }

    // A zero vector has no direction to compare
    angle_between(&va, &vb).map_or(0.0, f64::cos)
}

/// Scale a vector to unit Euclidean length.
///
/// Returns `None` for a zero-length vector.
pub fn unit_vector(v: &[f64]) -> Option<Vec<f64>> {
    let norm = v.iter().map(|x| x * x).sum::<f64>().sqrt();
    if norm == 0.0 || !norm.is_finite() {
        return None;
    }
    Some(v.iter().map(|x| x / norm).collect())
}

/// Angle in radians between two vectors of equal length.
///
/// The dot product of the unit vectors is clipped to `[-1, 1]` before
/// `acos` so rounding can't push it out of the domain.
pub fn angle_between(v1: &[f64], v2: &[f64]) -> Option<f64> {
    debug_assert_eq!(v1.len(), v2.len());
    let u1 = unit_vector(v1)?;
    let u2 = unit_vector(v2)?;
    let dot: f64 = u1.iter().zip(&u2).map(|(x, y)| x * y).sum();
    Some(dot.clamp(-1.0, 1.0).acos())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn profile(scores: &[(&str, f64)]) -> RatingProfile {
        RatingProfile::from_scores(scores.iter().map(|&(k, v)| (k, v))).unwrap()
    }

    #[test]
    fn test_no_overlap_is_zero() {
        let a = profile(&[("heat", 0.8), ("casino", 0.4)]);
        let b = profile(&[("toy story", 1.0)]);
        assert_eq!(similarity(&a, &b), 0.0);
        assert_eq!(similarity(&RatingProfile::new(), &b), 0.0);
    }

    #[test]
    fn test_single_overlap_uses_closeness() {
        let a = profile(&[("toy story", 1.0)]);
        let b = profile(&[("toy story", 0.6)]);
        assert!((similarity(&a, &b) - 0.6).abs() < EPS);

        // Single overlap wins over containment: `a` has one item, `b` more
        let a = profile(&[("toy story", 0.2)]);
        let b = profile(&[("toy story", 0.2), ("heat", 1.0)]);
        assert!((similarity(&a, &b) - 1.0).abs() < EPS);
    }

    #[test]
    fn test_strict_subset_is_zero() {
        let a = profile(&[("x", 0.8), ("y", 0.4)]);
        let b = profile(&[("x", 0.8), ("y", 0.4), ("z", 1.0)]);
        assert_eq!(similarity(&a, &b), 0.0);
    }

    #[test]
    fn test_subset_check_is_one_directional() {
        // b ⊂ a is not zeroed
        let a = profile(&[("x", 0.8), ("y", 0.4), ("z", 1.0)]);
        let b = profile(&[("x", 0.8), ("y", 0.4)]);
        assert!((similarity(&a, &b) - 1.0).abs() < EPS);
    }

    #[test]
    fn test_identical_profiles_are_one() {
        let a = profile(&[("x", 0.8), ("y", 0.4)]);
        let b = profile(&[("x", 0.8), ("y", 0.4)]);
        assert!((similarity(&a, &b) - 1.0).abs() < EPS);
    }

    #[test]
    fn test_cosine_over_shared_items() {
        // Shared items x, y: (1, 0) vs (1, 1) -> 45°
        let a = profile(&[("x", 1.0), ("y", 0.0), ("only_a", 0.5)]);
        let b = profile(&[("x", 1.0), ("y", 1.0), ("only_b", 0.5)]);
        let expected = std::f64::consts::FRAC_PI_4.cos();
        assert!((similarity(&a, &b) - expected).abs() < EPS);
    }

    #[test]
    fn test_orthogonal_vectors_are_zero() {
        let a = profile(&[("x", 1.0), ("y", 0.0), ("only_a", 0.5)]);
        let b = profile(&[("x", 0.0), ("y", 1.0)]);
        assert!(similarity(&a, &b).abs() < EPS);
    }

    #[test]
    fn test_zero_vector_is_incomparable() {
        let a = profile(&[("x", 0.0), ("y", 0.0), ("only_a", 0.5)]);
        let b = profile(&[("x", 0.6), ("y", 0.2)]);
        assert_eq!(similarity(&a, &b), 0.0);
    }

    #[test]
    fn test_range_over_mixed_profiles() {
        let profiles = [
            profile(&[("a", 0.1), ("b", 0.9), ("c", 0.5)]),
            profile(&[("a", 1.0), ("c", 0.0), ("d", 0.3)]),
            profile(&[("b", 0.2), ("c", 0.7)]),
            profile(&[("a", 0.0), ("b", 0.0), ("c", 1.0), ("d", 1.0)]),
            profile(&[("d", 0.4)]),
        ];
        for a in &profiles {
            for b in &profiles {
                let s = similarity(a, b);
                assert!((0.0..=1.0 + EPS).contains(&s), "similarity {s} out of range");
            }
        }
    }

    #[test]
    fn test_angle_between_clips_rounding() {
        let v = [0.3, 0.3, 0.3];
        let angle = angle_between(&v, &v).unwrap();
        assert!(angle.abs() < 1e-6);
        assert!(unit_vector(&[0.0, 0.0]).is_none());
    }
}
