//! # Neighbors Crate
//!
//! Finds the raters whose tastes are closest to a target profile.
//!
//! ## Components
//!
//! ### Similarity
//! A bounded `[0, 1]` score between two sparse profiles, computed over the
//! items both have rated (closeness for one shared item, cosine of the angle
//! between the shared-score vectors otherwise).
//!
//! ### Neighbor Ranker
//! Scores every corpus rater against the target and keeps the top K
//! (25 by default).
//!
//! ### Target draw
//! Pulls a random (or named) rater out of the corpus to act as the target.
//!
//! ## Example Usage
//!
//! ```ignore
//! use neighbors::{NeighborRanker, target::draw_random_target};
//!
//! let mut corpus = dataset.corpus;
//! let target = draw_random_target(&mut corpus, &mut rand::rng())?;
//!
//! let neighbors = NeighborRanker::new().with_k(25).rank(&corpus, &target.profile);
//! ```

pub mod error;
pub mod types;
pub mod similarity;
pub mod ranker;
pub mod target;

// Re-export commonly used types
pub use error::{NeighborError, Result};
pub use types::{NeighborScore, TargetProfile};
pub use similarity::{angle_between, similarity, unit_vector};
pub use ranker::{DEFAULT_NEIGHBORS, NeighborRanker, rank};
pub use target::{draw_random_target, take_target};
