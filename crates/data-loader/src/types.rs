//! Core domain types for the MovieLens "latest-small" dataset.
//!
//! - Type aliases for domain clarity (RaterId, MovieId, ItemName)
//! - `Movie` and `Rating` mirror one row of `movies.csv` / `ratings.csv`
//! - `RatingProfile` is the sparse, normalized preference vector of one rater
//! - `RatingCorpus` holds every rater's profile, `Catalog` every movie

use crate::error::{DataLoadError, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};

// =============================================================================
// Type Aliases
// =============================================================================

/// Unique identifier for a rater (`userId` column)
pub type RaterId = u32;

/// Unique identifier for a movie (`movieId` column)
pub type MovieId = u32;

/// Normalized movie name used as the item key of every profile.
///
/// Lower-cased, with the trailing "(year)" token removed; see
/// [`crate::parser::normalize_title`].
pub type ItemName = String;

/// Upper bound of the star scale used by the source ratings
pub const MAX_RATING: f64 = 5.0;

/// Rescale a 0-5 star rating into the `[0, 1]` profile range
pub fn normalize_rating(stars: f64) -> f64 {
    stars / MAX_RATING
}

// =============================================================================
// Movie and Rating rows
// =============================================================================

/// Represents a movie in the catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    /// Display title exactly as found in the data, e.g. "Toy Story (1995)"
    pub title: String,
    /// Normalized item key, e.g. "toy story"
    pub name: ItemName,
    /// Year extracted from the title, when present
    pub year: Option<u16>,
    /// Pipe-separated genres split into a list; empty for "(no genres listed)"
    pub genres: Vec<String>,
}

/// A single raw rating from a rater for a movie
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Rating {
    pub rater_id: RaterId,
    pub movie_id: MovieId,
    /// Rating value on the 0-5 star scale
    pub rating: f32,
    /// Unix timestamp when rating was made
    pub timestamp: i64,
}

// =============================================================================
// RatingProfile
// =============================================================================

/// Sparse mapping from item to a normalized score in `[0, 1]`.
///
/// Items are kept in name order, so any sequence derived from a profile
/// (shared-item vectors, candidate lists) comes out in the same order on
/// every run.
///
/// Serializes as a plain JSON object. There is no `Deserialize`: every
/// profile goes through [`RatingProfile::insert`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RatingProfile {
    scores: BTreeMap<ItemName, f64>,
}

impl RatingProfile {
    pub fn new() -> Self {
        Self {
            scores: BTreeMap::new(),
        }
    }

    /// Build a profile from `(item, score)` pairs, validating every score
    pub fn from_scores<I, K>(scores: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, f64)>,
        K: Into<ItemName>,
    {
        let mut profile = Self::new();
        for (item, score) in scores {
            profile.insert(item, score)?;
        }
        Ok(profile)
    }

    /// Insert or replace the score for an item.
    ///
    /// Rejects scores outside `[0, 1]` (NaN included).
    pub fn insert(&mut self, item: impl Into<ItemName>, score: f64) -> Result<()> {
        let item = item.into();
        if !(0.0..=1.0).contains(&score) {
            return Err(DataLoadError::ScoreOutOfRange { item, score });
        }
        self.scores.insert(item, score);
        Ok(())
    }

    pub fn get(&self, item: &str) -> Option<f64> {
        self.scores.get(item).copied()
    }

    pub fn contains(&self, item: &str) -> bool {
        self.scores.contains_key(item)
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Rated items, in name order
    pub fn items(&self) -> impl Iterator<Item = &ItemName> {
        self.scores.keys()
    }

    /// `(item, score)` pairs, in name order
    pub fn iter(&self) -> impl Iterator<Item = (&ItemName, f64)> {
        self.scores.iter().map(|(item, &score)| (item, score))
    }
}

// =============================================================================
// RatingCorpus
// =============================================================================

/// Every rater's profile, keyed by rater id.
///
/// Iteration is in ascending rater id, which is also the order raters
/// appear in `ratings.csv`. Ranking tie-breaks depend on this order.
#[derive(Debug, Clone, Default)]
pub struct RatingCorpus {
    pub(crate) profiles: BTreeMap<RaterId, RatingProfile>,
}

impl RatingCorpus {
    pub fn new() -> Self {
        Self {
            profiles: BTreeMap::new(),
        }
    }

    /// Insert a whole profile, replacing any previous one for this rater
    pub fn insert_profile(&mut self, rater_id: RaterId, profile: RatingProfile) {
        self.profiles.insert(rater_id, profile);
    }

    /// Add one normalized score to a rater's profile, creating it if needed
    pub fn insert_score(
        &mut self,
        rater_id: RaterId,
        item: impl Into<ItemName>,
        score: f64,
    ) -> Result<()> {
        self.profiles.entry(rater_id).or_default().insert(item, score)
    }

    pub fn get(&self, rater_id: RaterId) -> Option<&RatingProfile> {
        self.profiles.get(&rater_id)
    }

    /// Remove a rater, returning its profile.
    ///
    /// Used once per session to pull the seed rater out before ranking.
    pub fn remove(&mut self, rater_id: RaterId) -> Option<RatingProfile> {
        self.profiles.remove(&rater_id)
    }

    pub fn contains(&self, rater_id: RaterId) -> bool {
        self.profiles.contains_key(&rater_id)
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    pub fn rater_ids(&self) -> impl Iterator<Item = RaterId> + '_ {
        self.profiles.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (RaterId, &RatingProfile)> {
        self.profiles.iter().map(|(&id, profile)| (id, profile))
    }

    /// Total number of scores across all profiles
    pub fn rating_count(&self) -> usize {
        self.profiles.values().map(|p| p.len()).sum()
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// Movie id to movie lookup, plus the set of normalized names.
///
/// Passed explicitly to everything that needs names: corpus building,
/// interactive input validation and title search.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub(crate) movies: HashMap<MovieId, Movie>,
    pub(crate) names: HashSet<ItemName>,
}

impl Catalog {
    pub fn new() -> Self {
        Self {
            movies: HashMap::new(),
            names: HashSet::new(),
        }
    }

    pub fn insert_movie(&mut self, movie: Movie) {
        self.names.insert(movie.name.clone());
        self.movies.insert(movie.id, movie);
    }

    pub fn get_movie(&self, id: MovieId) -> Option<&Movie> {
        self.movies.get(&id)
    }

    /// Normalized name for a movie id
    pub fn name_of(&self, id: MovieId) -> Option<&ItemName> {
        self.movies.get(&id).map(|m| &m.name)
    }

    /// Whether a normalized name belongs to some movie
    pub fn contains_name(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// Case-insensitive substring search over normalized names.
    ///
    /// Exact name matches come first, then the rest by name.
    pub fn search(&self, query: &str) -> Vec<&Movie> {
        let query = query.trim().to_lowercase();
        let mut matches: Vec<&Movie> = self
            .movies
            .values()
            .filter(|movie| movie.name.contains(&query))
            .collect();
        matches.sort_by(|a, b| {
            (a.name != query)
                .cmp(&(b.name != query))
                .then_with(|| a.name.cmp(&b.name))
                .then_with(|| a.id.cmp(&b.id))
        });
        matches
    }
}

// =============================================================================
// Dataset
// =============================================================================

/// Catalog and corpus loaded together for one session
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub catalog: Catalog,
    pub corpus: RatingCorpus,
}

impl Dataset {
    pub fn new(catalog: Catalog, corpus: RatingCorpus) -> Self {
        Self { catalog, corpus }
    }

    /// (movies, raters, ratings) counts for logging
    pub fn counts(&self) -> (usize, usize, usize) {
        (
            self.catalog.len(),
            self.corpus.len(),
            self.corpus.rating_count(),
        )
    }
}
