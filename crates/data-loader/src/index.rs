//! Building the Catalog and RatingCorpus from parsed rows.
//!
//! - Catalog: movie id -> movie, plus the normalized name set
//! - RatingCorpus: rater id -> profile keyed by normalized name, with every
//!   0-5 rating rescaled into `[0, 1]`
//! - Dataset: both, loaded from a directory and validated

use crate::error::{DataLoadError, Result};
use crate::parser::{self, MOVIES_FILE, RATINGS_FILE};
use crate::types::*;
use std::path::Path;
use tracing::{debug, info};

impl Catalog {
    /// Build a catalog from parsed movies
    pub fn from_movies(movies: Vec<Movie>) -> Self {
        let mut catalog = Catalog::new();
        for movie in movies {
            catalog.insert_movie(movie);
        }
        catalog
    }
}

impl RatingCorpus {
    /// Build the corpus from raw ratings, keyed by catalog name.
    ///
    /// Each rating is rescaled with [`normalize_rating`]. If a rater rated
    /// two movies that normalize to the same name, the later row wins.
    pub fn from_ratings(catalog: &Catalog, ratings: &[Rating]) -> Result<Self> {
        let mut corpus = RatingCorpus::new();

        for rating in ratings {
            let name = catalog
                .name_of(rating.movie_id)
                .ok_or_else(|| DataLoadError::MissingReference {
                    entity: "Movie".to_string(),
                    id: rating.movie_id,
                })?;

            let stars = f64::from(rating.rating);
            if !(0.0..=MAX_RATING).contains(&stars) {
                return Err(DataLoadError::InvalidValue {
                    field: "rating".to_string(),
                    value: rating.rating.to_string(),
                });
            }

            corpus.insert_score(rating.rater_id, name.clone(), normalize_rating(stars))?;
        }

        Ok(corpus)
    }
}

impl Dataset {
    /// Load the catalog and corpus from a directory holding
    /// `movies.csv` and `ratings.csv`.
    ///
    /// The two files are parsed in parallel; building is sequential so the
    /// resulting corpus is identical on every run.
    pub fn load_from_files(data_dir: &Path) -> Result<Self> {
        info!("Loading MovieLens dataset from {:?}", data_dir);

        let movies_path = data_dir.join(MOVIES_FILE);
        let ratings_path = data_dir.join(RATINGS_FILE);

        let (movies, ratings) = rayon::join(
            || parser::parse_movies(&movies_path),
            || parser::parse_ratings(&ratings_path),
        );
        let movies = movies?;
        let ratings = ratings?;
        debug!("Parsed {} movies, {} ratings", movies.len(), ratings.len());

        let catalog = Catalog::from_movies(movies);
        let corpus = RatingCorpus::from_ratings(&catalog, &ratings)?;
        let dataset = Dataset::new(catalog, corpus);
        dataset.validate()?;

        let (movies, raters, ratings) = dataset.counts();
        info!(
            "Loaded {} movies, {} raters, {} ratings",
            movies, raters, ratings
        );
        Ok(dataset)
    }

    /// Validate data integrity
    ///
    /// Check that every profile item names a catalog movie and every score
    /// is within `[0, 1]`.
    pub fn validate(&self) -> Result<()> {
        for (rater_id, profile) in self.corpus.iter() {
            for (item, score) in profile.iter() {
                if !self.catalog.contains_name(item) {
                    return Err(DataLoadError::ValidationError(format!(
                        "rater {} rated '{}', which is not in the catalog",
                        rater_id, item
                    )));
                }
                if !(0.0..=1.0).contains(&score) {
                    return Err(DataLoadError::ScoreOutOfRange {
                        item: item.clone(),
                        score,
                    });
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn movie(id: MovieId, title: &str) -> Movie {
        Movie {
            id,
            title: title.to_string(),
            name: parser::normalize_title(title),
            year: None,
            genres: vec![],
        }
    }

    fn rating(rater_id: RaterId, movie_id: MovieId, rating: f32) -> Rating {
        Rating {
            rater_id,
            movie_id,
            rating,
            timestamp: 0,
        }
    }

    #[test]
    fn test_corpus_rescales_ratings() {
        let catalog = Catalog::from_movies(vec![movie(1, "Toy Story (1995)"), movie(2, "Heat (1995)")]);
        let ratings = vec![rating(1, 1, 5.0), rating(1, 2, 3.0), rating(2, 1, 0.5)];

        let corpus = RatingCorpus::from_ratings(&catalog, &ratings).unwrap();

        assert_eq!(corpus.len(), 2);
        let first = corpus.get(1).unwrap();
        assert_eq!(first.get("toy story"), Some(1.0));
        assert!((first.get("heat").unwrap() - 0.6).abs() < 1e-9);
        assert!((corpus.get(2).unwrap().get("toy story").unwrap() - 0.1).abs() < 1e-9);
    }

    #[test]
    fn test_corpus_missing_movie() {
        let catalog = Catalog::from_movies(vec![movie(1, "Toy Story (1995)")]);
        let err = RatingCorpus::from_ratings(&catalog, &[rating(1, 99, 4.0)]).unwrap_err();
        assert!(matches!(err, DataLoadError::MissingReference { id: 99, .. }));
    }

    #[test]
    fn test_corpus_rejects_out_of_range_rating() {
        let catalog = Catalog::from_movies(vec![movie(1, "Toy Story (1995)")]);
        let err = RatingCorpus::from_ratings(&catalog, &[rating(1, 1, 7.5)]).unwrap_err();
        assert!(matches!(err, DataLoadError::InvalidValue { .. }));
    }

    #[test]
    fn test_duplicate_names_keep_later_score() {
        // Two releases that share a title collapse onto one item
        let catalog = Catalog::from_movies(vec![
            movie(1, "Hamlet (1990)"),
            movie(2, "Hamlet (1996)"),
        ]);
        let ratings = vec![rating(1, 1, 2.0), rating(1, 2, 4.0)];

        let corpus = RatingCorpus::from_ratings(&catalog, &ratings).unwrap();
        let profile = corpus.get(1).unwrap();
        assert_eq!(profile.len(), 1);
        assert!((profile.get("hamlet").unwrap() - 0.8).abs() < 1e-9);
    }

    #[test]
    fn test_load_from_files() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(MOVIES_FILE),
            "movieId,title,genres\n1,Toy Story (1995),Animation\n2,Jumanji (1995),Adventure\n",
        )
        .unwrap();
        fs::write(
            dir.path().join(RATINGS_FILE),
            "userId,movieId,rating,timestamp\n1,1,4.0,1\n1,2,2.5,2\n2,2,5.0,3\n",
        )
        .unwrap();

        let dataset = Dataset::load_from_files(dir.path()).unwrap();
        assert_eq!(dataset.counts(), (2, 2, 3));
        assert!(dataset.catalog.contains_name("jumanji"));
        assert_eq!(dataset.corpus.get(2).unwrap().get("jumanji"), Some(1.0));
    }

    #[test]
    fn test_validate_flags_unknown_item() {
        let catalog = Catalog::from_movies(vec![movie(1, "Toy Story (1995)")]);
        let mut corpus = RatingCorpus::new();
        corpus.insert_score(1, "not a movie", 0.5).unwrap();

        let err = Dataset::new(catalog, corpus).validate().unwrap_err();
        assert!(matches!(err, DataLoadError::ValidationError(_)));
    }
}
