//! # Data Loader Crate
//!
//! Loads the MovieLens "latest-small" dataset (`movies.csv`, `ratings.csv`)
//! into the in-memory structures the recommender works on.
//!
//! ## Main Components
//!
//! - **types**: Domain types (Movie, Rating, RatingProfile, RatingCorpus, Catalog)
//! - **parser**: Parse the CSV files into Rust structs, title normalization
//! - **index**: Build the catalog and corpus, validate them
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::Dataset;
//! use std::path::Path;
//!
//! let dataset = Dataset::load_from_files(Path::new("data/ml-latest-small"))?;
//!
//! let profile = dataset.corpus.get(1).unwrap();
//! println!("Rater 1 rated {} movies", profile.len());
//! ```

pub mod error;
pub mod types;
pub mod parser;
pub mod index;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, Result};
pub use parser::normalize_title;
pub use types::{
    // Type aliases
    RaterId,
    MovieId,
    ItemName,
    // Core types
    Movie,
    Rating,
    RatingProfile,
    RatingCorpus,
    Catalog,
    Dataset,
    // Helpers
    MAX_RATING,
    normalize_rating,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_dataset() {
        let dataset = Dataset::default();
        let (movies, raters, ratings) = dataset.counts();

        assert_eq!(movies, 0);
        assert_eq!(raters, 0);
        assert_eq!(ratings, 0);
    }

    #[test]
    fn test_insert_movie() {
        let mut catalog = Catalog::new();

        catalog.insert_movie(Movie {
            id: 1,
            title: "Toy Story (1995)".to_string(),
            name: normalize_title("Toy Story (1995)"),
            year: Some(1995),
            genres: vec!["Animation".to_string(), "Comedy".to_string()],
        });

        let retrieved = catalog.get_movie(1).unwrap();
        assert_eq!(retrieved.year, Some(1995));
        assert_eq!(catalog.name_of(1).map(String::as_str), Some("toy story"));
        assert!(catalog.contains_name("toy story"));
        assert!(!catalog.contains_name("Toy Story (1995)"));
    }

    #[test]
    fn test_profile_rejects_out_of_range_scores() {
        let mut profile = RatingProfile::new();

        assert!(profile.insert("toy story", 1.0).is_ok());
        assert!(profile.insert("heat", 0.0).is_ok());
        assert!(matches!(
            profile.insert("jumanji", 1.2),
            Err(DataLoadError::ScoreOutOfRange { .. })
        ));
        assert!(profile.insert("casino", -0.1).is_err());
        assert!(profile.insert("sabrina", f64::NAN).is_err());
        assert_eq!(profile.len(), 2);
    }

    #[test]
    fn test_profile_is_name_ordered() {
        let profile = RatingProfile::from_scores([("zulu", 0.2), ("alpha", 0.4), ("mike", 0.6)]).unwrap();
        let items: Vec<&str> = profile.items().map(String::as_str).collect();
        assert_eq!(items, vec!["alpha", "mike", "zulu"]);
    }

    #[test]
    fn test_profile_serializes_as_object() {
        let profile = RatingProfile::from_scores([("heat", 0.8)]).unwrap();
        let json = serde_json::to_string(&profile).unwrap();
        assert_eq!(json, r#"{"heat":0.8}"#);
    }

    #[test]
    fn test_corpus_remove() {
        let mut corpus = RatingCorpus::new();
        corpus.insert_score(7, "heat", 0.5).unwrap();
        corpus.insert_score(3, "heat", 0.1).unwrap();

        assert_eq!(corpus.rater_ids().collect::<Vec<_>>(), vec![3, 7]);
        let removed = corpus.remove(7).unwrap();
        assert_eq!(removed.get("heat"), Some(0.5));
        assert!(!corpus.contains(7));
        assert!(corpus.remove(7).is_none());
    }

    #[test]
    fn test_catalog_search() {
        let mut catalog = Catalog::new();
        for (id, title) in [(1, "Toy Story (1995)"), (2, "Toy Story 2 (1999)"), (3, "Heat (1995)")] {
            catalog.insert_movie(Movie {
                id,
                title: title.to_string(),
                name: normalize_title(title),
                year: None,
                genres: vec![],
            });
        }

        let hits: Vec<u32> = catalog.search("TOY story").iter().map(|m| m.id).collect();
        assert_eq!(hits, vec![1, 2]);
        assert!(catalog.search("matrix").is_empty());
    }
}
