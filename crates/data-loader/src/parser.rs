//! Parser for the MovieLens "latest-small" CSV files.
//!
//! - movies.csv: movieId,title,genres
//! - ratings.csv: userId,movieId,rating,timestamp
//!
//! Both files carry a header row. Titles containing commas are quoted,
//! e.g. `11,"American President, The (1995)",Comedy|Drama|Romance`, which is
//! why rows go through the `csv` reader instead of a plain `split(',')`.

use crate::error::{DataLoadError, Result};
use crate::types::*;
use serde::Deserialize;
use std::fs::File;
use std::path::Path;

pub const MOVIES_FILE: &str = "movies.csv";
pub const RATINGS_FILE: &str = "ratings.csv";

#[derive(Debug, Deserialize)]
struct MovieRow {
    #[serde(rename = "movieId")]
    movie_id: MovieId,
    title: String,
    genres: String,
}

#[derive(Debug, Deserialize)]
struct RatingRow {
    #[serde(rename = "userId")]
    user_id: RaterId,
    #[serde(rename = "movieId")]
    movie_id: MovieId,
    rating: f32,
    timestamp: i64,
}

fn open_csv(path: &Path) -> Result<csv::Reader<File>> {
    if !path.exists() {
        return Err(DataLoadError::FileNotFound {
            path: path.display().to_string(),
        });
    }
    let reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)?;
    Ok(reader)
}

/// Turn a row-level deserialize failure into a ParseError with its line.
///
/// `fallback_line` is used when the reader has no position to report.
fn row_error(file: &str, fallback_line: usize, err: csv::Error) -> DataLoadError {
    let line = err
        .position()
        .map(|pos| pos.line() as usize)
        .unwrap_or(fallback_line);
    DataLoadError::ParseError {
        file: file.to_string(),
        line,
        reason: err.to_string(),
    }
}

/// Parse the movies.csv file
pub fn parse_movies(path: &Path) -> Result<Vec<Movie>> {
    let mut reader = open_csv(path)?;
    let mut movies = Vec::new();

    for (idx, row) in reader.deserialize::<MovieRow>().enumerate() {
        // Line 1 is the header
        let line_no = idx + 2;
        let row = row.map_err(|e| row_error(MOVIES_FILE, line_no, e))?;

        if row.title.is_empty() {
            return Err(DataLoadError::ParseError {
                file: MOVIES_FILE.to_string(),
                line: line_no,
                reason: "Missing title".to_string(),
            });
        }

        movies.push(Movie {
            id: row.movie_id,
            name: normalize_title(&row.title),
            year: extract_year_from_title(&row.title),
            genres: parse_genres(&row.genres),
            title: row.title,
        });
    }

    Ok(movies)
}

/// Parse the ratings.csv file
pub fn parse_ratings(path: &Path) -> Result<Vec<Rating>> {
    let mut reader = open_csv(path)?;
    let mut ratings = Vec::new();

    for (idx, row) in reader.deserialize::<RatingRow>().enumerate() {
        let line_no = idx + 2;
        let row = row.map_err(|e| row_error(RATINGS_FILE, line_no, e))?;

        ratings.push(Rating {
            rater_id: row.user_id,
            movie_id: row.movie_id,
            rating: row.rating,
            timestamp: row.timestamp,
        });
    }

    Ok(ratings)
}

/// Normalize a display title into the item key used by profiles.
///
/// Lower-cases the title and strips a trailing parenthetical token:
/// "Toy Story (1995)" -> "toy story". Titles without one are only
/// lower-cased and trimmed. A title that is nothing but a parenthetical
/// keeps it.
pub fn normalize_title(title: &str) -> ItemName {
    let trimmed = title.trim();
    let stripped = match trimmed.rfind('(') {
        Some(start) if trimmed.ends_with(')') => trimmed[..start].trim_end(),
        _ => trimmed,
    };
    let key = if stripped.is_empty() { trimmed } else { stripped };
    key.to_lowercase()
}

/// Extract year from movie title
///
/// Example: "Toy Story (1995)" -> Some(1995)
///          "Movie Title" -> None
fn extract_year_from_title(title: &str) -> Option<u16> {
    let start = title.rfind('(')?;
    let end = title.rfind(')')?;
    if start < end {
        return title[start + 1..end].trim().parse::<u16>().ok();
    }
    None
}

/// Split pipe-separated genres
///
/// Example: "Action|Adventure|Sci-Fi" -> ["Action", "Adventure", "Sci-Fi"]
///          "(no genres listed)" -> []
fn parse_genres(s: &str) -> Vec<String> {
    s.split('|')
        .map(str::trim)
        .filter(|g| !g.is_empty() && *g != "(no genres listed)")
        .map(str::to_string)
        .collect()
}
