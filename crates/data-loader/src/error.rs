//! Error types for the data-loader crate.
//!
//! Loading failures (missing files, malformed CSV rows, dangling movie ids)
//! and violations of the profile invariant (every score in `[0, 1]`) share
//! one enum so callers can propagate them with `?`.

use thiserror::Error;

/// Errors that can occur while loading the dataset or building profiles
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// File could not be found or opened
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The CSV reader itself failed (bad quoting, unreadable header, ...)
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A row in a data file couldn't be parsed
    #[error("Parse error at line {line} in {file}: {reason}")]
    ParseError {
        file: String,
        line: usize,
        reason: String,
    },

    /// A data field had an invalid value
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    /// Referenced entity doesn't exist (e.g., rating for a movie not in the catalog)
    #[error("Missing reference: {entity} with id {id}")]
    MissingReference { entity: String, id: u32 },

    /// A normalized score fell outside `[0, 1]`.
    ///
    /// Every profile is built through [`crate::RatingProfile::insert`], so
    /// this is the single place the profile invariant is enforced.
    #[error("Score {score} for '{item}' is outside [0, 1]")]
    ScoreOutOfRange { item: String, score: f64 },

    /// Data validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;
