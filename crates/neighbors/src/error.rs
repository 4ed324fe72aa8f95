//! Error types for the neighbors crate.

use data_loader::RaterId;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum NeighborError {
    /// A random target was requested from a corpus with no raters
    #[error("Cannot draw a target profile from an empty corpus")]
    EmptyCorpus,

    /// The requested rater is not part of the corpus
    #[error("Rater {0} not found in corpus")]
    UnknownRater(RaterId),
}

pub type Result<T> = std::result::Result<T, NeighborError>;
