//! Error types for suggestion aggregation.

use data_loader::RaterId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SuggestionError {
    /// Fewer distinct candidates survived filtering than were requested
    #[error("Insufficient suggestions: {available} candidates available, {requested} requested")]
    Insufficient { available: usize, requested: usize },

    /// A neighbor id that has no profile in the corpus
    #[error("Neighbor {0} is not in the corpus")]
    UnknownNeighbor(RaterId),

    /// A filter in the pipeline failed
    #[error(transparent)]
    Filter(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, SuggestionError>;
