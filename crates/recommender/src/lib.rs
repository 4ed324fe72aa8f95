//! Recommender crate for the ReelRecs suggestion engine.
//!
//! This crate contains the orchestrator that runs neighbor ranking and
//! suggestion aggregation as one session step.

pub mod orchestrator;

pub use orchestrator::{RecommendationOrchestrator, Recommendations, RecommenderConfig};
