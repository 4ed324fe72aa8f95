//! Example: Rank the closest raters for one rater
//!
//! Run with: cargo run --package neighbors --example rank_neighbors
//!
//! This example shows how to:
//! 1. Load the MovieLens dataset
//! 2. Pull a rater out of the corpus to act as the target
//! 3. Rank the remaining raters against it
//! 4. Display the results

use data_loader::Dataset;
use neighbors::{NeighborRanker, take_target};
use std::path::Path;
use std::time::Instant;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter("info")
        .init();

    println!("=== ReelRecs Neighbor Ranking Example ===\n");

    println!("Loading MovieLens dataset...");
    let start = Instant::now();
    let Dataset { mut corpus, .. } = Dataset::load_from_files(Path::new("data/ml-latest-small"))?;
    println!("Loaded dataset in {:?}\n", start.elapsed());

    // Rater 1 becomes the target and leaves the corpus
    let target = take_target(&mut corpus, 1)?;
    println!("Target rater 1 rated {} movies\n", target.profile.len());

    let ranker = NeighborRanker::new();
    let start = Instant::now();
    let neighbors = ranker.rank(&corpus, &target.profile);
    println!("Ranked {} raters in {:?}\n", corpus.len(), start.elapsed());

    println!("Top {} neighbors:", neighbors.len());
    for (i, neighbor) in neighbors.iter().enumerate() {
        let shared = corpus
            .get(neighbor.rater_id)
            .map(|p| p.items().filter(|item| target.profile.contains(item)).count())
            .unwrap_or(0);
        println!(
            "  {:>2}. rater {:<4} similarity {:.4} ({} shared movies)",
            i + 1,
            neighbor.rater_id,
            neighbor.similarity,
            shared
        );
    }

    Ok(())
}
