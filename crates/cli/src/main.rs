mod input;
mod output;

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use colored::Colorize;
use data_loader::{Dataset, RaterId};
use neighbors::{DEFAULT_NEIGHBORS, TargetProfile, draw_random_target, take_target};
use pipeline::{DEFAULT_SUGGESTIONS, SuggestionError};
use rand::SeedableRng;
use rand::rngs::StdRng;
use recommender::{RecommendationOrchestrator, RecommenderConfig};
use std::io;
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;

/// ReelRecs - Movie suggestions from raters with overlapping tastes
#[derive(Parser)]
#[command(name = "reel-recs")]
#[command(about = "Movie suggestions from raters with overlapping tastes", long_about = None)]
struct Cli {
    /// Path to the MovieLens latest-small directory (movies.csv, ratings.csv)
    #[arg(short, long, default_value = "data/ml-latest-small")]
    data_dir: PathBuf,

    /// Seed for the random source, for reproducible runs
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Show progress logs (RUST_LOG overrides this)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Suggest movies for a random rater, a chosen rater, or your own ratings
    Recommend {
        /// Use a random rater's ratings instead of entering your own
        #[arg(long, conflicts_with = "rater")]
        random: bool,

        /// Use this rater's ratings instead of entering your own
        #[arg(long)]
        rater: Option<RaterId>,

        /// Number of similar raters to draw suggestions from
        #[arg(long, default_value_t = DEFAULT_NEIGHBORS)]
        neighbors: usize,

        /// Number of suggestions to show
        #[arg(long, default_value_t = DEFAULT_SUGGESTIONS)]
        count: usize,

        /// Also show the similar raters and their scores
        #[arg(long)]
        explain: bool,
    },

    /// Search for movies by title
    Search {
        /// Movie title to search for (case-insensitive substring match)
        #[arg(long)]
        title: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so they never interleave with the prompts
    let default_filter = if cli.verbose { "info" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .with_writer(io::stderr)
        .init();

    println!("Loading MovieLens dataset from {}...", cli.data_dir.display());
    let start = Instant::now();
    let dataset = Dataset::load_from_files(&cli.data_dir)
        .with_context(|| format!("Failed to load dataset from {}", cli.data_dir.display()))?;
    println!("{} Loaded dataset in {:?}", "✓".green(), start.elapsed());

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    match cli.command {
        Commands::Recommend {
            random,
            rater,
            neighbors,
            count,
            explain,
        } => {
            let config = RecommenderConfig::default()
                .with_neighbors(neighbors)
                .with_suggestions(count);
            handle_recommend(dataset, &mut rng, random, rater, config, explain)?
        }
        Commands::Search { title } => handle_search(&dataset, &title)?,
    }

    Ok(())
}

/// Handle the 'recommend' command
fn handle_recommend(
    dataset: Dataset,
    rng: &mut StdRng,
    random: bool,
    rater: Option<RaterId>,
    config: RecommenderConfig,
    explain: bool,
) -> Result<()> {
    let Dataset {
        catalog,
        mut corpus,
    } = dataset;
    let mut stdout = io::stdout();

    // The seed rater must leave the corpus before ranking starts
    let target = match (random, rater) {
        (_, Some(rater_id)) => take_target(&mut corpus, rater_id)?,
        (true, None) => draw_random_target(&mut corpus, rng)?,
        (false, None) => {
            let profile = input::collect_profile(io::stdin().lock(), &mut stdout, &catalog)?;
            info!("Collected {} ratings from input", profile.len());
            TargetProfile::from_profile(profile)
        }
    };

    let header = match target.rater_id {
        Some(rater_id) => format!("Here is the membership set you will be using (rater {}):", rater_id),
        None => "Here is your membership set:".to_string(),
    };
    output::print_profile(&mut stdout, &header, &target.profile)?;

    let orchestrator = RecommendationOrchestrator::new(config);
    let recommendations = orchestrator
        .recommend(&corpus, &target.profile, rng)
        .map_err(|err| match err.downcast_ref::<SuggestionError>() {
            Some(SuggestionError::Insufficient {
                available,
                requested,
            }) => anyhow!(
                "Only {} unseen movies among the closest raters, but {} were requested; \
                 try a smaller --count or a larger --neighbors",
                available,
                requested
            ),
            _ => err,
        })?;

    if explain {
        output::print_neighbors(&mut stdout, &recommendations.neighbors)?;
    }
    output::print_suggestions(&mut stdout, &recommendations.suggestions)?;
    Ok(())
}

/// Handle the 'search' command
fn handle_search(dataset: &Dataset, title: &str) -> Result<()> {
    let matches = dataset.catalog.search(title);
    output::print_search_results(&mut io::stdout(), title, &matches, 20)?;
    Ok(())
}
