//! Interactive rating collection
//!
//! Reads lines of the form `<movie name> <rating>` until `quit` (any case)
//! or end of input. The name is matched against the catalog's normalized
//! names, so "Toy Story 4.5" rates "toy story". Rejected lines print the
//! reason and the loop keeps going.

use std::io::{BufRead, Write};

use anyhow::Result;
use data_loader::{Catalog, ItemName, MAX_RATING, RatingProfile, normalize_rating};
use thiserror::Error;

/// Why a single input line was rejected
#[derive(Error, Debug, PartialEq)]
pub enum EntryError {
    #[error("Expected '<movie name> <rating>', got '{0}'")]
    Malformed(String),

    #[error("Rating {0} is outside 0-5")]
    InvalidRating(f64),

    #[error("Movie '{0}' is not in the list")]
    UnknownItem(String),
}

/// One accepted input line
#[derive(Debug, PartialEq)]
pub enum Entry {
    /// Item name and its rating on the 0-5 star scale
    Rated(ItemName, f64),
    Quit,
}

/// Parse and validate one input line against the catalog
pub fn parse_entry(line: &str, catalog: &Catalog) -> Result<Entry, EntryError> {
    let line = line.trim();
    if line.eq_ignore_ascii_case("quit") {
        return Ok(Entry::Quit);
    }

    let mut tokens: Vec<&str> = line.split_whitespace().collect();
    let rating_token = tokens
        .pop()
        .ok_or_else(|| EntryError::Malformed(line.to_string()))?;
    if tokens.is_empty() {
        return Err(EntryError::Malformed(line.to_string()));
    }

    let stars: f64 = rating_token
        .parse()
        .map_err(|_| EntryError::Malformed(line.to_string()))?;
    if !(0.0..=MAX_RATING).contains(&stars) {
        return Err(EntryError::InvalidRating(stars));
    }

    let name = tokens.join(" ").to_lowercase();
    if !catalog.contains_name(&name) {
        return Err(EntryError::UnknownItem(name));
    }

    Ok(Entry::Rated(name, stars))
}

/// Read ratings from `input` until "quit" or EOF.
///
/// Prompts and rejection messages go to `out`. Rating the same movie twice
/// keeps the last rating.
pub fn collect_profile<R: BufRead, W: Write>(
    input: R,
    out: &mut W,
    catalog: &Catalog,
) -> Result<RatingProfile> {
    writeln!(
        out,
        "Enter the name of a movie followed by a space then a rating from 0-5 stars, decimals are allowed"
    )?;
    writeln!(out, "Example: Toy Story 4.5")?;
    writeln!(
        out,
        "Use the title without its year (try the 'search' command if unsure)"
    )?;
    writeln!(out, "Enter as many as you would like and then type 'quit' to finish")?;

    let mut profile = RatingProfile::new();
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match parse_entry(&line, catalog) {
            Ok(Entry::Quit) => break,
            Ok(Entry::Rated(name, stars)) => {
                profile.insert(name, normalize_rating(stars))?;
            }
            Err(err) => writeln!(out, "{}. Please try again", err)?,
        }
    }

    Ok(profile)
}
