//! Terminal output for profiles, neighbors and suggestions.

use std::io::{self, Write};

use anyhow::Result;
use colored::Colorize;
use data_loader::{ItemName, Movie, RatingProfile};
use neighbors::NeighborScore;

/// Print a header line followed by one tab-indented suggestion per line
pub fn print_suggestions<W: Write>(out: &mut W, suggestions: &[ItemName]) -> io::Result<()> {
    writeln!(
        out,
        "{}",
        "Below are some suggested movies for you based on your ratings:"
            .bold()
            .blue()
    )?;
    for item in suggestions {
        writeln!(out, "\t{}", item)?;
    }
    Ok(())
}

/// Echo the target profile as a JSON object
pub fn print_profile<W: Write>(out: &mut W, header: &str, profile: &RatingProfile) -> Result<()> {
    writeln!(out, "{}", header.bold())?;
    writeln!(out, "{}", serde_json::to_string(profile)?)?;
    Ok(())
}

/// Print the neighbor table shown with `--explain`
pub fn print_neighbors<W: Write>(out: &mut W, neighbors: &[NeighborScore]) -> io::Result<()> {
    writeln!(out, "{}", "Closest raters:".bold().blue())?;
    for (rank, neighbor) in neighbors.iter().enumerate() {
        writeln!(
            out,
            "{:>3}. rater {:<6} similarity {:.3}",
            (rank + 1).to_string().green(),
            neighbor.rater_id,
            neighbor.similarity
        )?;
    }
    Ok(())
}

/// Print catalog search hits, at most `limit` of them
pub fn print_search_results<W: Write>(
    out: &mut W,
    query: &str,
    movies: &[&Movie],
    limit: usize,
) -> io::Result<()> {
    writeln!(
        out,
        "{}",
        format!("Search results for '{}':", query).bold().blue()
    )?;
    if movies.is_empty() {
        writeln!(out, "  no matching movies")?;
    }
    for movie in movies.iter().take(limit) {
        writeln!(
            out,
            "{}: {} [{}] -> enter as \"{}\"",
            movie.id,
            movie.title,
            movie.genres.join(", "),
            movie.name
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suggestions_are_tab_indented() {
        let mut out = Vec::new();
        print_suggestions(&mut out, &["heat".to_string(), "jumanji".to_string()]).unwrap();

        let printed = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = printed.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("suggested movies"));
        assert_eq!(lines[1], "\theat");
        assert_eq!(lines[2], "\tjumanji");
    }

    #[test]
    fn test_profile_is_printed_as_json() {
        let profile = RatingProfile::from_scores([("heat", 0.5)]).unwrap();
        let mut out = Vec::new();
        print_profile(&mut out, "Profile:", &profile).unwrap();

        let printed = String::from_utf8(out).unwrap();
        assert!(printed.contains(r#"{"heat":0.5}"#));
    }
}
