// Colored terminal output for match results.
//
// main.rs delegates all printing here so the library calls themselves
// stay free of presentation concerns.

use colored::Colorize;

use crate::lemma::multiset::LemmaMultiset;
use crate::matching::matcher::{MatchResult, RankedCandidate};

/// Display the best match for a query, or a notice when there is none.
pub fn display_match(query: &str, result: Option<&MatchResult>) {
    println!(
        "\n{}",
        format!("=== Best match for \"{}\" ===", super::truncate_chars(query, 60)).bold()
    );

    let Some(result) = result else {
        println!("  {}", "No candidates to compare against.".yellow());
        return;
    };

    println!(
        "  #{:<3} {}  {}",
        result.index,
        result.candidate.bold(),
        colorize_score(result.score())
    );
    println!("  Shared lemmas: {}", format_overlap(&result.overlap).dimmed());

    if result.score() == 0 {
        println!(
            "  {} no lemmas in common; this is only the first candidate.",
            "Warning:".yellow()
        );
    }
}

/// Display every candidate's score, best first.
pub fn display_ranking(query: &str, ranked: &[RankedCandidate], limit: usize) {
    if ranked.is_empty() {
        println!("No candidates to rank.");
        return;
    }

    println!(
        "\n{}",
        format!(
            "=== Ranking for \"{}\" ({} candidates) ===",
            super::truncate_chars(query, 60),
            ranked.len()
        )
        .bold()
    );
    println!();
    println!(
        "  {:>4}  {:>5}  {:<48} {}",
        "Rank".dimmed(),
        "Score".dimmed(),
        "Candidate".dimmed(),
        "Shared".dimmed(),
    );
    println!("  {}", "-".repeat(78).dimmed());

    for (rank, entry) in ranked.iter().take(limit).enumerate() {
        println!(
            "  {:>4}. {:>5}  {:<48} {}",
            rank + 1,
            colorize_score(entry.score()),
            super::truncate_chars(&entry.candidate, 48),
            format_overlap(&entry.overlap).dimmed(),
        );
    }

    if ranked.len() > limit {
        println!("  {}", format!("... {} more", ranked.len() - limit).dimmed());
    }
    println!();
}

/// Display the lemma sequence extracted from a text.
pub fn display_lemmas(text: &str, lemmas: &[String]) {
    println!("\n{}", format!("=== Lemmas of \"{}\" ===", super::truncate_chars(text, 60)).bold());
    if lemmas.is_empty() {
        println!("  {}", "(no content words)".dimmed());
        return;
    }
    println!("  {}", lemmas.join(" "));
    let bag: LemmaMultiset = lemmas.iter().map(String::as_str).collect();
    println!("  Bag: {}", format_overlap(&bag).dimmed());
}

/// Render a lemma bag as `lemma×count` pairs.
pub fn format_overlap(overlap: &LemmaMultiset) -> String {
    if overlap.is_empty() {
        return "-".to_string();
    }
    overlap
        .iter()
        .map(|(lemma, count)| {
            if count > 1 {
                format!("{lemma}×{count}")
            } else {
                lemma.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn colorize_score(score: usize) -> colored::ColoredString {
    let text = score.to_string();
    match score {
        0 => text.dimmed(),
        1 => text.yellow(),
        _ => text.green().bold(),
    }
}
