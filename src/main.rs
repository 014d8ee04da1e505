use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::info;

use lemmatch::config::{parse_pos_list, Config};
use lemmatch::output::terminal;
use lemmatch::{LexiconAnalyzer, Matcher};

/// Lemmatch: find the catalog entry that best matches a free-text query.
///
/// Compares the dictionary forms of content words rather than raw text, so
/// word order, inflection and punctuation do not get in the way.
#[derive(Parser)]
#[command(name = "lemmatch", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the candidate that best matches the query
    Match {
        #[command(flatten)]
        args: MatchArgs,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Score every candidate against the query, best first
    Rank {
        #[command(flatten)]
        args: MatchArgs,

        /// Max rows to show (default: 20)
        #[arg(long, default_value = "20")]
        limit: usize,
    },

    /// Show the lemmas extracted from a text
    Lemmas {
        /// The text to analyze
        text: String,

        #[command(flatten)]
        settings: Settings,
    },
}

#[derive(Args)]
struct MatchArgs {
    /// The free-text query
    #[arg(long, short)]
    query: String,

    /// File with one candidate per line
    #[arg(long)]
    candidates_file: Option<PathBuf>,

    /// Candidates given inline (appended after any from --candidates-file)
    candidates: Vec<String>,

    #[command(flatten)]
    settings: Settings,
}

#[derive(Args)]
struct Settings {
    /// Lexicon JSON (overrides LEMMATCH_LEXICON)
    #[arg(long)]
    lexicon: Option<PathBuf>,

    /// Keep lemmas shorter than the minimum length
    #[arg(long)]
    no_filter: bool,

    /// Minimum lemma length kept by the filter (overrides LEMMATCH_MIN_LEMMA_LEN)
    #[arg(long)]
    min_len: Option<usize>,

    /// Comma-separated part-of-speech tags to keep, e.g. NOUN,ADJF (overrides LEMMATCH_POS)
    #[arg(long)]
    pos: Option<String>,
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("lemmatch=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Match { args, json } => {
            let matcher = build_matcher(&args.settings)?;
            let candidates = load_candidates(&args)?;
            let result = matcher.match_best(&args.query, &candidates)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                terminal::display_match(&args.query, result.as_ref());
            }
        }

        Commands::Rank { args, limit } => {
            let matcher = build_matcher(&args.settings)?;
            let candidates = load_candidates(&args)?;
            let ranked = matcher.rank(&args.query, &candidates)?;
            terminal::display_ranking(&args.query, &ranked, limit);
        }

        Commands::Lemmas { text, settings } => {
            let matcher = build_matcher(&settings)?;
            let lemmas = matcher.lemmas_of(&text)?;
            terminal::display_lemmas(&text, &lemmas);
        }
    }

    Ok(())
}

/// Merge env configuration with CLI overrides and load the lexicon.
fn build_matcher(settings: &Settings) -> Result<Matcher<LexiconAnalyzer>> {
    let mut config = Config::load()?;

    if let Some(path) = &settings.lexicon {
        config.lexicon_path = path.clone();
    }
    if settings.no_filter {
        config.matching.filter_short_lemmas = false;
    }
    if let Some(min_len) = settings.min_len {
        config.matching.min_lemma_length = min_len;
    }
    if let Some(pos) = &settings.pos {
        config.matching.allowed_pos = parse_pos_list(pos)?;
    }

    config.require_lexicon()?;
    let analyzer = LexiconAnalyzer::from_path(&config.lexicon_path)?;
    info!(
        lexicon = %config.lexicon_path.display(),
        forms = analyzer.len(),
        "Analyzer ready"
    );

    Ok(Matcher::with_config(analyzer, config.matching))
}

fn load_candidates(args: &MatchArgs) -> Result<Vec<String>> {
    let mut candidates = match &args.candidates_file {
        Some(path) => read_lines(path)?,
        None => Vec::new(),
    };
    candidates.extend(args.candidates.iter().cloned());
    Ok(candidates)
}

fn read_lines(path: &Path) -> Result<Vec<String>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read candidates from {}", path.display()))?;
    Ok(contents
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect())
}
