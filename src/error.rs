// Typed errors for the matching pipeline.
//
// Analyzer failures get their own variant so callers can tell a broken
// collaborator apart from "there was nothing to compare against" (which
// is not an error at all; see Matcher::match_best).

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MatchError {
    /// The morphological analyzer itself failed on a token.
    #[error("morphological analyzer failed on token {token:?}")]
    Analyzer {
        token: String,
        #[source]
        source: anyhow::Error,
    },

    /// The lexicon file could not be read or parsed.
    #[error("failed to load lexicon from {}", .path.display())]
    Lexicon {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    /// A configuration value was present but invalid.
    #[error("invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, MatchError>;
