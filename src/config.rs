use std::env;
use std::path::PathBuf;

use crate::error::{MatchError, Result};
use crate::lemma::filter::DEFAULT_MIN_LEMMA_LENGTH;
use crate::morph::tag::{PartOfSpeech, CONTENT_POS};

/// Knobs for the matching pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchConfig {
    /// Drop lemmas shorter than `min_lemma_length` before scoring (default: true)
    pub filter_short_lemmas: bool,
    /// Minimum lemma length in characters kept by the filter (default: 3)
    pub min_lemma_length: usize,
    /// Categories a parse must have to contribute a lemma
    pub allowed_pos: Vec<PartOfSpeech>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            filter_short_lemmas: true,
            min_lemma_length: DEFAULT_MIN_LEMMA_LENGTH,
            allowed_pos: CONTENT_POS.to_vec(),
        }
    }
}

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded at startup via dotenvy; CLI flags override
/// whatever is found here.
#[derive(Debug, Clone)]
pub struct Config {
    /// Lexicon JSON used by the dictionary analyzer (LEMMATCH_LEXICON)
    pub lexicon_path: PathBuf,
    pub matching: MatchConfig,
}

impl Config {
    /// Load configuration from the process environment.
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    ///
    /// Unset keys fall back to defaults; set but unparseable keys are errors.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut matching = MatchConfig::default();

        if let Some(raw) = lookup("LEMMATCH_FILTER_SHORT") {
            matching.filter_short_lemmas = parse_flag(&raw).ok_or_else(|| {
                MatchError::Config(format!(
                    "LEMMATCH_FILTER_SHORT must be true/false/1/0, got {raw:?}"
                ))
            })?;
        }

        if let Some(raw) = lookup("LEMMATCH_MIN_LEMMA_LEN") {
            matching.min_lemma_length = raw.trim().parse().map_err(|_| {
                MatchError::Config(format!(
                    "LEMMATCH_MIN_LEMMA_LEN must be a non-negative integer, got {raw:?}"
                ))
            })?;
        }

        if let Some(raw) = lookup("LEMMATCH_POS") {
            matching.allowed_pos = parse_pos_list(&raw)?;
        }

        Ok(Self {
            lexicon_path: lookup("LEMMATCH_LEXICON")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("./lexicon.json")),
            matching,
        })
    }

    /// Check that the lexicon file exists.
    /// Call this before building the dictionary analyzer.
    pub fn require_lexicon(&self) -> Result<()> {
        if !self.lexicon_path.is_file() {
            return Err(MatchError::Config(format!(
                "lexicon not found at {}\n\
                 Set LEMMATCH_LEXICON in your .env file or pass --lexicon.",
                self.lexicon_path.display()
            )));
        }
        Ok(())
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Parse a comma-separated tag list such as `NOUN,ADJF,NUMR`.
pub fn parse_pos_list(raw: &str) -> Result<Vec<PartOfSpeech>> {
    let tags = raw
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(|tag| {
            tag.parse::<PartOfSpeech>()
                .map_err(|e| MatchError::Config(e.to_string()))
        })
        .collect::<Result<Vec<_>>>()?;

    if tags.is_empty() {
        return Err(MatchError::Config(
            "part-of-speech list must name at least one tag".to_string(),
        ));
    }
    Ok(tags)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.lexicon_path, PathBuf::from("./lexicon.json"));
        assert_eq!(config.matching, MatchConfig::default());
        assert!(config.matching.filter_short_lemmas);
        assert_eq!(config.matching.min_lemma_length, 3);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("LEMMATCH_LEXICON", "/tmp/lex.json"),
            ("LEMMATCH_FILTER_SHORT", "false"),
            ("LEMMATCH_MIN_LEMMA_LEN", "4"),
            ("LEMMATCH_POS", "noun, ADJF"),
        ]))
        .unwrap();
        assert_eq!(config.lexicon_path, PathBuf::from("/tmp/lex.json"));
        assert!(!config.matching.filter_short_lemmas);
        assert_eq!(config.matching.min_lemma_length, 4);
        assert_eq!(
            config.matching.allowed_pos,
            vec![PartOfSpeech::Noun, PartOfSpeech::FullAdjective]
        );
    }

    #[test]
    fn test_invalid_values_are_config_errors() {
        for pairs in [
            [("LEMMATCH_MIN_LEMMA_LEN", "three")],
            [("LEMMATCH_FILTER_SHORT", "maybe")],
            [("LEMMATCH_POS", "NOUN,BOGUS")],
            [("LEMMATCH_POS", " , ")],
        ] {
            let err = Config::from_lookup(lookup_from(&pairs)).unwrap_err();
            assert!(matches!(err, MatchError::Config(_)), "{pairs:?} -> {err}");
        }
    }

    #[test]
    fn test_require_lexicon_missing() {
        let config = Config::from_lookup(lookup_from(&[(
            "LEMMATCH_LEXICON",
            "/nonexistent/lemmatch/lexicon.json",
        )]))
        .unwrap();
        assert!(config.require_lexicon().is_err());
    }
}
