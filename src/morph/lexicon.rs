// Dictionary-backed morphological analyzer.
//
// The lexicon maps surface word forms to their ranked interpretations:
//
//   {
//     "пены":   [{"pos": "NOUN", "normal_form": "пена"}],
//     "стекло": [{"pos": "NOUN", "normal_form": "стекло"},
//                {"pos": "VERB", "normal_form": "стечь"}]
//   }
//
// Lookup is case-insensitive. Tokens missing from the lexicon fall back to
// a token-class parse (digits, Latin script, punctuation) so callers can
// still see what kind of token was dropped; anything else gets no parses.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use super::tag::PartOfSpeech;
use super::traits::{GrammaticalParse, MorphAnalyzer};
use crate::error::MatchError;

#[derive(Debug, Clone, Default)]
pub struct LexiconAnalyzer {
    forms: HashMap<String, Vec<GrammaticalParse>>,
}

impl LexiconAnalyzer {
    /// Build a lexicon from `(word form, parses)` pairs.
    ///
    /// Repeated word forms (including ones differing only in case) keep
    /// every parse, earlier entries ranked first.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, Vec<GrammaticalParse>)>,
        S: AsRef<str>,
    {
        let mut forms: HashMap<String, Vec<GrammaticalParse>> = HashMap::new();
        for (form, parses) in entries {
            forms
                .entry(form.as_ref().to_lowercase())
                .or_default()
                .extend(parses);
        }
        Self { forms }
    }

    /// Parse a lexicon from its JSON representation.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: HashMap<String, Vec<GrammaticalParse>> =
            serde_json::from_str(json).context("lexicon is not a valid form -> parses map")?;
        Ok(Self::from_entries(raw))
    }

    /// Load a lexicon JSON file.
    pub fn from_path(path: &Path) -> crate::error::Result<Self> {
        let lexicon = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))
            .and_then(|json| Self::from_json_str(&json))
            .map_err(|source| MatchError::Lexicon {
                path: path.to_path_buf(),
                source,
            })?;

        debug!(
            path = %path.display(),
            forms = lexicon.len(),
            "Loaded lexicon"
        );
        Ok(lexicon)
    }

    /// Number of distinct word forms.
    pub fn len(&self) -> usize {
        self.forms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }
}

impl MorphAnalyzer for LexiconAnalyzer {
    fn parse(&self, token: &str) -> Result<Vec<GrammaticalParse>> {
        let key = token.to_lowercase();
        if let Some(parses) = self.forms.get(&key) {
            return Ok(parses.clone());
        }
        Ok(token_class(&key)
            .map(|pos| vec![GrammaticalParse::new(pos, key)])
            .unwrap_or_default())
    }
}

/// Classify a token the lexicon does not know by its characters alone.
fn token_class(token: &str) -> Option<PartOfSpeech> {
    if token.is_empty() {
        return None;
    }
    if token.chars().all(|c| c.is_ascii_digit() || c == '.' || c == ',')
        && token.chars().any(|c| c.is_ascii_digit())
    {
        Some(PartOfSpeech::Number)
    } else if token.chars().all(|c| c.is_ascii_alphabetic() || c == '-')
        && token.chars().any(|c| c.is_ascii_alphabetic())
    {
        Some(PartOfSpeech::Latin)
    } else if token.chars().all(|c| c.is_ascii_punctuation()) {
        Some(PartOfSpeech::Punctuation)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noun(form: &str) -> GrammaticalParse {
        GrammaticalParse::new(PartOfSpeech::Noun, form)
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let lexicon = LexiconAnalyzer::from_entries([("Пены", vec![noun("пена")])]);
        assert_eq!(lexicon.parse("ПЕНЫ").unwrap(), vec![noun("пена")]);
        assert_eq!(lexicon.parse("пены").unwrap(), vec![noun("пена")]);
    }

    #[test]
    fn test_repeated_forms_keep_rank_order() {
        let lexicon = LexiconAnalyzer::from_entries([
            ("стекло", vec![noun("стекло")]),
            (
                "Стекло",
                vec![GrammaticalParse::new(PartOfSpeech::Verb, "стечь")],
            ),
        ]);
        let parses = lexicon.parse("стекло").unwrap();
        assert_eq!(parses.len(), 2);
        assert_eq!(parses[0], noun("стекло"));
        assert_eq!(parses[1].pos, PartOfSpeech::Verb);
        assert_eq!(lexicon.len(), 1);
    }

    #[test]
    fn test_token_class_fallbacks() {
        let lexicon = LexiconAnalyzer::default();
        assert_eq!(lexicon.parse("620").unwrap()[0].pos, PartOfSpeech::Number);
        assert_eq!(lexicon.parse("0,75").unwrap()[0].pos, PartOfSpeech::Number);
        assert_eq!(lexicon.parse("SomeBrand").unwrap()[0].pos, PartOfSpeech::Latin);
        assert_eq!(
            lexicon.parse("SomeBrand").unwrap()[0].normal_form,
            "somebrand"
        );
        assert_eq!(lexicon.parse("--").unwrap()[0].pos, PartOfSpeech::Punctuation);
        assert_eq!(lexicon.parse("!?").unwrap()[0].pos, PartOfSpeech::Punctuation);
    }

    #[test]
    fn test_unknown_token_has_no_parses() {
        let lexicon = LexiconAnalyzer::default();
        assert!(lexicon.parse("неизвестное").unwrap().is_empty());
        assert!(lexicon.parse("").unwrap().is_empty());
    }

    #[test]
    fn test_from_json_str() {
        let json = r#"{
            "пены": [{"pos": "NOUN", "normal_form": "пена"}],
            "монтажные": [{"pos": "ADJF", "normal_form": "монтажный"}]
        }"#;
        let lexicon = LexiconAnalyzer::from_json_str(json).unwrap();
        assert_eq!(lexicon.len(), 2);
        assert_eq!(
            lexicon.parse("монтажные").unwrap()[0].pos,
            PartOfSpeech::FullAdjective
        );
    }

    #[test]
    fn test_from_json_str_rejects_unknown_tag() {
        let json = r#"{"x": [{"pos": "BOGUS", "normal_form": "x"}]}"#;
        assert!(LexiconAnalyzer::from_json_str(json).is_err());
    }
}
