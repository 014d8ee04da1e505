// Lemma extraction: text to a sequence of content-word dictionary forms.
//
// The text is split on whitespace and every token is handed to the
// analyzer. The first parse (in analyzer rank order) whose category is in
// the allowed set supplies the lemma; tokens with no such parse are
// dropped. Token order and duplicates are preserved.

use tracing::trace;

use crate::error::{MatchError, Result};
use crate::morph::tag::PartOfSpeech;
use crate::morph::traits::MorphAnalyzer;

/// Extract the lemma sequence of `text`, keeping only `allowed` categories.
///
/// Fails only if the analyzer itself fails on a token.
pub fn extract_lemmas<A>(analyzer: &A, text: &str, allowed: &[PartOfSpeech]) -> Result<Vec<String>>
where
    A: MorphAnalyzer + ?Sized,
{
    let mut lemmas = Vec::new();
    for token in text.split_whitespace() {
        if let Some(lemma) = lemma_of(analyzer, token, allowed)? {
            lemmas.push(lemma);
        } else {
            trace!(token, "Dropped token with no content parse");
        }
    }
    Ok(lemmas)
}

/// The lemma of a single token, or `None` if no parse qualifies.
pub fn lemma_of<A>(analyzer: &A, token: &str, allowed: &[PartOfSpeech]) -> Result<Option<String>>
where
    A: MorphAnalyzer + ?Sized,
{
    let parses = analyzer
        .parse(token)
        .map_err(|source| MatchError::Analyzer {
            token: token.to_string(),
            source,
        })?;

    Ok(parses
        .into_iter()
        .find(|p| allowed.contains(&p.pos))
        .map(|p| p.normal_form))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::morph::lexicon::LexiconAnalyzer;
    use crate::morph::tag::CONTENT_POS;
    use crate::morph::traits::GrammaticalParse;

    fn lexicon() -> LexiconAnalyzer {
        LexiconAnalyzer::from_entries([
            ("boxes", vec![GrammaticalParse::new(PartOfSpeech::Noun, "box")]),
            ("red", vec![GrammaticalParse::new(PartOfSpeech::FullAdjective, "red")]),
            ("of", vec![GrammaticalParse::new(PartOfSpeech::Preposition, "of")]),
            (
                "saw",
                vec![
                    GrammaticalParse::new(PartOfSpeech::Verb, "see"),
                    GrammaticalParse::new(PartOfSpeech::Noun, "saw"),
                ],
            ),
        ])
    }

    #[test]
    fn test_keeps_order_and_duplicates() {
        let lemmas = extract_lemmas(&lexicon(), "red boxes of red", &CONTENT_POS).unwrap();
        assert_eq!(lemmas, vec!["red", "box", "red"]);
    }

    #[test]
    fn test_first_allowed_parse_wins() {
        // VERB is ranked first but not allowed, so the NOUN reading is used
        let lemmas = extract_lemmas(&lexicon(), "saw", &CONTENT_POS).unwrap();
        assert_eq!(lemmas, vec!["saw"]);
    }

    #[test]
    fn test_unknown_and_function_words_dropped() {
        let lemmas = extract_lemmas(&lexicon(), "of 620 zzzz boxes", &CONTENT_POS).unwrap();
        assert_eq!(lemmas, vec!["box"]);
    }

    #[test]
    fn test_custom_allowlist() {
        let lemmas =
            extract_lemmas(&lexicon(), "saw red", &[PartOfSpeech::Verb]).unwrap();
        assert_eq!(lemmas, vec!["see"]);
    }

    #[test]
    fn test_empty_text() {
        assert!(extract_lemmas(&lexicon(), "  \t ", &CONTENT_POS).unwrap().is_empty());
    }
}
