// Part-of-speech tags, using the OpenCorpora tag names.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Grammatical category of a parsed token.
///
/// The last four variants are token classes rather than parts of speech:
/// analyzers use them for numbers written with digits, Latin-script words,
/// punctuation, and tokens they cannot classify at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PartOfSpeech {
    #[serde(rename = "NOUN")]
    Noun,
    #[serde(rename = "ADJF")]
    FullAdjective,
    #[serde(rename = "ADJS")]
    ShortAdjective,
    #[serde(rename = "COMP")]
    Comparative,
    #[serde(rename = "VERB")]
    Verb,
    #[serde(rename = "INFN")]
    Infinitive,
    #[serde(rename = "PRTF")]
    FullParticiple,
    #[serde(rename = "PRTS")]
    ShortParticiple,
    #[serde(rename = "GRND")]
    Gerund,
    #[serde(rename = "NUMR")]
    Numeral,
    #[serde(rename = "ADVB")]
    Adverb,
    #[serde(rename = "NPRO")]
    Pronoun,
    #[serde(rename = "PRED")]
    Predicative,
    #[serde(rename = "PREP")]
    Preposition,
    #[serde(rename = "CONJ")]
    Conjunction,
    #[serde(rename = "PRCL")]
    Particle,
    #[serde(rename = "INTJ")]
    Interjection,
    #[serde(rename = "NUMB")]
    Number,
    #[serde(rename = "LATN")]
    Latin,
    #[serde(rename = "PNCT")]
    Punctuation,
    #[serde(rename = "UNKN")]
    Unknown,
}

/// Content-bearing categories kept by lemma extraction: nouns, full and
/// short adjectives, full and short participles, numerals.
pub const CONTENT_POS: [PartOfSpeech; 6] = [
    PartOfSpeech::Noun,
    PartOfSpeech::FullAdjective,
    PartOfSpeech::ShortAdjective,
    PartOfSpeech::FullParticiple,
    PartOfSpeech::ShortParticiple,
    PartOfSpeech::Numeral,
];

const ALL: [PartOfSpeech; 21] = [
    PartOfSpeech::Noun,
    PartOfSpeech::FullAdjective,
    PartOfSpeech::ShortAdjective,
    PartOfSpeech::Comparative,
    PartOfSpeech::Verb,
    PartOfSpeech::Infinitive,
    PartOfSpeech::FullParticiple,
    PartOfSpeech::ShortParticiple,
    PartOfSpeech::Gerund,
    PartOfSpeech::Numeral,
    PartOfSpeech::Adverb,
    PartOfSpeech::Pronoun,
    PartOfSpeech::Predicative,
    PartOfSpeech::Preposition,
    PartOfSpeech::Conjunction,
    PartOfSpeech::Particle,
    PartOfSpeech::Interjection,
    PartOfSpeech::Number,
    PartOfSpeech::Latin,
    PartOfSpeech::Punctuation,
    PartOfSpeech::Unknown,
];

impl PartOfSpeech {
    /// The four-letter tag name.
    pub fn as_str(&self) -> &'static str {
        match self {
            PartOfSpeech::Noun => "NOUN",
            PartOfSpeech::FullAdjective => "ADJF",
            PartOfSpeech::ShortAdjective => "ADJS",
            PartOfSpeech::Comparative => "COMP",
            PartOfSpeech::Verb => "VERB",
            PartOfSpeech::Infinitive => "INFN",
            PartOfSpeech::FullParticiple => "PRTF",
            PartOfSpeech::ShortParticiple => "PRTS",
            PartOfSpeech::Gerund => "GRND",
            PartOfSpeech::Numeral => "NUMR",
            PartOfSpeech::Adverb => "ADVB",
            PartOfSpeech::Pronoun => "NPRO",
            PartOfSpeech::Predicative => "PRED",
            PartOfSpeech::Preposition => "PREP",
            PartOfSpeech::Conjunction => "CONJ",
            PartOfSpeech::Particle => "PRCL",
            PartOfSpeech::Interjection => "INTJ",
            PartOfSpeech::Number => "NUMB",
            PartOfSpeech::Latin => "LATN",
            PartOfSpeech::Punctuation => "PNCT",
            PartOfSpeech::Unknown => "UNKN",
        }
    }

    pub fn is_content(&self) -> bool {
        CONTENT_POS.contains(self)
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PartOfSpeech {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        let upper = s.trim().to_ascii_uppercase();
        ALL.iter()
            .copied()
            .find(|pos| pos.as_str() == upper)
            .ok_or_else(|| anyhow::anyhow!("unknown part-of-speech tag: {s:?}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_round_trips_every_tag() {
        for pos in ALL {
            assert_eq!(pos.as_str().parse::<PartOfSpeech>().unwrap(), pos);
        }
    }

    #[test]
    fn test_from_str_is_case_insensitive() {
        assert_eq!("adjf".parse::<PartOfSpeech>().unwrap(), PartOfSpeech::FullAdjective);
        assert!("ADJX".parse::<PartOfSpeech>().is_err());
    }

    #[test]
    fn test_content_categories() {
        assert!(PartOfSpeech::Noun.is_content());
        assert!(PartOfSpeech::ShortParticiple.is_content());
        assert!(PartOfSpeech::Numeral.is_content());
        assert!(!PartOfSpeech::Preposition.is_content());
        assert!(!PartOfSpeech::Verb.is_content());
        assert!(!PartOfSpeech::Number.is_content());
    }

    #[test]
    fn test_serde_uses_tag_names() {
        let json = serde_json::to_string(&PartOfSpeech::ShortAdjective).unwrap();
        assert_eq!(json, "\"ADJS\"");
        let pos: PartOfSpeech = serde_json::from_str("\"PRTF\"").unwrap();
        assert_eq!(pos, PartOfSpeech::FullParticiple);
    }
}
