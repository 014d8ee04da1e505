// Lemmatch: match free-text queries against candidate strings by lemma overlap.
//
// This is the library root. Each module corresponds to one stage of the
// matching pipeline: text cleanup, morphology, lemma bags, selection.

pub mod config;
pub mod error;
pub mod lemma;
pub mod matching;
pub mod morph;
pub mod output;
pub mod text;

pub use config::MatchConfig;
pub use error::MatchError;
pub use lemma::multiset::LemmaMultiset;
pub use matching::matcher::{match_best, MatchResult, Matcher, RankedCandidate};
pub use morph::lexicon::LexiconAnalyzer;
pub use morph::tag::PartOfSpeech;
pub use morph::traits::{GrammaticalParse, MorphAnalyzer};
