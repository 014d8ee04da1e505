// Morphological analysis: trait-based abstraction for swappable analyzers.
//
// The MorphAnalyzer trait is the only thing the matching pipeline knows
// about morphology. LexiconAnalyzer is a dictionary-backed implementation
// good enough for fixed catalogs and tests; a full analyzer with
// out-of-vocabulary prediction can be dropped in behind the same trait.

pub mod lexicon;
pub mod tag;
pub mod traits;
