// Morphological analyzer trait: the swap-ready abstraction.
//
// The pipeline only needs one capability from an analyzer: given a token,
// return its interpretations ranked most-likely-first. Implementations are
// shared read-only across candidates, so they must be Send + Sync.

use std::sync::Arc;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use super::tag::PartOfSpeech;

/// One interpretation of a token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrammaticalParse {
    pub pos: PartOfSpeech,
    /// Dictionary form of the token under this interpretation
    pub normal_form: String,
}

impl GrammaticalParse {
    pub fn new(pos: PartOfSpeech, normal_form: impl Into<String>) -> Self {
        Self {
            pos,
            normal_form: normal_form.into(),
        }
    }
}

/// Trait for morphological analysis of single tokens.
///
/// An empty list means the token is not recognized. Returning an error is
/// reserved for the analyzer itself malfunctioning; the pipeline surfaces
/// it to the caller instead of treating the token as unknown.
pub trait MorphAnalyzer: Send + Sync {
    fn parse(&self, token: &str) -> Result<Vec<GrammaticalParse>>;
}

impl<A: MorphAnalyzer + ?Sized> MorphAnalyzer for &A {
    fn parse(&self, token: &str) -> Result<Vec<GrammaticalParse>> {
        (**self).parse(token)
    }
}

impl<A: MorphAnalyzer + ?Sized> MorphAnalyzer for Arc<A> {
    fn parse(&self, token: &str) -> Result<Vec<GrammaticalParse>> {
        (**self).parse(token)
    }
}

impl<A: MorphAnalyzer + ?Sized> MorphAnalyzer for Box<A> {
    fn parse(&self, token: &str) -> Result<Vec<GrammaticalParse>> {
        (**self).parse(token)
    }
}
