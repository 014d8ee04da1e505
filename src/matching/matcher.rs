// End-to-end matcher: clean -> extract -> filter -> bag -> select.
//
// The analyzer is injected at construction and shared read-only by every
// call; the matcher itself holds no per-call state.

use serde::Serialize;
use tracing::{debug, info, warn};

use super::select::{rank_bags, select_best_bag};
use crate::config::MatchConfig;
use crate::error::Result;
use crate::lemma::extract::extract_lemmas;
use crate::lemma::filter::filter_significant;
use crate::lemma::multiset::LemmaMultiset;
use crate::morph::traits::MorphAnalyzer;
use crate::text::clean::clean;

/// The best-matching candidate for a query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchResult {
    /// Position of the candidate in the input list
    pub index: usize,
    /// The candidate's original, uncleaned text
    pub candidate: String,
    /// Lemmas shared by the query and the candidate
    pub overlap: LemmaMultiset,
}

impl MatchResult {
    pub fn score(&self) -> usize {
        self.overlap.total()
    }
}

/// One entry of a full candidate ranking.
pub type RankedCandidate = MatchResult;

pub struct Matcher<A> {
    analyzer: A,
    config: MatchConfig,
}

impl<A: MorphAnalyzer> Matcher<A> {
    pub fn new(analyzer: A) -> Self {
        Self::with_config(analyzer, MatchConfig::default())
    }

    pub fn with_config(analyzer: A, config: MatchConfig) -> Self {
        Self { analyzer, config }
    }

    pub fn analyzer(&self) -> &A {
        &self.analyzer
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// The lemma sequence used for scoring `text`, after cleaning and
    /// (when enabled) significance filtering.
    pub fn lemmas_of(&self, text: &str) -> Result<Vec<String>> {
        let cleaned = clean(text);
        let lemmas = extract_lemmas(&self.analyzer, cleaned.trim(), &self.config.allowed_pos)?;
        let lemmas = if self.config.filter_short_lemmas {
            filter_significant(lemmas, self.config.min_lemma_length)
        } else {
            lemmas
        };
        Ok(lemmas)
    }

    /// Lemma bag of `text`.
    pub fn bag_of(&self, text: &str) -> Result<LemmaMultiset> {
        Ok(self.lemmas_of(text)?.into_iter().collect())
    }

    /// Find the candidate sharing the most lemma occurrences with `query`.
    ///
    /// Returns `Ok(None)` when there are no candidates. A candidate with no
    /// overlap at all is still returned if nothing scores higher; check
    /// [`MatchResult::score`] to reject weak matches. Analyzer failures are
    /// returned as errors, never as `Ok(None)`.
    pub fn match_best<S>(&self, query: &str, candidates: &[S]) -> Result<Option<MatchResult>>
    where
        S: AsRef<str> + Sync,
    {
        let query_bag = self.bag_of(query)?;
        let candidate_bags = self.candidate_bags(candidates)?;

        let Some(selection) = select_best_bag(&query_bag, &candidate_bags) else {
            warn!(query, "No matches were found: candidate list is empty");
            return Ok(None);
        };

        info!(
            index = selection.index,
            score = selection.score(),
            candidates = candidates.len(),
            "Selected best candidate"
        );

        Ok(Some(MatchResult {
            index: selection.index,
            candidate: candidates[selection.index].as_ref().to_string(),
            overlap: selection.overlap,
        }))
    }

    /// Score every candidate against `query`, highest score first.
    ///
    /// Ties keep input order, so the first entry is always the candidate
    /// [`Matcher::match_best`] would pick.
    pub fn rank<S>(&self, query: &str, candidates: &[S]) -> Result<Vec<RankedCandidate>>
    where
        S: AsRef<str> + Sync,
    {
        let query_bag = self.bag_of(query)?;
        let candidate_bags = self.candidate_bags(candidates)?;

        Ok(rank_bags(&query_bag, &candidate_bags)
            .into_iter()
            .map(|selection| RankedCandidate {
                index: selection.index,
                candidate: candidates[selection.index].as_ref().to_string(),
                overlap: selection.overlap,
            })
            .collect())
    }

    fn candidate_bags<S>(&self, candidates: &[S]) -> Result<Vec<LemmaMultiset>>
    where
        S: AsRef<str> + Sync,
    {
        #[cfg(feature = "parallel")]
        let bags: Vec<Result<LemmaMultiset>> = {
            use rayon::prelude::*;
            candidates
                .par_iter()
                .map(|candidate| self.bag_of(candidate.as_ref()))
                .collect()
        };

        #[cfg(not(feature = "parallel"))]
        let bags: Vec<Result<LemmaMultiset>> = candidates
            .iter()
            .map(|candidate| self.bag_of(candidate.as_ref()))
            .collect();

        // Collecting sequentially surfaces the first failure in input order
        let bags = bags.into_iter().collect::<Result<Vec<_>>>()?;

        for (index, bag) in bags.iter().enumerate() {
            debug!(index, lemmas = bag.total(), "Candidate lemma bag");
        }
        Ok(bags)
    }
}

/// One-shot match with a borrowed analyzer and default settings, optionally
/// disabling the short-lemma filter.
pub fn match_best<A, S>(
    analyzer: &A,
    query: &str,
    candidates: &[S],
    filter_short_lemmas: bool,
) -> Result<Option<MatchResult>>
where
    A: MorphAnalyzer + ?Sized,
    S: AsRef<str> + Sync,
{
    let config = MatchConfig {
        filter_short_lemmas,
        ..MatchConfig::default()
    };
    Matcher::with_config(analyzer, config).match_best(query, candidates)
}
