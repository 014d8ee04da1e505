// Overlap scoring and best-candidate selection.
//
// A candidate's score is the size of the multiset intersection between its
// lemma bag and the query's. Candidates are scanned in order and the
// current best is only replaced on a strictly greater score, so ties go to
// the earliest candidate. A candidate with zero overlap still wins when
// nothing scores higher; only an empty candidate list yields no selection.

use crate::lemma::multiset::LemmaMultiset;

/// The winning candidate and its overlap with the query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// Position of the winner in the candidate list
    pub index: usize,
    pub overlap: LemmaMultiset,
}

impl Selection {
    pub fn score(&self) -> usize {
        self.overlap.total()
    }
}

/// Total overlapping lemma occurrences between two bags.
pub fn score(query: &LemmaMultiset, candidate: &LemmaMultiset) -> usize {
    query.intersect(candidate).total()
}

/// Pick the candidate lemma list with the largest overlap with `query`.
///
/// Returns `None` only when `candidates` is empty.
pub fn select_best<S: AsRef<str>>(query: &[S], candidates: &[Vec<S>]) -> Option<Selection> {
    let query_bag = bag_of(query);
    let candidate_bags: Vec<LemmaMultiset> = candidates.iter().map(|c| bag_of(c)).collect();
    select_best_bag(&query_bag, &candidate_bags)
}

/// Same as [`select_best`], over prebuilt lemma bags.
pub fn select_best_bag(query: &LemmaMultiset, candidates: &[LemmaMultiset]) -> Option<Selection> {
    let mut best: Option<Selection> = None;

    for (index, candidate) in candidates.iter().enumerate() {
        let overlap = query.intersect(candidate);
        let is_better = match &best {
            Some(current) => overlap.total() > current.score(),
            None => true,
        };
        if is_better {
            best = Some(Selection { index, overlap });
        }
    }

    best
}

/// Every candidate's overlap, highest score first, ties in input order.
pub fn rank_bags(query: &LemmaMultiset, candidates: &[LemmaMultiset]) -> Vec<Selection> {
    let mut ranked: Vec<Selection> = candidates
        .iter()
        .enumerate()
        .map(|(index, candidate)| Selection {
            index,
            overlap: query.intersect(candidate),
        })
        .collect();

    // Stable sort keeps the earlier candidate first on equal scores
    ranked.sort_by(|a, b| b.score().cmp(&a.score()));
    ranked
}

fn bag_of<S: AsRef<str>>(lemmas: &[S]) -> LemmaMultiset {
    lemmas.iter().map(|l| l.as_ref()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highest_overlap_wins() {
        let query = vec!["mount", "foam"];
        let candidates = vec![
            vec!["mount", "fastener"],
            vec!["brand", "foam", "bath"],
            vec!["mount", "foam", "brand"],
        ];
        let selection = select_best(&query, &candidates).unwrap();
        assert_eq!(selection.index, 2);
        assert_eq!(selection.score(), 2);
        assert_eq!(selection.overlap, LemmaMultiset::from_lemmas(["foam", "mount"]));
    }

    #[test]
    fn test_tie_goes_to_first_candidate() {
        let query = vec!["foam"];
        let candidates = vec![vec!["bath", "foam"], vec!["foam", "bath"]];
        assert_eq!(select_best(&query, &candidates).unwrap().index, 0);
    }

    #[test]
    fn test_zero_overlap_still_selected() {
        let query = vec!["foam"];
        let candidates = vec![vec!["bath"], vec!["brand"]];
        let selection = select_best(&query, &candidates).unwrap();
        assert_eq!(selection.index, 0);
        assert_eq!(selection.score(), 0);
        assert!(selection.overlap.is_empty());
    }

    #[test]
    fn test_no_candidates() {
        let query = vec!["foam"];
        let candidates: Vec<Vec<&str>> = vec![];
        assert!(select_best(&query, &candidates).is_none());
    }

    #[test]
    fn test_counts_multiplicity() {
        let query = vec!["foam", "foam"];
        let candidates = vec![vec!["foam"], vec!["foam", "foam", "foam"]];
        let selection = select_best(&query, &candidates).unwrap();
        assert_eq!(selection.index, 1);
        assert_eq!(selection.score(), 2);
    }

    #[test]
    fn test_rank_orders_by_score_then_index() {
        let query = LemmaMultiset::from_lemmas(["mount", "foam"]);
        let candidates = vec![
            LemmaMultiset::from_lemmas(["mount"]),
            LemmaMultiset::from_lemmas(["bath"]),
            LemmaMultiset::from_lemmas(["mount", "foam"]),
            LemmaMultiset::from_lemmas(["foam"]),
        ];
        let order: Vec<usize> = rank_bags(&query, &candidates).iter().map(|s| s.index).collect();
        assert_eq!(order, vec![2, 0, 3, 1]);
    }

    #[test]
    fn test_score_helper() {
        let a = LemmaMultiset::from_lemmas(["x", "y", "y"]);
        let b = LemmaMultiset::from_lemmas(["y", "y", "z"]);
        assert_eq!(score(&a, &b), 2);
    }
}
