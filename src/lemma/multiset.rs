// LemmaMultiset: a bag of lemmas with occurrence counts.
//
// Overlap between two strings is the multiset intersection of their bags:
// for each lemma in both, the smaller of the two counts. The overlap score
// is the total of the intersection's counts.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Mapping from lemma to its occurrence count. Counts are always positive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LemmaMultiset {
    counts: BTreeMap<String, usize>,
}

impl LemmaMultiset {
    pub fn from_lemmas<I, S>(lemmas: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        lemmas.into_iter().collect()
    }

    /// Per-lemma minimum of the two counts, for lemmas present in both.
    pub fn intersect(&self, other: &LemmaMultiset) -> LemmaMultiset {
        // Walk the smaller bag, probe the larger one
        let (small, large) = if self.counts.len() <= other.counts.len() {
            (self, other)
        } else {
            (other, self)
        };

        let counts = small
            .counts
            .iter()
            .filter_map(|(lemma, &count)| {
                large
                    .counts
                    .get(lemma)
                    .map(|&other_count| (lemma.clone(), count.min(other_count)))
            })
            .collect();

        LemmaMultiset { counts }
    }

    /// Sum of all counts (the multiset's cardinality).
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn get(&self, lemma: &str) -> usize {
        self.counts.get(lemma).copied().unwrap_or(0)
    }

    /// Number of distinct lemmas.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Lemmas and counts in lexicographic lemma order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(lemma, &count)| (lemma.as_str(), count))
    }
}

impl<S: Into<String>> FromIterator<S> for LemmaMultiset {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut counts = BTreeMap::new();
        for lemma in iter {
            *counts.entry(lemma.into()).or_insert(0) += 1;
        }
        LemmaMultiset { counts }
    }
}

impl fmt::Display for LemmaMultiset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (lemma, count)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{lemma}: {count}")?;
        }
        f.write_str("}")
    }
}
