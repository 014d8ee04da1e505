// Significance filter: drops very short lemmas.
//
// Short lemmas are mostly residual function words and unit abbreviations
// that slipped through the category allowlist. Length is counted in
// characters, not bytes, so Cyrillic lemmas are measured correctly.

/// Default minimum lemma length kept by the filter.
pub const DEFAULT_MIN_LEMMA_LENGTH: usize = 3;

/// Keep only lemmas with at least `min_length` characters.
pub fn filter_significant(lemmas: Vec<String>, min_length: usize) -> Vec<String> {
    lemmas
        .into_iter()
        .filter(|lemma| lemma.chars().count() >= min_length)
        .collect()
}
