// Lemma extraction, significance filtering, and lemma bags.

pub mod extract;
pub mod filter;
pub mod multiset;
