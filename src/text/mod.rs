// Raw text normalization ahead of tokenization.

pub mod clean;
