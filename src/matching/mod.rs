// Overlap scoring, candidate selection, and the end-to-end matcher.

pub mod matcher;
pub mod select;
