// Punctuation-adjacent spacing cleanup.
//
// Each pattern is replaced with a single space, one pattern at a time, in
// table order. The replacements are sequential rather than simultaneous:
// a later pattern sees the output of every earlier one. Changing the order
// changes the output for some inputs, so the table is part of the contract.

/// Literal substrings collapsed to a single space, applied in this order.
pub const CLEANING_PATTERNS: [&str; 7] = [", ", "  ", "\n", " - ", " + ", " (", ") "];

/// Collapse the fixed punctuation/space patterns to single spaces.
///
/// Never fails. The output may still contain runs of spaces when a later
/// pass produces a pattern an earlier pass already handled: `"a \n b"`
/// comes out as `"a   b"` because the newline pass runs after the
/// double-space pass.
pub fn clean(text: &str) -> String {
    let mut cleaned = text.to_string();
    for pattern in CLEANING_PATTERNS {
        if cleaned.contains(pattern) {
            cleaned = cleaned.replace(pattern, " ");
        }
    }
    cleaned
}
