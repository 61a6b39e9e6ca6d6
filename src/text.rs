//! Case-insensitive substring matching over character offsets.
//!
//! Highlight ranges and snippet windows are **character** offsets into the
//! source text, not byte offsets. To keep a 1:1 mapping between folded and
//! source characters we lowercase per-character and take the first scalar of
//! any multi-char expansion (`İ` and friends). That loses exotic case pairs
//! like `ß`/`SS`: search here is substring matching with stable offsets, not
//! full Unicode case folding.

/// Lowercase a string into a char vector with a 1:1 index mapping.
pub(crate) fn fold_chars(text: &str) -> Vec<char> {
    text.chars()
        .map(|c| c.to_lowercase().next().unwrap_or(c))
        .collect()
}

/// First occurrence of `needle` in `haystack`, as a char offset.
///
/// Both sides must already be folded. Empty needles never match.
pub(crate) fn find_folded(haystack: &[char], needle: &[char]) -> Option<usize> {
    if needle.is_empty() || needle.len() > haystack.len() {
        return None;
    }
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

/// Slice `text` by char offsets, returning the original-case substring.
pub(crate) fn char_slice(text: &str, start: usize, end: usize) -> String {
    text.chars().skip(start).take(end.saturating_sub(start)).collect()
}
