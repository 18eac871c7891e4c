//! Rendering of matched character positions.

use std::collections::HashSet;

/// Opening tag wrapped around each matched character.
pub const MARK_OPEN: &str = "<mark>";
/// Closing tag wrapped around each matched character.
pub const MARK_CLOSE: &str = "</mark>";

/// Wrap every character at a matched position in `<mark>` tags.
///
/// `indices` are character positions as returned by
/// [`crate::fuzzy_match_with_indices`]. Unmatched characters, and the casing
/// of matched ones, are copied verbatim. With `None` or no positions the text
/// is returned unchanged.
///
/// # Example
/// ```
/// use quicklinks_search::highlight_matches;
///
/// assert_eq!(
///     highlight_matches("Search", Some(&[0, 3])),
///     "<mark>S</mark>ea<mark>r</mark>ch"
/// );
/// ```
pub fn highlight_matches(text: &str, indices: Option<&[usize]>) -> String {
    highlight_matches_with(text, indices, |c| format!("{MARK_OPEN}{c}{MARK_CLOSE}"))
}

/// Like [`highlight_matches`], but renders each matched character with `wrap`.
///
/// Useful where `<mark>` is not the right emphasis, e.g. ANSI colors in a
/// terminal.
pub fn highlight_matches_with<F>(text: &str, indices: Option<&[usize]>, wrap: F) -> String
where
    F: Fn(char) -> String,
{
    let Some(indices) = indices.filter(|i| !i.is_empty()) else {
        return text.to_string();
    };

    let marked: HashSet<usize> = indices.iter().copied().collect();
    let mut result = String::with_capacity(text.len() + indices.len() * 16);

    for (position, c) in text.chars().enumerate() {
        if marked.contains(&position) {
            result.push_str(&wrap(c));
        } else {
            result.push(c);
        }
    }

    result
}
