//! Fuzzy matching algorithms.
//!
//! Both algorithms compare characters case-insensitively, one Unicode scalar
//! value at a time. Positions reported by [`fuzzy_match_with_indices`] are
//! character positions in the original text, so they line up with
//! [`crate::highlight_matches`] regardless of casing.

/// Lower-cases a single character without changing the character count.
///
/// Characters whose lowercase form expands to several characters keep only
/// the first one, which keeps indices aligned with the original text.
#[inline]
pub(crate) fn fold(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// Find the positions at which `search` occurs in `text` as a subsequence.
///
/// The scan is greedy-leftmost: each query character is matched against the
/// first unconsumed text character equal to it. This finds *a* valid
/// subsequence, not the tightest one.
///
/// # Arguments
/// * `text` - Text to search in
/// * `search` - Query characters to find, in order
///
/// # Returns
/// Character positions (strictly increasing, one per query character), or
/// `None` if some query character could not be consumed. An empty query
/// always matches with no positions.
///
/// # Example
/// ```
/// use quicklinks_search::fuzzy_match_with_indices;
///
/// assert_eq!(fuzzy_match_with_indices("Settings", "stg"), Some(vec![0, 2, 6]));
/// assert_eq!(fuzzy_match_with_indices("Users", "set"), None);
/// ```
pub fn fuzzy_match_with_indices(text: &str, search: &str) -> Option<Vec<usize>> {
    let query: Vec<char> = search.chars().map(fold).collect();
    let mut indices = Vec::with_capacity(query.len());

    for (position, c) in text.chars().enumerate() {
        let Some(&wanted) = query.get(indices.len()) else {
            break;
        };
        if fold(c) == wanted {
            indices.push(position);
        }
    }

    (indices.len() == query.len()).then_some(indices)
}

/// Calculate case-insensitive Levenshtein edit distance between two strings.
///
/// # Arguments
/// * `a` - First string
/// * `b` - Second string
///
/// # Returns
/// Number of single-character insertions, deletions or substitutions needed
/// to transform a into b
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().map(fold).collect();
    let b_chars: Vec<char> = b.chars().map(fold).collect();

    let m = a_chars.len();
    let n = b_chars.len();

    if m == 0 { return n; }
    if n == 0 { return m; }

    // Use two rows for space optimization
    let mut prev: Vec<usize> = (0..=n).collect();
    let mut curr = vec![0; n + 1];

    for i in 1..=m {
        curr[0] = i;
        for j in 1..=n {
            curr[j] = if a_chars[i - 1] == b_chars[j - 1] {
                prev[j - 1]
            } else {
                1 + prev[j - 1].min(curr[j - 1]).min(prev[j])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}
