//! Priority scoring for search candidates.
//!
//! Scores are ordered so that lower is better:
//!
//! | score | meaning |
//! |---|---|
//! | 1 | query is a subsequence of the key |
//! | 2 | query is a subsequence of an alias |
//! | 3 | query is a subsequence of the description |
//! | 10 + d | key is within edit distance d of the query |
//! | 20 + d | an alias is within edit distance d of the query |
//!
//! Only the highest-priority field is reported; the checks run as an ordered
//! chain of early returns.

use crate::{fuzzy_match_with_indices, levenshtein_distance, Aliases};
use serde::{Deserialize, Serialize};

/// Score for a subsequence match on the key.
pub const KEY_SCORE: u32 = 1;
/// Score for a subsequence match on an alias.
pub const ALIAS_SCORE: u32 = 2;
/// Score for a subsequence match on the description.
pub const DESCRIPTION_SCORE: u32 = 3;
/// Base score for an edit-distance match on the key.
pub const SIMILAR_KEY_BASE: u32 = 10;
/// Base score for an edit-distance match on an alias.
pub const SIMILAR_ALIAS_BASE: u32 = 20;

/// Which field produced a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchType {
    /// Subsequence match on the key
    Key,
    /// Subsequence match on an alias
    Aliases,
    /// Subsequence match on the description
    Description,
    /// Edit-distance match on the key or an alias
    Similar,
}

/// Outcome of scoring one candidate against one query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Rank of the match (lower is better)
    pub score: u32,
    /// Field that matched
    #[serde(rename = "type")]
    pub match_type: MatchType,
    /// Matched character positions in that field; `None` for similar matches
    pub indices: Option<Vec<usize>>,
    /// Edit distance, present only for similar matches
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<usize>,
}

impl MatchResult {
    fn subsequence(score: u32, match_type: MatchType, indices: Vec<usize>) -> Self {
        Self {
            score,
            match_type,
            indices: Some(indices),
            distance: None,
        }
    }

    fn similar(base: u32, distance: usize) -> Self {
        Self {
            score: base.saturating_add(u32::try_from(distance).unwrap_or(u32::MAX)),
            match_type: MatchType::Similar,
            indices: None,
            distance: Some(distance),
        }
    }

    /// Returns true for edit-distance suggestions.
    #[inline]
    pub fn is_similar(&self) -> bool {
        self.match_type == MatchType::Similar
    }
}

/// Score a record by subsequence matching on key, aliases and description.
///
/// Key beats aliases beats description. For [`Aliases::Many`] each alias is
/// tried in order and the first match wins.
///
/// # Returns
/// The highest-priority match, or `None` if no field contains the query as a
/// subsequence.
///
/// # Example
/// ```
/// use quicklinks_search::{calculate_score, Aliases, MatchType};
///
/// let result = calculate_score("Settings", "Preferences", &Aliases::from("prefs"), "set").unwrap();
/// assert_eq!(result.score, 1);
/// assert_eq!(result.match_type, MatchType::Key);
/// ```
pub fn calculate_score(key: &str, description: &str, aliases: &Aliases, search: &str) -> Option<MatchResult> {
    if let Some(indices) = fuzzy_match_with_indices(key, search) {
        return Some(MatchResult::subsequence(KEY_SCORE, MatchType::Key, indices));
    }

    if let Some(indices) = aliases.iter().find_map(|alias| fuzzy_match_with_indices(alias, search)) {
        return Some(MatchResult::subsequence(ALIAS_SCORE, MatchType::Aliases, indices));
    }

    fuzzy_match_with_indices(description, search)
        .map(|indices| MatchResult::subsequence(DESCRIPTION_SCORE, MatchType::Description, indices))
}

/// Maximum edit distance accepted by the fallback: half the query length
/// (rounded down) plus three.
#[inline]
pub fn similarity_threshold(search: &str) -> usize {
    search.chars().count() / 2 + 3
}

/// Score a record, falling back to edit distance when nothing matches strictly.
///
/// Strict matches are returned unchanged, so they always outrank fallback
/// matches. Otherwise the key is compared first, then the closest alias; the
/// key wins whenever it is within the threshold, even if an alias is closer.
/// The description does not take part in the fallback.
///
/// # Returns
/// A strict match, a [`MatchType::Similar`] match, or `None` if neither the
/// key nor any alias is within [`similarity_threshold`].
pub fn calculate_score_with_fallback(
    key: &str,
    description: &str,
    aliases: &Aliases,
    search: &str,
) -> Option<MatchResult> {
    if let Some(result) = calculate_score(key, description, aliases, search) {
        return Some(result);
    }

    let threshold = similarity_threshold(search);

    let key_distance = levenshtein_distance(key, search);
    if key_distance <= threshold {
        return Some(MatchResult::similar(SIMILAR_KEY_BASE, key_distance));
    }

    min_alias_distance(aliases, search)
        .filter(|&distance| distance <= threshold)
        .map(|distance| MatchResult::similar(SIMILAR_ALIAS_BASE, distance))
}

/// Smallest edit distance between the query and any alias.
///
/// `None` stands for "infinitely far": no aliases, or a single empty one.
fn min_alias_distance(aliases: &Aliases, search: &str) -> Option<usize> {
    if aliases.is_empty() {
        return None;
    }
    aliases.iter().map(|alias| levenshtein_distance(alias, search)).min()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_aliases() -> Aliases {
        Aliases::none()
    }

    #[test]
    fn test_key_beats_everything() {
        let aliases = Aliases::from(vec!["settings-alias"]);
        let result = calculate_score("Settings", "settings page", &aliases, "set").unwrap();
        assert_eq!(result.score, KEY_SCORE);
        assert_eq!(result.match_type, MatchType::Key);
        assert_eq!(result.indices, Some(vec![0, 1, 2]));
        assert_eq!(result.distance, None);
    }

    #[test]
    fn test_alias_beats_description() {
        let aliases = Aliases::from(vec!["lms", "elearning"]);
        let result = calculate_score("moodle", "learning platform", &aliases, "learn").unwrap();
        assert_eq!(result.score, ALIAS_SCORE);
        assert_eq!(result.match_type, MatchType::Aliases);
        assert_eq!(result.indices, Some(vec![1, 2, 3, 4, 5]));
    }

    #[test]
    fn test_first_matching_alias_wins() {
        let aliases = Aliases::from(vec!["xyz", "abc", "aXbXc"]);
        let result = calculate_score("key", "", &aliases, "abc").unwrap();
        assert_eq!(result.indices, Some(vec![0, 1, 2]));
    }

    #[test]
    fn test_single_alias() {
        let result = calculate_score("key", "", &Aliases::from("prefs"), "prf").unwrap();
        assert_eq!(result.match_type, MatchType::Aliases);
        assert_eq!(result.indices, Some(vec![0, 1, 3]));
    }

    #[test]
    fn test_description_match() {
        let result = calculate_score("moodle", "Learning platform", &no_aliases(), "platform").unwrap();
        assert_eq!(result.score, DESCRIPTION_SCORE);
        assert_eq!(result.match_type, MatchType::Description);
    }

    #[test]
    fn test_no_strict_match() {
        assert_eq!(calculate_score("Users", "Manage users", &no_aliases(), "xyz"), None);
    }

    #[test]
    fn test_empty_search_matches_key() {
        let result = calculate_score("anything", "", &no_aliases(), "").unwrap();
        assert_eq!(result.match_type, MatchType::Key);
        assert_eq!(result.indices, Some(vec![]));
    }

    #[test]
    fn test_fallback_keeps_strict_match() {
        let result = calculate_score_with_fallback("Settings", "", &no_aliases(), "set").unwrap();
        assert_eq!(result.score, 1);
        assert_eq!(result.match_type, MatchType::Key);
        assert!(!result.is_similar());
    }

    #[test]
    fn test_threshold() {
        assert_eq!(similarity_threshold(""), 3);
        assert_eq!(similarity_threshold("abcd"), 5);
        assert_eq!(similarity_threshold("abcde"), 5);
        assert_eq!(similarity_threshold("abcdef"), 6);
    }

    #[test]
    fn test_fallback_key_at_threshold() {
        // "zzzz" -> "qqqqq": four substitutions and one insertion.
        let result = calculate_score_with_fallback("qqqqq", "", &no_aliases(), "zzzz").unwrap();
        assert_eq!(result.score, 15);
        assert_eq!(result.match_type, MatchType::Similar);
        assert_eq!(result.indices, None);
        assert_eq!(result.distance, Some(5));
    }

    #[test]
    fn test_fallback_key_beyond_threshold() {
        assert_eq!(levenshtein_distance("qqqqqq", "zzzz"), 6);
        assert_eq!(calculate_score_with_fallback("qqqqqq", "", &no_aliases(), "zzzz"), None);
    }

    #[test]
    fn test_fallback_typo_in_key() {
        let result = calculate_score_with_fallback("moodle", "", &no_aliases(), "mdoole").unwrap();
        assert_eq!(result.match_type, MatchType::Similar);
        assert_eq!(result.score, SIMILAR_KEY_BASE + 2);
    }

    #[test]
    fn test_fallback_uses_closest_alias() {
        let aliases = Aliases::from(vec!["qqqqqqqqqq", "zzzy"]);
        let result = calculate_score_with_fallback("qqqqqqqqqq", "", &aliases, "zzzz").unwrap();
        assert_eq!(result.score, SIMILAR_ALIAS_BASE + 1);
        assert_eq!(result.distance, Some(1));
    }

    #[test]
    fn test_fallback_prefers_key_over_closer_alias() {
        let aliases = Aliases::from("zzzy");
        let result = calculate_score_with_fallback("qqqq", "", &aliases, "zzzw").unwrap();
        assert_eq!(result.score, SIMILAR_KEY_BASE + 4);
        assert_eq!(result.distance, Some(4));
    }

    #[test]
    fn test_fallback_ignores_description() {
        let result = calculate_score_with_fallback("qqqqqqqqqq", "zzzy", &no_aliases(), "zzzw");
        assert_eq!(result, None);
    }

    #[test]
    fn test_fallback_empty_single_alias_is_absent() {
        let result = calculate_score_with_fallback("qqqqqqqqqq", "", &Aliases::from(""), "zzzw");
        assert_eq!(result, None);
    }

    #[test]
    fn test_result_serialization() {
        let strict = calculate_score("Settings", "", &no_aliases(), "set").unwrap();
        assert_eq!(
            serde_json::to_string(&strict).unwrap(),
            r#"{"score":1,"type":"key","indices":[0,1,2]}"#
        );

        let similar = calculate_score_with_fallback("qqqqq", "", &no_aliases(), "zzzz").unwrap();
        assert_eq!(
            serde_json::to_string(&similar).unwrap(),
            r#"{"score":15,"type":"similar","indices":null,"distance":5}"#
        );
    }
}
