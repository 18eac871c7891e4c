//! WASM bindings for the search box.
//!
//! These bindings let the page's keystroke handler call the matcher directly.
//! Structured values cross the boundary as JSON strings.
//!
//! Match indices count Unicode scalar values, not the UTF-16 code units a JS
//! string indexes by. They only line up with `text[i]` for text without
//! astral characters such as emoji, so pages should render them with
//! [`highlight`] rather than slicing the string themselves.

use crate::{parse_candidates, Candidate, ScoreMode};
use wasm_bindgen::prelude::*;

fn mode(fallback: bool) -> ScoreMode {
    if fallback { ScoreMode::Fallback } else { ScoreMode::Strict }
}

fn to_js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Find where `search` occurs in `text` as a case-insensitive subsequence.
///
/// # Returns
/// Scalar-value positions of the matched characters (a `Uint32Array` in JS),
/// or `undefined` if there is no match. Pass them to [`highlight`].
#[wasm_bindgen]
pub fn fuzzy_indices(text: &str, search: &str) -> Option<Vec<u32>> {
    crate::fuzzy_match_with_indices(text, search)
        .map(|indices| indices.into_iter().map(|i| i as u32).collect())
}

/// Wrap the characters at `indices` in `<mark>` tags.
///
/// `indices` are scalar-value positions as returned by [`fuzzy_indices`] or
/// carried in a match result.
#[wasm_bindgen]
pub fn highlight(text: &str, indices: Vec<u32>) -> String {
    let indices: Vec<usize> = indices.into_iter().map(|i| i as usize).collect();
    crate::highlight_matches(text, Some(indices.as_slice()))
}

/// Calculate case-insensitive Levenshtein edit distance between two strings.
#[wasm_bindgen]
pub fn edit_distance(a: &str, b: &str) -> usize {
    crate::levenshtein_distance(a, b)
}

/// Score one candidate against a query.
///
/// # Arguments
/// * `candidate_json` - JSON object with `key`, `description` and `aliases`
/// * `search` - Search query
/// * `fallback` - Whether to fall back to edit distance on a miss
///
/// # Returns
/// JSON match result, or `"null"` if the candidate does not match. Its
/// `indices` are scalar-value positions; render them with [`highlight`].
#[wasm_bindgen]
pub fn score_candidate(candidate_json: &str, search: &str, fallback: bool) -> Result<String, JsValue> {
    let candidate: Candidate = serde_json::from_str(candidate_json).map_err(to_js_error)?;

    match mode(fallback).score(&candidate, search) {
        Some(result) => serde_json::to_string(&result).map_err(to_js_error),
        None => Ok("null".to_string()),
    }
}

/// Rank candidates for a query.
///
/// # Arguments
/// * `candidates_json` - JSON array of candidates
/// * `search` - Search query
/// * `fallback` - Whether to fall back to edit distance on a miss
/// * `max_results` - Maximum results to return (0 for all)
///
/// # Returns
/// JSON array of matches sorted best-first, each with `position`, `key`,
/// `score`, `type`, `indices` and, for similar matches, `distance`
#[wasm_bindgen]
pub fn search_candidates(
    candidates_json: &str,
    search: &str,
    fallback: bool,
    max_results: u32,
) -> Result<String, JsValue> {
    let candidates = parse_candidates(candidates_json).map_err(to_js_error)?;

    let max = if max_results == 0 { None } else { Some(max_results as usize) };
    let ranked = crate::rank(&candidates, search, mode(fallback), max);

    serde_json::to_string(&ranked).map_err(to_js_error)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CANDIDATES: &str = r#"[
        {"key":"Users","description":"Manage people","aliases":["people","accounts"]},
        {"key":"Settings","description":"Application preferences","aliases":"prefs"},
        {"key":"Reports","description":"Monthly statistics","aliases":"stats"}
    ]"#;

    #[test]
    fn test_fuzzy_indices() {
        assert_eq!(fuzzy_indices("Settings", "stg"), Some(vec![0, 2, 6]));
        assert_eq!(fuzzy_indices("Settings", "xyz"), None);
        assert_eq!(fuzzy_indices("Settings", ""), Some(vec![]));
    }

    #[test]
    fn test_indices_count_scalars_not_utf16_units() {
        // The emoji takes two UTF-16 units but one scalar position.
        let indices = fuzzy_indices("🔗 Links", "l").unwrap();
        assert_eq!(indices, vec![2]);
        assert_eq!(highlight("🔗 Links", indices), "🔗 <mark>L</mark>inks");
    }

    #[test]
    fn test_highlight() {
        assert_eq!(highlight("Settings", vec![0, 1, 2]), "<mark>S</mark><mark>e</mark><mark>t</mark>tings");
        assert_eq!(highlight("Settings", vec![]), "Settings");
    }

    #[test]
    fn test_edit_distance() {
        assert_eq!(edit_distance("Kitten", "sitting"), 3);
    }

    #[test]
    fn test_score_candidate() {
        let candidate = r#"{"key":"Settings","description":"Application preferences","aliases":"prefs"}"#;

        let hit: serde_json::Value = serde_json::from_str(&score_candidate(candidate, "set", false).unwrap()).unwrap();
        assert_eq!(hit["score"], 1);
        assert_eq!(hit["type"], "key");
        assert_eq!(hit["indices"], serde_json::json!([0, 1, 2]));

        assert_eq!(score_candidate(candidate, "Setings", false).unwrap(), r#"{"score":1,"type":"key","indices":[0,1,2,4,5,6,7]}"#);
        assert_eq!(score_candidate(candidate, "xyz", false).unwrap(), "null");
        assert_eq!(score_candidate(candidate, "Sexxings", false).unwrap(), "null");

        let similar: serde_json::Value =
            serde_json::from_str(&score_candidate(candidate, "Sexxings", true).unwrap()).unwrap();
        assert_eq!(similar["type"], "similar");
        assert_eq!(similar["score"], 12);
        assert_eq!(similar["distance"], 2);
        assert!(similar["indices"].is_null());
    }

    #[test]
    fn test_search_candidates_limit() {
        let all: serde_json::Value = serde_json::from_str(&search_candidates(CANDIDATES, "s", false, 0).unwrap()).unwrap();
        let keys: Vec<&str> = all.as_array().unwrap().iter().map(|m| m["key"].as_str().unwrap()).collect();
        assert_eq!(keys, vec!["Users", "Settings", "Reports"]);

        let two: serde_json::Value = serde_json::from_str(&search_candidates(CANDIDATES, "s", false, 2).unwrap()).unwrap();
        assert_eq!(two.as_array().unwrap().len(), 2);
        assert_eq!(two[1]["position"], 1);
    }

    #[test]
    fn test_search_candidates_fallback() {
        assert_eq!(search_candidates(CANDIDATES, "Usrez", false, 0).unwrap(), "[]");

        let suggested: serde_json::Value =
            serde_json::from_str(&search_candidates(CANDIDATES, "Usrez", true, 0).unwrap()).unwrap();
        assert_eq!(suggested[0]["key"], "Users");
        assert_eq!(suggested[0]["type"], "similar");
    }
}
