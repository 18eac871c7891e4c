//! Fuzzy search for the quicklinks search box.
//!
//! This crate provides:
//! - Case-insensitive subsequence matching with match positions
//! - `<mark>` highlighting of matched characters
//! - Levenshtein edit distance
//! - Priority scoring (key > aliases > description) with an edit-distance
//!   fallback for "did you mean" suggestions
//! - Batch ranking with optional parallelism
//! - WASM bindings for browser usage
//!
//! # Example
//!
//! ```
//! use quicklinks_search::{calculate_score_with_fallback, highlight_matches, Aliases, MatchType};
//!
//! let aliases = Aliases::from(vec!["prefs", "config"]);
//!
//! let hit = calculate_score_with_fallback("Settings", "Preferences", &aliases, "stg").unwrap();
//! assert_eq!(hit.match_type, MatchType::Key);
//! assert_eq!(
//!     highlight_matches("Settings", hit.indices.as_deref()),
//!     "<mark>S</mark>e<mark>t</mark>tin<mark>g</mark>s"
//! );
//!
//! let typo = calculate_score_with_fallback("Settings", "Preferences", &aliases, "Setings").unwrap();
//! assert_eq!(typo.match_type, MatchType::Key);
//!
//! let near = calculate_score_with_fallback("Settings", "Preferences", &aliases, "Sexxings").unwrap();
//! assert_eq!(near.match_type, MatchType::Similar);
//! assert_eq!(near.distance, Some(2));
//! ```

mod candidate;
mod error;
mod fuzzy;
mod highlight;
pub mod ranking;
mod scoring;

#[cfg(feature = "wasm")]
mod wasm;

pub use candidate::{parse_candidates, Aliases, Candidate};
pub use error::{Result, SearchError, SearchErrorCode};
pub use fuzzy::{fuzzy_match_with_indices, levenshtein_distance};
pub use highlight::{highlight_matches, highlight_matches_with, MARK_CLOSE, MARK_OPEN};
pub use ranking::{rank, suggestions, RankedMatch, ScoreMode};
pub use scoring::{
    calculate_score, calculate_score_with_fallback, similarity_threshold, MatchResult, MatchType,
    ALIAS_SCORE, DESCRIPTION_SCORE, KEY_SCORE, SIMILAR_ALIAS_BASE, SIMILAR_KEY_BASE,
};
