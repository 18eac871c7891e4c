//! Batch scoring and ordering of candidates with optional parallelism.

use crate::{Candidate, MatchResult};
use serde::{Deserialize, Serialize};

/// Which scorer to apply to each candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreMode {
    /// Subsequence matching only
    Strict,
    /// Subsequence matching with an edit-distance fallback
    #[default]
    Fallback,
}

impl ScoreMode {
    /// Scores a single candidate in this mode.
    #[inline]
    pub fn score(self, candidate: &Candidate, search: &str) -> Option<MatchResult> {
        match self {
            ScoreMode::Strict => candidate.score(search),
            ScoreMode::Fallback => candidate.score_with_fallback(search),
        }
    }
}

/// A candidate that matched, with its score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedMatch<'a> {
    /// Position of the candidate in the input slice
    pub position: usize,
    /// The candidate's key
    pub key: &'a str,
    /// How it matched
    #[serde(flatten)]
    pub result: MatchResult,
}

/// Score every candidate and return the matches best-first.
///
/// Candidates without a match are dropped. Matches are sorted ascending by
/// score; equal scores keep their input order.
///
/// # Arguments
/// * `candidates` - Records to rank
/// * `search` - The user's query
/// * `mode` - Scorer to use
/// * `max_results` - Maximum number of matches to return (None for all)
///
/// # Example
/// ```
/// use quicklinks_search::{rank, Candidate, ScoreMode};
///
/// let candidates = vec![
///     Candidate::new("Users", "Manage accounts", vec!["people"]),
///     Candidate::new("Settings", "Preferences", vec!["config"]),
/// ];
///
/// let ranked = rank(&candidates, "set", ScoreMode::Strict, None);
/// assert_eq!(ranked.len(), 1);
/// assert_eq!(ranked[0].key, "Settings");
/// ```
pub fn rank<'a>(
    candidates: &'a [Candidate],
    search: &str,
    mode: ScoreMode,
    max_results: Option<usize>,
) -> Vec<RankedMatch<'a>> {
    let score = |(position, candidate): (usize, &'a Candidate)| {
        mode.score(candidate, search).map(|result| RankedMatch {
            position,
            key: candidate.key.as_str(),
            result,
        })
    };

    #[cfg(feature = "parallel")]
    let mut ranked: Vec<RankedMatch<'a>> = {
        use rayon::prelude::*;
        candidates.par_iter().enumerate().filter_map(score).collect()
    };

    #[cfg(not(feature = "parallel"))]
    let mut ranked: Vec<RankedMatch<'a>> = candidates.iter().enumerate().filter_map(score).collect();

    ranked.sort_by_key(|m| m.result.score);

    if let Some(max) = max_results {
        ranked.truncate(max);
    }

    tracing::debug!(
        candidates = candidates.len(),
        matches = ranked.len(),
        ?mode,
        "ranked candidates"
    );

    ranked
}

/// Edit-distance suggestions for a query with no strict matches.
///
/// Returns an empty list when any candidate matches strictly, since the
/// search box then has real results to show.
pub fn suggestions<'a>(candidates: &'a [Candidate], search: &str, max_results: Option<usize>) -> Vec<RankedMatch<'a>> {
    let ranked = rank(candidates, search, ScoreMode::Fallback, max_results);
    if ranked.iter().any(|m| !m.result.is_similar()) {
        return Vec::new();
    }
    ranked
}
