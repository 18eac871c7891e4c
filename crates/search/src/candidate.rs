//! Searchable records.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

/// Alternative names for a candidate.
///
/// Serialized as either a bare string or an array of strings. Any other JSON
/// or TOML value (numbers, `null`, mixed arrays) deserializes as no aliases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Aliases {
    /// A single alias
    Single(String),
    /// An ordered list of aliases
    Many(Vec<String>),
}

impl Aliases {
    /// Returns an empty alias list.
    pub fn none() -> Self {
        Aliases::Many(Vec::new())
    }

    /// Iterates the aliases in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        let list: &[String] = match self {
            Aliases::Single(alias) => std::slice::from_ref(alias),
            Aliases::Many(list) => list,
        };
        list.iter().map(String::as_str)
    }

    /// Returns true if there is no alias to compare against.
    ///
    /// A single empty string counts as absent.
    pub fn is_empty(&self) -> bool {
        match self {
            Aliases::Single(alias) => alias.is_empty(),
            Aliases::Many(list) => list.is_empty(),
        }
    }
}

impl Default for Aliases {
    fn default() -> Self {
        Self::none()
    }
}

impl From<&str> for Aliases {
    fn from(alias: &str) -> Self {
        Aliases::Single(alias.to_string())
    }
}

impl From<String> for Aliases {
    fn from(alias: String) -> Self {
        Aliases::Single(alias)
    }
}

impl<S: Into<String>> From<Vec<S>> for Aliases {
    fn from(list: Vec<S>) -> Self {
        Aliases::Many(list.into_iter().map(Into::into).collect())
    }
}

impl<'de> Deserialize<'de> for Aliases {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Single(String),
            Many(Vec<String>),
            Other(IgnoredAny),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Single(alias) => Aliases::Single(alias),
            Raw::Many(list) => Aliases::Many(list),
            Raw::Other(_) => Aliases::none(),
        })
    }
}

/// A record offered to the search box.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    /// Primary name
    pub key: String,
    /// Human-readable description
    #[serde(default)]
    pub description: String,
    /// Alternative names
    #[serde(default)]
    pub aliases: Aliases,
}

impl Candidate {
    /// Creates a new candidate.
    pub fn new(key: impl Into<String>, description: impl Into<String>, aliases: impl Into<Aliases>) -> Self {
        Self {
            key: key.into(),
            description: description.into(),
            aliases: aliases.into(),
        }
    }

    /// Scores this candidate with [`crate::calculate_score`].
    #[inline]
    pub fn score(&self, search: &str) -> Option<crate::MatchResult> {
        crate::calculate_score(&self.key, &self.description, &self.aliases, search)
    }

    /// Scores this candidate with [`crate::calculate_score_with_fallback`].
    #[inline]
    pub fn score_with_fallback(&self, search: &str) -> Option<crate::MatchResult> {
        crate::calculate_score_with_fallback(&self.key, &self.description, &self.aliases, search)
    }

    /// The field text that `result.indices` point into.
    ///
    /// For alias matches this is the first alias matching `search`, the same
    /// one the scorer picked. Similar matches carry no indices and return
    /// `None`.
    pub fn matched_text(&self, result: &crate::MatchResult, search: &str) -> Option<&str> {
        match result.match_type {
            crate::MatchType::Key => Some(&self.key),
            crate::MatchType::Description => Some(&self.description),
            crate::MatchType::Aliases => self
                .aliases
                .iter()
                .find(|alias| crate::fuzzy_match_with_indices(alias, search).is_some()),
            crate::MatchType::Similar => None,
        }
    }
}

/// Parse a JSON array of candidates.
///
/// # Errors
/// Returns [`crate::SearchError::JsonError`] if the input is not an array of
/// objects with at least a `key` field.
pub fn parse_candidates(json: &str) -> crate::Result<Vec<Candidate>> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aliases_iter() {
        let single = Aliases::from("lms");
        assert_eq!(single.iter().collect::<Vec<_>>(), vec!["lms"]);

        let many = Aliases::from(vec!["a", "b"]);
        assert_eq!(many.iter().collect::<Vec<_>>(), vec!["a", "b"]);

        assert_eq!(Aliases::none().iter().count(), 0);
    }

    #[test]
    fn test_aliases_is_empty() {
        assert!(Aliases::none().is_empty());
        assert!(Aliases::from("").is_empty());
        assert!(!Aliases::from("x").is_empty());
        assert!(!Aliases::from(vec![""]).is_empty());
    }

    #[test]
    fn test_deserialize_string_or_array() {
        let single: Candidate =
            serde_json::from_str(r#"{"key":"a","description":"d","aliases":"x"}"#).unwrap();
        assert_eq!(single.aliases, Aliases::Single("x".into()));

        let many: Candidate =
            serde_json::from_str(r#"{"key":"a","description":"d","aliases":["x","y"]}"#).unwrap();
        assert_eq!(many.aliases, Aliases::from(vec!["x", "y"]));
    }

    #[test]
    fn test_deserialize_malformed_aliases_degrade() {
        let numeric: Candidate =
            serde_json::from_str(r#"{"key":"a","description":"d","aliases":42}"#).unwrap();
        assert_eq!(numeric.aliases, Aliases::none());

        let null: Candidate =
            serde_json::from_str(r#"{"key":"a","description":"d","aliases":null}"#).unwrap();
        assert_eq!(null.aliases, Aliases::none());

        let missing: Candidate = serde_json::from_str(r#"{"key":"a"}"#).unwrap();
        assert_eq!(missing.aliases, Aliases::none());
        assert_eq!(missing.description, "");
    }

    #[test]
    fn test_serialize_untagged() {
        let candidate = Candidate::new("a", "d", "x");
        let json = serde_json::to_string(&candidate).unwrap();
        assert_eq!(json, r#"{"key":"a","description":"d","aliases":"x"}"#);
    }

    #[test]
    fn test_matched_text() {
        let candidate = Candidate::new("moodle", "Learning platform", vec!["lms", "elearning"]);

        let by_key = candidate.score("mdl").unwrap();
        assert_eq!(candidate.matched_text(&by_key, "mdl"), Some("moodle"));

        let by_alias = candidate.score("earn").unwrap();
        assert_eq!(candidate.matched_text(&by_alias, "earn"), Some("elearning"));

        let by_description = candidate.score("platf").unwrap();
        assert_eq!(candidate.matched_text(&by_description, "platf"), Some("Learning platform"));

        let similar = candidate.score_with_fallback("moodie").unwrap();
        assert_eq!(candidate.matched_text(&similar, "moodie"), None);
    }

    #[test]
    fn test_parse_candidates() {
        let parsed = parse_candidates(r#"[{"key":"Users"},{"key":"Settings","aliases":["prefs"]}]"#).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[1].key, "Settings");

        assert!(parse_candidates("{not json").is_err());
        assert!(parse_candidates(r#"[{"description":"no key"}]"#).is_err());
    }
}
