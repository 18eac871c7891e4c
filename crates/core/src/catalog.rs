//! Short-link catalog lookups
//!
//! A [`Catalog`] answers two questions: which link does a name refer to
//! (exact key first, then alias), and which links does a search box query
//! match (fuzzy, via `quicklinks-search`).

use crate::config::RedirectEntry;
use quicklinks_search::{rank, Candidate, RankedMatch, ScoreMode};
use std::collections::{BTreeMap, HashMap};

/// Searchable set of short links
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    redirects: BTreeMap<String, RedirectEntry>,
    /// Alias -> owning key; the first entry (by key order) to claim an alias keeps it
    aliases: HashMap<String, String>,
    candidates: Vec<Candidate>,
}

impl Catalog {
    /// Build a catalog from redirects keyed by name
    pub fn new(redirects: BTreeMap<String, RedirectEntry>) -> Self {
        let mut aliases = HashMap::new();
        for (key, entry) in &redirects {
            for alias in entry.aliases.iter().filter(|a| !a.is_empty()) {
                aliases.entry(alias.to_string()).or_insert_with(|| key.clone());
            }
        }

        let candidates = redirects
            .iter()
            .map(|(key, entry)| Candidate::new(key.clone(), entry.description.clone(), entry.aliases.clone()))
            .collect();

        Self {
            redirects,
            aliases,
            candidates,
        }
    }

    /// Number of links
    pub fn len(&self) -> usize {
        self.redirects.len()
    }

    /// Returns true if the catalog has no links
    pub fn is_empty(&self) -> bool {
        self.redirects.is_empty()
    }

    /// Look up a link by its exact key
    pub fn get(&self, key: &str) -> Option<&RedirectEntry> {
        self.redirects.get(key)
    }

    /// All links sorted by key
    pub fn entries(&self) -> impl Iterator<Item = (&str, &RedirectEntry)> {
        self.redirects.iter().map(|(key, entry)| (key.as_str(), entry))
    }

    /// Links as search candidates, in the same order as [`Catalog::entries`]
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    /// Resolve a name to its link
    ///
    /// Keys take precedence over aliases. Returns the owning key alongside
    /// the entry.
    pub fn resolve(&self, name: &str) -> Option<(&str, &RedirectEntry)> {
        if let Some((key, entry)) = self.redirects.get_key_value(name) {
            tracing::debug!(name, "resolved by key");
            return Some((key.as_str(), entry));
        }

        let key = self.aliases.get(name)?;
        let (key, entry) = self.redirects.get_key_value(key)?;
        tracing::debug!(name, key = key.as_str(), "resolved by alias");
        Some((key.as_str(), entry))
    }

    /// Rank links for a search box query
    pub fn search(&self, query: &str, mode: ScoreMode, max_results: Option<usize>) -> Vec<RankedMatch<'_>> {
        rank(&self.candidates, query, mode, max_results)
    }

    /// Entry behind a ranked match
    pub fn entry_for(&self, ranked: &RankedMatch<'_>) -> Option<&RedirectEntry> {
        self.redirects.get(ranked.key)
    }

    /// Alias map, alias -> owning key
    pub(crate) fn alias_owners(&self) -> &HashMap<String, String> {
        &self.aliases
    }
}

/// Extract the redirect key from a request path (its first segment)
pub fn key_from_path(path: &str) -> &str {
    path.trim_start_matches('/').split('/').next().unwrap_or_default()
}

/// Extract the redirect key from a host name served under `domain`
///
/// Any port is ignored. Returns `None` if `host` is not a subdomain of
/// `domain`.
pub fn key_from_host<'a>(host: &'a str, domain: &str) -> Option<&'a str> {
    let host = host.split(':').next().unwrap_or(host);
    host.strip_suffix(domain)?
        .strip_suffix('.')
        .filter(|subdomain| !subdomain.is_empty())
}

/// Extract the redirect key from whatever the user typed
///
/// Accepts a bare key, a path (`/key/rest`), a URL or host under `domain`
/// (`key.example.org`, `https://example.org/key`).
pub fn redirect_key<'a>(target: &'a str, domain: Option<&str>) -> &'a str {
    let target = target
        .strip_prefix("https://")
        .or_else(|| target.strip_prefix("http://"))
        .unwrap_or(target);

    let (host, path) = match target.find('/') {
        Some(slash) => (&target[..slash], &target[slash..]),
        None => (target, ""),
    };

    if let Some(domain) = domain {
        if let Some(key) = key_from_host(host, domain) {
            return key;
        }
        if host.split(':').next() == Some(domain) {
            return key_from_path(path);
        }
    }

    if host.is_empty() {
        return key_from_path(path);
    }

    host
}
