//! Link resolution interface
//!
//! A resolver maps a movie title to an external identifier (e.g. an IMDb
//! page). Resolution is I/O and lives outside the query engine; it is
//! never invoked inside a query.

use thiserror::Error;

/// Canonical sentinel recorded when resolution fails permanently.
///
/// Distinct from any valid identifier; enrichment stores it instead of
/// raising, so batch runs are always total.
pub const LINK_NOT_FOUND: &str = "not found";

/// Outcome of resolving one title
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedLink {
    /// External identifier
    Found(String),
    /// Sentinel: resolution failed after retries, or the title has no entry
    NotFound,
}

impl ResolvedLink {
    /// String form; the sentinel for failures
    pub fn as_str(&self) -> &str {
        match self {
            ResolvedLink::Found(id) => id,
            ResolvedLink::NotFound => LINK_NOT_FOUND,
        }
    }

    /// Returns true if resolution succeeded
    pub fn is_found(&self) -> bool {
        matches!(self, ResolvedLink::Found(_))
    }

    /// The identifier, if resolution succeeded
    pub fn into_link(self) -> Option<String> {
        match self {
            ResolvedLink::Found(id) => Some(id),
            ResolvedLink::NotFound => None,
        }
    }
}

/// Errors a resolver may report for one lookup
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ResolveError {
    /// Worth retrying: network hiccup, throttling, truncated read
    #[error("transient resolution failure: {0}")]
    Transient(String),

    /// Retrying will not help: the title has no external entry
    #[error("no external entry for title")]
    NoMatch,
}

/// A service that maps a movie title to an external identifier.
///
/// Implementations perform network I/O and may fail transiently; the
/// enrichment driver owns retries and the sentinel fallback.
pub trait LinkResolver: Send + Sync {
    /// Resolves one title
    fn resolve(&self, title: &str) -> Result<String, ResolveError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel_is_distinct_from_results() {
        let found = ResolvedLink::Found("tt0133093".to_string());
        assert!(found.is_found());
        assert_eq!(found.as_str(), "tt0133093");

        let missing = ResolvedLink::NotFound;
        assert!(!missing.is_found());
        assert_eq!(missing.as_str(), LINK_NOT_FOUND);
        assert_eq!(missing.into_link(), None);
    }
}
