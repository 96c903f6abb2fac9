//! Link Enrichment Tests
//!
//! End-to-end tests for batch link resolution:
//! - Enrichment is total: every row comes back, failures become the sentinel
//! - Transient failures are retried; permanent misses are not
//! - Row order and non-link fields survive enrichment unchanged

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use cinedb::links::{enrich_links, EnrichConfig, LinkResolver, ResolveError};
use cinedb::record::{MovieRecord, MovieTable, RowId};

// =============================================================================
// Helper Functions
// =============================================================================

fn make_movie(id: usize, title: &str) -> MovieRecord {
    MovieRecord {
        id: RowId(id),
        title: title.to_string(),
        release_year: 2000 + id as i32,
        release_date: None,
        genres: vec!["Action".to_string()],
        original_language: "en".to_string(),
        budget: 1.0,
        revenue: 2.0,
        popularity: 3.0,
        vote_average: 4.0,
        external_link: None,
    }
}

fn make_table(count: usize) -> MovieTable {
    MovieTable::new((0..count).map(|i| make_movie(i, &format!("movie-{i}"))).collect())
}

fn fast_config() -> EnrichConfig {
    EnrichConfig {
        workers: 3,
        chunk_size: 2,
        max_attempts: 3,
        backoff: Duration::from_millis(1),
    }
}

/// Resolver scripted per title: fail transiently N times, then succeed,
/// or always report no match.
struct ScriptedResolver {
    transient_failures: HashMap<String, u32>,
    never_found: Vec<String>,
    attempts: Mutex<HashMap<String, u32>>,
    calls: AtomicUsize,
}

impl ScriptedResolver {
    fn new() -> Self {
        Self {
            transient_failures: HashMap::new(),
            never_found: Vec::new(),
            attempts: Mutex::new(HashMap::new()),
            calls: AtomicUsize::new(0),
        }
    }

    fn flaky(mut self, title: &str, failures: u32) -> Self {
        self.transient_failures.insert(title.to_string(), failures);
        self
    }

    fn missing(mut self, title: &str) -> Self {
        self.never_found.push(title.to_string());
        self
    }

    fn attempts_for(&self, title: &str) -> u32 {
        *self.attempts.lock().unwrap().get(title).unwrap_or(&0)
    }
}

impl LinkResolver for ScriptedResolver {
    fn resolve(&self, title: &str) -> Result<String, ResolveError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let attempt = {
            let mut attempts = self.attempts.lock().unwrap();
            let slot = attempts.entry(title.to_string()).or_insert(0);
            *slot += 1;
            *slot
        };

        if self.never_found.iter().any(|t| t == title) {
            return Err(ResolveError::NoMatch);
        }
        let failures = self.transient_failures.get(title).copied().unwrap_or(0);
        if attempt <= failures {
            return Err(ResolveError::Transient("timeout".to_string()));
        }
        Ok(format!("id:{title}"))
    }
}

// =============================================================================
// Totality Tests
// =============================================================================

/// Every row survives enrichment, whether or not its title resolved.
#[tokio::test]
async fn test_enrichment_is_total() {
    let resolver = Arc::new(
        ScriptedResolver::new()
            .missing("movie-1")
            .flaky("movie-3", 10),
    );

    let enriched = enrich_links(make_table(5), Arc::clone(&resolver) as Arc<dyn LinkResolver>, fast_config()).await;

    assert_eq!(enriched.len(), 5);
    assert_eq!(enriched.rows()[0].external_link.as_deref(), Some("id:movie-0"));
    assert_eq!(enriched.rows()[1].external_link, None);
    assert_eq!(enriched.rows()[2].external_link.as_deref(), Some("id:movie-2"));
    // Exhausted retries fall back to the sentinel outcome
    assert_eq!(enriched.rows()[3].external_link, None);
    assert_eq!(enriched.rows()[4].external_link.as_deref(), Some("id:movie-4"));
}

/// Row order and non-link fields are untouched.
#[tokio::test]
async fn test_enrichment_preserves_rows() {
    let resolver = Arc::new(ScriptedResolver::new());
    let original = make_table(7);

    let enriched = enrich_links(original.clone(), resolver, fast_config()).await;

    for (before, after) in original.iter().zip(enriched.iter()) {
        assert_eq!(before.id, after.id);
        assert_eq!(before.title, after.title);
        assert_eq!(before.release_year, after.release_year);
        assert_eq!(before.budget, after.budget);
    }
}

/// An empty table enriches to an empty table.
#[tokio::test]
async fn test_empty_table() {
    let resolver = Arc::new(ScriptedResolver::new());
    let enriched = enrich_links(MovieTable::default(), resolver, fast_config()).await;
    assert!(enriched.is_empty());
}

// =============================================================================
// Retry Policy Tests
// =============================================================================

/// A transiently failing title is retried until it succeeds.
#[tokio::test]
async fn test_transient_failure_retried_to_success() {
    let resolver = Arc::new(ScriptedResolver::new().flaky("movie-0", 2));

    let enriched = enrich_links(make_table(1), Arc::clone(&resolver) as Arc<dyn LinkResolver>, fast_config()).await;

    assert_eq!(enriched.rows()[0].external_link.as_deref(), Some("id:movie-0"));
    assert_eq!(resolver.attempts_for("movie-0"), 3);
}

/// Retries stop at the attempt cap.
#[tokio::test]
async fn test_retries_are_bounded() {
    let resolver = Arc::new(ScriptedResolver::new().flaky("movie-0", 100));

    enrich_links(make_table(1), Arc::clone(&resolver) as Arc<dyn LinkResolver>, fast_config()).await;

    assert_eq!(resolver.attempts_for("movie-0"), 3);
}

/// A definite miss is not retried at all.
#[tokio::test]
async fn test_no_match_is_not_retried() {
    let resolver = Arc::new(ScriptedResolver::new().missing("movie-0"));

    enrich_links(make_table(1), Arc::clone(&resolver) as Arc<dyn LinkResolver>, fast_config()).await;

    assert_eq!(resolver.attempts_for("movie-0"), 1);
}

/// One failing title never poisons its neighbours in the same chunk.
#[tokio::test]
async fn test_failure_does_not_abort_chunk() {
    let resolver = Arc::new(ScriptedResolver::new().missing("movie-2"));

    let enriched = enrich_links(make_table(4), resolver, fast_config()).await;

    assert_eq!(enriched.rows()[2].external_link, None);
    assert_eq!(enriched.rows()[3].external_link.as_deref(), Some("id:movie-3"));
}
