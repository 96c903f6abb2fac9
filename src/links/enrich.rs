//! Batch link enrichment
//!
//! Partitions the title list into fixed-size chunks and resolves each
//! chunk on a bounded pool of blocking workers. A transient failure is
//! retried up to `max_attempts` times with a fixed backoff before the
//! title falls back to the sentinel. A single title's failure never
//! aborts the batch: enrichment is total.

use std::sync::Arc;
use std::time::Duration;

use crate::observability::Logger;
use crate::record::MovieTable;

use super::resolver::{LinkResolver, ResolveError, ResolvedLink};

/// Tuning for a batch enrichment run
#[derive(Debug, Clone)]
pub struct EnrichConfig {
    /// Maximum chunks resolved concurrently
    pub workers: usize,
    /// Titles per chunk
    pub chunk_size: usize,
    /// Attempts per title before the sentinel fallback
    pub max_attempts: u32,
    /// Fixed delay between attempts
    pub backoff: Duration,
}

impl Default for EnrichConfig {
    fn default() -> Self {
        Self {
            workers: 10,
            chunk_size: 10,
            max_attempts: 3,
            backoff: Duration::from_secs(1),
        }
    }
}

/// Resolves an external link for every row of the table.
///
/// Returns a new table with `external_link` populated; rows whose title
/// could not be resolved carry no link (the sentinel outcome). Row order
/// and every other field are unchanged.
pub async fn enrich_links(
    table: MovieTable,
    resolver: Arc<dyn LinkResolver>,
    config: EnrichConfig,
) -> MovieTable {
    let titles: Vec<String> = table.iter().map(|record| record.title.clone()).collect();
    let links = resolve_all(&titles, resolver, &config).await;

    let mut resolved = 0usize;
    let mut rows = table.into_rows();
    for (row, link) in rows.iter_mut().zip(links) {
        if link.is_found() {
            resolved += 1;
        }
        row.external_link = link.into_link();
    }

    Logger::info(
        "ENRICH_COMPLETE",
        &[
            ("resolved", &resolved.to_string()),
            ("missing", &(rows.len() - resolved).to_string()),
        ],
    );
    MovieTable::new(rows)
}

/// Resolves every title, chunked, on a bounded worker pool.
///
/// Output order matches input order.
async fn resolve_all(
    titles: &[String],
    resolver: Arc<dyn LinkResolver>,
    config: &EnrichConfig,
) -> Vec<ResolvedLink> {
    let chunk_size = config.chunk_size.max(1);
    let workers = config.workers.max(1);
    let chunks: Vec<Vec<String>> = titles.chunks(chunk_size).map(<[String]>::to_vec).collect();

    let mut links: Vec<ResolvedLink> = Vec::with_capacity(titles.len());

    // Waves of at most `workers` concurrent chunks
    for wave in chunks.chunks(workers) {
        let mut handles = Vec::with_capacity(wave.len());
        for chunk in wave {
            let chunk = chunk.clone();
            let resolver = Arc::clone(&resolver);
            let max_attempts = config.max_attempts;
            let backoff = config.backoff;
            handles.push(tokio::task::spawn_blocking(move || {
                resolve_chunk(resolver.as_ref(), &chunk, max_attempts, backoff)
            }));
        }

        for (handle, chunk) in handles.into_iter().zip(wave) {
            match handle.await {
                Ok(chunk_links) => links.extend(chunk_links),
                Err(join_error) => {
                    // A panicked worker loses only its own chunk
                    Logger::error(
                        "ENRICH_WORKER_LOST",
                        &[("reason", &join_error.to_string())],
                    );
                    links.extend(std::iter::repeat(ResolvedLink::NotFound).take(chunk.len()));
                }
            }
        }
    }

    links
}

fn resolve_chunk(
    resolver: &dyn LinkResolver,
    titles: &[String],
    max_attempts: u32,
    backoff: Duration,
) -> Vec<ResolvedLink> {
    titles
        .iter()
        .map(|title| resolve_with_retry(resolver, title, max_attempts, backoff))
        .collect()
}

/// Resolves one title, retrying transient failures with a fixed backoff
fn resolve_with_retry(
    resolver: &dyn LinkResolver,
    title: &str,
    max_attempts: u32,
    backoff: Duration,
) -> ResolvedLink {
    for attempt in 1..=max_attempts.max(1) {
        match resolver.resolve(title) {
            Ok(id) => return ResolvedLink::Found(id),
            Err(ResolveError::NoMatch) => break,
            Err(ResolveError::Transient(reason)) => {
                Logger::warn(
                    "LINK_RETRY",
                    &[
                        ("attempt", &attempt.to_string()),
                        ("reason", &reason),
                        ("title", title),
                    ],
                );
                if attempt < max_attempts {
                    std::thread::sleep(backoff);
                }
            }
        }
    }

    Logger::warn("LINK_NOT_FOUND", &[("title", title)]);
    ResolvedLink::NotFound
}
