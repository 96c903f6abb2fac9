//! Observability
//!
//! Structured logging for lifecycle work (table loading, link enrichment).
//!
//! # Principles
//!
//! 1. Observability is read-only: no side effects on query results
//! 2. Synchronous, deterministic output
//! 3. The pure query path performs no I/O and stays silent

mod logger;

pub use logger::{Logger, Severity};
