//! Filter application
//!
//! `filter_rows` is a pure function producing the subsequence of rows that
//! satisfy every predicate in a spec, preserving original row order. It is
//! idempotent: filtering an already-filtered result with the same spec is
//! a no-op.

use crate::record::{ExplodedTable, MovieTable, RecordFields};

use super::predicate::FilterSpec;

/// Returns the rows satisfying every predicate, in their original order
pub fn filter_rows<R: RecordFields + Clone>(rows: &[R], spec: &FilterSpec) -> Vec<R> {
    rows.iter()
        .filter(|row| spec.matches(*row))
        .cloned()
        .collect()
}

impl MovieTable {
    /// Returns a new table holding the rows that satisfy `spec`
    pub fn filter(&self, spec: &FilterSpec) -> MovieTable {
        MovieTable::new(filter_rows(self.rows(), spec))
    }
}

impl ExplodedTable {
    /// Returns a new table holding the rows that satisfy `spec`
    pub fn filter(&self, spec: &FilterSpec) -> ExplodedTable {
        ExplodedTable::new(filter_rows(self.rows(), spec))
    }
}
