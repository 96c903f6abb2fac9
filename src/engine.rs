//! Session facade
//!
//! `MovieDb` owns one loaded table for the session and hands out derived
//! views. The base table never mutates; the exploded view is computed on
//! first use and cached for the table's lifetime (reloading means a new
//! `MovieDb`).

use std::sync::OnceLock;

use crate::dispatch::{DispatchResult, QueryDispatcher, QueryResult, QuerySpec};
use crate::query::{filter_rows, sort_stack, FilterSpec, SortDirective};
use crate::record::{explode, ExplodedTable, MovieTable};

/// A loaded dataset and its derived views
pub struct MovieDb {
    table: MovieTable,
    exploded: OnceLock<ExplodedTable>,
}

impl MovieDb {
    /// Wraps a loaded table
    pub fn new(table: MovieTable) -> Self {
        Self {
            table,
            exploded: OnceLock::new(),
        }
    }

    /// The base table
    pub fn table(&self) -> &MovieTable {
        &self.table
    }

    /// The exploded view, derived once and cached for the session
    pub fn exploded(&self) -> &ExplodedTable {
        self.exploded.get_or_init(|| explode(&self.table))
    }

    /// Rows with complete financials (non-zero budget and revenue)
    pub fn without_zero_financials(&self) -> MovieTable {
        self.table.without_zero_financials()
    }

    /// Filters, then ranks with a stack of sequential stable sorts
    pub fn search(&self, spec: &FilterSpec, sorts: &[SortDirective]) -> MovieTable {
        let mut rows = filter_rows(self.table.rows(), spec);
        sort_stack(&mut rows, sorts);
        MovieTable::new(rows)
    }

    /// Language-restricted pair of views: the base rows for that language
    /// and their per-genre expansion
    pub fn storytelling(&self, language: &str) -> (MovieTable, ExplodedTable) {
        let by_language = self.table.filter(&FilterSpec::new().language_eq(language));
        let per_genre = explode(&by_language);
        (by_language, per_genre)
    }

    /// Dispatches one query over the session's snapshot
    pub fn query(&self, spec: &QuerySpec) -> DispatchResult<QueryResult> {
        QueryDispatcher::new(&self.table, self.exploded()).dispatch(spec)
    }
}
