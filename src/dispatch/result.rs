//! Dispatch result shapes
//!
//! The variant encodes the row granularity of the answer. A downstream
//! chart renderer relies on it to decide which plot family is valid:
//! row-level variants feed scatter/line/histogram plots, the grouped
//! variant feeds aggregate bar plots.

use serde::Serialize;

use crate::record::{ExplodedTable, MovieTable};
use crate::stats::GroupedMeans;

/// What a dispatched query produced
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryResult {
    /// Row-level result at base-table granularity
    Rows(MovieTable),
    /// Row-level result at one-row-per-genre granularity
    ExplodedRows(ExplodedTable),
    /// Aggregate result: one mean per group key
    Grouped(GroupedMeans),
}

impl QueryResult {
    /// Returns true for the aggregate shape
    pub fn is_grouped(&self) -> bool {
        matches!(self, QueryResult::Grouped(_))
    }

    /// Returns true for either row-level shape
    pub fn is_row_level(&self) -> bool {
        !self.is_grouped()
    }

    /// Number of rows or groups in the result
    pub fn len(&self) -> usize {
        match self {
            QueryResult::Rows(table) => table.len(),
            QueryResult::ExplodedRows(table) => table.len(),
            QueryResult::Grouped(grouped) => grouped.len(),
        }
    }

    /// Returns true if the result holds nothing
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_predicates() {
        let rows = QueryResult::Rows(MovieTable::default());
        assert!(rows.is_row_level());
        assert!(!rows.is_grouped());
        assert!(rows.is_empty());

        let exploded = QueryResult::ExplodedRows(ExplodedTable::default());
        assert!(exploded.is_row_level());

        let grouped = QueryResult::Grouped(GroupedMeans {
            group_by: "original_language".to_string(),
            value_fields: Vec::new(),
            groups: Vec::new(),
        });
        assert!(grouped.is_grouped());
        assert!(!grouped.is_row_level());
    }
}
