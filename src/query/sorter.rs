//! Ranking
//!
//! Sort directives apply after filtering, each as a full stable re-sort
//! keyed by one numeric field. Later directives take priority over earlier
//! ones because each re-sort is applied on top of the previous order: the
//! last sort wins, and rows tying on its key keep the order the earlier
//! sorts produced.
//!
//! This is observably different from a single multi-key comparator when
//! two rows tie on the final key, and it is preserved deliberately.

use std::cmp::Ordering;

use crate::record::{MovieTable, NumericField, RecordFields};

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

/// One ordering directive: a numeric key and a direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortDirective {
    /// Field to sort by
    pub field: NumericField,
    /// Sort direction
    pub direction: SortDirection,
}

impl SortDirective {
    pub fn asc(field: NumericField) -> Self {
        Self {
            field,
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(field: NumericField) -> Self {
        Self {
            field,
            direction: SortDirection::Desc,
        }
    }
}

/// Applies each directive in the order given, as a full stable re-sort
pub fn sort_stack<R: RecordFields>(rows: &mut [R], directives: &[SortDirective]) {
    for directive in directives {
        rows.sort_by(|a, b| {
            let ordering = a
                .numeric(directive.field)
                .partial_cmp(&b.numeric(directive.field))
                .unwrap_or(Ordering::Equal);
            match directive.direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        });
    }
}

impl MovieTable {
    /// Returns a copy of the table re-sorted by the directive stack
    pub fn sorted(&self, directives: &[SortDirective]) -> MovieTable {
        let mut rows = self.rows().to_vec();
        sort_stack(&mut rows, directives);
        MovieTable::new(rows)
    }
}
