//! Predicate Engine and Ranker
//!
//! Pure query primitives over an immutable table snapshot:
//!
//! 1. Build a `FilterSpec` (conjunction of predicates)
//! 2. Filter, preserving original row order
//! 3. Rank with a stack of sequential stable sorts
//!
//! Filtering never errors on "no matches"; an empty result is a valid,
//! silent outcome.

mod filter;
mod predicate;
mod sorter;

pub use filter::filter_rows;
pub use predicate::{FilterSpec, Predicate};
pub use sorter::{sort_stack, SortDirection, SortDirective};
