//! Query Dispatcher
//!
//! Given an (attribute, restriction, metric) triple, decides whether to
//! filter, explode-then-filter, or group-and-aggregate, and returns a
//! result whose variant tells the caller which granularity it got.
//!
//! # Invariants
//!
//! - The decision table in `dispatcher` is the only place this branching
//!   lives; call sites never re-implement it
//! - Row-level branches never aggregate; the grouped branch never returns
//!   rows
//! - A failed restriction coercion aborts the query with no partial result

mod dispatcher;
mod errors;
mod result;
mod spec;

pub use dispatcher::QueryDispatcher;
pub use errors::{DispatchError, DispatchResult};
pub use result::QueryResult;
pub use spec::{Attribute, AttributeKind, QuerySpec, Restriction};
