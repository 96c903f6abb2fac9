//! Aggregator
//!
//! Grouped means and descriptive/correlation statistics over either table
//! shape. Every operation fails with `StatsError::EmptyInput` on a
//! zero-row table (mean, std and correlation are undefined) and never
//! fails otherwise.

mod correlate;
mod describe;
mod errors;
mod group;

pub use correlate::correlate;
pub use describe::{describe, FieldStats};
pub use errors::{StatsError, StatsResult};
pub use group::{group_mean, GroupMeanRow, GroupedMeans};
