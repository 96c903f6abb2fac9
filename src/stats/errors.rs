//! Aggregator errors

use thiserror::Error;

/// Result type for statistics operations
pub type StatsResult<T> = Result<T, StatsError>;

/// Statistics errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StatsError {
    /// Mean, standard deviation and correlation are undefined over zero
    /// rows. Reported to the caller; not fatal to the process.
    #[error("statistics require at least one row")]
    EmptyInput,
}
