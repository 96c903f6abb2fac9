//! Loader errors

use thiserror::Error;

use crate::record::ParseError;

/// Result type for load operations
pub type LoadResult<T> = Result<T, LoadError>;

/// Errors raised while loading the source table.
///
/// Loading fails fast: the first bad row aborts the load and nothing
/// partial is kept.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The source could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The source is not well-formed delimited text
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    /// A row violated the type constraints
    #[error("row {line}: {source}")]
    Row {
        /// 1-based line number in the source, counting the header
        line: usize,
        /// Underlying parse failure
        source: ParseError,
    },
}
