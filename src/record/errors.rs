//! Record parsing errors
//!
//! Any parse failure aborts the load of the base table; there is never a
//! partially loaded table.

use thiserror::Error;

/// Result type for record construction
pub type RecordResult<T> = Result<T, ParseError>;

/// A row of the source table violated its type constraints
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// The genres field could not be parsed into a list of strings
    #[error("genres field is not a list of strings: {raw:?}")]
    Genres {
        /// Raw field content as read from the source
        raw: String,
    },

    /// A numeric field holds a non-numeric value
    #[error("field '{field}' is not numeric: {raw:?}")]
    Numeric {
        /// Field name
        field: &'static str,
        /// Raw field content as read from the source
        raw: String,
    },

    /// A numeric field holds a negative value
    #[error("field '{field}' must be non-negative, got {value}")]
    Negative {
        /// Field name
        field: &'static str,
        /// Parsed value
        value: f64,
    },

    /// The release year is not an integer
    #[error("release_year is not an integer: {raw:?}")]
    Year {
        /// Raw field content as read from the source
        raw: String,
    },

    /// The title field is empty
    #[error("title must be non-empty")]
    EmptyTitle,
}

impl ParseError {
    /// Create a genres parse error
    pub fn genres(raw: impl Into<String>) -> Self {
        ParseError::Genres { raw: raw.into() }
    }

    /// Create a numeric parse error
    pub fn numeric(field: &'static str, raw: impl Into<String>) -> Self {
        ParseError::Numeric {
            field,
            raw: raw.into(),
        }
    }

    /// Create a release-year parse error
    pub fn year(raw: impl Into<String>) -> Self {
        ParseError::Year { raw: raw.into() }
    }
}
