//! Dispatcher errors

use thiserror::Error;

use crate::stats::StatsError;

/// Result type for dispatch operations
pub type DispatchResult<T> = Result<T, DispatchError>;

/// Dispatch errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DispatchError {
    /// A restriction value cannot be coerced to the attribute's expected
    /// type. The query is aborted; there is no partial result.
    #[error("restriction value {value:?} is not valid for {attribute}: expected an integer")]
    InvalidRestriction {
        /// Attribute the restriction was applied to
        attribute: &'static str,
        /// Offending value
        value: String,
    },

    /// The grouped branch ran over zero rows
    #[error(transparent)]
    Stats(#[from] StatsError),
}

impl DispatchError {
    /// Create an invalid-restriction error
    pub fn invalid_restriction(attribute: &'static str, value: impl Into<String>) -> Self {
        DispatchError::InvalidRestriction {
            attribute,
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DispatchError::invalid_restriction("release_year", "ninety-nine");
        assert_eq!(
            err.to_string(),
            "restriction value \"ninety-nine\" is not valid for release_year: expected an integer"
        );
    }

    #[test]
    fn test_stats_error_wraps_transparently() {
        let err: DispatchError = StatsError::EmptyInput.into();
        assert_eq!(err.to_string(), "statistics require at least one row");
    }
}
