//! Error types for curve operations.

use thiserror::Error;

/// Errors that can occur during curve operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CurveError {
    /// Sampling granularity must be at least one step.
    #[error("invalid granularity {0}: must be at least 1")]
    InvalidGranularity(usize),
}

impl CurveError {
    /// Check if this is an invalid granularity error.
    #[must_use]
    pub fn is_invalid_granularity(&self) -> bool {
        matches!(self, Self::InvalidGranularity(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CurveError::InvalidGranularity(0);
        assert!(err.to_string().contains("granularity 0"));
        assert!(err.to_string().contains("at least 1"));
    }

    #[test]
    fn test_error_predicates() {
        assert!(CurveError::InvalidGranularity(0).is_invalid_granularity());
    }
}
