//! Error types for tube generation.

use bezier_types::CurveError;
use thiserror::Error;
use tube_types::Side;

/// Result type for tube generation.
pub type TubeResult<T> = Result<T, TubeError>;

/// Errors that can occur while building a tube mesh.
///
/// Parameter errors are raised before any sampling begins, so a failed
/// rebuild never leaves half-written buffers behind.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TubeError {
    /// Sampling granularity is zero.
    #[error("granularity must be at least 1, got {0}")]
    InvalidGranularity(usize),

    /// Quads per row is zero.
    #[error("quads per row must be at least 1, got {0}")]
    InvalidQuadsPerRow(usize),

    /// Target segment length is zero, negative or not finite.
    #[error("invalid segment length: {0} (must be positive and finite)")]
    InvalidSegmentLength(f64),

    /// Side thickness is zero, negative or not finite.
    #[error("invalid thickness: {0} (must be positive and finite)")]
    InvalidThickness(f64),

    /// UV tiles per curve is zero, negative or not finite.
    #[error("invalid uv tiles per curve: {0} (must be positive and finite)")]
    InvalidUvTiles(f64),

    /// Number of control point sets does not match the number of curves.
    #[error("expected control points for {expected} curves, got {actual}")]
    ControlPointCount {
        /// Curves in the path.
        expected: usize,
        /// Control point sets supplied.
        actual: usize,
    },

    /// Curve index is past the end of the path.
    #[error("curve index {index} out of range for path with {count} curves")]
    CurveIndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Curves in the path.
        count: usize,
    },

    /// Inherited seam row does not fit the current row layout.
    #[error("{side} seam has {actual} vertices, expected {expected}")]
    SeamMismatch {
        /// Side whose seam did not fit.
        side: Side,
        /// Vertices expected (`4 * quads_per_row`).
        expected: usize,
        /// Vertices inherited.
        actual: usize,
    },

    /// Curve sampling failed.
    #[error(transparent)]
    Curve(#[from] CurveError),
}

impl TubeError {
    /// Check if this error comes from invalid build parameters.
    #[must_use]
    pub fn is_invalid_params(&self) -> bool {
        matches!(
            self,
            Self::InvalidGranularity(_)
                | Self::InvalidQuadsPerRow(_)
                | Self::InvalidSegmentLength(_)
                | Self::InvalidThickness(_)
                | Self::InvalidUvTiles(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TubeError::InvalidThickness(-1.0);
        assert!(err.to_string().contains("-1"));

        let err = TubeError::SeamMismatch {
            side: Side::Left,
            expected: 12,
            actual: 4,
        };
        let display = err.to_string();
        assert!(display.starts_with("left"));
        assert!(display.contains("12"));

        let err = TubeError::from(CurveError::InvalidGranularity(0));
        assert!(err.to_string().contains("granularity 0"));
    }

    #[test]
    fn test_error_predicates() {
        assert!(TubeError::InvalidQuadsPerRow(0).is_invalid_params());
        assert!(
            !TubeError::CurveIndexOutOfRange { index: 3, count: 2 }.is_invalid_params()
        );
    }
}
