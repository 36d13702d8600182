//! Tube build parameters.

use crate::error::{TubeError, TubeResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Parameters controlling how a path is turned into a tube mesh.
///
/// All lengths are in the same units as the curve control points.
///
/// # Example
///
/// ```
/// use tube_from_curves::TubeParams;
///
/// // Defaults
/// let params = TubeParams::default();
/// assert_eq!(params.quads_per_row, 3);
///
/// // Builder style
/// let params = TubeParams::new()
///     .with_thickness(1.0)
///     .with_segment_length(2.5)
///     .with_quads_per_row(1);
/// assert!(params.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TubeParams {
    /// Samples per curve used for length estimation and stepping.
    ///
    /// Higher values give more exact segment lengths.
    /// Default: `90`
    pub granularity: usize,

    /// Target chord length of one segment along the curve.
    ///
    /// Default: `5.0`
    pub segment_length: f64,

    /// Full edge-to-edge width of the square cross-section.
    ///
    /// Default: `7.0`
    pub thickness: f64,

    /// Quads across each row of each side.
    ///
    /// Default: `3`
    pub quads_per_row: usize,

    /// Texture repeats along one curve (`v`). `u` always spans a row once.
    ///
    /// Default: `2.0`
    pub uv_tiles_per_curve: f64,

    /// Build the six sides of a curve on the rayon pool.
    ///
    /// Curves are still built in order.
    /// Default: `false`
    pub parallel: bool,
}

impl Default for TubeParams {
    fn default() -> Self {
        Self {
            granularity: 90,
            segment_length: 5.0,
            thickness: 7.0,
            quads_per_row: 3,
            uv_tiles_per_curve: 2.0,
            parallel: false,
        }
    }
}

impl TubeParams {
    /// Create parameters with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Dense sampling and short segments for final-quality meshes.
    #[must_use]
    pub fn fine() -> Self {
        Self {
            granularity: 360,
            segment_length: 1.0,
            quads_per_row: 6,
            ..Self::default()
        }
    }

    /// Sparse sampling and a single quad per row for cheap previews.
    #[must_use]
    pub fn coarse() -> Self {
        Self {
            granularity: 24,
            segment_length: 10.0,
            quads_per_row: 1,
            ..Self::default()
        }
    }

    /// Set the sampling granularity.
    #[must_use]
    pub const fn with_granularity(mut self, granularity: usize) -> Self {
        self.granularity = granularity;
        self
    }

    /// Set the target segment length.
    #[must_use]
    pub const fn with_segment_length(mut self, length: f64) -> Self {
        self.segment_length = length;
        self
    }

    /// Set the cross-section thickness.
    #[must_use]
    pub const fn with_thickness(mut self, thickness: f64) -> Self {
        self.thickness = thickness;
        self
    }

    /// Set the number of quads per row.
    #[must_use]
    pub const fn with_quads_per_row(mut self, quads: usize) -> Self {
        self.quads_per_row = quads;
        self
    }

    /// Set the texture repeats per curve.
    #[must_use]
    pub const fn with_uv_tiles_per_curve(mut self, tiles: f64) -> Self {
        self.uv_tiles_per_curve = tiles;
        self
    }

    /// Set whether sides are built in parallel.
    #[must_use]
    pub const fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Check every parameter.
    ///
    /// # Errors
    ///
    /// Returns the first invalid parameter found. Values are never clamped.
    pub fn validate(&self) -> TubeResult<()> {
        if self.granularity == 0 {
            return Err(TubeError::InvalidGranularity(self.granularity));
        }
        if self.quads_per_row == 0 {
            return Err(TubeError::InvalidQuadsPerRow(self.quads_per_row));
        }
        if !is_positive(self.segment_length) {
            return Err(TubeError::InvalidSegmentLength(self.segment_length));
        }
        if !is_positive(self.thickness) {
            return Err(TubeError::InvalidThickness(self.thickness));
        }
        if !is_positive(self.uv_tiles_per_curve) {
            return Err(TubeError::InvalidUvTiles(self.uv_tiles_per_curve));
        }
        Ok(())
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}
