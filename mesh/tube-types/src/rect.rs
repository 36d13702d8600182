//! Cross-section rectangles.

use nalgebra::Point3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Four corners bounding one side of the tube over one curve segment.
///
/// Corners are ordered so that `c0 → c1` is the start edge and `c2 → c3`
/// is the end edge. Consecutive rects of a side therefore meet where one
/// rect's end edge lies against the next rect's start edge.
///
/// ```text
///   c2 ───── c3     end edge
///   │         │
///   │         │
///   c0 ───── c1     start edge
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CrossSectionRect {
    /// Corners `[c0, c1, c2, c3]`.
    pub corners: [Point3<f64>; 4],
}

impl CrossSectionRect {
    /// Create a rect from its four corners.
    #[inline]
    #[must_use]
    pub const fn new(c0: Point3<f64>, c1: Point3<f64>, c2: Point3<f64>, c3: Point3<f64>) -> Self {
        Self {
            corners: [c0, c1, c2, c3],
        }
    }

    /// The start edge `(c0, c1)`.
    #[inline]
    #[must_use]
    pub const fn start_edge(&self) -> (Point3<f64>, Point3<f64>) {
        (self.corners[0], self.corners[1])
    }

    /// The end edge `(c2, c3)`.
    #[inline]
    #[must_use]
    pub const fn end_edge(&self) -> (Point3<f64>, Point3<f64>) {
        (self.corners[2], self.corners[3])
    }

    /// Point at fraction `f` along the start edge.
    #[inline]
    #[must_use]
    pub fn lerp_start(&self, f: f64) -> Point3<f64> {
        lerp(self.corners[0], self.corners[1], f)
    }

    /// Point at fraction `f` along the end edge.
    #[inline]
    #[must_use]
    pub fn lerp_end(&self, f: f64) -> Point3<f64> {
        lerp(self.corners[2], self.corners[3], f)
    }
}

/// Linear interpolation returning the endpoints exactly at `f = 0` and `f = 1`.
#[allow(clippy::float_cmp)]
fn lerp(a: Point3<f64>, b: Point3<f64>, f: f64) -> Point3<f64> {
    if f == 0.0 {
        a
    } else if f == 1.0 {
        b
    } else {
        a + (b - a) * f
    }
}
