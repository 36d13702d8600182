//! Cubic Bézier curve segment.

use crate::{CurveError, Result};
use nalgebra::{Point3, distance};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One curve of a tube path: four control points in path-local space.
///
/// Only the anchors P₀ and P₃ lie on the curve. P₁ and P₂ are the handles
/// a host drags around; every move is followed by a full resample.
///
/// # Equation
///
/// ```text
/// B(t) = (1-t)³P₀ + 3(1-t)²tP₁ + 3(1-t)t²P₂ + t³P₃
/// ```
///
/// # Example
///
/// ```
/// use bezier_types::CubicBezier;
/// use nalgebra::Point3;
///
/// let curve = CubicBezier::new(
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 2.0, 0.0),
///     Point3::new(3.0, 2.0, 0.0),
///     Point3::new(4.0, 0.0, 0.0),
/// );
///
/// let mid = curve.evaluate(0.5);
/// assert!((mid.x - 2.0).abs() < 1e-10);
/// assert!(mid.y > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CubicBezier {
    /// Start anchor.
    pub p0: Point3<f64>,
    /// Handle leaving the start anchor.
    pub p1: Point3<f64>,
    /// Handle entering the end anchor.
    pub p2: Point3<f64>,
    /// End anchor, shared with the start of the next curve in a path.
    pub p3: Point3<f64>,
}

impl CubicBezier {
    /// Create a curve from its two anchors and two handles.
    #[must_use]
    pub const fn new(p0: Point3<f64>, p1: Point3<f64>, p2: Point3<f64>, p3: Point3<f64>) -> Self {
        Self { p0, p1, p2, p3 }
    }

    /// Create a curve from an array of control points `[P₀, P₁, P₂, P₃]`.
    #[must_use]
    pub const fn from_points(points: [Point3<f64>; 4]) -> Self {
        Self::new(points[0], points[1], points[2], points[3])
    }

    /// Control points in `[P₀, P₁, P₂, P₃]` order.
    #[must_use]
    pub fn points(&self) -> [Point3<f64>; 4] {
        [self.p0, self.p1, self.p2, self.p3]
    }

    /// Replace all four control points.
    pub fn set_points(&mut self, points: [Point3<f64>; 4]) {
        *self = Self::from_points(points);
    }

    /// Start point of the curve (P₀).
    #[inline]
    #[must_use]
    pub const fn start(&self) -> Point3<f64> {
        self.p0
    }

    /// End point of the curve (P₃).
    #[inline]
    #[must_use]
    pub const fn end(&self) -> Point3<f64> {
        self.p3
    }

    /// Evaluate the curve at parameter `t`.
    ///
    /// `t` is normally in `[0, 1]`. Values outside that range are not
    /// clamped; the polynomial simply extrapolates.
    ///
    /// The endpoints are returned exactly: `evaluate(0.0) == p0` and
    /// `evaluate(1.0) == p3`.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn evaluate(&self, t: f64) -> Point3<f64> {
        if t == 0.0 {
            return self.p0;
        }
        if t == 1.0 {
            return self.p3;
        }

        let s = 1.0 - t;
        let s2 = s * s;
        let t2 = t * t;

        Point3::from(
            self.p0.coords * (s2 * s)
                + self.p1.coords * (3.0 * s2 * t)
                + self.p2.coords * (3.0 * s * t2)
                + self.p3.coords * (t2 * t),
        )
    }

    /// Sample the curve at `granularity + 1` evenly spaced parameters.
    ///
    /// The samples are taken at `t = i / granularity` for
    /// `i = 0..=granularity`, so the first sample is exactly `p0` and the
    /// last is exactly `p3`.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::InvalidGranularity`] if `granularity` is zero.
    pub fn sample(&self, granularity: usize) -> Result<Vec<Point3<f64>>> {
        if granularity == 0 {
            return Err(CurveError::InvalidGranularity(granularity));
        }

        let step = granularity as f64;
        Ok((0..=granularity)
            .map(|i| {
                if i == granularity {
                    self.p3
                } else {
                    self.evaluate(i as f64 / step)
                }
            })
            .collect())
    }

    /// Approximate the arc length by summing chord lengths between samples.
    ///
    /// Multiplying the granularity never shortens the estimate.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::InvalidGranularity`] if `granularity` is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use bezier_types::CubicBezier;
    /// use nalgebra::Point3;
    ///
    /// // Straight, evenly spaced control points
    /// let line = CubicBezier::new(
    ///     Point3::new(0.0, 0.0, 0.0),
    ///     Point3::new(1.0, 0.0, 0.0),
    ///     Point3::new(2.0, 0.0, 0.0),
    ///     Point3::new(3.0, 0.0, 0.0),
    /// );
    ///
    /// let length = line.approximate_length(1)?;
    /// assert!((length - 3.0).abs() < 1e-12);
    /// # Ok::<(), bezier_types::CurveError>(())
    /// ```
    pub fn approximate_length(&self, granularity: usize) -> Result<f64> {
        let samples = self.sample(granularity)?;
        Ok(polyline_length(&samples))
    }

    /// Length of the control polygon P₀P₁P₂P₃.
    ///
    /// This is an upper bound on the arc length.
    #[must_use]
    pub fn control_polygon_length(&self) -> f64 {
        distance(&self.p0, &self.p1) + distance(&self.p1, &self.p2) + distance(&self.p2, &self.p3)
    }

    /// Check whether all four control points coincide.
    ///
    /// A degenerate curve evaluates to the same point everywhere and has
    /// zero length.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.p1 == self.p0 && self.p2 == self.p0 && self.p3 == self.p0
    }
}

/// Sum of distances between consecutive points.
fn polyline_length(points: &[Point3<f64>]) -> f64 {
    points.windows(2).map(|w| distance(&w[0], &w[1])).sum()
}
