//! Curve segmentation and cross-section rectangles.

use bezier_types::CubicBezier;
use nalgebra::{Point3, Vector3};
use tracing::warn;
use tube_types::{CrossSectionRect, Side};

use crate::error::{TubeError, TubeResult};
use crate::frame::SegmentFrame;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Relative slack when comparing accumulated length to the target, so that
/// rounding on evenly divisible inputs does not add an extra sample step.
const LENGTH_TOLERANCE: f64 = 1e-9;

/// A straight piece of a curve, spanning `[t_start, t_end]`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CurveSegment {
    /// Position of this segment within its curve.
    pub index: usize,
    /// Curve parameter at the segment start.
    pub t_start: f64,
    /// Curve parameter at the segment end.
    pub t_end: f64,
    /// Curve point at `t_start`.
    pub start: Point3<f64>,
    /// Curve point at `t_end`.
    pub end: Point3<f64>,
    /// Sum of sample distances covered by the segment.
    pub length: f64,
    /// Whether the segment ends at `t = 1`.
    pub is_last: bool,
}

impl CurveSegment {
    /// Straight-line distance from start to end.
    #[must_use]
    pub fn chord(&self) -> f64 {
        nalgebra::distance(&self.start, &self.end)
    }

    /// Look-at frame from start to end.
    #[must_use]
    pub fn frame(&self) -> SegmentFrame {
        SegmentFrame::look_at(self.start, self.end)
    }
}

/// Split a curve into segments of roughly `segment_length`.
///
/// The curve is sampled at `t = i / granularity`. Sample distances are
/// accumulated until the target length is reached, then a new segment
/// starts at that sample. A segment may overshoot the target by up to one
/// sample step, and the final segment is usually shorter. A zero-length
/// curve yields a single segment over `[0, 1]`.
///
/// # Errors
///
/// Returns an error if `granularity` is zero or `segment_length` is not
/// positive and finite.
///
/// # Example
///
/// ```
/// use bezier_types::CubicBezier;
/// use nalgebra::Point3;
/// use tube_from_curves::segment_curve;
///
/// let curve = CubicBezier::new(
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(10.0, 0.0, 0.0),
///     Point3::new(20.0, 0.0, 0.0),
///     Point3::new(30.0, 0.0, 0.0),
/// );
///
/// let segments = segment_curve(&curve, 30, 10.0)?;
/// assert_eq!(segments.len(), 3);
/// assert!(segments[2].is_last);
/// # Ok::<(), tube_from_curves::TubeError>(())
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn segment_curve(
    curve: &CubicBezier,
    granularity: usize,
    segment_length: f64,
) -> TubeResult<Vec<CurveSegment>> {
    if !(segment_length.is_finite() && segment_length > 0.0) {
        return Err(TubeError::InvalidSegmentLength(segment_length));
    }
    let samples = curve.sample(granularity)?;
    let target = segment_length * (1.0 - LENGTH_TOLERANCE);
    let param = |i: usize| i as f64 / granularity as f64;

    let mut segments = Vec::new();
    let mut total = 0.0;
    let mut k = 0;
    while k < granularity {
        let mut length = 0.0;
        let mut j = k;
        while j < granularity && length < target {
            length += nalgebra::distance(&samples[j], &samples[j + 1]);
            j += 1;
        }
        total += length;
        segments.push(CurveSegment {
            index: segments.len(),
            t_start: param(k),
            t_end: param(j),
            start: samples[k],
            end: samples[j],
            length,
            is_last: j == granularity,
        });
        k = j;
    }

    if total <= 0.0 {
        warn!(
            start = ?curve.p0,
            "degenerate curve, emitting a single zero-length segment"
        );
    }

    Ok(segments)
}

/// The square cross-section swept over one segment.
///
/// The section is anchored at the curve point and extends `thickness`
/// along `right` and `-up`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrossSection {
    start: Point3<f64>,
    end: Point3<f64>,
    right: Vector3<f64>,
    up: Vector3<f64>,
}

impl CrossSection {
    /// Build the cross-section of `segment` in `frame`.
    #[must_use]
    pub fn new(segment: &CurveSegment, frame: &SegmentFrame, thickness: f64) -> Self {
        Self {
            start: segment.start,
            end: segment.end,
            right: frame.right * thickness,
            up: frame.up * thickness,
        }
    }

    /// Corners of the rect bounding `side` over this segment.
    ///
    /// Corner order makes the `(0,2,1)`, `(2,3,1)` triangles face away
    /// from the tube's interior.
    #[must_use]
    pub fn rect(&self, side: Side) -> CrossSectionRect {
        let (s, e, r, u) = (self.start, self.end, self.right, self.up);
        match side {
            Side::Top => CrossSectionRect::new(s, s + r, e, e + r),
            Side::Left => CrossSectionRect::new(s - u, s, e - u, e),
            Side::Right => CrossSectionRect::new(s + r, s + r - u, e + r, e + r - u),
            Side::Bottom => CrossSectionRect::new(s + r - u, s - u, e + r - u, e - u),
            Side::Front => CrossSectionRect::new(s - u, s + r - u, s, s + r),
            Side::Back => CrossSectionRect::new(e + r - u, e - u, e + r, e),
        }
    }
}
