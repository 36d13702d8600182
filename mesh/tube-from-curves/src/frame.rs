//! Orientation frames for straight curve segments.
//!
//! Every segment gets its own look-at frame. Frames are not propagated
//! along the curve, so consecutive segments may twist relative to each
//! other around the tangent when the curve bends out of plane.

use nalgebra::{Point3, Vector3};

/// Below this cross-product length the reference up axis is treated as
/// parallel to the forward direction.
const PARALLEL_EPSILON: f64 = 1e-10;

/// A reference frame for one straight segment.
///
/// Consists of three orthonormal vectors: forward, right and up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentFrame {
    /// Direction from segment start to segment end.
    pub forward: Vector3<f64>,
    /// Perpendicular to `forward`, horizontal when possible.
    pub right: Vector3<f64>,
    /// `forward × right`.
    pub up: Vector3<f64>,
}

impl SegmentFrame {
    /// Build the frame looking from `start` towards `end`.
    ///
    /// The reference up axis is `+Y`. When the segment runs along `±Y` the
    /// reference switches to `+Z`. A zero-length segment looks along `+X`.
    ///
    /// # Example
    ///
    /// ```
    /// use tube_from_curves::SegmentFrame;
    /// use nalgebra::{Point3, Vector3};
    ///
    /// let frame = SegmentFrame::look_at(Point3::origin(), Point3::new(10.0, 0.0, 0.0));
    ///
    /// assert_eq!(frame.forward, Vector3::x());
    /// assert_eq!(frame.right, -Vector3::z());
    /// assert_eq!(frame.up, Vector3::y());
    /// ```
    #[must_use]
    pub fn look_at(start: Point3<f64>, end: Point3<f64>) -> Self {
        let forward = (end - start)
            .try_normalize(f64::EPSILON)
            .unwrap_or_else(Vector3::x);
        Self::from_forward(forward)
    }

    /// Build the frame for an already normalized forward direction.
    #[must_use]
    pub fn from_forward(forward: Vector3<f64>) -> Self {
        let mut side = Vector3::y().cross(&forward);
        if side.norm() < PARALLEL_EPSILON {
            side = Vector3::z().cross(&forward);
        }
        let right = side.try_normalize(f64::EPSILON).unwrap_or_else(Vector3::z);
        let up = forward.cross(&right);

        Self { forward, right, up }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn assert_orthonormal(frame: &SegmentFrame) {
        assert_relative_eq!(frame.forward.norm(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(frame.right.norm(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(frame.up.norm(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(frame.forward.dot(&frame.right), 0.0, epsilon = 1e-12);
        assert_relative_eq!(frame.forward.dot(&frame.up), 0.0, epsilon = 1e-12);
        assert_relative_eq!(frame.right.dot(&frame.up), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_frame_along_x() {
        let frame = SegmentFrame::look_at(Point3::origin(), Point3::new(10.0, 0.0, 0.0));
        assert_relative_eq!(frame.right, -Vector3::z(), epsilon = 1e-12);
        assert_relative_eq!(frame.up, Vector3::y(), epsilon = 1e-12);
        assert_orthonormal(&frame);
    }

    #[test]
    fn test_frame_along_z() {
        let frame = SegmentFrame::look_at(Point3::origin(), Point3::new(0.0, 0.0, 4.0));
        assert_relative_eq!(frame.right, Vector3::x(), epsilon = 1e-12);
        assert_relative_eq!(frame.up, Vector3::y(), epsilon = 1e-12);
    }

    #[test]
    fn test_frame_vertical_uses_z_reference() {
        let up = SegmentFrame::look_at(Point3::origin(), Point3::new(0.0, 3.0, 0.0));
        assert_orthonormal(&up);
        assert_relative_eq!(up.right, -Vector3::x(), epsilon = 1e-12);

        let down = SegmentFrame::look_at(Point3::origin(), Point3::new(0.0, -3.0, 0.0));
        assert_orthonormal(&down);
        assert_relative_eq!(down.right, Vector3::x(), epsilon = 1e-12);
    }

    #[test]
    fn test_frame_zero_length() {
        let p = Point3::new(1.0, 2.0, 3.0);
        let frame = SegmentFrame::look_at(p, p);
        assert_eq!(frame.forward, Vector3::x());
        assert_orthonormal(&frame);
    }

    #[test]
    fn test_frame_oblique() {
        let frame = SegmentFrame::look_at(Point3::new(1.0, -2.0, 0.5), Point3::new(4.0, 3.0, -7.0));
        assert_orthonormal(&frame);
        // right stays horizontal
        assert_relative_eq!(frame.right.y, 0.0, epsilon = 1e-12);
        assert_relative_eq!(
            frame.forward.cross(&frame.right),
            frame.up,
            epsilon = 1e-12
        );
    }
}
