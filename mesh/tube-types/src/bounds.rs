//! Axis-aligned bounds of built tube geometry.

use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Axis-aligned box around a set of tube vertices.
///
/// Renderers and collision backends recompute bounds after every rebuild;
/// this type is what [`crate::MeshBounds::bounds`] hands them.
///
/// # Example
///
/// ```
/// use tube_types::{Aabb, Point3};
///
/// let aabb = Aabb::new(
///     Point3::new(0.0, -1.0, -1.0),
///     Point3::new(10.0, 0.0, 0.0),
/// );
///
/// assert_eq!(aabb.size().x, 10.0);
/// assert!(aabb.contains(&Point3::new(5.0, -0.5, -0.5)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Aabb {
    /// Per-axis minimum.
    pub min: Point3<f64>,
    /// Per-axis maximum.
    pub max: Point3<f64>,
}

impl Aabb {
    /// Create a new AABB from two opposite corners.
    ///
    /// The corners are sorted per axis, so argument order does not matter.
    #[must_use]
    pub fn new(a: Point3<f64>, b: Point3<f64>) -> Self {
        Self {
            min: Point3::new(a.x.min(b.x), a.y.min(b.y), a.z.min(b.z)),
            max: Point3::new(a.x.max(b.x), a.y.max(b.y), a.z.max(b.z)),
        }
    }

    /// Create an empty (inverted) AABB that any point will expand.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            min: Point3::new(f64::INFINITY, f64::INFINITY, f64::INFINITY),
            max: Point3::new(f64::NEG_INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY),
        }
    }

    /// Create the tightest AABB around a set of points.
    ///
    /// An empty iterator gives [`Aabb::empty`].
    #[must_use]
    pub fn from_points<'a>(points: impl Iterator<Item = &'a Point3<f64>>) -> Self {
        points.fold(Self::empty(), |mut aabb, p| {
            aabb.expand_to_include(p);
            aabb
        })
    }

    /// Whether no point has been included yet.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    /// Extent along each axis.
    #[inline]
    #[must_use]
    pub fn size(&self) -> Vector3<f64> {
        self.max - self.min
    }

    /// Center point.
    #[inline]
    #[must_use]
    pub fn center(&self) -> Point3<f64> {
        nalgebra::center(&self.min, &self.max)
    }

    /// Whether `point` lies inside or on the boundary.
    #[inline]
    #[must_use]
    pub fn contains(&self, point: &Point3<f64>) -> bool {
        (0..3).all(|i| point[i] >= self.min[i] && point[i] <= self.max[i])
    }

    /// Smallest AABB enclosing both boxes.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        if self.is_empty() {
            return *other;
        }
        if other.is_empty() {
            return *self;
        }
        Self {
            min: self.min.inf(&other.min),
            max: self.max.sup(&other.max),
        }
    }

    /// Grow the AABB in place so it contains `point`.
    pub fn expand_to_include(&mut self, point: &Point3<f64>) {
        self.min = self.min.inf(point);
        self.max = self.max.sup(point);
    }
}

impl Default for Aabb {
    fn default() -> Self {
        Self::empty()
    }
}
