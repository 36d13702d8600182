//! Bounding traits shared by buffers and the meshes built from them.

use crate::Aabb;
use nalgebra::Point3;

/// Anything built from vertices that can report an axis-aligned box.
///
/// Implemented by [`MeshBuffers`](crate::MeshBuffers) and by the per-curve
/// and per-path meshes downstream, so a host can refit collision shapes at
/// whichever level it holds.
pub trait MeshBounds {
    /// Tightest box around every vertex. Empty when there are none.
    fn bounds(&self) -> Aabb;

    /// [`bounds`](Self::bounds), or `None` when nothing has been built.
    fn bounds_opt(&self) -> Option<Aabb> {
        Some(self.bounds()).filter(|b| !b.is_empty())
    }

    /// Center of [`bounds`](Self::bounds).
    fn center(&self) -> Point3<f64> {
        self.bounds().center()
    }

    /// Whether `point` lies inside [`bounds`](Self::bounds).
    fn bounds_contain(&self, point: &Point3<f64>) -> bool {
        self.bounds().contains(point)
    }
}
