//! Quad-row mesh building for one tube side.

use nalgebra::{Point2, Point3};
use tube_types::{CrossSectionRect, MeshBuffers, Side};

use crate::error::{TubeError, TubeResult};
use crate::weld::WeldTable;

/// Builds the mesh of one side of one curve from a list of rects.
///
/// Each pushed [`CrossSectionRect`] becomes one row of quads. Rows are
/// chained: the start edge of a row reuses the end-edge vertices of the
/// row before it, and the first row reuses the seam inherited from the
/// previous curve. Vertices are welded by exact position, so a quad
/// shares its edges with its neighbours.
///
/// # Example
///
/// ```
/// use tube_from_curves::PlaneMeshBuilder;
/// use tube_types::{CrossSectionRect, Point3, Side};
///
/// let mut builder = PlaneMeshBuilder::new(Side::Top);
/// builder.push_row(CrossSectionRect::new(
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(0.0, 0.0, -1.0),
///     Point3::new(10.0, 0.0, 0.0),
///     Point3::new(10.0, 0.0, -1.0),
/// ));
///
/// let mesh = builder.build_mesh(1, 2.0)?;
/// assert_eq!(mesh.vertex_count(), 4);
/// assert_eq!(mesh.face_count(), 2);
/// # Ok::<(), tube_from_curves::TubeError>(())
/// ```
#[derive(Debug, Clone)]
pub struct PlaneMeshBuilder {
    side: Side,
    rows: Vec<CrossSectionRect>,
    seam: Vec<Point3<f64>>,
    last_row: Vec<Point3<f64>>,
    mesh: MeshBuffers,
    weld: WeldTable,
}

impl PlaneMeshBuilder {
    /// Create an empty builder for `side`.
    #[must_use]
    pub fn new(side: Side) -> Self {
        Self {
            side,
            rows: Vec::new(),
            seam: Vec::new(),
            last_row: Vec::new(),
            mesh: MeshBuffers::new(),
            weld: WeldTable::new(),
        }
    }

    /// The side this builder produces.
    #[must_use]
    pub const fn side(&self) -> Side {
        self.side
    }

    /// Drop all rows and the row linkage before a new rebuild.
    ///
    /// The previously built mesh stays readable until the next
    /// [`build_mesh`](Self::build_mesh).
    pub fn reset_for_rebuild(&mut self) {
        self.rows.clear();
        self.seam.clear();
        self.last_row.clear();
    }

    /// Use `row` (the previous curve's last row) as the start edge of the
    /// first row.
    pub fn inherit_seam(&mut self, row: &[Point3<f64>]) {
        self.seam.clear();
        self.seam.extend_from_slice(row);
    }

    /// The inherited seam row, empty if there is none.
    #[must_use]
    pub fn seam(&self) -> &[Point3<f64>] {
        &self.seam
    }

    /// Append a row.
    pub fn push_row(&mut self, rect: CrossSectionRect) {
        self.rows.push(rect);
    }

    /// Rows pushed since the last reset.
    #[must_use]
    pub fn rows(&self) -> &[CrossSectionRect] {
        &self.rows
    }

    /// Number of rows pushed since the last reset.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Rebuild the mesh from the current rows.
    ///
    /// Each row is split into `quads_per_row` quads across its width. The
    /// `v` texture coordinate runs from `0` to `uv_tiles_per_curve` over all
    /// rows, `u` from `0` to `1` across each row.
    ///
    /// With no rows the mesh is left empty and the inherited seam is passed
    /// through as [`last_row`](Self::last_row).
    ///
    /// # Errors
    ///
    /// Returns [`TubeError::InvalidQuadsPerRow`] if `quads_per_row` is zero,
    /// or [`TubeError::SeamMismatch`] if the inherited seam does not hold
    /// four vertices per quad. The previous mesh is untouched on error.
    #[allow(clippy::cast_precision_loss)]
    pub fn build_mesh(
        &mut self,
        quads_per_row: usize,
        uv_tiles_per_curve: f64,
    ) -> TubeResult<&MeshBuffers> {
        if quads_per_row == 0 {
            return Err(TubeError::InvalidQuadsPerRow(quads_per_row));
        }
        let row_len = quads_per_row * 4;
        if !self.rows.is_empty() && !self.seam.is_empty() && self.seam.len() != row_len {
            return Err(TubeError::SeamMismatch {
                side: self.side,
                expected: row_len,
                actual: self.seam.len(),
            });
        }

        self.mesh.clear();
        self.mesh.positions.reserve(self.rows.len() * (quads_per_row + 1) * 2);
        self.mesh.faces.reserve(self.rows.len() * quads_per_row * 2);

        let row_count = self.rows.len() as f64;
        let quads = quads_per_row as f64;
        let mut previous = self.seam.clone();
        let mut current = Vec::with_capacity(row_len);

        for (r, rect) in self.rows.iter().enumerate() {
            let vr0 = uv_tiles_per_curve * r as f64 / row_count;
            let vr1 = uv_tiles_per_curve * (r + 1) as f64 / row_count;
            current.clear();

            for q in 0..quads_per_row {
                let f0 = q as f64 / quads;
                let f1 = (q + 1) as f64 / quads;

                let (v0, v1) = if previous.is_empty() {
                    (rect.lerp_start(f0), rect.lerp_start(f1))
                } else {
                    (previous[q * 4 + 2], previous[q * 4 + 3])
                };
                let v2 = rect.lerp_end(f0);
                let v3 = rect.lerp_end(f1);

                let i0 = self.weld.weld(&mut self.mesh, v0, Point2::new(f0, vr0));
                let i1 = self.weld.weld(&mut self.mesh, v1, Point2::new(f1, vr0));
                let i2 = self.weld.weld(&mut self.mesh, v2, Point2::new(f0, vr1));
                let i3 = self.weld.weld(&mut self.mesh, v3, Point2::new(f1, vr1));

                self.mesh.faces.push([i0, i2, i1]);
                self.mesh.faces.push([i2, i3, i1]);
                current.extend_from_slice(&[v0, v1, v2, v3]);
            }

            std::mem::swap(&mut previous, &mut current);
        }

        self.weld.clear();
        self.last_row = previous;
        Ok(&self.mesh)
    }

    /// Vertices of the final row, four per quad in `v0, v1, v2, v3` order.
    ///
    /// The `v2`/`v3` entries form the seam the next curve starts from.
    #[must_use]
    pub fn last_row(&self) -> &[Point3<f64>] {
        &self.last_row
    }

    /// The most recently built mesh.
    #[must_use]
    pub fn mesh(&self) -> &MeshBuffers {
        &self.mesh
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn rect(x0: f64, x1: f64) -> CrossSectionRect {
        CrossSectionRect::new(
            Point3::new(x0, 0.0, 0.0),
            Point3::new(x0, 0.0, -3.0),
            Point3::new(x1, 0.0, 0.0),
            Point3::new(x1, 0.0, -3.0),
        )
    }

    #[test]
    fn test_empty_rows() {
        let mut builder = PlaneMeshBuilder::new(Side::Back);
        let mesh = builder.build_mesh(3, 2.0).unwrap();
        assert!(mesh.positions.is_empty());
        assert!(mesh.faces.is_empty());
        assert!(builder.last_row().is_empty());
    }

    #[test]
    fn test_zero_quads_rejected() {
        let mut builder = PlaneMeshBuilder::new(Side::Top);
        builder.push_row(rect(0.0, 1.0));
        assert_eq!(
            builder.build_mesh(0, 2.0).unwrap_err(),
            TubeError::InvalidQuadsPerRow(0)
        );
    }

    #[test]
    fn test_grid_welding() {
        let mut builder = PlaneMeshBuilder::new(Side::Top);
        builder.push_row(rect(0.0, 1.0));
        builder.push_row(rect(1.0, 2.0));
        let mesh = builder.build_mesh(3, 2.0).unwrap();

        // 3 rows of edge points, 4 points each
        assert_eq!(mesh.vertex_count(), 12);
        assert_eq!(mesh.face_count(), 12);
        assert_eq!(mesh.uvs.len(), mesh.vertex_count());
        assert_eq!(builder.last_row().len(), 12);
    }

    #[test]
    fn test_uv_layout() {
        let mut builder = PlaneMeshBuilder::new(Side::Top);
        builder.push_row(rect(0.0, 1.0));
        builder.push_row(rect(1.0, 2.0));
        let mesh = builder.build_mesh(1, 2.0).unwrap();

        let uv_at = |p: Point3<f64>| {
            let i = mesh.positions.iter().position(|&q| q == p).unwrap();
            mesh.uvs[i]
        };
        assert_eq!(uv_at(Point3::new(0.0, 0.0, 0.0)), Point2::new(0.0, 0.0));
        assert_eq!(uv_at(Point3::new(1.0, 0.0, -3.0)), Point2::new(1.0, 1.0));
        assert_eq!(uv_at(Point3::new(2.0, 0.0, 0.0)), Point2::new(0.0, 2.0));
    }

    #[test]
    fn test_faces_use_fixed_winding() {
        let mut builder = PlaneMeshBuilder::new(Side::Top);
        builder.push_row(rect(0.0, 10.0));
        let mesh = builder.build_mesh(1, 1.0).unwrap();
        assert_eq!(mesh.faces, vec![[0, 2, 1], [2, 3, 1]]);
        for i in 0..mesh.face_count() {
            assert!(mesh.triangle_normal(i).unwrap().y > 0.0);
        }
    }

    #[test]
    fn test_seam_is_reused() {
        let mut first = PlaneMeshBuilder::new(Side::Top);
        first.push_row(rect(0.0, 1.0));
        first.build_mesh(2, 2.0).unwrap();

        // Slightly perturbed start edge, as when frames differ between curves
        let mut second = PlaneMeshBuilder::new(Side::Top);
        second.inherit_seam(first.last_row());
        let mut r = rect(1.0, 2.0);
        r.corners[0].y += 1e-6;
        second.push_row(r);
        let mesh = second.build_mesh(2, 2.0).unwrap();

        for q in 0..2 {
            let seam_v2 = first.last_row()[q * 4 + 2];
            assert!(mesh.positions.contains(&seam_v2));
        }
        assert!(mesh.positions.iter().all(|p| p.y.abs() < 1e-12));
        assert_relative_eq!(second.last_row()[2].x, 2.0);
    }

    #[test]
    fn test_seam_mismatch() {
        let mut builder = PlaneMeshBuilder::new(Side::Left);
        builder.inherit_seam(&[Point3::origin(); 4]);
        builder.push_row(rect(0.0, 1.0));
        assert_eq!(
            builder.build_mesh(3, 2.0).unwrap_err(),
            TubeError::SeamMismatch {
                side: Side::Left,
                expected: 12,
                actual: 4
            }
        );
        assert!(builder.mesh().is_empty());
    }

    #[test]
    fn test_seam_passes_through_empty_side() {
        let mut builder = PlaneMeshBuilder::new(Side::Front);
        let seam = [Point3::new(1.0, 2.0, 3.0); 4];
        builder.inherit_seam(&seam);
        builder.build_mesh(1, 2.0).unwrap();
        assert!(builder.mesh().is_empty());
        assert_eq!(builder.last_row(), &seam);
    }

    #[test]
    fn test_reset_keeps_mesh_until_rebuild() {
        let mut builder = PlaneMeshBuilder::new(Side::Top);
        builder.push_row(rect(0.0, 1.0));
        builder.build_mesh(1, 2.0).unwrap();
        builder.reset_for_rebuild();

        assert_eq!(builder.row_count(), 0);
        assert!(builder.seam().is_empty());
        assert_eq!(builder.mesh().vertex_count(), 4);

        builder.build_mesh(1, 2.0).unwrap();
        assert!(builder.mesh().is_empty());
    }
}
