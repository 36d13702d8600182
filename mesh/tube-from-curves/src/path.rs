//! Path assembly: chains curves into one continuous tube.

use bezier_types::CubicBezier;
use nalgebra::Point3;
use rayon::prelude::*;
use tracing::{debug, trace};
use tube_types::{Aabb, MeshBounds, MeshBuffers, Side, SideMap};

use crate::error::{TubeError, TubeResult};
use crate::params::TubeParams;
use crate::plane::PlaneMeshBuilder;
use crate::segment::{CrossSection, segment_curve};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The six side meshes of one curve.
#[derive(Debug, Clone)]
pub struct CurveMesh {
    sides: SideMap<PlaneMeshBuilder>,
}

impl CurveMesh {
    /// Create a curve mesh with one empty builder per side.
    #[must_use]
    pub fn new() -> Self {
        Self {
            sides: SideMap::from_fn(PlaneMeshBuilder::new),
        }
    }

    /// Buffers of one side.
    #[must_use]
    pub fn side(&self, side: Side) -> &MeshBuffers {
        self.sides[side].mesh()
    }

    /// Builder of one side, for row and seam inspection.
    #[must_use]
    pub fn builder(&self, side: Side) -> &PlaneMeshBuilder {
        &self.sides[side]
    }

    /// Iterate over `(side, buffers)` pairs.
    pub fn sides(&self) -> impl Iterator<Item = (Side, &MeshBuffers)> {
        self.sides.iter().map(|(side, b)| (side, b.mesh()))
    }

    /// Total vertices over all sides.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.sides().map(|(_, m)| m.vertex_count()).sum()
    }

    /// Total triangles over all sides.
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.sides().map(|(_, m)| m.face_count()).sum()
    }

    /// All six sides merged into one set of buffers, in [`Side::ALL`] order.
    ///
    /// Vertices are not welded across sides, so each side keeps its own UVs.
    #[must_use]
    pub fn combined(&self) -> MeshBuffers {
        let mut out = MeshBuffers::with_capacity(self.vertex_count(), self.face_count());
        for (_, mesh) in self.sides() {
            out.merge(mesh);
        }
        out
    }

    fn reset(&mut self, previous: Option<&Self>) {
        for (side, builder) in self.sides.iter_mut() {
            builder.reset_for_rebuild();
            if let Some(prev) = previous {
                builder.inherit_seam(prev.sides[side].last_row());
            }
        }
    }

    fn build(&mut self, params: &TubeParams) -> TubeResult<()> {
        let quads = params.quads_per_row;
        let tiles = params.uv_tiles_per_curve;
        if params.parallel {
            self.sides
                .as_mut_slice()
                .par_iter_mut()
                .try_for_each(|b| b.build_mesh(quads, tiles).map(|_| ()))
        } else {
            self.sides
                .as_mut_slice()
                .iter_mut()
                .try_for_each(|b| b.build_mesh(quads, tiles).map(|_| ()))
        }
    }
}

impl Default for CurveMesh {
    fn default() -> Self {
        Self::new()
    }
}

impl MeshBounds for CurveMesh {
    fn bounds(&self) -> Aabb {
        self.sides()
            .fold(Aabb::empty(), |acc, (_, mesh)| acc.union(&mesh.bounds()))
    }
}

/// Counts reported by a rebuild.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RebuildSummary {
    /// Curves built.
    pub curves: usize,
    /// Segments over all curves.
    pub segments: usize,
    /// Vertices over all curves and sides.
    pub vertices: usize,
    /// Triangles over all curves and sides.
    pub triangles: usize,
}

/// A chain of cubic Bézier curves rendered as one square tube.
///
/// Curve `i` ends where curve `i + 1` starts. The path owns one
/// [`CurveMesh`] per curve; every side of curve `i + 1` starts from the
/// last row of the same side of curve `i`, so the tube has no gaps at
/// curve joins. The `Front` cap closes the first curve and the `Back`
/// cap closes the last.
///
/// # Example
///
/// ```
/// use bezier_types::CubicBezier;
/// use nalgebra::Point3;
/// use tube_from_curves::{BezierPath, TubeParams};
/// use tube_types::Side;
///
/// let curve = CubicBezier::new(
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(10.0, 0.0, 0.0),
///     Point3::new(20.0, 5.0, 10.0),
///     Point3::new(30.0, 10.0, 30.0),
/// );
///
/// let mut path = BezierPath::with_curves(vec![curve], TubeParams::default())?;
/// let summary = path.rebuild()?;
///
/// assert_eq!(summary.curves, 1);
/// assert!(summary.triangles > 0);
/// assert!(!path.side_mesh(0, Side::Front).unwrap().is_empty());
/// # Ok::<(), tube_from_curves::TubeError>(())
/// ```
#[derive(Debug, Clone)]
pub struct BezierPath {
    curves: Vec<CubicBezier>,
    params: TubeParams,
    meshes: Vec<CurveMesh>,
}

impl BezierPath {
    /// Create an empty path.
    ///
    /// # Errors
    ///
    /// Returns an error if `params` is invalid.
    pub fn new(params: TubeParams) -> TubeResult<Self> {
        Self::with_curves(Vec::new(), params)
    }

    /// Create a path from a list of curves.
    ///
    /// Nothing is built until [`rebuild`](Self::rebuild) is called.
    ///
    /// # Errors
    ///
    /// Returns an error if `params` is invalid.
    pub fn with_curves(curves: Vec<CubicBezier>, params: TubeParams) -> TubeResult<Self> {
        params.validate()?;
        Ok(Self {
            curves,
            params,
            meshes: Vec::new(),
        })
    }

    /// Append a curve to the end of the path.
    pub fn push_curve(&mut self, curve: CubicBezier) {
        self.curves.push(curve);
    }

    /// The curves, in path order.
    #[must_use]
    pub fn curves(&self) -> &[CubicBezier] {
        &self.curves
    }

    /// Number of curves.
    #[must_use]
    pub fn curve_count(&self) -> usize {
        self.curves.len()
    }

    /// Current build parameters.
    #[must_use]
    pub fn params(&self) -> &TubeParams {
        &self.params
    }

    /// Replace the build parameters. Takes effect on the next rebuild.
    ///
    /// # Errors
    ///
    /// Returns an error if `params` is invalid; the old parameters are kept.
    pub fn set_params(&mut self, params: TubeParams) -> TubeResult<()> {
        params.validate()?;
        self.params = params;
        Ok(())
    }

    /// Move the control points of one curve. Takes effect on the next
    /// rebuild.
    ///
    /// # Errors
    ///
    /// Returns [`TubeError::CurveIndexOutOfRange`] if there is no such curve.
    pub fn set_curve_points(&mut self, index: usize, points: [Point3<f64>; 4]) -> TubeResult<()> {
        let count = self.curves.len();
        let curve = self
            .curves
            .get_mut(index)
            .ok_or(TubeError::CurveIndexOutOfRange { index, count })?;
        curve.set_points(points);
        Ok(())
    }

    /// Replace the control points of every curve and rebuild.
    ///
    /// # Errors
    ///
    /// Returns [`TubeError::ControlPointCount`] if `control_points` does not
    /// hold one entry per curve. Nothing is changed on error.
    pub fn rebuild_with(&mut self, control_points: &[[Point3<f64>; 4]]) -> TubeResult<RebuildSummary> {
        self.params.validate()?;
        if control_points.len() != self.curves.len() {
            return Err(TubeError::ControlPointCount {
                expected: self.curves.len(),
                actual: control_points.len(),
            });
        }
        for (curve, points) in self.curves.iter_mut().zip(control_points) {
            curve.set_points(*points);
        }
        self.rebuild()
    }

    /// Rebuild every curve's side meshes from the current control points.
    ///
    /// Curve meshes are added or dropped to match the curve count, then
    /// curves are built in order so each can start from its predecessor's
    /// last row.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters are invalid. Validation happens
    /// before any buffer is touched.
    pub fn rebuild(&mut self) -> TubeResult<RebuildSummary> {
        self.params.validate()?;
        let params = &self.params;
        let count = self.curves.len();

        debug!(
            curves = count,
            granularity = params.granularity,
            segment_length = params.segment_length,
            quads_per_row = params.quads_per_row,
            "rebuilding bezier path"
        );

        self.meshes.resize_with(count, CurveMesh::new);

        let mut summary = RebuildSummary {
            curves: count,
            ..RebuildSummary::default()
        };

        for (i, curve) in self.curves.iter().enumerate() {
            let (done, rest) = self.meshes.split_at_mut(i);
            let Some(mesh) = rest.first_mut() else {
                break;
            };
            mesh.reset(done.last());

            let segments = segment_curve(curve, params.granularity, params.segment_length)?;
            trace!(curve = i, segments = segments.len(), "segmented curve");

            for segment in &segments {
                let section = CrossSection::new(segment, &segment.frame(), params.thickness);
                for side in Side::LONGITUDINAL {
                    mesh.sides[side].push_row(section.rect(side));
                }
                if i == 0 && segment.index == 0 && mesh.sides[Side::Front].row_count() == 0 {
                    mesh.sides[Side::Front].push_row(section.rect(Side::Front));
                }
                if i + 1 == count && segment.is_last && mesh.sides[Side::Back].row_count() == 0 {
                    mesh.sides[Side::Back].push_row(section.rect(Side::Back));
                }
            }

            mesh.build(params)?;
            summary.segments += segments.len();
            summary.vertices += mesh.vertex_count();
            summary.triangles += mesh.face_count();
        }

        debug!(
            curves = summary.curves,
            segments = summary.segments,
            vertices = summary.vertices,
            triangles = summary.triangles,
            "rebuilt bezier path"
        );

        Ok(summary)
    }

    /// Meshes of one curve, or `None` if the index is out of range or the
    /// path has not been rebuilt since the curve was added.
    #[must_use]
    pub fn curve_mesh(&self, index: usize) -> Option<&CurveMesh> {
        self.meshes.get(index)
    }

    /// Meshes of every curve built by the last rebuild.
    #[must_use]
    pub fn curve_meshes(&self) -> &[CurveMesh] {
        &self.meshes
    }

    /// Buffers of one side of one curve.
    #[must_use]
    pub fn side_mesh(&self, index: usize, side: Side) -> Option<&MeshBuffers> {
        self.curve_mesh(index).map(|m| m.side(side))
    }

    /// Every curve's sides merged into one set of buffers.
    #[must_use]
    pub fn combined(&self) -> MeshBuffers {
        let mut out = MeshBuffers::new();
        for mesh in &self.meshes {
            out.merge(&mesh.combined());
        }
        out
    }
}

impl MeshBounds for BezierPath {
    fn bounds(&self) -> Aabb {
        self.meshes
            .iter()
            .fold(Aabb::empty(), |acc, mesh| acc.union(&mesh.bounds()))
    }
}
