//! Vertex, UV and index buffers for one tube side.

use crate::{Aabb, MeshBounds};
use nalgebra::{Point2, Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Upload-ready buffers for one side of one curve.
///
/// # Memory Layout
///
/// - `positions`: `Vec<Point3<f64>>` - Vertex positions in path-local space
/// - `uvs`: `Vec<Point2<f64>>` - Texture coordinates, index-aligned with `positions`
/// - `faces`: `Vec<[u32; 3]>` - Triangles as indices into `positions`
///
/// # Winding Order
///
/// Faces use **counter-clockwise (CCW) winding** when viewed from outside.
///
/// Buffers are cleared and refilled wholesale on every rebuild.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MeshBuffers {
    /// Vertex positions.
    pub positions: Vec<Point3<f64>>,

    /// Texture coordinates, one per position.
    pub uvs: Vec<Point2<f64>>,

    /// Triangle faces as indices into `positions`, CCW from outside.
    pub faces: Vec<[u32; 3]>,
}

impl MeshBuffers {
    /// Create empty buffers.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            positions: Vec::new(),
            uvs: Vec::new(),
            faces: Vec::new(),
        }
    }

    /// Create empty buffers with pre-allocated capacity.
    #[inline]
    #[must_use]
    pub fn with_capacity(vertex_count: usize, face_count: usize) -> Self {
        Self {
            positions: Vec::with_capacity(vertex_count),
            uvs: Vec::with_capacity(vertex_count),
            faces: Vec::with_capacity(face_count),
        }
    }

    /// Remove all vertices and faces, keeping allocations.
    pub fn clear(&mut self) {
        self.positions.clear();
        self.uvs.clear();
        self.faces.clear();
    }

    /// Number of vertices.
    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangles.
    #[inline]
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Whether there is nothing to draw.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty() || self.faces.is_empty()
    }

    /// Append a vertex with its UV and return its index.
    #[allow(clippy::cast_possible_truncation)]
    // Truncation: indices are u32, meshes above 4B vertices are unsupported
    pub fn push_vertex(&mut self, position: Point3<f64>, uv: Point2<f64>) -> u32 {
        let index = self.positions.len() as u32;
        self.positions.push(position);
        self.uvs.push(uv);
        index
    }

    /// Flat index list (`3 * face_count` entries) for index buffer upload.
    #[must_use]
    pub fn indices(&self) -> Vec<u32> {
        self.faces.iter().flatten().copied().collect()
    }

    /// Resolve a face to its three corner positions.
    ///
    /// Returns `None` if the face index is out of bounds.
    #[must_use]
    pub fn triangle(&self, face_index: usize) -> Option<[Point3<f64>; 3]> {
        let [i0, i1, i2] = *self.faces.get(face_index)?;
        Some([
            *self.positions.get(i0 as usize)?,
            *self.positions.get(i1 as usize)?,
            *self.positions.get(i2 as usize)?,
        ])
    }

    /// Unnormalized face normal `(v1 - v0) × (v2 - v0)`.
    ///
    /// Its length is twice the triangle's area. Returns `None` if the face
    /// index is out of bounds.
    #[must_use]
    pub fn triangle_normal(&self, face_index: usize) -> Option<Vector3<f64>> {
        let [v0, v1, v2] = self.triangle(face_index)?;
        Some((v1 - v0).cross(&(v2 - v0)))
    }

    /// Area-weighted per-vertex normals.
    ///
    /// This is the recomputation a renderer does after upload. The rebuild
    /// itself never calls it. Vertices that touch only zero-area faces get
    /// a zero vector.
    #[must_use]
    pub fn flat_normals(&self) -> Vec<Vector3<f64>> {
        let mut normals = vec![Vector3::zeros(); self.positions.len()];
        for face_index in 0..self.faces.len() {
            let Some(normal) = self.triangle_normal(face_index) else {
                continue;
            };
            for &i in &self.faces[face_index] {
                if let Some(n) = normals.get_mut(i as usize) {
                    *n += normal;
                }
            }
        }
        for n in &mut normals {
            *n = n.try_normalize(f64::EPSILON).unwrap_or_else(Vector3::zeros);
        }
        normals
    }

    /// Total surface area of all faces.
    #[must_use]
    pub fn surface_area(&self) -> f64 {
        (0..self.faces.len())
            .filter_map(|i| self.triangle_normal(i))
            .map(|n| n.norm() * 0.5)
            .sum()
    }

    /// Signed volume enclosed by the faces.
    ///
    /// Uses the divergence theorem. Positive for a closed surface whose
    /// faces wind outward, negative for inside-out. Only meaningful once
    /// all six sides of a tube are merged together.
    #[must_use]
    pub fn signed_volume(&self) -> f64 {
        (0..self.faces.len())
            .filter_map(|i| self.triangle(i))
            .map(|[v0, v1, v2]| v0.coords.dot(&v1.coords.cross(&v2.coords)))
            .sum::<f64>()
            / 6.0
    }

    /// Append another set of buffers, offsetting its face indices.
    #[allow(clippy::cast_possible_truncation)]
    // Truncation: indices are u32, meshes above 4B vertices are unsupported
    pub fn merge(&mut self, other: &Self) {
        let offset = self.positions.len() as u32;
        self.positions.extend_from_slice(&other.positions);
        self.uvs.extend_from_slice(&other.uvs);
        self.faces.extend(
            other
                .faces
                .iter()
                .map(|f| [f[0] + offset, f[1] + offset, f[2] + offset]),
        );
    }
}

impl MeshBounds for MeshBuffers {
    fn bounds(&self) -> Aabb {
        Aabb::from_points(self.positions.iter())
    }
}
