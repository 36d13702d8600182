//! Exact-position vertex welding.

use hashbrown::HashMap;
use nalgebra::{Point2, Point3};
use tube_types::MeshBuffers;

/// Bit pattern of a position, with `-0.0` folded onto `0.0`.
type WeldKey = [u64; 3];

fn weld_key(p: &Point3<f64>) -> WeldKey {
    // Adding 0.0 turns -0.0 into +0.0 and leaves every other value as is.
    [
        (p.x + 0.0).to_bits(),
        (p.y + 0.0).to_bits(),
        (p.z + 0.0).to_bits(),
    ]
}

/// Maps positions already written to a [`MeshBuffers`] to their index.
///
/// Two positions weld only when they are bit-identical. Shared quad edges
/// are built from the same lerp of the same corners, so they always match.
#[derive(Debug, Clone, Default)]
pub struct WeldTable {
    indices: HashMap<WeldKey, u32>,
}

impl WeldTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget every welded position, keeping the allocation.
    pub fn clear(&mut self) {
        self.indices.clear();
    }

    /// Number of distinct positions seen.
    #[must_use]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Whether no position has been seen.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Index of `position` in `buffers`, appending it with `uv` if new.
    ///
    /// The UV of a repeated position is ignored; the first one wins.
    pub fn weld(&mut self, buffers: &mut MeshBuffers, position: Point3<f64>, uv: Point2<f64>) -> u32 {
        *self
            .indices
            .entry(weld_key(&position))
            .or_insert_with(|| buffers.push_vertex(position, uv))
    }
}
