//! Procedural square tubes along chains of cubic Bézier curves.
//!
//! This umbrella crate re-exports the tube crates, providing a unified API
//! for curve math, mesh buffers and path rebuilding. All crates are Layer 0
//! (no engine dependencies) and hand back plain buffers that any renderer
//! or physics backend can upload.
//!
//! # Quick Start
//!
//! ```
//! use tube::prelude::*;
//!
//! let curves = vec![
//!     CubicBezier::new(
//!         Point3::new(0.0, 0.0, 0.0),
//!         Point3::new(10.0, 0.0, 0.0),
//!         Point3::new(20.0, 5.0, 10.0),
//!         Point3::new(30.0, 10.0, 30.0),
//!     ),
//!     CubicBezier::new(
//!         Point3::new(30.0, 10.0, 30.0),
//!         Point3::new(40.0, 20.0, 40.0),
//!         Point3::new(40.0, 20.0, 40.0),
//!         Point3::new(60.0, -10.0, 100.0),
//!     ),
//! ];
//!
//! let mut path = BezierPath::with_curves(curves, TubeParams::default())?;
//! let summary = path.rebuild()?;
//! assert_eq!(summary.curves, 2);
//!
//! // One upload per curve and side
//! for (i, curve) in path.curve_meshes().iter().enumerate() {
//!     for (side, buffers) in curve.sides() {
//!         let _ = (i, side, buffers.indices());
//!     }
//! }
//! # Ok::<(), tube::from_curves::TubeError>(())
//! ```
//!
//! # Module Organization
//!
//! - [`curve`] - Cubic Bézier evaluation, sampling and length
//! - [`types`] - Sides, cross-section rects, mesh buffers, bounds
//! - [`from_curves`] - Segmentation, side builders and path rebuilds
//!
//! # Feature Flags
//!
//! - `serde` - Enable serialization/deserialization in every sub-crate

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![doc(html_root_url = "https://docs.rs/tube/0.7.0")]

// =============================================================================
// Re-exports
// =============================================================================

/// Cubic Bézier curves.
pub use bezier_types as curve;

/// Sides, cross-section rects, mesh buffers and bounds.
pub use tube_types as types;

/// Segmentation, side builders and path rebuilds.
pub use tube_from_curves as from_curves;

// =============================================================================
// Prelude
// =============================================================================

/// Common imports for building tubes.
///
/// # Usage
///
/// ```
/// use tube::prelude::*;
/// ```
pub mod prelude {
    // Curves
    pub use bezier_types::CubicBezier;

    // Core types
    pub use tube_types::{Aabb, MeshBounds, MeshBuffers, Point2, Point3, Side, Vector3};

    // Path building
    pub use tube_from_curves::{BezierPath, CurveMesh, RebuildSummary, TubeError, TubeParams};
}

// =============================================================================
// Tests
// =============================================================================
