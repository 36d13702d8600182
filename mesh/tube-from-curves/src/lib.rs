//! Generate six-sided tube meshes along chains of cubic Bézier curves.
//!
//! A [`BezierPath`] holds an ordered list of curves. On every rebuild each
//! curve is cut into straight segments of roughly equal length, each
//! segment gets a square cross-section, and one [`PlaneMeshBuilder`] per
//! side turns the resulting rows of rects into welded, UV-mapped
//! triangle buffers.
//!
//! # Features
//!
//! - **Length-bounded segmentation**: [`segment_curve`] walks sampled chord
//!   lengths, no arc-length reparameterization
//! - **Seam continuity**: every side of curve `i + 1` starts from the last
//!   row of curve `i`
//! - **Welded buffers**: shared quad edges reuse vertex indices
//! - **End caps**: `Front` on the first curve, `Back` on the last
//!
//! # Quick Start
//!
//! ```
//! use bezier_types::CubicBezier;
//! use nalgebra::Point3;
//! use tube_from_curves::{BezierPath, TubeParams};
//! use tube_types::Side;
//!
//! let curve = CubicBezier::new(
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(10.0, 0.0, 0.0),
//!     Point3::new(20.0, 0.0, 0.0),
//!     Point3::new(30.0, 0.0, 0.0),
//! );
//!
//! let params = TubeParams::default()
//!     .with_thickness(1.0)
//!     .with_quads_per_row(1);
//!
//! let mut path = BezierPath::with_curves(vec![curve], params)?;
//! path.rebuild()?;
//!
//! let top = path.side_mesh(0, Side::Top).unwrap();
//! assert_eq!(top.face_count(), 2 * 6);
//! # Ok::<(), tube_from_curves::TubeError>(())
//! ```
//!
//! # Host Updates
//!
//! When control points move, hand the new points to
//! [`BezierPath::rebuild_with`] and re-upload every side's buffers:
//!
//! ```
//! use bezier_types::CubicBezier;
//! use nalgebra::Point3;
//! use tube_from_curves::{BezierPath, TubeParams};
//!
//! let p = |x: f64| Point3::new(x, 0.0, 0.0);
//! let mut path = BezierPath::with_curves(
//!     vec![CubicBezier::new(p(0.0), p(1.0), p(2.0), p(3.0))],
//!     TubeParams::coarse(),
//! )?;
//!
//! let summary = path.rebuild_with(&[[p(0.0), p(10.0), p(20.0), p(30.0)]])?;
//! assert_eq!(summary.curves, 1);
//!
//! for mesh in path.curve_meshes() {
//!     let upload = mesh.combined();
//!     assert_eq!(upload.indices().len(), upload.face_count() * 3);
//! }
//! # Ok::<(), tube_from_curves::TubeError>(())
//! ```
//!
//! # Feature Flags
//!
//! - `serde`: Enable serialization/deserialization for [`TubeParams`],
//!   [`CurveSegment`] and [`RebuildSummary`]

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]

mod error;
mod frame;
mod params;
mod path;
mod plane;
mod segment;
mod weld;

pub use error::{TubeError, TubeResult};
pub use frame::SegmentFrame;
pub use params::TubeParams;
pub use path::{BezierPath, CurveMesh, RebuildSummary};
pub use plane::PlaneMeshBuilder;
pub use segment::{CrossSection, CurveSegment, segment_curve};
pub use weld::WeldTable;
