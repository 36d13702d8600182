//! Core mesh types for procedural Bézier tubes.
//!
//! This crate provides the data model shared by the tube pipeline:
//!
//! - [`Side`] - The six faces of the tube's square cross-section
//! - [`SideMap`] - A fixed table holding one value per [`Side`]
//! - [`CrossSectionRect`] - Four corners bounding one side over one segment
//! - [`MeshBuffers`] - Positions, UVs and triangle faces ready for upload
//! - [`Aabb`] - Axis-aligned bounding box
//!
//! # Layer 0 Crate
//!
//! This is a Layer 0 crate with zero engine dependencies. Buffers are plain
//! vectors so any renderer can upload them.
//!
//! # Winding
//!
//! Face winding is **counter-clockwise (CCW) when viewed from outside**.
//! Normals point outward by the right-hand rule.
//!
//! # Example
//!
//! ```
//! use tube_types::{MeshBuffers, MeshBounds, Point2, Point3};
//!
//! let mut buffers = MeshBuffers::new();
//! let a = buffers.push_vertex(Point3::new(0.0, 0.0, 0.0), Point2::new(0.0, 0.0));
//! let b = buffers.push_vertex(Point3::new(1.0, 0.0, 0.0), Point2::new(1.0, 0.0));
//! let c = buffers.push_vertex(Point3::new(0.0, 1.0, 0.0), Point2::new(0.0, 1.0));
//! buffers.faces.push([a, b, c]);
//!
//! assert_eq!(buffers.face_count(), 1);
//! assert_eq!(buffers.indices(), vec![0, 1, 2]);
//! assert_eq!(buffers.bounds().max, Point3::new(1.0, 1.0, 0.0));
//! ```
//!
//! # Feature Flags
//!
//! - `serde`: Enable serialization/deserialization for all types

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]

mod bounds;
mod buffers;
mod rect;
mod side;
mod traits;

pub use bounds::Aabb;
pub use buffers::MeshBuffers;
pub use rect::CrossSectionRect;
pub use side::{Side, SideMap};
pub use traits::MeshBounds;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point2, Point3, Vector3};
