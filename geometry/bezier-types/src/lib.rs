//! Cubic Bézier curves for procedural tube meshes.
//!
//! This crate provides the curve math that the tube pipeline is built on:
//!
//! - [`CubicBezier`] - A single cubic Bézier segment (4 control points)
//! - [`CubicBezier::evaluate`] - Position at parameter `t`
//! - [`CubicBezier::approximate_length`] - Chord-sum length estimate
//! - [`CubicBezier::sample`] - Evenly spaced samples in `t`
//!
//! # Example
//!
//! ```
//! use bezier_types::CubicBezier;
//! use nalgebra::Point3;
//!
//! let curve = CubicBezier::new(
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(10.0, 0.0, 0.0),
//!     Point3::new(20.0, 5.0, 10.0),
//!     Point3::new(30.0, 10.0, 30.0),
//! );
//!
//! assert_eq!(curve.evaluate(0.0), curve.p0);
//! assert_eq!(curve.evaluate(1.0), curve.p3);
//!
//! let length = curve.approximate_length(90)?;
//! assert!(length > 0.0);
//! # Ok::<(), bezier_types::CurveError>(())
//! ```
//!
//! # Coordinate System
//!
//! Points are plain `nalgebra` points in whatever local space the owning
//! path uses. Nothing here assumes an up axis.
//!
//! # Layer 0 Crate
//!
//! This is a Layer 0 crate with zero engine dependencies.
//!
//! # Feature Flags
//!
//! - `serde`: Enable serialization/deserialization for [`CubicBezier`]

#![doc(html_root_url = "https://docs.rs/bezier-types/0.7.0")]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![allow(clippy::cast_precision_loss, clippy::many_single_char_names)]

mod bezier;
mod error;

pub use bezier::CubicBezier;
pub use error::CurveError;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};

/// Result type for curve operations.
pub type Result<T> = std::result::Result<T, CurveError>;
