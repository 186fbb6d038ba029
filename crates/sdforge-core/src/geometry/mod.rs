//! Geometric value types
//!
//! Vectors and matrices are glam's 64-bit types: [`DVec2`], [`DVec3`],
//! [`DMat3`] (homogeneous 2D affine) and [`DMat4`] (homogeneous 3D affine).
//! This module adds the axis-aligned boxes and the transform builders the
//! kernel is written against.
//!
//! Zero-length vectors normalize to the zero vector (`normalize_or_zero`)
//! throughout the kernel.

mod bounds;
mod transform;

pub use bounds::{Box2, Box3};
pub use glam::{DMat3, DMat4, DVec2, DVec3};
pub use transform::*;
