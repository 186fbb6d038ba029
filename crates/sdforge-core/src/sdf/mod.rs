//! Signed distance functions in 2D and 3D
//!
//! An SDF maps a point to the signed distance to a shape's boundary:
//! negative inside, zero on the surface, positive outside. Shapes are built
//! bottom-up into expression trees; every node computes its bounding box
//! once, at construction, and is read-only afterwards.
//!
//! ## Example
//!
//! ```rust
//! use sdforge_core::prelude::*;
//!
//! // A plate with a hole, extruded and revolved profiles share one node
//! let profile = box2d(DVec2::new(4.0, 2.0), 0.0).difference(circle2d(0.5));
//! let plate = profile.clone().extrude(0.5).unwrap();
//! let ring = profile.translate(DVec2::new(5.0, 0.0)).revolve();
//!
//! assert!(plate.evaluate(DVec3::new(1.5, 0.0, 0.25)) < 0.0);
//! assert!(ring.evaluate(DVec3::new(0.0, 6.0, 0.0)) < 0.0);
//! assert!(ring.evaluate(DVec3::new(0.0, 5.0, 0.0)) > 0.0);
//! ```

pub mod bridges;
pub mod operations;
pub mod primitives2d;
pub mod primitives3d;
pub mod transforms;

use crate::blend::{MaxBlend, MinBlend};
use crate::geometry::{Box2, Box3, DMat3, DMat4, DVec2, DVec3};
use crate::Result;
use glam::{UVec2, UVec3};
use std::sync::Arc;

// ============================================================================
// Core traits
// ============================================================================

/// A 2D signed distance function
pub trait Sdf2: Send + Sync {
    /// Signed distance from `p` to the boundary.
    ///
    /// Finite for every finite `p`; never fails.
    fn evaluate(&self, p: DVec2) -> f64;

    /// Box containing every point where `evaluate` is `<= 0`
    fn bounding_box(&self) -> Box2;

    /// Wrap into a shared handle. Handles return themselves.
    fn into_node(self) -> Sdf2Node
    where
        Self: Sized + 'static,
    {
        Sdf2Node::new(self)
    }
}

/// A 3D signed distance function
pub trait Sdf3: Send + Sync {
    /// Signed distance from `p` to the boundary.
    ///
    /// Finite for every finite `p`; never fails.
    fn evaluate(&self, p: DVec3) -> f64;

    /// Box containing every point where `evaluate` is `<= 0`
    fn bounding_box(&self) -> Box3;

    /// Wrap into a shared handle. Handles return themselves.
    fn into_node(self) -> Sdf3Node
    where
        Self: Sized + 'static,
    {
        Sdf3Node::new(self)
    }
}

// ============================================================================
// Shared handles
// ============================================================================

/// Reference-counted handle to an immutable 2D node.
///
/// Cloning is a reference count bump, so one sub-shape can be shared by any
/// number of parents and evaluated from any number of threads.
#[derive(Clone)]
pub struct Sdf2Node {
    inner: Arc<dyn Sdf2>,
}

impl Sdf2Node {
    pub fn new<S: Sdf2 + 'static>(sdf: S) -> Self {
        Self {
            inner: Arc::new(sdf),
        }
    }

    /// Whether two handles point at the same node
    pub fn ptr_eq(&self, other: &Sdf2Node) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Sdf2 for Sdf2Node {
    fn evaluate(&self, p: DVec2) -> f64 {
        self.inner.evaluate(p)
    }

    fn bounding_box(&self) -> Box2 {
        self.inner.bounding_box()
    }

    fn into_node(self) -> Sdf2Node {
        self
    }
}

/// Reference-counted handle to an immutable 3D node
#[derive(Clone)]
pub struct Sdf3Node {
    inner: Arc<dyn Sdf3>,
}

impl Sdf3Node {
    pub fn new<S: Sdf3 + 'static>(sdf: S) -> Self {
        Self {
            inner: Arc::new(sdf),
        }
    }

    /// Whether two handles point at the same node
    pub fn ptr_eq(&self, other: &Sdf3Node) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Sdf3 for Sdf3Node {
    fn evaluate(&self, p: DVec3) -> f64 {
        self.inner.evaluate(p)
    }

    fn bounding_box(&self) -> Box3 {
        self.inner.bounding_box()
    }

    fn into_node(self) -> Sdf3Node {
        self
    }
}

impl std::fmt::Debug for Sdf2Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sdf2Node")
            .field("bounding_box", &self.bounding_box())
            .finish()
    }
}

impl std::fmt::Debug for Sdf3Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sdf3Node")
            .field("bounding_box", &self.bounding_box())
            .finish()
    }
}

// ============================================================================
// Chainable builders
// ============================================================================

/// Extension trait providing chainable operations on 2D SDFs
pub trait Sdf2Ext: Sdf2 + Sized + 'static {
    // === Boolean Operations ===

    /// Union: combine two shapes (OR)
    fn union<S: Sdf2 + 'static>(self, other: S) -> Sdf2Node {
        operations::Union2::new(self, other).into_node()
    }

    /// Union joined by a smoothing blend
    fn smooth_union<S: Sdf2 + 'static>(self, other: S, blend: MinBlend) -> Sdf2Node {
        operations::Union2::new(self, other)
            .with_min(blend)
            .into_node()
    }

    /// Difference: cut `other` from `self`
    fn difference<S: Sdf2 + 'static>(self, other: S) -> Sdf2Node {
        operations::Difference2::new(self, other).into_node()
    }

    /// Difference with a smoothing blend along the cut
    fn smooth_difference<S: Sdf2 + 'static>(self, other: S, blend: MaxBlend) -> Sdf2Node {
        operations::Difference2::new(self, other)
            .with_max(blend)
            .into_node()
    }

    /// Intersection: keep only where both shapes overlap (AND)
    fn intersection<S: Sdf2 + 'static>(self, other: S) -> Sdf2Node {
        operations::Intersection2::new(self, other).into_node()
    }

    /// Intersection with a smoothing blend
    fn smooth_intersection<S: Sdf2 + 'static>(self, other: S, blend: MaxBlend) -> Sdf2Node {
        operations::Intersection2::new(self, other)
            .with_max(blend)
            .into_node()
    }

    // === Modifiers ===

    /// Grow (positive) or shrink (negative) the shape by a constant
    fn offset(self, offset: f64) -> Sdf2Node {
        operations::Offset2::new(self, offset).into_node()
    }

    /// Keep the part to the right of the line through `a` along `v`
    fn cut(self, a: DVec2, v: DVec2) -> Result<Sdf2Node> {
        Ok(operations::Cut2::new(self, a, v)?.into_node())
    }

    // === Transforms ===

    /// Apply an affine transform
    fn transform(self, matrix: DMat3) -> Result<Sdf2Node> {
        Ok(transforms::Transform2::new(self, matrix)?.into_node())
    }

    fn translate(self, offset: DVec2) -> Sdf2Node {
        transforms::Transform2::translation(self, offset).into_node()
    }

    /// Rotate about the origin (radians, counter-clockwise)
    fn rotate(self, angle: f64) -> Sdf2Node {
        transforms::Transform2::rotation(self, angle).into_node()
    }

    // === Instancing ===

    /// Grid of `count.x` by `count.y` copies spaced by `step`
    fn array(self, count: UVec2, step: DVec2) -> Result<Sdf2Node> {
        Ok(transforms::Array2::new(self, count, step)?.into_node())
    }

    /// `count` copies, each one `step` further than the previous
    fn rotate_copies(self, count: u32, step: DMat3) -> Result<Sdf2Node> {
        Ok(transforms::Rotate2::new(self, count, step)?.into_node())
    }

    /// `count` congruent copies evenly spaced around the origin
    fn rotate_copy(self, count: u32) -> Result<Sdf2Node> {
        Ok(transforms::RotateCopy2::new(self, count)?.into_node())
    }

    // === Into 3D ===

    /// Extrude along +Z from `z = 0` to `z = height`
    fn extrude(self, height: f64) -> Result<Sdf3Node> {
        Ok(bridges::Extrusion::new(self, height)?.into_node())
    }

    /// Full solid of revolution about the Z axis
    fn revolve(self) -> Sdf3Node {
        bridges::Revolution::new(self).into_node()
    }

    /// Partial solid of revolution sweeping `theta` radians from +X
    fn revolve_theta(self, theta: f64) -> Result<Sdf3Node> {
        Ok(bridges::Revolution::with_theta(self, theta)?.into_node())
    }
}

impl<T: Sdf2 + 'static> Sdf2Ext for T {}

/// Extension trait providing chainable operations on 3D SDFs
pub trait Sdf3Ext: Sdf3 + Sized + 'static {
    // === Boolean Operations ===

    /// Union: combine two shapes (OR)
    fn union<S: Sdf3 + 'static>(self, other: S) -> Sdf3Node {
        operations::Union3::new(self, other).into_node()
    }

    /// Union joined by a smoothing blend
    fn smooth_union<S: Sdf3 + 'static>(self, other: S, blend: MinBlend) -> Sdf3Node {
        operations::Union3::new(self, other)
            .with_min(blend)
            .into_node()
    }

    /// Difference: cut `other` from `self`
    fn difference<S: Sdf3 + 'static>(self, other: S) -> Sdf3Node {
        operations::Difference3::new(self, other).into_node()
    }

    /// Difference with a smoothing blend along the cut
    fn smooth_difference<S: Sdf3 + 'static>(self, other: S, blend: MaxBlend) -> Sdf3Node {
        operations::Difference3::new(self, other)
            .with_max(blend)
            .into_node()
    }

    /// Intersection: keep only where both shapes overlap (AND)
    fn intersection<S: Sdf3 + 'static>(self, other: S) -> Sdf3Node {
        operations::Intersection3::new(self, other).into_node()
    }

    /// Intersection with a smoothing blend
    fn smooth_intersection<S: Sdf3 + 'static>(self, other: S, blend: MaxBlend) -> Sdf3Node {
        operations::Intersection3::new(self, other)
            .with_max(blend)
            .into_node()
    }

    // === Modifiers ===

    /// Grow (positive) or shrink (negative) the shape by a constant
    fn offset(self, offset: f64) -> Sdf3Node {
        operations::Offset3::new(self, offset).into_node()
    }

    // === Transforms ===

    /// Apply an affine transform
    fn transform(self, matrix: DMat4) -> Result<Sdf3Node> {
        Ok(transforms::Transform3::new(self, matrix)?.into_node())
    }

    fn translate(self, offset: DVec3) -> Sdf3Node {
        transforms::Transform3::translation(self, offset).into_node()
    }

    // === Instancing ===

    /// Grid of copies spaced by `step` along each axis
    fn array(self, count: UVec3, step: DVec3) -> Result<Sdf3Node> {
        Ok(transforms::Array3::new(self, count, step)?.into_node())
    }

    /// `count` copies, each one `step` further than the previous
    fn rotate_copies(self, count: u32, step: DMat4) -> Result<Sdf3Node> {
        Ok(transforms::Rotate3::new(self, count, step)?.into_node())
    }

    // === Into 2D ===

    /// Cross-section by the plane through `a` with normal `n`
    fn slice(self, a: DVec3, n: DVec3) -> Result<Sdf2Node> {
        Ok(bridges::Slice2::new(self, a, n)?.into_node())
    }
}

impl<T: Sdf3 + 'static> Sdf3Ext for T {}

// Re-exports
pub use bridges::*;
pub use operations::*;
pub use primitives2d::*;
pub use primitives3d::*;
pub use transforms::*;
