//! SDF Operations - Boolean combinators and modifiers

use super::{Sdf2, Sdf2Node, Sdf3, Sdf3Node};
use crate::blend::{MaxBlend, MinBlend};
use crate::geometry::{Box2, Box3, DVec2, DVec3};
use crate::{Error, Result};

// ============================================================================
// Boolean Operations (2D)
// ============================================================================

/// Union of two shapes.
///
/// Evaluates to `blend_min(a, b)`; with the default blend that is the exact
/// minimum and the operation is commutative.
#[derive(Debug, Clone)]
pub struct Union2 {
    a: Sdf2Node,
    b: Sdf2Node,
    blend: MinBlend,
    bb: Box2,
}

impl Union2 {
    pub fn new(a: impl Sdf2 + 'static, b: impl Sdf2 + 'static) -> Self {
        let (a, b) = (a.into_node(), b.into_node());
        let bb = a.bounding_box().extend(&b.bounding_box());
        Self {
            a,
            b,
            blend: MinBlend::default(),
            bb,
        }
    }

    pub fn with_min(mut self, blend: MinBlend) -> Self {
        self.blend = blend;
        self
    }

    /// Replace the blend. The bounding box is left as is.
    pub fn set_min(&mut self, blend: MinBlend) {
        self.blend = blend;
    }
}

impl Sdf2 for Union2 {
    fn evaluate(&self, p: DVec2) -> f64 {
        self.blend.apply(self.a.evaluate(p), self.b.evaluate(p))
    }

    fn bounding_box(&self) -> Box2 {
        self.bb
    }
}

/// Subtraction of `b` from `a`: `blend_max(a, -b)`
#[derive(Debug, Clone)]
pub struct Difference2 {
    a: Sdf2Node,
    b: Sdf2Node,
    blend: MaxBlend,
}

impl Difference2 {
    pub fn new(a: impl Sdf2 + 'static, b: impl Sdf2 + 'static) -> Self {
        Self {
            a: a.into_node(),
            b: b.into_node(),
            blend: MaxBlend::default(),
        }
    }

    pub fn with_max(mut self, blend: MaxBlend) -> Self {
        self.blend = blend;
        self
    }

    pub fn set_max(&mut self, blend: MaxBlend) {
        self.blend = blend;
    }
}

impl Sdf2 for Difference2 {
    fn evaluate(&self, p: DVec2) -> f64 {
        self.blend.apply(self.a.evaluate(p), -self.b.evaluate(p))
    }

    // Removing material never grows the shape
    fn bounding_box(&self) -> Box2 {
        self.a.bounding_box()
    }
}

/// Overlap of two shapes: `blend_max(a, b)`
#[derive(Debug, Clone)]
pub struct Intersection2 {
    a: Sdf2Node,
    b: Sdf2Node,
    blend: MaxBlend,
    bb: Box2,
}

impl Intersection2 {
    pub fn new(a: impl Sdf2 + 'static, b: impl Sdf2 + 'static) -> Self {
        let (a, b) = (a.into_node(), b.into_node());
        let bb = a.bounding_box().overlap(&b.bounding_box());
        Self {
            a,
            b,
            blend: MaxBlend::default(),
            bb,
        }
    }

    pub fn with_max(mut self, blend: MaxBlend) -> Self {
        self.blend = blend;
        self
    }

    pub fn set_max(&mut self, blend: MaxBlend) {
        self.blend = blend;
    }
}

impl Sdf2 for Intersection2 {
    fn evaluate(&self, p: DVec2) -> f64 {
        self.blend.apply(self.a.evaluate(p), self.b.evaluate(p))
    }

    fn bounding_box(&self) -> Box2 {
        self.bb
    }
}

// ============================================================================
// Boolean Operations (3D)
// ============================================================================

/// Union of two solids, see [`Union2`]
#[derive(Debug, Clone)]
pub struct Union3 {
    a: Sdf3Node,
    b: Sdf3Node,
    blend: MinBlend,
    bb: Box3,
}

impl Union3 {
    pub fn new(a: impl Sdf3 + 'static, b: impl Sdf3 + 'static) -> Self {
        let (a, b) = (a.into_node(), b.into_node());
        let bb = a.bounding_box().extend(&b.bounding_box());
        Self {
            a,
            b,
            blend: MinBlend::default(),
            bb,
        }
    }

    pub fn with_min(mut self, blend: MinBlend) -> Self {
        self.blend = blend;
        self
    }

    /// Replace the blend. The bounding box is left as is.
    pub fn set_min(&mut self, blend: MinBlend) {
        self.blend = blend;
    }
}

impl Sdf3 for Union3 {
    fn evaluate(&self, p: DVec3) -> f64 {
        self.blend.apply(self.a.evaluate(p), self.b.evaluate(p))
    }

    fn bounding_box(&self) -> Box3 {
        self.bb
    }
}

/// Subtraction of `b` from `a`, see [`Difference2`]
#[derive(Debug, Clone)]
pub struct Difference3 {
    a: Sdf3Node,
    b: Sdf3Node,
    blend: MaxBlend,
}

impl Difference3 {
    pub fn new(a: impl Sdf3 + 'static, b: impl Sdf3 + 'static) -> Self {
        Self {
            a: a.into_node(),
            b: b.into_node(),
            blend: MaxBlend::default(),
        }
    }

    pub fn with_max(mut self, blend: MaxBlend) -> Self {
        self.blend = blend;
        self
    }

    pub fn set_max(&mut self, blend: MaxBlend) {
        self.blend = blend;
    }
}

impl Sdf3 for Difference3 {
    fn evaluate(&self, p: DVec3) -> f64 {
        self.blend.apply(self.a.evaluate(p), -self.b.evaluate(p))
    }

    fn bounding_box(&self) -> Box3 {
        self.a.bounding_box()
    }
}

#[derive(Debug, Clone)]
pub struct Intersection3 {
    a: Sdf3Node,
    b: Sdf3Node,
    blend: MaxBlend,
    bb: Box3,
}

impl Intersection3 {
    pub fn new(a: impl Sdf3 + 'static, b: impl Sdf3 + 'static) -> Self {
        let (a, b) = (a.into_node(), b.into_node());
        let bb = a.bounding_box().overlap(&b.bounding_box());
        Self {
            a,
            b,
            blend: MaxBlend::default(),
            bb,
        }
    }

    pub fn with_max(mut self, blend: MaxBlend) -> Self {
        self.blend = blend;
        self
    }

    pub fn set_max(&mut self, blend: MaxBlend) {
        self.blend = blend;
    }
}

impl Sdf3 for Intersection3 {
    fn evaluate(&self, p: DVec3) -> f64 {
        self.blend.apply(self.a.evaluate(p), self.b.evaluate(p))
    }

    fn bounding_box(&self) -> Box3 {
        self.bb
    }
}

// ============================================================================
// Modifiers
// ============================================================================

/// Constant offset of the distance field.
///
/// A positive offset grows the shape, a negative one shrinks it.
#[derive(Debug, Clone)]
pub struct Offset2 {
    sdf: Sdf2Node,
    offset: f64,
    bb: Box2,
}

impl Offset2 {
    pub fn new(sdf: impl Sdf2 + 'static, offset: f64) -> Self {
        let sdf = sdf.into_node();
        let bb = sdf.bounding_box().enlarge(offset);
        Self { sdf, offset, bb }
    }
}

impl Sdf2 for Offset2 {
    fn evaluate(&self, p: DVec2) -> f64 {
        self.sdf.evaluate(p) - self.offset
    }

    fn bounding_box(&self) -> Box2 {
        self.bb
    }
}

#[derive(Debug, Clone)]
pub struct Offset3 {
    sdf: Sdf3Node,
    offset: f64,
    bb: Box3,
}

impl Offset3 {
    pub fn new(sdf: impl Sdf3 + 'static, offset: f64) -> Self {
        let sdf = sdf.into_node();
        let bb = sdf.bounding_box().enlarge(offset);
        Self { sdf, offset, bb }
    }
}

impl Sdf3 for Offset3 {
    fn evaluate(&self, p: DVec3) -> f64 {
        self.sdf.evaluate(p) - self.offset
    }

    fn bounding_box(&self) -> Box3 {
        self.bb
    }
}

/// Half-plane cut: keeps the part of the shape to the right of the line
/// through `a` with direction `v`.
#[derive(Debug, Clone)]
pub struct Cut2 {
    sdf: Sdf2Node,
    a: DVec2,
    /// Unit normal pointing into the removed side
    n: DVec2,
    bb: Box2,
}

impl Cut2 {
    pub fn new(sdf: impl Sdf2 + 'static, a: DVec2, v: DVec2) -> Result<Self> {
        let v = v.normalize_or_zero();
        if v == DVec2::ZERO {
            tracing::warn!("cut rejected: zero-length line direction");
            return Err(Error::ZeroLengthVector("cut line direction"));
        }
        let n = v.perp();
        let sdf = sdf.into_node();
        let child = sdf.bounding_box();
        let bb = Box2::from_points(&clip_to_half_plane(&child.vertices(), a, n)).unwrap_or(child);
        Ok(Self { sdf, a, n, bb })
    }
}

impl Sdf2 for Cut2 {
    fn evaluate(&self, p: DVec2) -> f64 {
        (p - self.a).dot(self.n).max(self.sdf.evaluate(p))
    }

    fn bounding_box(&self) -> Box2 {
        self.bb
    }
}

/// Sutherland-Hodgman clip of a convex polygon, keeping `(p - a) . n <= 0`
fn clip_to_half_plane(polygon: &[DVec2], a: DVec2, n: DVec2) -> Vec<DVec2> {
    let side = |p: DVec2| (p - a).dot(n);
    let mut out = Vec::with_capacity(polygon.len() + 1);
    for (i, &cur) in polygon.iter().enumerate() {
        let prev = polygon[(i + polygon.len() - 1) % polygon.len()];
        let (dc, dp) = (side(cur), side(prev));
        if (dc <= 0.0) != (dp <= 0.0) {
            let t = dp / (dp - dc);
            out.push(prev + (cur - prev) * t);
        }
        if dc <= 0.0 {
            out.push(cur);
        }
    }
    out
}
