//! SDF Transforms - affine placement and instancing
//!
//! Transforms evaluate the child at the inverse-mapped point. Rigid motions
//! preserve distances; scaling and shearing keep the sign and the zero set
//! but not the distance magnitude.
//!
//! The instancing nodes ([`Array2`], [`Rotate2`], ...) fold their copies
//! with a [`MinBlend`]. With the default sharp blend that is the exact
//! distance to the union of the copies. A smooth blend merges the
//! *distances* of neighbouring copies, which only approximates a smooth
//! union of the merged shape.

use super::{Sdf2, Sdf2Node, Sdf3, Sdf3Node};
use crate::blend::MinBlend;
use crate::geometry::{
    Box2, Box3, DMat3, DMat4, DVec2, DVec3, checked_inverse3, checked_inverse4, rotate2d,
    translate2d, translate3d,
};
use crate::{Error, Result};
use glam::{UVec2, UVec3};
use sdforge_math::{TAU, polar_to_xy, sawtooth};

// ============================================================================
// Affine transforms
// ============================================================================

/// 2D shape placed by an affine matrix
#[derive(Debug, Clone)]
pub struct Transform2 {
    sdf: Sdf2Node,
    matrix: DMat3,
    inverse: DMat3,
    bb: Box2,
}

impl Transform2 {
    /// Fails with [`Error::SingularTransform`] when `matrix` has no inverse
    pub fn new(sdf: impl Sdf2 + 'static, matrix: DMat3) -> Result<Self> {
        let inverse = checked_inverse3(&matrix).inspect_err(|_| {
            tracing::warn!("2D transform rejected: singular matrix");
        })?;
        Ok(Self::with_inverse(sdf.into_node(), matrix, inverse))
    }

    pub fn translation(sdf: impl Sdf2 + 'static, offset: DVec2) -> Self {
        Self::with_inverse(sdf.into_node(), translate2d(offset), translate2d(-offset))
    }

    /// Counter-clockwise rotation about the origin (radians)
    pub fn rotation(sdf: impl Sdf2 + 'static, angle: f64) -> Self {
        Self::with_inverse(sdf.into_node(), rotate2d(angle), rotate2d(-angle))
    }

    fn with_inverse(sdf: Sdf2Node, matrix: DMat3, inverse: DMat3) -> Self {
        let bb = sdf.bounding_box().transform(&matrix);
        Self {
            sdf,
            matrix,
            inverse,
            bb,
        }
    }

    pub fn matrix(&self) -> DMat3 {
        self.matrix
    }
}

impl Sdf2 for Transform2 {
    fn evaluate(&self, p: DVec2) -> f64 {
        self.sdf.evaluate(self.inverse.transform_point2(p))
    }

    fn bounding_box(&self) -> Box2 {
        self.bb
    }
}

/// 3D solid placed by an affine matrix
#[derive(Debug, Clone)]
pub struct Transform3 {
    sdf: Sdf3Node,
    matrix: DMat4,
    inverse: DMat4,
    bb: Box3,
}

impl Transform3 {
    /// Fails with [`Error::SingularTransform`] when `matrix` has no inverse
    pub fn new(sdf: impl Sdf3 + 'static, matrix: DMat4) -> Result<Self> {
        let inverse = checked_inverse4(&matrix).inspect_err(|_| {
            tracing::warn!("3D transform rejected: singular matrix");
        })?;
        Ok(Self::with_inverse(sdf.into_node(), matrix, inverse))
    }

    pub fn translation(sdf: impl Sdf3 + 'static, offset: DVec3) -> Self {
        Self::with_inverse(sdf.into_node(), translate3d(offset), translate3d(-offset))
    }

    fn with_inverse(sdf: Sdf3Node, matrix: DMat4, inverse: DMat4) -> Self {
        let bb = sdf.bounding_box().transform(&matrix);
        Self {
            sdf,
            matrix,
            inverse,
            bb,
        }
    }

    pub fn matrix(&self) -> DMat4 {
        self.matrix
    }
}

impl Sdf3 for Transform3 {
    fn evaluate(&self, p: DVec3) -> f64 {
        self.sdf.evaluate(self.inverse.transform_point3(p))
    }

    fn bounding_box(&self) -> Box3 {
        self.bb
    }
}

// ============================================================================
// Grid arrays
// ============================================================================

/// `count.x * count.y` copies, copy `(i, j)` shifted by `(i * step.x, j * step.y)`
#[derive(Debug, Clone)]
pub struct Array2 {
    sdf: Sdf2Node,
    count: UVec2,
    step: DVec2,
    blend: MinBlend,
    bb: Box2,
}

impl Array2 {
    pub fn new(sdf: impl Sdf2 + 'static, count: UVec2, step: DVec2) -> Result<Self> {
        if count.min_element() == 0 {
            tracing::warn!(?count, "2D array rejected: zero count");
            return Err(Error::NonPositiveCount(format!("array count {count}")));
        }
        let sdf = sdf.into_node();
        let base = sdf.bounding_box();
        let last = (count - UVec2::ONE).as_dvec2() * step;
        let bb = base.extend(&base.translate(last));
        Ok(Self {
            sdf,
            count,
            step,
            blend: MinBlend::default(),
            bb,
        })
    }

    pub fn with_min(mut self, blend: MinBlend) -> Self {
        self.blend = blend;
        self
    }

    pub fn set_min(&mut self, blend: MinBlend) {
        self.blend = blend;
    }
}

impl Sdf2 for Array2 {
    fn evaluate(&self, p: DVec2) -> f64 {
        let mut d = self.sdf.evaluate(p);
        for j in 0..self.count.y {
            for i in 0..self.count.x {
                if i == 0 && j == 0 {
                    continue;
                }
                let offset = UVec2::new(i, j).as_dvec2() * self.step;
                d = self.blend.apply(d, self.sdf.evaluate(p - offset));
            }
        }
        d
    }

    fn bounding_box(&self) -> Box2 {
        self.bb
    }
}

/// 3D grid of copies, see [`Array2`]
#[derive(Debug, Clone)]
pub struct Array3 {
    sdf: Sdf3Node,
    count: UVec3,
    step: DVec3,
    blend: MinBlend,
    bb: Box3,
}

impl Array3 {
    pub fn new(sdf: impl Sdf3 + 'static, count: UVec3, step: DVec3) -> Result<Self> {
        if count.min_element() == 0 {
            tracing::warn!(?count, "3D array rejected: zero count");
            return Err(Error::NonPositiveCount(format!("array count {count}")));
        }
        let sdf = sdf.into_node();
        let base = sdf.bounding_box();
        let last = (count - UVec3::ONE).as_dvec3() * step;
        let bb = base.extend(&base.translate(last));
        Ok(Self {
            sdf,
            count,
            step,
            blend: MinBlend::default(),
            bb,
        })
    }

    pub fn with_min(mut self, blend: MinBlend) -> Self {
        self.blend = blend;
        self
    }

    pub fn set_min(&mut self, blend: MinBlend) {
        self.blend = blend;
    }
}

impl Sdf3 for Array3 {
    fn evaluate(&self, p: DVec3) -> f64 {
        let mut d = self.sdf.evaluate(p);
        for k in 0..self.count.z {
            for j in 0..self.count.y {
                for i in 0..self.count.x {
                    if i == 0 && j == 0 && k == 0 {
                        continue;
                    }
                    let offset = UVec3::new(i, j, k).as_dvec3() * self.step;
                    d = self.blend.apply(d, self.sdf.evaluate(p - offset));
                }
            }
        }
        d
    }

    fn bounding_box(&self) -> Box3 {
        self.bb
    }
}

// ============================================================================
// Repeated transforms
// ============================================================================

/// Upper bound on the copies of [`Rotate2`] and [`Rotate3`]
pub const MAX_ROTATE_COPIES: u32 = 1 << 16;

fn check_rotate_count(count: u32, dim: &str) -> Result<()> {
    if count == 0 {
        tracing::warn!("{dim} rotate rejected: zero count");
        return Err(Error::NonPositiveCount("rotate count 0".to_string()));
    }
    if count > MAX_ROTATE_COPIES {
        tracing::warn!(count, "{dim} rotate rejected: too many copies");
        return Err(Error::InvalidParameter(format!(
            "rotate count {count} exceeds {MAX_ROTATE_COPIES}"
        )));
    }
    Ok(())
}

/// `count` copies, copy `i` placed by `step` applied `i` times.
///
/// Copy 0 is the untransformed shape. Evaluation walks the copies by
/// accumulating the inverse step, so no per-copy state is stored.
#[derive(Debug, Clone)]
pub struct Rotate2 {
    sdf: Sdf2Node,
    count: u32,
    step_inv: DMat3,
    blend: MinBlend,
    bb: Box2,
}

impl Rotate2 {
    pub fn new(sdf: impl Sdf2 + 'static, count: u32, step: DMat3) -> Result<Self> {
        check_rotate_count(count, "2D")?;
        let step_inv = checked_inverse3(&step)?;
        let sdf = sdf.into_node();

        let mut bb = sdf.bounding_box();
        let mut forward = step;
        for _ in 1..count {
            bb = bb.extend(&sdf.bounding_box().transform(&forward));
            forward = step * forward;
        }
        tracing::debug!(count, ?bb, "built 2D rotate");

        Ok(Self {
            sdf,
            count,
            step_inv,
            blend: MinBlend::default(),
            bb,
        })
    }

    pub fn with_min(mut self, blend: MinBlend) -> Self {
        self.blend = blend;
        self
    }

    pub fn set_min(&mut self, blend: MinBlend) {
        self.blend = blend;
    }

    pub fn count(&self) -> u32 {
        self.count
    }
}

impl Sdf2 for Rotate2 {
    fn evaluate(&self, p: DVec2) -> f64 {
        let mut d = self.sdf.evaluate(p);
        let mut inverse = self.step_inv;
        for _ in 1..self.count {
            d = self.blend.apply(d, self.sdf.evaluate(inverse.transform_point2(p)));
            inverse *= self.step_inv;
        }
        d
    }

    fn bounding_box(&self) -> Box2 {
        self.bb
    }
}

/// 3D counterpart of [`Rotate2`]
#[derive(Debug, Clone)]
pub struct Rotate3 {
    sdf: Sdf3Node,
    count: u32,
    step_inv: DMat4,
    blend: MinBlend,
    bb: Box3,
}

impl Rotate3 {
    pub fn new(sdf: impl Sdf3 + 'static, count: u32, step: DMat4) -> Result<Self> {
        check_rotate_count(count, "3D")?;
        let step_inv = checked_inverse4(&step)?;
        let sdf = sdf.into_node();

        let mut bb = sdf.bounding_box();
        let mut forward = step;
        for _ in 1..count {
            bb = bb.extend(&sdf.bounding_box().transform(&forward));
            forward = step * forward;
        }
        tracing::debug!(count, ?bb, "built 3D rotate");

        Ok(Self {
            sdf,
            count,
            step_inv,
            blend: MinBlend::default(),
            bb,
        })
    }

    pub fn with_min(mut self, blend: MinBlend) -> Self {
        self.blend = blend;
        self
    }

    pub fn set_min(&mut self, blend: MinBlend) {
        self.blend = blend;
    }

    pub fn count(&self) -> u32 {
        self.count
    }
}

impl Sdf3 for Rotate3 {
    fn evaluate(&self, p: DVec3) -> f64 {
        let mut d = self.sdf.evaluate(p);
        let mut inverse = self.step_inv;
        for _ in 1..self.count {
            d = self.blend.apply(d, self.sdf.evaluate(inverse.transform_point3(p)));
            inverse *= self.step_inv;
        }
        d
    }

    fn bounding_box(&self) -> Box3 {
        self.bb
    }
}

// ============================================================================
// Polar copies
// ============================================================================

/// `count` copies evenly spaced around the origin.
///
/// Every point is folded into the sector `[-θ/2, θ/2)` with `θ = 2π/count`
/// and evaluated there, so the cost does not depend on `count`. The result
/// is exactly invariant under rotation by `θ`. The base shape should fit
/// inside its sector; parts outside it are cut off at the sector edges.
#[derive(Debug, Clone)]
pub struct RotateCopy2 {
    sdf: Sdf2Node,
    theta: f64,
    bb: Box2,
}

impl RotateCopy2 {
    pub fn new(sdf: impl Sdf2 + 'static, count: u32) -> Result<Self> {
        if count == 0 {
            tracing::warn!("rotate-copy rejected: zero count");
            return Err(Error::NonPositiveCount("rotate-copy count 0".to_string()));
        }
        let sdf = sdf.into_node();
        let radius = sdf
            .bounding_box()
            .vertices()
            .iter()
            .map(|v| v.length())
            .fold(0.0, f64::max);
        Ok(Self {
            sdf,
            theta: TAU / f64::from(count),
            bb: Box2::square(radius),
        })
    }
}

impl Sdf2 for RotateCopy2 {
    fn evaluate(&self, p: DVec2) -> f64 {
        let angle = sawtooth(p.y.atan2(p.x), self.theta);
        self.sdf.evaluate(polar_to_xy(p.length(), angle))
    }

    fn bounding_box(&self) -> Box2 {
        self.bb
    }
}
