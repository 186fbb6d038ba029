//! Dimension bridges
//!
//! [`Extrusion`] and [`Revolution`] lift a 2D profile into a solid,
//! [`Slice2`] cuts a solid down to a planar cross-section.

use super::{Sdf2, Sdf2Node, Sdf3, Sdf3Node};
use crate::geometry::{Box2, Box3, DVec2, DVec3};
use crate::{Error, Result};
use sdforge_math::TAU;
use std::f64::consts::{FRAC_PI_2, PI};

// ============================================================================
// Solid of revolution
// ============================================================================

/// A 2D profile swept around the Z axis.
///
/// The profile's X axis becomes the radius and its Y axis becomes Z. Only
/// the `x >= 0` half of the profile is meaningful. A partial revolution
/// sweeps counter-clockwise from +X through `theta` radians.
#[derive(Debug, Clone)]
pub struct Revolution {
    sdf: Sdf2Node,
    /// Sweep angle in `[0, 2π)`, zero meaning a full turn
    theta: f64,
    /// Normal of the wedge's closing plane
    norm: DVec2,
    bb: Box3,
}

impl Revolution {
    /// Full turn
    pub fn new(sdf: impl Sdf2 + 'static) -> Self {
        Self::build(sdf.into_node(), 0.0)
    }

    /// Sweep `|theta|` radians. Angles are taken modulo 2π, so a multiple of
    /// a full turn is a full turn.
    pub fn with_theta(sdf: impl Sdf2 + 'static, theta: f64) -> Result<Self> {
        if !theta.is_finite() {
            tracing::warn!(theta, "revolution rejected: non-finite angle");
            return Err(Error::InvalidParameter(format!(
                "revolution angle must be finite, got {theta}"
            )));
        }
        Ok(Self::build(sdf.into_node(), theta.abs() % TAU))
    }

    fn build(sdf: Sdf2Node, theta: f64) -> Self {
        let (sin, cos) = theta.sin_cos();

        // unit directions spanning the swept wedge
        let dirs = if theta == 0.0 {
            vec![DVec2::ONE, DVec2::NEG_ONE]
        } else {
            let mut dirs = vec![DVec2::ZERO, DVec2::X, DVec2::new(cos, sin)];
            if theta > FRAC_PI_2 {
                dirs.push(DVec2::Y);
            }
            if theta > PI {
                dirs.push(DVec2::NEG_X);
            }
            if theta > 1.5 * PI {
                dirs.push(DVec2::NEG_Y);
            }
            dirs
        };

        let profile = sdf.bounding_box();
        let radius = profile.min.x.abs().max(profile.max.x.abs());
        let dirs = Box2::from_points(&dirs).unwrap_or_else(|| Box2::square(1.0));
        let xy = Box2::new(dirs.min * radius, dirs.max * radius);
        let bb = Box3::new(
            xy.min.extend(profile.min.y),
            xy.max.extend(profile.max.y),
        );
        tracing::debug!(theta, ?bb, "built revolution");

        Self {
            sdf,
            theta,
            norm: DVec2::new(-sin, cos),
            bb,
        }
    }

    /// Sweep angle, zero for a full turn
    pub fn theta(&self) -> f64 {
        self.theta
    }
}

impl Sdf3 for Revolution {
    fn evaluate(&self, p: DVec3) -> f64 {
        let a = self.sdf.evaluate(DVec2::new(p.truncate().length(), p.z));
        if self.theta == 0.0 {
            return a;
        }
        // a wedge narrower than a half plane is the intersection of two half
        // planes, a wider one is their union
        let d = self.norm.dot(p.truncate());
        let b = if self.theta < PI {
            (-p.y).max(d)
        } else {
            (-p.y).min(d)
        };
        a.max(b)
    }

    fn bounding_box(&self) -> Box3 {
        self.bb
    }
}

// ============================================================================
// Extrusion
// ============================================================================

/// A 2D profile extended along +Z between `z = 0` and `z = height`
#[derive(Debug, Clone)]
pub struct Extrusion {
    sdf: Sdf2Node,
    height: f64,
    bb: Box3,
}

impl Extrusion {
    pub fn new(sdf: impl Sdf2 + 'static, height: f64) -> Result<Self> {
        if !height.is_finite() || height < 0.0 {
            tracing::warn!(height, "extrusion rejected: bad height");
            return Err(Error::InvalidParameter(format!(
                "extrusion height must be finite and non-negative, got {height}"
            )));
        }
        let sdf = sdf.into_node();
        let profile = sdf.bounding_box();
        Ok(Self {
            sdf,
            height,
            bb: Box3::new(profile.min.extend(0.0), profile.max.extend(height)),
        })
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}

impl Sdf3 for Extrusion {
    fn evaluate(&self, p: DVec3) -> f64 {
        let a = self.sdf.evaluate(p.truncate());
        let b = (-p.z).max(p.z - self.height);
        a.max(b)
    }

    fn bounding_box(&self) -> Box3 {
        self.bb
    }
}

// ============================================================================
// Slice
// ============================================================================

/// Cross-section of a solid by a plane.
///
/// The plane passes through `a` with normal `n`. 2D point `(x, y)` maps to
/// `a + x u + y v` where `u`, `v` form an orthonormal basis of the plane
/// with `u x v` along `n`.
#[derive(Debug, Clone)]
pub struct Slice2 {
    sdf: Sdf3Node,
    a: DVec3,
    u: DVec3,
    v: DVec3,
    bb: Box2,
}

impl Slice2 {
    pub fn new(sdf: impl Sdf3 + 'static, a: DVec3, n: DVec3) -> Result<Self> {
        let n = n.normalize_or_zero();
        if n == DVec3::ZERO {
            tracing::warn!("slice rejected: zero-length plane normal");
            return Err(Error::ZeroLengthVector("slice plane normal"));
        }

        // any vector perpendicular to n will do for u
        let u = if n.x == 0.0 {
            DVec3::X
        } else if n.y == 0.0 {
            DVec3::Y
        } else if n.z == 0.0 {
            DVec3::Z
        } else {
            DVec3::new(n.y, -n.x, 0.0).normalize()
        };
        let v = n.cross(u).normalize();

        // project the solid's corners into the plane
        let sdf = sdf.into_node();
        let corners = sdf.bounding_box().vertices().map(|c| {
            let pa = c - a;
            let pa = pa - n * n.dot(pa);
            DVec2::new(pa.dot(u), pa.dot(v))
        });
        let bb = Box2::from_points(&corners).unwrap_or_else(|| Box2::square(0.0));

        Ok(Self { sdf, a, u, v, bb })
    }

    /// Embed a point of the slice plane in 3D
    pub fn to_world(&self, p: DVec2) -> DVec3 {
        self.a + self.u * p.x + self.v * p.y
    }
}

impl Sdf2 for Slice2 {
    fn evaluate(&self, p: DVec2) -> f64 {
        self.sdf.evaluate(self.to_world(p))
    }

    fn bounding_box(&self) -> Box2 {
        self.bb
    }
}
