//! 3D primitive shapes
//!
//! All primitives are centered at the origin. Cylinders and capsules run
//! along the Z axis.

use super::Sdf3;
use super::primitives2d::sdf_box2d;
use crate::geometry::{Box2, Box3, DVec2, DVec3};
use crate::{Error, Result};

// ============================================================================
// Constructor functions (ergonomic API)
// ============================================================================

/// Create a sphere with given radius
pub fn sphere3d(radius: f64) -> Sphere {
    Sphere::new(radius)
}

/// Create a box with given full size, edges rounded by `round`
pub fn box3d(size: DVec3, round: f64) -> Cuboid {
    Cuboid::new(size, round)
}

/// Create a cube with given edge length
pub fn cube3d(size: f64) -> Cuboid {
    Cuboid::new(DVec3::splat(size), 0.0)
}

/// Create a Z-aligned cylinder, edges rounded by `round`
pub fn cylinder3d(height: f64, radius: f64, round: f64) -> Cylinder {
    Cylinder::new(height, radius, round)
}

/// Create a Z-aligned capsule of total length `height`
pub fn capsule3d(radius: f64, height: f64) -> Cylinder {
    Cylinder::new(height, radius, radius)
}

/// Create equal Z-aligned cylinders at several XY positions
pub fn multi_cylinder3d(height: f64, radius: f64, positions: Vec<DVec2>) -> Result<MultiCylinder> {
    MultiCylinder::new(height, radius, positions)
}

fn sdf_box3d(p: DVec3, s: DVec3) -> f64 {
    let q = p.abs() - s;
    q.max(DVec3::ZERO).length() + q.max_element().min(0.0)
}

// ============================================================================
// Primitive Structs
// ============================================================================

/// Sphere centered at origin
#[derive(Debug, Clone, Copy)]
pub struct Sphere {
    radius: f64,
    bb: Box3,
}

impl Sphere {
    pub fn new(radius: f64) -> Self {
        Self {
            radius,
            bb: Box3::cube(radius.max(0.0)),
        }
    }
}

impl Sdf3 for Sphere {
    fn evaluate(&self, p: DVec3) -> f64 {
        p.length() - self.radius
    }

    fn bounding_box(&self) -> Box3 {
        self.bb
    }
}

/// Axis-aligned box, optionally with rounded edges
#[derive(Debug, Clone, Copy)]
pub struct Cuboid {
    /// Half-size of the core box, before rounding
    half_size: DVec3,
    round: f64,
    bb: Box3,
}

impl Cuboid {
    pub fn new(size: DVec3, round: f64) -> Self {
        let half = (size * 0.5).max(DVec3::ZERO);
        Self {
            half_size: size * 0.5 - DVec3::splat(round),
            round,
            bb: Box3::new(-half, half),
        }
    }
}

impl Sdf3 for Cuboid {
    fn evaluate(&self, p: DVec3) -> f64 {
        sdf_box3d(p, self.half_size) - self.round
    }

    fn bounding_box(&self) -> Box3 {
        self.bb
    }
}

/// Z-aligned cylinder with optional edge rounding.
///
/// A rounding equal to the radius gives a capsule.
#[derive(Debug, Clone, Copy)]
pub struct Cylinder {
    /// Half-height and radius of the core, before rounding
    core: DVec2,
    round: f64,
    bb: Box3,
}

impl Cylinder {
    pub fn new(height: f64, radius: f64, round: f64) -> Self {
        let r = radius.max(0.0);
        let h = (0.5 * height).max(0.0);
        Self {
            core: DVec2::new(radius - round, 0.5 * height - round),
            round,
            bb: Box3::new(DVec3::new(-r, -r, -h), DVec3::new(r, r, h)),
        }
    }
}

impl Sdf3 for Cylinder {
    fn evaluate(&self, p: DVec3) -> f64 {
        let q = DVec2::new(p.truncate().length(), p.z);
        sdf_box2d(q, self.core) - self.round
    }

    fn bounding_box(&self) -> Box3 {
        self.bb
    }
}

/// Equal Z-aligned cylinders at a set of XY positions (drilling patterns)
#[derive(Debug, Clone)]
pub struct MultiCylinder {
    /// Radius and half-height
    size: DVec2,
    positions: Vec<DVec2>,
    bb: Box3,
}

impl MultiCylinder {
    pub fn new(height: f64, radius: f64, positions: Vec<DVec2>) -> Result<Self> {
        let Some(centers) = Box2::from_points(&positions) else {
            tracing::warn!("multi-cylinder rejected: no positions");
            return Err(Error::EmptyPointSet("multi-cylinder positions"));
        };
        let xy = centers.enlarge(radius.max(0.0));
        let h = (0.5 * height).max(0.0);
        Ok(Self {
            size: DVec2::new(radius, 0.5 * height),
            positions,
            bb: Box3::new(xy.min.extend(-h), xy.max.extend(h)),
        })
    }

    pub fn positions(&self) -> &[DVec2] {
        &self.positions
    }
}

impl Sdf3 for MultiCylinder {
    fn evaluate(&self, p: DVec3) -> f64 {
        let xy = p.truncate();
        self.positions
            .iter()
            .map(|&c| sdf_box2d(DVec2::new((xy - c).length(), p.z), self.size))
            .fold(f64::INFINITY, f64::min)
    }

    fn bounding_box(&self) -> Box3 {
        self.bb
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn sphere_surface_is_zero() {
        let s = sphere3d(2.0);
        assert_relative_eq!(s.evaluate(DVec3::new(2.0, 0.0, 0.0)), 0.0);
        assert_relative_eq!(s.evaluate(DVec3::ZERO), -2.0);
        assert_eq!(s.bounding_box(), Box3::cube(2.0));
    }

    #[test]
    fn box_distances() {
        let b = cube3d(2.0);
        assert_relative_eq!(b.evaluate(DVec3::ZERO), -1.0);
        assert_relative_eq!(b.evaluate(DVec3::X), 0.0);
        assert_relative_eq!(b.evaluate(DVec3::splat(2.0)), 3.0_f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn rounded_box_trims_corners_only() {
        let b = box3d(DVec3::new(2.0, 2.0, 2.0), 0.3);
        assert_relative_eq!(b.evaluate(DVec3::Z), 0.0, epsilon = 1e-12);
        assert!(b.evaluate(DVec3::splat(0.95)) > 0.0);
        assert_eq!(b.bounding_box(), Box3::cube(1.0));
    }

    #[test]
    fn cylinder_runs_along_z() {
        let c = cylinder3d(4.0, 1.0, 0.0);
        assert_relative_eq!(c.evaluate(DVec3::new(1.0, 0.0, 0.0)), 0.0);
        assert_relative_eq!(c.evaluate(DVec3::new(0.0, 0.0, 2.0)), 0.0);
        assert_relative_eq!(c.evaluate(DVec3::new(0.0, 0.0, 3.0)), 1.0);
        let bb = c.bounding_box();
        assert_eq!(bb.max, DVec3::new(1.0, 1.0, 2.0));
    }

    #[test]
    fn capsule_has_round_ends() {
        let c = capsule3d(0.5, 3.0);
        assert_relative_eq!(c.evaluate(DVec3::new(0.0, 0.0, 1.5)), 0.0, epsilon = 1e-12);
        assert_relative_eq!(c.evaluate(DVec3::new(0.5, 0.0, 0.0)), 0.0, epsilon = 1e-12);
        // the rim of the flat cylinder is cut away
        assert!(c.evaluate(DVec3::new(0.49, 0.0, 1.49)) > 0.0);
        assert_eq!(c.bounding_box().max, DVec3::new(0.5, 0.5, 1.5));
    }

    #[test]
    fn multi_cylinder_takes_nearest() {
        let m = multi_cylinder3d(2.0, 0.5, vec![DVec2::ZERO, DVec2::new(4.0, 0.0)]).unwrap();
        assert_relative_eq!(m.evaluate(DVec3::new(4.0, 0.0, 0.0)), -0.5);
        assert_relative_eq!(m.evaluate(DVec3::new(2.0, 0.0, 0.0)), 1.5);
        let bb = m.bounding_box();
        assert_eq!(bb.min, DVec3::new(-0.5, -0.5, -1.0));
        assert_eq!(bb.max, DVec3::new(4.5, 0.5, 1.0));
    }
}
