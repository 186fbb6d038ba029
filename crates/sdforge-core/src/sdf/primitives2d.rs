//! 2D primitive shapes
//!
//! All primitives are centered at the origin unless built from explicit
//! positions. Use transforms to place them.

use super::Sdf2;
use crate::geometry::{Box2, DVec2};
use crate::{Error, Result};

// ============================================================================
// Constructor functions (ergonomic API)
// ============================================================================

/// Create a circle with given radius
pub fn circle2d(radius: f64) -> Circle {
    Circle::new(radius)
}

/// Create circles of one radius at several positions
pub fn multi_circle2d(radius: f64, positions: Vec<DVec2>) -> Result<MultiCircle> {
    MultiCircle::new(radius, positions)
}

/// Create a box with given full size, corners rounded by `round`
pub fn box2d(size: DVec2, round: f64) -> Rectangle {
    Rectangle::new(size, round)
}

/// Create a line of given length along X, thickened by `round`
pub fn line2d(length: f64, round: f64) -> Line {
    Line::new(length, round)
}

/// Create a closed polygon from its vertices
pub fn polygon2d(vertices: Vec<DVec2>) -> Result<Polygon> {
    Polygon::new(vertices)
}

/// Signed distance to an origin-centered box with half-size `s`
pub(crate) fn sdf_box2d(p: DVec2, s: DVec2) -> f64 {
    let q = p.abs() - s;
    q.max(DVec2::ZERO).length() + q.x.max(q.y).min(0.0)
}

// ============================================================================
// Primitive Structs
// ============================================================================

/// Circle centered at origin
#[derive(Debug, Clone, Copy)]
pub struct Circle {
    radius: f64,
    bb: Box2,
}

impl Circle {
    pub fn new(radius: f64) -> Self {
        Self {
            radius,
            bb: Box2::square(radius.max(0.0)),
        }
    }
}

impl Sdf2 for Circle {
    fn evaluate(&self, p: DVec2) -> f64 {
        p.length() - self.radius
    }

    fn bounding_box(&self) -> Box2 {
        self.bb
    }
}

/// Equal circles at a set of positions
#[derive(Debug, Clone)]
pub struct MultiCircle {
    radius: f64,
    positions: Vec<DVec2>,
    bb: Box2,
}

impl MultiCircle {
    pub fn new(radius: f64, positions: Vec<DVec2>) -> Result<Self> {
        let Some(centers) = Box2::from_points(&positions) else {
            tracing::warn!("multi-circle rejected: no positions");
            return Err(Error::EmptyPointSet("multi-circle positions"));
        };
        Ok(Self {
            radius,
            positions,
            bb: centers.enlarge(radius.max(0.0)),
        })
    }

    pub fn positions(&self) -> &[DVec2] {
        &self.positions
    }
}

impl Sdf2 for MultiCircle {
    fn evaluate(&self, p: DVec2) -> f64 {
        self.positions
            .iter()
            .map(|&c| (p - c).length() - self.radius)
            .fold(f64::INFINITY, f64::min)
    }

    fn bounding_box(&self) -> Box2 {
        self.bb
    }
}

/// Axis-aligned rectangle, optionally with rounded corners
#[derive(Debug, Clone, Copy)]
pub struct Rectangle {
    /// Half-size of the core box, before rounding
    half_size: DVec2,
    round: f64,
    bb: Box2,
}

impl Rectangle {
    pub fn new(size: DVec2, round: f64) -> Self {
        let half = size * 0.5;
        Self {
            half_size: half - DVec2::splat(round),
            round,
            // rounding only trims the corners, the full size still bounds it
            bb: Box2::new(-half.max(DVec2::ZERO), half.max(DVec2::ZERO)),
        }
    }
}

impl Sdf2 for Rectangle {
    fn evaluate(&self, p: DVec2) -> f64 {
        sdf_box2d(p, self.half_size) - self.round
    }

    fn bounding_box(&self) -> Box2 {
        self.bb
    }
}

/// Line segment from `(-l/2, 0)` to `(l/2, 0)`, thickened by `round`
#[derive(Debug, Clone, Copy)]
pub struct Line {
    half_length: f64,
    round: f64,
    bb: Box2,
}

impl Line {
    pub fn new(length: f64, round: f64) -> Self {
        let half_length = (0.5 * length).max(0.0);
        let r = round.max(0.0);
        Self {
            half_length,
            round,
            bb: Box2::new(
                DVec2::new(-half_length - r, -r),
                DVec2::new(half_length + r, r),
            ),
        }
    }
}

impl Sdf2 for Line {
    fn evaluate(&self, p: DVec2) -> f64 {
        let p = p.abs();
        if p.x <= self.half_length {
            return p.y - self.round;
        }
        (p - DVec2::new(self.half_length, 0.0)).length() - self.round
    }

    fn bounding_box(&self) -> Box2 {
        self.bb
    }
}

// ============================================================================
// Polygon
// ============================================================================

#[derive(Debug, Clone, Copy)]
struct Edge {
    /// Unit direction from start to end, zero for a collapsed edge
    dir: DVec2,
    length: f64,
}

/// Closed polygon, inside decided by winding number.
///
/// Self-intersecting outlines are allowed; any region with a nonzero
/// winding number counts as inside.
#[derive(Debug, Clone)]
pub struct Polygon {
    /// Closed loop: the last vertex repeats the first
    vertices: Vec<DVec2>,
    edges: Vec<Edge>,
    bb: Box2,
}

impl Polygon {
    pub fn new(mut vertices: Vec<DVec2>) -> Result<Self> {
        let n = vertices.len();
        if n < 3 {
            tracing::warn!(vertices = n, "polygon rejected");
            return Err(Error::DegeneratePolygon(n));
        }

        // close the loop (exact match only)
        if vertices[0] != vertices[n - 1] {
            vertices.push(vertices[0]);
        }

        let edges: Vec<Edge> = vertices
            .windows(2)
            .map(|w| {
                let l = w[1] - w[0];
                Edge {
                    dir: l.normalize_or_zero(),
                    length: l.length(),
                }
            })
            .collect();

        let bb = Box2::from_points(&vertices).ok_or(Error::DegeneratePolygon(0))?;
        tracing::debug!(edges = edges.len(), ?bb, "polygon built");

        Ok(Self {
            vertices,
            edges,
            bb,
        })
    }

    /// Vertices of the closed loop, first vertex repeated at the end
    pub fn vertices(&self) -> &[DVec2] {
        &self.vertices
    }
}

impl Sdf2 for Polygon {
    fn evaluate(&self, p: DVec2) -> f64 {
        let mut dd = f64::INFINITY; // squared distance to the outline
        let mut wn = 0i32; // winding number

        let mut pb = p - self.vertices[0];
        for (i, edge) in self.edges.iter().enumerate() {
            let a = self.vertices[i];
            let b = self.vertices[i + 1];

            let pa = pb;
            pb = p - b;

            // projection onto the edge, and signed normal distance
            let t = pa.dot(edge.dir);
            let dn = pa.dot(DVec2::new(edge.dir.y, -edge.dir.x));

            dd = dd.min(if t <= 0.0 {
                pa.length_squared()
            } else if t > edge.length {
                pb.length_squared()
            } else {
                dn * dn
            });

            // crossings of the horizontal ray through p
            if a.y <= p.y {
                if b.y > p.y && dn < 0.0 {
                    wn += 1; // upward, p on the left
                }
            } else if b.y <= p.y && dn > 0.0 {
                wn -= 1; // downward, p on the right
            }
        }

        let d = dd.sqrt();
        if wn != 0 { -d } else { d }
    }

    fn bounding_box(&self) -> Box2 {
        self.bb
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit_square() -> Polygon {
        polygon2d(vec![
            DVec2::new(0.0, 0.0),
            DVec2::new(1.0, 0.0),
            DVec2::new(1.0, 1.0),
            DVec2::new(0.0, 1.0),
        ])
        .unwrap()
    }

    #[test]
    fn circle_surface_is_zero() {
        let c = circle2d(2.0);
        assert_relative_eq!(c.evaluate(DVec2::new(2.0, 0.0)), 0.0);
        assert_relative_eq!(c.evaluate(DVec2::ZERO), -2.0);
        assert_eq!(c.bounding_box(), Box2::square(2.0));
    }

    #[test]
    fn multi_circle_takes_nearest() {
        let m = multi_circle2d(0.5, vec![DVec2::ZERO, DVec2::new(3.0, 0.0)]).unwrap();
        assert_relative_eq!(m.evaluate(DVec2::new(3.0, 0.0)), -0.5);
        assert_relative_eq!(m.evaluate(DVec2::new(1.5, 0.0)), 1.0);
        let bb = m.bounding_box();
        assert_eq!(bb.min, DVec2::new(-0.5, -0.5));
        assert_eq!(bb.max, DVec2::new(3.5, 0.5));
    }

    #[test]
    fn multi_circle_rejects_empty_positions() {
        assert!(matches!(
            multi_circle2d(1.0, vec![]),
            Err(Error::EmptyPointSet(_))
        ));
    }

    #[test]
    fn box_distances() {
        let b = box2d(DVec2::new(2.0, 4.0), 0.0);
        assert_relative_eq!(b.evaluate(DVec2::ZERO), -1.0);
        assert_relative_eq!(b.evaluate(DVec2::new(1.0, 0.0)), 0.0);
        assert_relative_eq!(b.evaluate(DVec2::new(0.0, 3.0)), 1.0);
        assert_relative_eq!(b.evaluate(DVec2::new(4.0, 6.0)), 5.0);
    }

    #[test]
    fn rounded_box_keeps_full_bounds() {
        let b = box2d(DVec2::new(2.0, 2.0), 0.25);
        assert_eq!(b.bounding_box(), Box2::square(1.0));
        // face centers are still on the surface
        assert_relative_eq!(b.evaluate(DVec2::new(1.0, 0.0)), 0.0, epsilon = 1e-12);
        // the corner is trimmed
        assert!(b.evaluate(DVec2::new(0.99, 0.99)) > 0.0);
    }

    #[test]
    fn line_distances() {
        let l = line2d(4.0, 0.5);
        assert_relative_eq!(l.evaluate(DVec2::new(1.0, 0.5)), 0.0);
        assert_relative_eq!(l.evaluate(DVec2::new(-3.0, 0.0)), 0.5);
        assert_relative_eq!(l.bounding_box().max.x, 2.5);
    }

    #[test]
    fn polygon_square_inside_and_outside() {
        let sq = unit_square();
        assert_relative_eq!(sq.evaluate(DVec2::new(0.5, 0.5)), -0.5, epsilon = 1e-12);
        assert_relative_eq!(sq.evaluate(DVec2::new(2.0, 2.0)), 2.0_f64.sqrt(), epsilon = 1e-12);
        assert_relative_eq!(sq.evaluate(DVec2::new(0.5, -1.0)), 1.0, epsilon = 1e-12);
        assert_relative_eq!(sq.evaluate(DVec2::new(1.0, 0.5)), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn polygon_orientation_does_not_matter() {
        let cw = polygon2d(vec![
            DVec2::new(0.0, 0.0),
            DVec2::new(0.0, 1.0),
            DVec2::new(1.0, 1.0),
            DVec2::new(1.0, 0.0),
        ])
        .unwrap();
        assert_relative_eq!(cw.evaluate(DVec2::new(0.5, 0.5)), -0.5, epsilon = 1e-12);
        assert!(cw.evaluate(DVec2::new(1.5, 0.5)) > 0.0);
    }

    #[test]
    fn polygon_is_closed_once() {
        let sq = unit_square();
        assert_eq!(sq.vertices().len(), 5);
        assert_eq!(sq.vertices()[0], sq.vertices()[4]);

        let closed = polygon2d(sq.vertices().to_vec()).unwrap();
        assert_eq!(closed.vertices().len(), 5);
    }

    #[test]
    fn polygon_concave_notch() {
        // U shape: the notch between the arms is outside
        let u = polygon2d(vec![
            DVec2::new(0.0, 0.0),
            DVec2::new(3.0, 0.0),
            DVec2::new(3.0, 3.0),
            DVec2::new(2.0, 3.0),
            DVec2::new(2.0, 1.0),
            DVec2::new(1.0, 1.0),
            DVec2::new(1.0, 3.0),
            DVec2::new(0.0, 3.0),
        ])
        .unwrap();
        assert_relative_eq!(u.evaluate(DVec2::new(1.5, 2.0)), 0.5, epsilon = 1e-12);
        assert_relative_eq!(u.evaluate(DVec2::new(0.5, 2.0)), -0.5, epsilon = 1e-12);
    }

    #[test]
    fn polygon_duplicate_vertex_is_harmless() {
        let p = polygon2d(vec![
            DVec2::new(0.0, 0.0),
            DVec2::new(1.0, 0.0),
            DVec2::new(1.0, 0.0),
            DVec2::new(1.0, 1.0),
            DVec2::new(0.0, 1.0),
        ])
        .unwrap();
        assert_relative_eq!(p.evaluate(DVec2::new(0.5, 0.5)), -0.5, epsilon = 1e-12);
        assert_relative_eq!(p.evaluate(DVec2::new(2.0, 0.0)), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn polygon_needs_three_vertices() {
        assert_eq!(
            polygon2d(vec![DVec2::ZERO, DVec2::X]).unwrap_err(),
            Error::DegeneratePolygon(2)
        );
    }
}
