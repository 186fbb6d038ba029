//! Axis-aligned bounding boxes

use glam::{DMat3, DMat4, DVec2, DVec3};

// ============================================================================
// Box2
// ============================================================================

/// 2D axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Box2 {
    pub min: DVec2,
    pub max: DVec2,
}

impl Box2 {
    pub fn new(min: DVec2, max: DVec2) -> Self {
        Self { min, max }
    }

    /// Square centered at origin
    pub fn square(half_size: f64) -> Self {
        Self::new(DVec2::splat(-half_size), DVec2::splat(half_size))
    }

    /// Create from center and full size
    pub fn from_center_size(center: DVec2, size: DVec2) -> Self {
        let half = size * 0.5;
        Self::new(center - half, center + half)
    }

    /// Smallest box containing every point, `None` for an empty set
    pub fn from_points(points: &[DVec2]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        Some(
            rest.iter()
                .fold(Self::new(*first, *first), |b, &p| b.include_point(p)),
        )
    }

    pub fn center(&self) -> DVec2 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> DVec2 {
        self.max - self.min
    }

    /// Union of extents
    pub fn extend(&self, other: &Box2) -> Self {
        Self::new(self.min.min(other.min), self.max.max(other.max))
    }

    /// Grow the box to contain `p`
    pub fn include_point(&self, p: DVec2) -> Self {
        Self::new(self.min.min(p), self.max.max(p))
    }

    pub fn translate(&self, offset: DVec2) -> Self {
        Self::new(self.min + offset, self.max + offset)
    }

    /// Grow every side by `delta`. A negative delta shrinks the box down to
    /// its center at most.
    pub fn enlarge(&self, delta: f64) -> Self {
        let size = (self.size() + DVec2::splat(2.0 * delta)).max(DVec2::ZERO);
        Self::from_center_size(self.center(), size)
    }

    /// Overlap of two boxes, collapsed onto a degenerate box when disjoint
    pub fn overlap(&self, other: &Box2) -> Self {
        let min = self.min.max(other.min);
        let max = self.max.min(other.max).max(min);
        Self::new(min, max)
    }

    pub fn contains(&self, p: DVec2) -> bool {
        p.cmpge(self.min).all() && p.cmple(self.max).all()
    }

    /// Corner vertices, counter-clockwise from `min`
    pub fn vertices(&self) -> [DVec2; 4] {
        [
            self.min,
            DVec2::new(self.max.x, self.min.y),
            self.max,
            DVec2::new(self.min.x, self.max.y),
        ]
    }

    /// Bounding box of the transformed corners
    pub fn transform(&self, m: &DMat3) -> Self {
        let v = self.vertices().map(|p| m.transform_point2(p));
        Self::enclosing(&v)
    }

    fn enclosing(v: &[DVec2; 4]) -> Self {
        v[1..]
            .iter()
            .fold(Self::new(v[0], v[0]), |b, &p| b.include_point(p))
    }
}

// ============================================================================
// Box3
// ============================================================================

/// 3D axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Box3 {
    pub min: DVec3,
    pub max: DVec3,
}

impl Box3 {
    pub fn new(min: DVec3, max: DVec3) -> Self {
        Self { min, max }
    }

    /// Cube centered at origin
    pub fn cube(half_size: f64) -> Self {
        Self::new(DVec3::splat(-half_size), DVec3::splat(half_size))
    }

    /// Create from center and full size
    pub fn from_center_size(center: DVec3, size: DVec3) -> Self {
        let half = size * 0.5;
        Self::new(center - half, center + half)
    }

    /// Smallest box containing every point, `None` for an empty set
    pub fn from_points(points: &[DVec3]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        Some(
            rest.iter()
                .fold(Self::new(*first, *first), |b, &p| b.include_point(p)),
        )
    }

    pub fn center(&self) -> DVec3 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> DVec3 {
        self.max - self.min
    }

    /// Union of extents
    pub fn extend(&self, other: &Box3) -> Self {
        Self::new(self.min.min(other.min), self.max.max(other.max))
    }

    /// Grow the box to contain `p`
    pub fn include_point(&self, p: DVec3) -> Self {
        Self::new(self.min.min(p), self.max.max(p))
    }

    pub fn translate(&self, offset: DVec3) -> Self {
        Self::new(self.min + offset, self.max + offset)
    }

    /// Grow every side by `delta`. A negative delta shrinks the box down to
    /// its center at most.
    pub fn enlarge(&self, delta: f64) -> Self {
        let size = (self.size() + DVec3::splat(2.0 * delta)).max(DVec3::ZERO);
        Self::from_center_size(self.center(), size)
    }

    /// Overlap of two boxes, collapsed onto a degenerate box when disjoint
    pub fn overlap(&self, other: &Box3) -> Self {
        let min = self.min.max(other.min);
        let max = self.max.min(other.max).max(min);
        Self::new(min, max)
    }

    pub fn contains(&self, p: DVec3) -> bool {
        p.cmpge(self.min).all() && p.cmple(self.max).all()
    }

    /// The eight corner vertices
    pub fn vertices(&self) -> [DVec3; 8] {
        let (a, b) = (self.min, self.max);
        [
            DVec3::new(a.x, a.y, a.z),
            DVec3::new(b.x, a.y, a.z),
            DVec3::new(a.x, b.y, a.z),
            DVec3::new(b.x, b.y, a.z),
            DVec3::new(a.x, a.y, b.z),
            DVec3::new(b.x, a.y, b.z),
            DVec3::new(a.x, b.y, b.z),
            DVec3::new(b.x, b.y, b.z),
        ]
    }

    /// Bounding box of the transformed corners
    pub fn transform(&self, m: &DMat4) -> Self {
        let v = self.vertices().map(|p| m.transform_point3(p));
        v[1..]
            .iter()
            .fold(Self::new(v[0], v[0]), |b, &p| b.include_point(p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{rotate_z, rotate2d, translate2d};
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_4;

    #[test]
    fn extend_takes_union_of_extents() {
        let a = Box2::new(DVec2::new(-1.0, 0.0), DVec2::new(1.0, 1.0));
        let b = Box2::new(DVec2::new(0.0, -2.0), DVec2::new(3.0, 0.5));
        let e = a.extend(&b);
        assert_eq!(e.min, DVec2::new(-1.0, -2.0));
        assert_eq!(e.max, DVec2::new(3.0, 1.0));
    }

    #[test]
    fn center_and_size() {
        let b = Box3::new(DVec3::new(0.0, 2.0, -4.0), DVec3::new(2.0, 4.0, 0.0));
        assert_eq!(b.center(), DVec3::new(1.0, 3.0, -2.0));
        assert_eq!(b.size(), DVec3::new(2.0, 2.0, 4.0));
    }

    #[test]
    fn vertices_cover_all_corners() {
        let b = Box3::cube(1.0);
        let v = b.vertices();
        assert_eq!(v.len(), 8);
        for i in 0..8 {
            for j in (i + 1)..8 {
                assert_ne!(v[i], v[j]);
            }
        }
        assert_eq!(Box2::square(1.0).vertices().len(), 4);
    }

    #[test]
    fn rotated_box_uses_all_corners() {
        // Rotating a unit square by 45 degrees: extremes are the old corners
        let b = Box2::square(1.0).transform(&rotate2d(FRAC_PI_4));
        let r = 2.0_f64.sqrt();
        assert_relative_eq!(b.max.x, r, epsilon = 1e-12);
        assert_relative_eq!(b.min.y, -r, epsilon = 1e-12);

        let b = Box3::cube(1.0).transform(&rotate_z(FRAC_PI_4));
        assert_relative_eq!(b.max.y, r, epsilon = 1e-12);
        assert_relative_eq!(b.max.z, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn translate_moves_both_corners() {
        let b = Box2::square(1.0).transform(&translate2d(DVec2::new(2.0, 3.0)));
        assert_relative_eq!(b.min.x, 1.0);
        assert_relative_eq!(b.max.y, 4.0);
        assert_eq!(
            Box2::square(1.0).translate(DVec2::new(2.0, 3.0)).max,
            DVec2::new(3.0, 4.0)
        );
    }

    #[test]
    fn enlarge_never_inverts() {
        let b = Box2::square(1.0).enlarge(-5.0);
        assert!(b.min.cmple(b.max).all());
        assert_eq!(b.size(), DVec2::ZERO);
        let b = Box3::cube(1.0).enlarge(0.5);
        assert_eq!(b.max, DVec3::splat(1.5));
    }

    #[test]
    fn overlap_of_disjoint_boxes_is_degenerate() {
        let a = Box2::square(1.0);
        let b = a.translate(DVec2::new(5.0, 0.0));
        let o = a.overlap(&b);
        assert!(o.min.cmple(o.max).all());
        assert_eq!(o.size().x, 0.0);
    }

    #[test]
    fn from_points_empty_is_none() {
        assert!(Box2::from_points(&[]).is_none());
        let b = Box3::from_points(&[DVec3::ONE, -DVec3::ONE, DVec3::ZERO]);
        assert_eq!(b, Some(Box3::cube(1.0)));
    }

    #[test]
    fn contains_is_inclusive() {
        let b = Box2::square(1.0);
        assert!(b.contains(DVec2::new(1.0, -1.0)));
        assert!(!b.contains(DVec2::new(1.0001, 0.0)));
    }
}
