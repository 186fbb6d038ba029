//! Affine transform builders
//!
//! 2D transforms are homogeneous [`DMat3`], 3D transforms homogeneous
//! [`DMat4`]. Compose with `*`; the right-hand matrix is applied first.

use crate::{Error, Result};
use glam::{DMat3, DMat4, DVec2, DVec3};

// ============================================================================
// 2D
// ============================================================================

pub fn translate2d(v: DVec2) -> DMat3 {
    DMat3::from_translation(v)
}

pub fn scale2d(v: DVec2) -> DMat3 {
    DMat3::from_scale(v)
}

/// Counter-clockwise rotation about the origin (radians)
pub fn rotate2d(angle: f64) -> DMat3 {
    DMat3::from_angle(angle)
}

/// Reflect across the X axis (y -> -y)
pub fn mirror_x2d() -> DMat3 {
    DMat3::from_scale(DVec2::new(1.0, -1.0))
}

/// Reflect across the Y axis (x -> -x)
pub fn mirror_y2d() -> DMat3 {
    DMat3::from_scale(DVec2::new(-1.0, 1.0))
}

// ============================================================================
// 3D
// ============================================================================

pub fn translate3d(v: DVec3) -> DMat4 {
    DMat4::from_translation(v)
}

pub fn scale3d(v: DVec3) -> DMat4 {
    DMat4::from_scale(v)
}

pub fn rotate_x(angle: f64) -> DMat4 {
    DMat4::from_rotation_x(angle)
}

pub fn rotate_y(angle: f64) -> DMat4 {
    DMat4::from_rotation_y(angle)
}

pub fn rotate_z(angle: f64) -> DMat4 {
    DMat4::from_rotation_z(angle)
}

/// Rotation about an arbitrary axis through the origin.
///
/// The axis is normalized here; a zero axis has no direction and is rejected.
pub fn rotate3d(axis: DVec3, angle: f64) -> Result<DMat4> {
    let axis = axis.normalize_or_zero();
    if axis == DVec3::ZERO {
        return Err(Error::ZeroLengthVector("rotation axis"));
    }
    Ok(DMat4::from_axis_angle(axis, angle))
}

/// Reflect across the XY plane (z -> -z)
pub fn mirror_xy() -> DMat4 {
    DMat4::from_scale(DVec3::new(1.0, 1.0, -1.0))
}

/// Reflect across the XZ plane (y -> -y)
pub fn mirror_xz() -> DMat4 {
    DMat4::from_scale(DVec3::new(1.0, -1.0, 1.0))
}

/// Reflect across the YZ plane (x -> -x)
pub fn mirror_yz() -> DMat4 {
    DMat4::from_scale(DVec3::new(-1.0, 1.0, 1.0))
}

/// Inverse of an affine matrix, rejecting singular ones
pub(crate) fn checked_inverse3(m: &DMat3) -> Result<DMat3> {
    let det = m.determinant();
    if det == 0.0 || !det.is_finite() {
        return Err(Error::SingularTransform);
    }
    Ok(m.inverse())
}

/// Inverse of an affine matrix, rejecting singular ones
pub(crate) fn checked_inverse4(m: &DMat4) -> Result<DMat4> {
    let det = m.determinant();
    if det == 0.0 || !det.is_finite() {
        return Err(Error::SingularTransform);
    }
    Ok(m.inverse())
}
