//! Transform steps
//!
//! A transform is written as a list of steps, applied in list order: the
//! first step moves the shape first.

use crate::Result;
use sdforge_core::geometry::{
    DMat3, DMat4, DVec2, DVec3, mirror_x2d, mirror_xy, mirror_xz, mirror_y2d, mirror_yz,
    rotate_x, rotate_y, rotate_z, rotate2d, rotate3d, scale2d, scale3d, translate2d, translate3d,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TransformDesc2 {
    Translate { offset: [f64; 2] },
    /// Counter-clockwise, radians
    Rotate { angle: f64 },
    Scale { factor: [f64; 2] },
    MirrorX,
    MirrorY,
    /// Homogeneous matrix, column-major
    Matrix { cols: [f64; 9] },
}

impl TransformDesc2 {
    pub fn to_matrix(&self) -> DMat3 {
        match self {
            Self::Translate { offset } => translate2d(DVec2::from_array(*offset)),
            Self::Rotate { angle } => rotate2d(*angle),
            Self::Scale { factor } => scale2d(DVec2::from_array(*factor)),
            Self::MirrorX => mirror_x2d(),
            Self::MirrorY => mirror_y2d(),
            Self::Matrix { cols } => DMat3::from_cols_array(cols),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TransformDesc3 {
    Translate { offset: [f64; 3] },
    RotateX { angle: f64 },
    RotateY { angle: f64 },
    RotateZ { angle: f64 },
    /// Rotation about an arbitrary axis through the origin
    Rotate { axis: [f64; 3], angle: f64 },
    Scale { factor: [f64; 3] },
    MirrorXy,
    MirrorXz,
    MirrorYz,
    /// Homogeneous matrix, column-major
    Matrix { cols: [f64; 16] },
}

impl TransformDesc3 {
    pub fn to_matrix(&self) -> Result<DMat4> {
        Ok(match self {
            Self::Translate { offset } => translate3d(DVec3::from_array(*offset)),
            Self::RotateX { angle } => rotate_x(*angle),
            Self::RotateY { angle } => rotate_y(*angle),
            Self::RotateZ { angle } => rotate_z(*angle),
            Self::Rotate { axis, angle } => rotate3d(DVec3::from_array(*axis), *angle)?,
            Self::Scale { factor } => scale3d(DVec3::from_array(*factor)),
            Self::MirrorXy => mirror_xy(),
            Self::MirrorXz => mirror_xz(),
            Self::MirrorYz => mirror_yz(),
            Self::Matrix { cols } => DMat4::from_cols_array(cols),
        })
    }
}

/// Compose steps so that the first one is applied first
pub fn compose2(steps: &[TransformDesc2]) -> DMat3 {
    steps
        .iter()
        .fold(DMat3::IDENTITY, |m, step| step.to_matrix() * m)
}

/// Compose steps so that the first one is applied first
pub fn compose3(steps: &[TransformDesc3]) -> Result<DMat4> {
    steps
        .iter()
        .try_fold(DMat4::IDENTITY, |m, step| Ok(step.to_matrix()? * m))
}
