//! Blend settings

use crate::{Result, SceneError};
use sdforge_core::blend::{MaxBlend, MinBlend};
use serde::{Deserialize, Serialize};

/// How two distances are joined.
///
/// ```json
/// { "kind": "round", "k": 0.25 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BlendDesc {
    #[default]
    Sharp,
    Round {
        k: f64,
    },
    Chamfer {
        k: f64,
    },
    /// Exponential smoothing; only available for unions
    Exp {
        k: f64,
    },
    Poly {
        k: f64,
    },
}

impl BlendDesc {
    pub fn is_sharp(&self) -> bool {
        matches!(self, Self::Sharp)
    }

    pub fn to_min(self) -> Result<MinBlend> {
        Ok(match self {
            Self::Sharp => MinBlend::sharp(),
            Self::Round { k } => MinBlend::round(k)?,
            Self::Chamfer { k } => MinBlend::chamfer(k)?,
            Self::Exp { k } => MinBlend::exp(k)?,
            Self::Poly { k } => MinBlend::poly(k)?,
        })
    }

    pub fn to_max(self) -> Result<MaxBlend> {
        Ok(match self {
            Self::Sharp => MaxBlend::sharp(),
            Self::Round { k } => MaxBlend::round(k)?,
            Self::Chamfer { k } => MaxBlend::chamfer(k)?,
            Self::Exp { .. } => return Err(SceneError::UnsupportedBlend("exp")),
            Self::Poly { k } => MaxBlend::poly(k)?,
        })
    }
}
