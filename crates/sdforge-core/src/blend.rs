//! Blend configuration for CSG and instancing nodes
//!
//! A blend is a function value plus its parameter. Nodes store one by value,
//! so changing it never requires rebuilding the tree, and the default is
//! always the exact min/max.
//!
//! The named smooth constructors reject a non-finite or negative `k`, which
//! would otherwise turn every blended distance into NaN.

use crate::{Error, Result};
use sdforge_math::{
    BlendFn, chamfer_max, chamfer_min, exp_min, normal_max, normal_min, poly_max, poly_min,
    round_max, round_min,
};

/// Min-type blend, used by union and the instancing operators
#[derive(Clone, Copy)]
pub struct MinBlend {
    pub func: BlendFn,
    pub k: f64,
}

impl MinBlend {
    /// Exact minimum (hard union)
    pub fn sharp() -> Self {
        Self::custom(normal_min, 0.0)
    }

    /// Quarter-circle fillet of radius `k`
    pub fn round(k: f64) -> Result<Self> {
        Ok(Self::custom(round_min, checked_k(k)?))
    }

    /// 45 degree chamfer of size `k`
    pub fn chamfer(k: f64) -> Result<Self> {
        Ok(Self::custom(chamfer_min, checked_k(k)?))
    }

    /// Exponential smooth minimum, larger `k` is sharper
    pub fn exp(k: f64) -> Result<Self> {
        Ok(Self::custom(exp_min, checked_k(k)?))
    }

    /// Polynomial smooth minimum with blend radius `k`
    pub fn poly(k: f64) -> Result<Self> {
        Ok(Self::custom(poly_min, checked_k(k)?))
    }

    /// Any min-type function; `k` is passed through unchecked
    pub fn custom(func: BlendFn, k: f64) -> Self {
        Self { func, k }
    }

    #[inline]
    pub fn apply(&self, a: f64, b: f64) -> f64 {
        (self.func)(a, b, self.k)
    }
}

fn checked_k(k: f64) -> Result<f64> {
    if !k.is_finite() || k < 0.0 {
        tracing::warn!(k, "blend rejected: parameter must be finite and non-negative");
        return Err(Error::InvalidParameter(format!("blend parameter {k}")));
    }
    Ok(k)
}

impl Default for MinBlend {
    fn default() -> Self {
        Self::sharp()
    }
}

impl std::fmt::Debug for MinBlend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MinBlend").field("k", &self.k).finish_non_exhaustive()
    }
}

/// Max-type blend, used by difference and intersection
#[derive(Clone, Copy)]
pub struct MaxBlend {
    pub func: BlendFn,
    pub k: f64,
}

impl MaxBlend {
    /// Exact maximum (hard difference/intersection)
    pub fn sharp() -> Self {
        Self::custom(normal_max, 0.0)
    }

    /// Quarter-circle fillet of radius `k`
    pub fn round(k: f64) -> Result<Self> {
        Ok(Self::custom(round_max, checked_k(k)?))
    }

    /// 45 degree chamfer of size `k`
    pub fn chamfer(k: f64) -> Result<Self> {
        Ok(Self::custom(chamfer_max, checked_k(k)?))
    }

    /// Polynomial smooth maximum with blend radius `k`
    pub fn poly(k: f64) -> Result<Self> {
        Ok(Self::custom(poly_max, checked_k(k)?))
    }

    pub fn custom(func: BlendFn, k: f64) -> Self {
        Self { func, k }
    }

    #[inline]
    pub fn apply(&self, a: f64, b: f64) -> f64 {
        (self.func)(a, b, self.k)
    }
}

impl Default for MaxBlend {
    fn default() -> Self {
        Self::sharp()
    }
}

impl std::fmt::Debug for MaxBlend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MaxBlend").field("k", &self.k).finish_non_exhaustive()
    }
}
