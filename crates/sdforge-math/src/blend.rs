//! Blend functions
//!
//! Min-type functions implement union, max-type functions implement
//! difference and intersection. `k` is the blend radius; every smooth
//! variant degrades to the exact min/max for `k <= 0`.

use crate::mix;
use std::f64::consts::FRAC_1_SQRT_2;

/// Signature shared by every blend function: `(a, b, k) -> distance`
pub type BlendFn = fn(f64, f64, f64) -> f64;

/// Exact minimum, `k` is ignored
#[inline]
pub fn normal_min(a: f64, b: f64, _k: f64) -> f64 {
    a.min(b)
}

/// Exact maximum, `k` is ignored
#[inline]
pub fn normal_max(a: f64, b: f64, _k: f64) -> f64 {
    a.max(b)
}

/// Joins the two shapes with a quarter circle of radius `k`
pub fn round_min(a: f64, b: f64, k: f64) -> f64 {
    if k <= 0.0 {
        return a.min(b);
    }
    let u = glam::DVec2::new(k - a, k - b).max(glam::DVec2::ZERO);
    k.max(a.min(b)) - u.length()
}

/// Max-type dual of [`round_min`]
pub fn round_max(a: f64, b: f64, k: f64) -> f64 {
    -round_min(-a, -b, k)
}

/// Joins the two shapes with a 45 degree chamfer of size `k`
pub fn chamfer_min(a: f64, b: f64, k: f64) -> f64 {
    if k <= 0.0 {
        return a.min(b);
    }
    a.min(b).min((a - k + b) * FRAC_1_SQRT_2)
}

/// Max-type dual of [`chamfer_min`]
pub fn chamfer_max(a: f64, b: f64, k: f64) -> f64 {
    -chamfer_min(-a, -b, k)
}

/// Exponential smooth minimum, larger `k` gives a sharper joint.
///
/// Evaluated relative to the smaller input so the exponentials stay in
/// `(0, 1]` and the logarithm argument in `[1, 2]`.
pub fn exp_min(a: f64, b: f64, k: f64) -> f64 {
    if k <= 0.0 {
        return a.min(b);
    }
    let m = a.min(b);
    m - ((-k * (a - m)).exp() + (-k * (b - m)).exp()).ln() / k
}

fn poly(a: f64, b: f64, k: f64) -> f64 {
    let h = (0.5 + 0.5 * (b - a) / k).clamp(0.0, 1.0);
    mix(b, a, h) - k * h * (1.0 - h)
}

/// Polynomial smooth minimum with blend radius `k`
pub fn poly_min(a: f64, b: f64, k: f64) -> f64 {
    if k <= 0.0 {
        return a.min(b);
    }
    poly(a, b, k)
}

/// Polynomial smooth maximum with blend radius `k`
pub fn poly_max(a: f64, b: f64, k: f64) -> f64 {
    if k <= 0.0 {
        return a.max(b);
    }
    -poly(-a, -b, k)
}
