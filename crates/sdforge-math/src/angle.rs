//! Angle helpers for polar replication

use glam::DVec2;

/// One full turn in radians
pub const TAU: f64 = std::f64::consts::TAU;

/// Centered sawtooth with the given period.
///
/// Maps `x` into `[-period/2, period/2)`, repeating every `period`. A
/// non-positive period leaves `x` untouched.
pub fn sawtooth(x: f64, period: f64) -> f64 {
    if period <= 0.0 {
        return x;
    }
    let t = (x + 0.5 * period) / period;
    period * (t - t.floor()) - 0.5 * period
}

/// Polar coordinates to a cartesian point
#[inline]
pub fn polar_to_xy(r: f64, theta: f64) -> DVec2 {
    let (sin, cos) = theta.sin_cos();
    DVec2::new(r * cos, r * sin)
}
