//! sdforge math - scalar formulas shared by the kernel
//!
//! Everything in here is a pure function of its arguments. The blend
//! functions all share the `(a, b, k)` signature so they can be stored as
//! plain function pointers next to their parameter and swapped without
//! touching the tree that uses them.
//!
//! # Example
//!
//! ```rust
//! use sdforge_math::{normal_min, poly_min};
//!
//! // Exact union of two distances
//! assert_eq!(normal_min(1.0, 2.0, 0.0), 1.0);
//!
//! // Smooth union pulls the surface in where both shapes are close
//! assert!(poly_min(0.1, 0.1, 0.5) < 0.1);
//! ```

mod angle;
mod blend;

pub use angle::{TAU, polar_to_xy, sawtooth};
pub use blend::{
    BlendFn, chamfer_max, chamfer_min, exp_min, normal_max, normal_min, poly_max, poly_min,
    round_max, round_min,
};

/// Linear interpolation between `x` and `y`
#[inline]
pub fn mix(x: f64, y: f64, a: f64) -> f64 {
    x + (y - x) * a
}
